use std::path::PathBuf;

use bon::Builder;

use crate::clock::HourStyle;
use crate::geometry::Rect;

/// Color representation for watchface elements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0x00, 0x00, 0x00);
    pub const WHITE: Color = Color::new(0xff, 0xff, 0xff);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn as_tuple(self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    pub const fn with_alpha(self, alpha: u8) -> [u8; 4] {
        [self.r, self.g, self.b, alpha]
    }
}

/// Fill colors of the horizon instrument
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub sky: Color,
    pub earth: Color,
    pub tick: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            sky: Color::new(0x00, 0xaa, 0xff),   // vivid cerulean
            earth: Color::new(0xaa, 0x55, 0x00), // windsor tan
            tick: Color::WHITE,
        }
    }
}

/// Configuration for the clock text layer
#[derive(Debug, Clone)]
pub struct TextLayerConfig {
    pub frame: Rect,
    pub foreground: Color,
    pub background: Color,
    pub font_size: f32,
}

impl Default for TextLayerConfig {
    fn default() -> Self {
        Self {
            frame: Rect::new(14, 132, 93, 23),
            foreground: Color::WHITE,
            background: Color::BLACK,
            font_size: 18.0,
        }
    }
}

/// Configuration for the bezel overlay
#[derive(Debug, Clone)]
pub struct BezelConfig {
    /// Gap between the canvas edge and the round window
    pub margin: i32,
    pub ring_thickness: i32,
    pub bank_mark_length: i32,
    pub bank_mark_thickness: f32,
    pub wing_span: i32,
    pub wing_thickness: f32,
    pub dot_radius: i32,
    pub bezel_color: Color,
    pub ring_color: Color,
    pub mark_color: Color,
    pub aircraft_color: Color,
}

impl Default for BezelConfig {
    fn default() -> Self {
        Self {
            margin: 4,
            ring_thickness: 3,
            bank_mark_length: 7,
            bank_mark_thickness: 2.0,
            wing_span: 22,
            wing_thickness: 3.0,
            dot_radius: 2,
            bezel_color: Color::new(0x14, 0x14, 0x14),
            ring_color: Color::new(0x55, 0x55, 0x55),
            mark_color: Color::WHITE,
            aircraft_color: Color::new(0xff, 0xaa, 0x00),
        }
    }
}

/// Top-level watchface configuration
#[derive(Debug, Clone, Builder)]
pub struct WatchfaceConfig {
    #[builder(default = "Horizon".to_string())]
    pub title: String,

    // Screen configuration
    #[builder(default = 144)]
    pub canvas_width: i32,
    #[builder(default = 168)]
    pub canvas_height: i32,
    /// Window pixels per canvas pixel
    #[builder(default = 3)]
    pub scale: u32,

    // Clock configuration
    #[builder(default)]
    pub hour_style: HourStyle,

    // Font configuration
    pub font_path: Option<PathBuf>,

    // Appearance
    #[builder(default)]
    pub palette: Palette,
    #[builder(default)]
    pub text: TextLayerConfig,
    #[builder(default)]
    pub bezel: BezelConfig,
}

impl Default for WatchfaceConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}
