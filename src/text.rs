use std::path::Path;

use rusttype::{point, Font, PositionedGlyph, Scale};

use crate::config::{Color, TextLayerConfig};
use crate::geometry::Rect;
use crate::raster::Canvas;
use crate::WatchfaceError;

/// Bold sans faces commonly installed on desktop systems.
const FALLBACK_FONTS: [&str; 5] = [
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/TTF/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans-Bold.ttf",
    "/System/Library/Fonts/Supplemental/Arial Bold.ttf",
    "C:\\Windows\\Fonts\\arialbd.ttf",
];

/// Loads the clock font.
///
/// An explicit path must load. Without one, the first readable fallback is
/// used, and `None` means the face renders without text.
pub fn load_font(path: Option<&Path>) -> Result<Option<Font<'static>>, WatchfaceError> {
    if let Some(path) = path {
        let data = std::fs::read(path)?;
        return Font::try_from_vec(data)
            .map(Some)
            .ok_or_else(|| WatchfaceError::Font {
                path: path.to_path_buf(),
            });
    }

    for candidate in FALLBACK_FONTS {
        let Ok(data) = std::fs::read(candidate) else {
            continue;
        };
        if let Some(font) = Font::try_from_vec(data) {
            log::info!("Using font {}", candidate);
            return Ok(Some(font));
        }
        log::debug!("Skipping unparsable font {}", candidate);
    }

    log::warn!(
        "No usable font found (tried {}); clock text disabled",
        FALLBACK_FONTS.len()
    );
    Ok(None)
}

/// A rectangle with a solid background and one line of centered text.
pub struct TextLayer {
    frame: Rect,
    text: String,
    foreground: Color,
    background: Color,
    scale: Scale,
    font: Option<Font<'static>>,
}

impl TextLayer {
    pub fn new(config: &TextLayerConfig, font: Option<Font<'static>>) -> Self {
        Self {
            frame: config.frame,
            text: String::new(),
            foreground: config.foreground,
            background: config.background,
            scale: Scale::uniform(config.font_size),
            font,
        }
    }

    pub fn frame(&self) -> Rect {
        self.frame
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn has_font(&self) -> bool {
        self.font.is_some()
    }

    pub fn draw(&self, canvas: &mut Canvas) {
        let frame = self.frame;
        canvas.fill_rect(frame.x, frame.y, frame.width, frame.height, self.background);

        if let Some(font) = &self.font {
            if !self.text.is_empty() {
                draw_centered_text(canvas, frame, &self.text, font, self.scale, self.foreground);
            }
        }
    }
}

impl std::fmt::Debug for TextLayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextLayer")
            .field("frame", &self.frame)
            .field("text", &self.text)
            .field("has_font", &self.font.is_some())
            .finish()
    }
}

fn draw_centered_text(
    canvas: &mut Canvas,
    frame: Rect,
    text: &str,
    font: &Font,
    scale: Scale,
    color: Color,
) {
    let v_metrics = font.v_metrics(scale);
    let glyphs: Vec<PositionedGlyph> = font
        .layout(text, scale, point(0.0, v_metrics.ascent))
        .collect();

    // Bounding box for the whole string
    let (min_x, max_x, min_y, max_y) = glyphs.iter().filter_map(|g| g.pixel_bounding_box()).fold(
        (i32::MAX, i32::MIN, i32::MAX, i32::MIN),
        |(min_x, max_x, min_y, max_y), bb| {
            (
                min_x.min(bb.min.x),
                max_x.max(bb.max.x),
                min_y.min(bb.min.y),
                max_y.max(bb.max.y),
            )
        },
    );
    if min_x >= max_x || min_y >= max_y {
        return;
    }

    let center = frame.center();
    let offset_x = center.x - (max_x - min_x) / 2;
    let offset_y = center.y - (max_y - min_y) / 2;
    for glyph in &glyphs {
        if let Some(bb) = glyph.pixel_bounding_box() {
            glyph.draw(|gx, gy, v| {
                let px = offset_x + gx as i32 + bb.min.x - min_x;
                let py = offset_y + gy as i32 + bb.min.y - min_y;
                if frame.contains(px, py) {
                    canvas.set_pixel(px, py, color, v);
                }
            });
        }
    }
}
