//! Artificial-horizon instrument.
//!
//! The instrument keeps a fixed geometric model (sky, earth and nine pitch
//! ticks in instrument-local coordinates) plus a single rotation angle. Each
//! frame it anchors every polygon at the canvas center, rotates it and emits
//! an ordered list of filled-polygon commands. It never draws anything
//! itself; see [`crate::raster::render_commands`] for executing a frame.

use thiserror::Error;

use crate::config::{Color, Palette};
use crate::geometry::{normalize_angle, Point, Polygon};

pub const TICK_COUNT: usize = 9;

/// Index of the 0° reference bar in the tick table.
pub const HORIZON_TICK: usize = 4;

/// Largest accepted canvas side. Rotated geometry reaches about
/// `1.5 * MAX_DIMENSION * sqrt(2)` from the origin, well inside `i32`.
pub const MAX_DIMENSION: i32 = 1 << 24;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HorizonError {
    #[error("invalid canvas dimensions {width}x{height}: both must be in 1..={}", MAX_DIMENSION)]
    InvalidDimensions { width: i32, height: i32 },
}

// ============================================================================
// TICK TABLE
// ============================================================================

/// One pitch mark. `half_length == None` marks the horizon bar, which spans
/// the canvas width.
struct TickMark {
    half_length: Option<i32>,
    first_y: i32,
    second_y: i32,
}

const fn mark(half_length: i32, first_y: i32, second_y: i32) -> TickMark {
    TickMark {
        half_length: Some(half_length),
        first_y,
        second_y,
    }
}

// Positive y is down: the first four marks sit below the horizon.
const TICK_TABLE: [TickMark; TICK_COUNT] = [
    mark(30, 36, 33), // 20 deg down
    mark(6, 27, 24),  // 15 deg down
    mark(18, 18, 15), // 10 deg down
    mark(6, 9, 6),    // 5 deg down
    TickMark {
        half_length: None,
        first_y: -2,
        second_y: 2,
    },
    mark(6, -9, -6),    // 5 deg up
    mark(18, -18, -15), // 10 deg up
    mark(6, -27, -24),  // 15 deg up
    mark(30, -36, -33), // 20 deg up
];

impl TickMark {
    fn polygon(&self, canvas_width: i32) -> Polygon {
        let half = self.half_length.unwrap_or(canvas_width);
        Polygon::quad(-half, self.first_y, half, self.second_y)
    }
}

// ============================================================================
// DRAW COMMANDS
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HorizonPart {
    Sky,
    Earth,
    Tick(usize),
}

/// A filled polygon in canvas coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FillCommand {
    pub part: HorizonPart,
    pub points: Vec<Point>,
    pub color: Color,
}

// ============================================================================
// INSTRUMENT
// ============================================================================

#[derive(Debug, Clone)]
pub struct HorizonInstrument {
    rotation: i32,
    sky: Polygon,
    earth: Polygon,
    ticks: [Polygon; TICK_COUNT],
    palette: Palette,
}

impl HorizonInstrument {
    /// Builds the geometry for a `width` x `height` canvas. Both sides must be
    /// in `1..=MAX_DIMENSION`.
    ///
    /// Sky and earth are squares reaching `max(width, height)` from the
    /// anchor in every direction, rather than `width` across and `height`
    /// down. A `width` x `height` half-plane leaves the corners of tall or
    /// wide canvases uncovered at some angles; the square one never does.
    pub fn initialize(width: i32, height: i32) -> Result<Self, HorizonError> {
        let valid = 1..=MAX_DIMENSION;
        if !valid.contains(&width) || !valid.contains(&height) {
            return Err(HorizonError::InvalidDimensions { width, height });
        }

        let extent = width.max(height);
        Ok(Self {
            rotation: 0,
            sky: Polygon::quad(-extent, -extent, extent, 0),
            earth: Polygon::quad(-extent, 0, extent, extent),
            ticks: std::array::from_fn(|i| TICK_TABLE[i].polygon(width)),
            palette: Palette::default(),
        })
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn set_rotation(&mut self, angle: i64) {
        self.rotation = normalize_angle(angle);
    }

    pub fn rotation(&self) -> i32 {
        self.rotation
    }

    pub fn sky(&self) -> &Polygon {
        &self.sky
    }

    pub fn earth(&self) -> &Polygon {
        &self.earth
    }

    pub fn ticks(&self) -> &[Polygon; TICK_COUNT] {
        &self.ticks
    }

    /// Produces one frame: sky, earth, then the ticks in table order.
    pub fn draw(&mut self, width: i32, height: i32) -> Vec<FillCommand> {
        let anchor = Point::new(width / 2, height / 2);
        let angle = i64::from(self.rotation);

        for polygon in self.polygons_mut() {
            polygon.move_to(anchor);
            polygon.rotate_to(angle);
        }

        let mut commands = Vec::with_capacity(TICK_COUNT + 2);
        commands.push(FillCommand {
            part: HorizonPart::Sky,
            points: self.sky.transformed(),
            color: self.palette.sky,
        });
        commands.push(FillCommand {
            part: HorizonPart::Earth,
            points: self.earth.transformed(),
            color: self.palette.earth,
        });
        commands.extend(self.ticks.iter().enumerate().map(|(i, tick)| FillCommand {
            part: HorizonPart::Tick(i),
            points: tick.transformed(),
            color: self.palette.tick,
        }));
        commands
    }

    fn polygons_mut(&mut self) -> impl Iterator<Item = &mut Polygon> + '_ {
        [&mut self.sky, &mut self.earth]
            .into_iter()
            .chain(self.ticks.iter_mut())
    }
}
