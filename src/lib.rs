// ============================================================================
// CRATE CONFIGURATION & IMPORTS
// ============================================================================
//
// Artificial-horizon watchface.
//
// `horizon` holds the reusable instrument model: geometry plus an ordered
// list of filled-polygon commands per frame. Everything else hosts it as a
// desktop simulator of a 144x168 watch screen.

pub mod bezel;
pub mod clock;
pub mod config;
pub mod geometry;
pub mod horizon;
pub mod raster;
pub mod text;
pub mod watchface;

use std::path::PathBuf;

use thiserror::Error;

pub use clock::{format_clock, rotation_for_seconds, HourStyle, LocalClock, SecondTicker, TimeSource};
pub use config::{BezelConfig, Color, Palette, TextLayerConfig, WatchfaceConfig};
pub use geometry::{Point, Polygon, Rect, FULL_TURN};
pub use horizon::{FillCommand, HorizonError, HorizonInstrument, HorizonPart, TICK_COUNT};
pub use raster::{render_commands, Canvas, FillTarget};
pub use watchface::{run, Watchface};

// ============================================================================
// ERRORS
// ============================================================================

/// Failures that prevent the watchface from starting or presenting.
#[derive(Debug, Error)]
pub enum WatchfaceError {
    #[error(transparent)]
    Horizon(#[from] HorizonError),

    #[error("failed to parse font {}", .path.display())]
    Font { path: PathBuf },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    #[error("window creation failed: {0}")]
    Window(#[from] winit::error::OsError),

    #[error("pixel surface error: {0}")]
    Pixels(#[from] pixels::Error),
}
