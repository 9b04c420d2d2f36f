// ============================================================================
// WATCHFACE HOST
// ============================================================================
//
// Owns the horizon instrument, the bezel overlay and the clock text, and
// drives them from a once-per-second wall-clock tick. Layer order, bottom to
// top: instrument, bezel, text.

use std::sync::Arc;
use std::time::Instant;

use chrono::{NaiveDateTime, Timelike};
use pixels::{Pixels, SurfaceTexture};
use rusttype::Font;
use winit::dpi::LogicalSize;
use winit::event::{Event, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

use crate::bezel::Bezel;
use crate::clock::{format_clock, rotation_for_seconds, SecondTicker, TimeSource};
use crate::config::{Color, WatchfaceConfig};
use crate::horizon::HorizonInstrument;
use crate::raster::{render_commands, Canvas};
use crate::text::{load_font, TextLayer};
use crate::WatchfaceError;

#[derive(Debug)]
pub struct Watchface {
    config: WatchfaceConfig,
    width: usize,
    height: usize,
    instrument: HorizonInstrument,
    bezel: Bezel,
    text: TextLayer,
}

impl Watchface {
    /// Builds every layer, loading the clock font per the config.
    pub fn new(config: WatchfaceConfig) -> Result<Self, WatchfaceError> {
        // Validate dimensions before touching the filesystem.
        HorizonInstrument::initialize(config.canvas_width, config.canvas_height)?;
        let font = load_font(config.font_path.as_deref())?;
        Self::with_font(config, font)
    }

    /// Builds every layer with an already loaded font, or none.
    pub fn with_font(
        config: WatchfaceConfig,
        font: Option<Font<'static>>,
    ) -> Result<Self, WatchfaceError> {
        let instrument = HorizonInstrument::initialize(config.canvas_width, config.canvas_height)?
            .with_palette(config.palette);
        let width = config.canvas_width as usize;
        let height = config.canvas_height as usize;
        let bezel = Bezel::generate(width, height, &config.bezel);
        let text = TextLayer::new(&config.text, font);

        Ok(Self {
            config,
            width,
            height,
            instrument,
            bezel,
            text,
        })
    }

    pub fn config(&self) -> &WatchfaceConfig {
        &self.config
    }

    pub fn canvas_size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn instrument(&self) -> &HorizonInstrument {
        &self.instrument
    }

    pub fn text(&self) -> &TextLayer {
        &self.text
    }

    /// Per-second update: clock text and horizon rotation.
    pub fn on_tick(&mut self, time: &NaiveDateTime) {
        let label = format_clock(time, self.config.hour_style);
        let angle = rotation_for_seconds(time.second());
        log::debug!("tick {:02}s -> angle {} \"{}\"", time.second(), angle, label);

        self.text.set_text(label);
        self.instrument.set_rotation(i64::from(angle));
    }

    /// Renders one frame into an RGBA8 buffer of the canvas size.
    pub fn render(&mut self, frame: &mut [u8]) {
        let mut canvas = Canvas::new(frame, self.width, self.height);
        canvas.clear(Color::BLACK);

        let commands = self
            .instrument
            .draw(self.config.canvas_width, self.config.canvas_height);
        render_commands(&mut canvas, &commands);
        self.bezel.draw(&mut canvas);
        self.text.draw(&mut canvas);
    }
}

/// Opens the simulator window and runs until it is closed.
pub fn run<C: TimeSource>(config: WatchfaceConfig, clock: C) -> Result<(), WatchfaceError> {
    let mut face = Watchface::new(config)?;
    let (width, height) = face.canvas_size();
    let scale = face.config().scale.max(1);
    log::info!(
        "Starting watchface: canvas {}x{}, scale {}, text {}",
        width,
        height,
        scale,
        if face.text().has_font() { "on" } else { "off" }
    );

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title(&face.config().title)
        .with_inner_size(LogicalSize::new(
            (width as u32 * scale) as f64,
            (height as u32 * scale) as f64,
        ))
        .with_resizable(false)
        .build(&event_loop)?;

    let window = Arc::new(window);
    let window_clone = window.clone();

    let size = window.inner_size();
    let surface_texture = SurfaceTexture::new(size.width, size.height, &window);
    let mut pixels = Pixels::new(width as u32, height as u32, surface_texture)?;

    let mut ticker = SecondTicker::new();

    event_loop.run(move |event, window_target| match event {
        Event::WindowEvent { event, .. } => match event {
            WindowEvent::CloseRequested => {
                log::info!("Close requested");
                window_target.exit();
            }
            WindowEvent::Resized(new_size) => {
                if let Err(err) = pixels.resize_surface(new_size.width, new_size.height) {
                    log::error!("Failed to resize surface: {}", err);
                    window_target.exit();
                }
            }
            WindowEvent::RedrawRequested => {
                face.render(pixels.frame_mut());
                if let Err(err) = pixels.render() {
                    log::error!("Failed to present frame: {}", err);
                    window_target.exit();
                }
            }
            _ => {}
        },
        Event::AboutToWait => {
            let now = clock.now();
            if ticker.poll(&now) {
                face.on_tick(&now);
                window_clone.request_redraw();
            }
            window_target.set_control_flow(ControlFlow::WaitUntil(
                Instant::now() + ticker.until_next_second(&now),
            ));
        }
        _ => {}
    })?;

    Ok(())
}
