//! Static overlay framing the instrument: an opaque surround with a round
//! window, a ring with bank-angle marks and a fixed aircraft symbol.
//!
//! The image is rendered once when the watchface starts and composited on
//! top of every frame.

use crate::config::BezelConfig;
use crate::geometry::Point;
use crate::raster::{Bitmap, Canvas};

/// Bank marks, in degrees clockwise from the top of the ring.
const BANK_MARKS_DEG: [f64; 9] = [-60.0, -30.0, -20.0, -10.0, 0.0, 10.0, 20.0, 30.0, 60.0];

#[derive(Debug, Clone)]
pub struct Bezel {
    image: Bitmap,
    center: Point,
    radius: i32,
}

impl Bezel {
    pub fn generate(width: usize, height: usize, config: &BezelConfig) -> Self {
        let center = Point::new(width as i32 / 2, height as i32 / 2);
        let radius = (width.min(height) as i32 / 2 - config.margin).max(0);

        let mut image = Bitmap::new(width, height);
        {
            let mut canvas = image.canvas();
            draw_surround(&mut canvas, center, radius, config);
            draw_bank_marks(&mut canvas, center, radius, config);
            draw_aircraft(&mut canvas, center, config);
        }

        Self {
            image,
            center,
            radius,
        }
    }

    pub fn image(&self) -> &Bitmap {
        &self.image
    }

    pub fn center(&self) -> Point {
        self.center
    }

    /// Radius of the round window.
    pub fn radius(&self) -> i32 {
        self.radius
    }

    pub fn draw(&self, canvas: &mut Canvas) {
        canvas.composite(&self.image);
    }
}

fn draw_surround(canvas: &mut Canvas, center: Point, radius: i32, config: &BezelConfig) {
    let r = f64::from(radius);
    let inner = f64::from(radius - config.ring_thickness);
    for y in 0..canvas.height() as i32 {
        for x in 0..canvas.width() as i32 {
            let dx = f64::from(x - center.x) + 0.5;
            let dy = f64::from(y - center.y) + 0.5;
            let dist = (dx * dx + dy * dy).sqrt();

            let outside = (dist - r).clamp(0.0, 1.0);
            if outside > 0.0 {
                canvas.set_pixel(x, y, config.bezel_color, outside as f32);
            }
            // Ring fades in over one pixel on its inner edge.
            let ring = if dist >= inner && dist <= r {
                1.0
            } else {
                1.0 - (inner - dist).clamp(0.0, 1.0)
            };
            if dist <= r && ring > 0.0 {
                canvas.set_pixel(x, y, config.ring_color, ring as f32);
            }
        }
    }
}

fn draw_bank_marks(canvas: &mut Canvas, center: Point, radius: i32, config: &BezelConfig) {
    let outer = f64::from(radius - config.ring_thickness);
    let inner = outer - f64::from(config.bank_mark_length);
    for degrees in BANK_MARKS_DEG {
        let (sin, cos) = degrees.to_radians().sin_cos();
        let at = |len: f64| {
            Point::new(
                center.x + (sin * len).round() as i32,
                center.y - (cos * len).round() as i32,
            )
        };
        canvas.stroke_segment(at(inner), at(outer), config.bank_mark_thickness, config.mark_color);
    }
}

fn draw_aircraft(canvas: &mut Canvas, center: Point, config: &BezelConfig) {
    let span = config.wing_span;
    let elbow = span / 3;
    let drop = (span / 5).max(1);
    for side in [-1, 1] {
        let tip = Point::new(center.x + side * span, center.y);
        let knee = Point::new(center.x + side * elbow, center.y);
        let foot = Point::new(center.x + side * elbow, center.y + drop);
        canvas.stroke_segment(tip, knee, config.wing_thickness, config.aircraft_color);
        canvas.stroke_segment(knee, foot, config.wing_thickness, config.aircraft_color);
    }
    canvas.draw_circle(center, config.dot_radius, config.aircraft_color);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn watch_bezel() -> (Bezel, BezelConfig) {
        let config = BezelConfig::default();
        (Bezel::generate(144, 168, &config), config)
    }

    #[test]
    fn test_window_geometry() {
        let (bezel, _) = watch_bezel();
        assert_eq!(bezel.center(), Point::new(72, 84));
        assert_eq!(bezel.radius(), 68);
        assert_eq!(bezel.image().width(), 144);
        assert_eq!(bezel.image().height(), 168);
    }

    #[test]
    fn test_corners_are_opaque_bezel() {
        let (bezel, config) = watch_bezel();
        let (r, g, b) = config.bezel_color.as_tuple();
        assert_eq!(bezel.image().pixel(0, 0), [r, g, b, 0xff]);
        assert_eq!(bezel.image().pixel(143, 167), [r, g, b, 0xff]);
    }

    #[test]
    fn test_window_interior_is_transparent() {
        let (bezel, _) = watch_bezel();
        // Between the top bank marks and the aircraft symbol.
        assert_eq!(bezel.image().pixel(72, 84 - 34)[3], 0);
        assert_eq!(bezel.image().pixel(72 - 30, 84 + 30)[3], 0);
    }

    #[test]
    fn test_aircraft_dot_marks_the_center() {
        let (bezel, config) = watch_bezel();
        let (r, g, b) = config.aircraft_color.as_tuple();
        assert_eq!(bezel.image().pixel(72, 84), [r, g, b, 0xff]);
    }

    #[test]
    fn test_top_bank_mark_is_drawn() {
        let (bezel, _) = watch_bezel();
        // Ring inner edge is at 84 - 65 = 19; the zero mark reaches down to 26.
        assert!(bezel.image().pixel(72, 22)[3] > 0);
    }
}
