//! Integer 2D geometry: points, rectangles and closed polygons carrying a
//! move/rotate transform.
//!
//! Angles are integers measured in fractions of [`FULL_TURN`]. Screen
//! coordinates grow right and down, so a positive angle turns clockwise on
//! screen.

use std::f64::consts::TAU;

/// Angle units in one complete revolution (360°).
pub const FULL_TURN: i32 = 0x10000;

// ============================================================================
// POINTS AND RECTANGLES
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ORIGIN: Point = Point::new(0, 0);

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle, origin at its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub const fn center(&self) -> Point {
        Point::new(self.x + self.width / 2, self.y + self.height / 2)
    }

    pub const fn right(&self) -> i32 {
        self.x + self.width
    }

    pub const fn bottom(&self) -> i32 {
        self.y + self.height
    }

    pub const fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }
}

// ============================================================================
// ANGLES
// ============================================================================

/// Wraps any integer angle into `[0, FULL_TURN)`.
pub fn normalize_angle(angle: i64) -> i32 {
    angle.rem_euclid(i64::from(FULL_TURN)) as i32
}

pub fn angle_to_radians(angle: i32) -> f64 {
    f64::from(angle) * TAU / f64::from(FULL_TURN)
}

/// Rotates `point` about the origin and rounds to the nearest pixel.
/// Results beyond the `i32` range saturate.
pub fn rotate_point(point: Point, angle: i32) -> Point {
    if angle == 0 {
        return point;
    }
    let (sin, cos) = angle_to_radians(angle).sin_cos();
    let (x, y) = (f64::from(point.x), f64::from(point.y));
    Point::new(
        (x * cos - y * sin).round() as i32,
        (x * sin + y * cos).round() as i32,
    )
}

// ============================================================================
// POLYGONS
// ============================================================================

/// A closed shape; the last point joins the first.
///
/// The base points never change after construction. `move_to` and
/// `rotate_to` only set the transform that [`Polygon::transformed`] applies,
/// so repeated rotations never accumulate rounding error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Polygon {
    points: Vec<Point>,
    offset: Point,
    rotation: i32,
}

impl Polygon {
    pub fn new(points: Vec<Point>) -> Self {
        Self {
            points,
            offset: Point::ORIGIN,
            rotation: 0,
        }
    }

    /// Quadrilateral `(left, top) (right, top) (right, bottom) (left, bottom)`.
    ///
    /// `top` is simply the first edge's y; it may be below `bottom`.
    pub fn quad(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self::new(vec![
            Point::new(left, top),
            Point::new(right, top),
            Point::new(right, bottom),
            Point::new(left, bottom),
        ])
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn offset(&self) -> Point {
        self.offset
    }

    pub fn rotation(&self) -> i32 {
        self.rotation
    }

    pub fn move_to(&mut self, offset: Point) {
        self.offset = offset;
    }

    pub fn rotate_to(&mut self, angle: i64) {
        self.rotation = normalize_angle(angle);
    }

    /// Base points rotated about the local origin, then translated by the offset.
    /// Coordinates saturate at the `i32` range.
    pub fn transformed(&self) -> Vec<Point> {
        self.points
            .iter()
            .map(|&p| {
                let r = rotate_point(p, self.rotation);
                Point::new(
                    r.x.saturating_add(self.offset.x),
                    r.y.saturating_add(self.offset.y),
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_wraps_negative_and_large_angles() {
        assert_eq!(normalize_angle(0), 0);
        assert_eq!(normalize_angle(i64::from(FULL_TURN)), 0);
        assert_eq!(normalize_angle(-1), FULL_TURN - 1);
        assert_eq!(normalize_angle(3 * i64::from(FULL_TURN) + 5), 5);
    }

    #[test]
    fn test_quarter_turn_is_clockwise_on_screen() {
        // Right of origin moves to below origin (y grows downward).
        let p = rotate_point(Point::new(10, 0), FULL_TURN / 4);
        assert_eq!(p, Point::new(0, 10));
    }

    #[test]
    fn test_half_turn_negates() {
        let p = rotate_point(Point::new(-144, -2), FULL_TURN / 2);
        assert_eq!(p, Point::new(144, 2));
    }

    #[test]
    fn test_transform_does_not_touch_base_points() {
        let mut quad = Polygon::quad(-6, 9, 6, 6);
        let base = quad.points().to_vec();
        quad.move_to(Point::new(72, 84));
        for step in 0..60 {
            quad.rotate_to(i64::from(step) * 1092);
            let _ = quad.transformed();
        }
        assert_eq!(quad.points(), &base[..]);

        quad.rotate_to(0);
        let moved = quad.transformed();
        assert_eq!(moved[0], Point::new(66, 93));
        assert_eq!(moved[2], Point::new(78, 90));
    }

    #[test]
    fn test_transform_saturates_instead_of_overflowing() {
        let mut polygon = Polygon::new(vec![Point::new(i32::MAX - 1, i32::MIN + 1)]);
        polygon.move_to(Point::new(10, -10));
        assert_eq!(polygon.transformed(), vec![Point::new(i32::MAX, i32::MIN)]);

        polygon.rotate_to(i64::from(FULL_TURN / 8));
        let rotated = polygon.transformed();
        assert_eq!(rotated.len(), 1);
    }

    #[test]
    fn test_rect_contains_is_half_open() {
        let r = Rect::new(14, 132, 93, 23);
        assert!(r.contains(14, 132));
        assert!(r.contains(106, 154));
        assert!(!r.contains(107, 154));
        assert!(!r.contains(14, 155));
        assert_eq!(r.center(), Point::new(60, 143));
    }
}
