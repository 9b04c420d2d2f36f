// ============================================================================
// SOFTWARE RASTERIZER
// ============================================================================
//
// Immediate-mode drawing into an RGBA8 framebuffer, row-major, four bytes per
// pixel. Out-of-range writes are clipped silently.

use crate::config::Color;
use crate::geometry::Point;
use crate::horizon::FillCommand;

/// The drawing primitive the horizon instrument's commands are executed with.
pub trait FillTarget {
    fn fill_polygon(&mut self, points: &[Point], color: Color);
}

/// Executes a frame of instrument commands in order.
pub fn render_commands<T: FillTarget + ?Sized>(target: &mut T, commands: &[FillCommand]) {
    for command in commands {
        target.fill_polygon(&command.points, command.color);
    }
}

/// Horizontal run of covered pixels, `x_start..x_end` on row `y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub y: usize,
    pub x_start: usize,
    pub x_end: usize,
}

/// Pixels of a closed polygon whose centers lie inside it, clipped to
/// `width` x `height`.
///
/// Sampling is half-open and edges are always walked top to bottom, so two
/// polygons sharing an edge split the pixels along it without gap or overlap.
pub fn scanline_spans(points: &[Point], width: usize, height: usize) -> Vec<Span> {
    let mut spans = Vec::new();
    if points.len() < 3 || width == 0 || height == 0 {
        return spans;
    }

    let min_y = points.iter().map(|p| p.y).min().unwrap_or(0).max(0);
    let max_y = points
        .iter()
        .map(|p| p.y)
        .max()
        .unwrap_or(0)
        .min(height as i32);

    let mut crossings: Vec<f64> = Vec::with_capacity(points.len());
    for y in min_y..max_y {
        let sample_y = f64::from(y) + 0.5;
        crossings.clear();

        for (i, &a) in points.iter().enumerate() {
            let b = points[(i + 1) % points.len()];
            let (top, bottom) = if a.y <= b.y { (a, b) } else { (b, a) };
            if top.y == bottom.y {
                continue;
            }
            if sample_y < f64::from(top.y) || sample_y >= f64::from(bottom.y) {
                continue;
            }
            let t = (sample_y - f64::from(top.y)) / f64::from(bottom.y - top.y);
            crossings.push(f64::from(top.x) + t * f64::from(bottom.x - top.x));
        }

        crossings.sort_by(f64::total_cmp);
        for pair in crossings.chunks_exact(2) {
            // Pixel x is covered when its center x + 0.5 lies in [left, right).
            let x_start = (pair[0] - 0.5).ceil().clamp(0.0, width as f64) as usize;
            let x_end = (pair[1] - 0.5).ceil().clamp(0.0, width as f64) as usize;
            if x_start < x_end {
                spans.push(Span {
                    y: y as usize,
                    x_start,
                    x_end,
                });
            }
        }
    }
    spans
}

// ============================================================================
// CANVAS
// ============================================================================

pub struct Canvas<'a> {
    frame: &'a mut [u8],
    width: usize,
    height: usize,
}

impl<'a> Canvas<'a> {
    /// `frame` must hold at least `width * height * 4` bytes.
    pub fn new(frame: &'a mut [u8], width: usize, height: usize) -> Self {
        debug_assert!(frame.len() >= width * height * 4);
        Self {
            frame,
            width,
            height,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn clear(&mut self, color: Color) {
        for chunk in self.frame.chunks_exact_mut(4) {
            chunk.copy_from_slice(&color.with_alpha(0xff));
        }
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y * self.width + x) * 4;
        let mut out = [0; 4];
        out.copy_from_slice(&self.frame[idx..idx + 4]);
        Some(out)
    }

    fn put(&mut self, x: usize, y: usize, rgba: [u8; 4]) {
        let idx = (y * self.width + x) * 4;
        self.frame[idx..idx + 4].copy_from_slice(&rgba);
    }

    /// Source-over blend of `color` at coverage `alpha`.
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color, alpha: f32) {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return;
        }
        let (x, y) = (x as usize, y as usize);
        let idx = (y * self.width + x) * 4;
        let dst = &self.frame[idx..idx + 4];

        let a = alpha.clamp(0.0, 1.0);
        let dst_a = f32::from(dst[3]) / 255.0;
        let out_a = a + dst_a * (1.0 - a);
        if out_a <= 0.0 {
            return;
        }
        let blend = |src: u8, dst: u8| {
            ((f32::from(src) * a + f32::from(dst) * dst_a * (1.0 - a)) / out_a).round() as u8
        };
        let out = [
            blend(color.r, dst[0]),
            blend(color.g, dst[1]),
            blend(color.b, dst[2]),
            (out_a * 255.0).round() as u8,
        ];
        self.put(x, y, out);
    }

    pub fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: Color) {
        let x0 = x.clamp(0, self.width as i32) as usize;
        let x1 = (x + width).clamp(0, self.width as i32) as usize;
        let y0 = y.clamp(0, self.height as i32) as usize;
        let y1 = (y + height).clamp(0, self.height as i32) as usize;
        for py in y0..y1 {
            for px in x0..x1 {
                self.put(px, py, color.with_alpha(0xff));
            }
        }
    }

    /// Draws `image` at the origin, honoring its per-pixel alpha.
    pub fn composite(&mut self, image: &Bitmap) {
        let rows = image.height.min(self.height);
        let cols = image.width.min(self.width);
        for y in 0..rows {
            for x in 0..cols {
                let [r, g, b, a] = image.pixel(x, y);
                match a {
                    0 => {}
                    0xff => self.put(x, y, [r, g, b, 0xff]),
                    _ => self.set_pixel(
                        x as i32,
                        y as i32,
                        Color::new(r, g, b),
                        f32::from(a) / 255.0,
                    ),
                }
            }
        }
    }

    /// Strokes the segment `from`..`to` with round caps and a one-pixel
    /// anti-aliased edge.
    pub fn stroke_segment(&mut self, from: Point, to: Point, thickness: f32, color: Color) {
        let half = thickness / 2.0;
        let reach = half.ceil() as i32 + 1;
        let x_min = (from.x.min(to.x) - reach).max(0);
        let x_max = (from.x.max(to.x) + reach).min(self.width as i32 - 1);
        let y_min = (from.y.min(to.y) - reach).max(0);
        let y_max = (from.y.max(to.y) + reach).min(self.height as i32 - 1);

        for y in y_min..=y_max {
            for x in x_min..=x_max {
                let distance = segment_distance(Point::new(x, y), from, to);
                let coverage = 1.0 - (distance - half).clamp(0.0, 1.0);
                if coverage > 0.01 {
                    self.set_pixel(x, y, color, coverage);
                }
            }
        }
    }

    pub fn draw_circle(&mut self, center: Point, radius: i32, color: Color) {
        for y in -radius - 1..=radius + 1 {
            for x in -radius - 1..=radius + 1 {
                let dist = f64::from(x * x + y * y).sqrt();
                let aa = 1.0 - (dist - f64::from(radius)).clamp(0.0, 1.0);
                if aa > 0.0 {
                    self.set_pixel(center.x + x, center.y + y, color, aa as f32);
                }
            }
        }
    }
}

/// Euclidean distance from `p` to the closest point of segment `a`..`b`.
fn segment_distance(p: Point, a: Point, b: Point) -> f32 {
    let (ab_x, ab_y) = ((b.x - a.x) as f32, (b.y - a.y) as f32);
    let (ap_x, ap_y) = ((p.x - a.x) as f32, (p.y - a.y) as f32);
    let length_sq = ab_x * ab_x + ab_y * ab_y;
    let t = if length_sq > 0.0 {
        ((ap_x * ab_x + ap_y * ab_y) / length_sq).clamp(0.0, 1.0)
    } else {
        0.0
    };
    (ap_x - t * ab_x).hypot(ap_y - t * ab_y)
}

impl FillTarget for Canvas<'_> {
    fn fill_polygon(&mut self, points: &[Point], color: Color) {
        let rgba = color.with_alpha(0xff);
        for span in scanline_spans(points, self.width, self.height) {
            for x in span.x_start..span.x_end {
                self.put(x, span.y, rgba);
            }
        }
    }
}

// ============================================================================
// BITMAP
// ============================================================================

/// An owned RGBA8 image, e.g. a pre-rendered overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl Bitmap {
    /// A fully transparent image.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![0; width * height * 4],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixel(&self, x: usize, y: usize) -> [u8; 4] {
        let idx = (y * self.width + x) * 4;
        let mut out = [0; 4];
        out.copy_from_slice(&self.data[idx..idx + 4]);
        out
    }

    pub fn canvas(&mut self) -> Canvas<'_> {
        Canvas::new(&mut self.data, self.width, self.height)
    }
}
