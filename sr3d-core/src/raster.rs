/// Pixel buffer and scan conversion primitives
use crate::vector::Vec2;

/// Row-major buffer of packed `0xAARRGGBB` colors.
///
/// Every drawing call is bounds-checked per pixel; anything that falls
/// outside the buffer is dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: usize,
    height: usize,
    pixels: Vec<u32>,
}

impl FrameBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// All pixels, `index = y * width + x`
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<u32> {
        (x < self.width && y < self.height).then(|| self.pixels[y * self.width + x])
    }

    pub fn clear(&mut self, color: u32) {
        self.pixels.fill(color);
    }

    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: u32) {
        if x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height {
            let idx = y as usize * self.width + x as usize;
            self.pixels[idx] = color;
        }
    }

    /// One dot every `spacing` pixels in both directions
    pub fn draw_grid(&mut self, spacing: usize, color: u32) {
        if spacing == 0 {
            return;
        }
        for y in (0..self.height).step_by(spacing) {
            for x in (0..self.width).step_by(spacing) {
                self.pixels[y * self.width + x] = color;
            }
        }
    }

    pub fn draw_rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: u32) {
        for dy in 0..height {
            for dx in 0..width {
                self.set_pixel(x + dx, y + dy, color);
            }
        }
    }

    /// Digital differential analyzer line between two sub-pixel endpoints.
    ///
    /// Takes `round(max(|dx|, |dy|))` equal steps and plots the rounded
    /// position at each of them, both endpoints included. Only the steps
    /// that land inside the buffer are visited, so the cost is bounded by
    /// the buffer size rather than the line length.
    pub fn draw_line(&mut self, from: Vec2, to: Vec2, color: u32) {
        if !is_finite(&from) || !is_finite(&to) {
            return;
        }

        let (x0, y0) = (from.x as f64, from.y as f64);
        let (dx, dy) = (to.x as f64 - x0, to.y as f64 - y0);
        let steps = dx.abs().max(dy.abs()).round();
        if steps == 0.0 {
            self.set_pixel(from.x.round() as i32, from.y.round() as i32, color);
            return;
        }

        let Some((t0, t1)) = self.clip_line(x0, y0, dx, dy) else {
            return;
        };
        let first = (t0 * steps).ceil() as u64;
        let last = (t1 * steps).floor() as u64;
        for i in first..=last {
            let t = i as f64 / steps;
            self.set_pixel(
                (x0 + dx * t).round() as i32,
                (y0 + dy * t).round() as i32,
                color,
            );
        }
    }

    /// Liang-Barsky clip of `origin + t * delta, t in [0, 1]` against the
    /// region whose points round onto a pixel of the buffer
    fn clip_line(&self, x0: f64, y0: f64, dx: f64, dy: f64) -> Option<(f64, f64)> {
        let (x_min, x_max) = (-0.5, self.width as f64 - 0.5);
        let (y_min, y_max) = (-0.5, self.height as f64 - 0.5);
        let bounds = [
            (-dx, x0 - x_min),
            (dx, x_max - x0),
            (-dy, y0 - y_min),
            (dy, y_max - y0),
        ];

        let (mut t0, mut t1) = (0.0_f64, 1.0_f64);
        for (p, q) in bounds {
            if p == 0.0 {
                if q < 0.0 {
                    return None;
                }
            } else {
                let r = q / p;
                if p < 0.0 {
                    t0 = t0.max(r);
                } else {
                    t1 = t1.min(r);
                }
            }
        }
        (t0 <= t1).then_some((t0, t1))
    }

    /// Triangle outline: a-b, b-c, c-a
    pub fn draw_triangle(&mut self, points: &[Vec2; 3], color: u32) {
        let [a, b, c] = *points;
        self.draw_line(a, b, color);
        self.draw_line(b, c, color);
        self.draw_line(c, a, color);
    }

    /// Solid triangle fill by flat-top / flat-bottom decomposition.
    ///
    /// Vertices are ordered top to bottom on screen. A triangle with a
    /// horizontal edge is filled directly; any other is split along the
    /// middle vertex's row into a flat-bottom upper half and a flat-top
    /// lower half.
    pub fn fill_triangle(&mut self, points: &[Vec2; 3], color: u32) {
        if points.iter().any(|p| !is_finite(p)) || !self.touches(points) {
            return;
        }

        let mut sorted = *points;
        sorted.sort_by(|a, b| a.y.total_cmp(&b.y));
        let [v0, v1, v2] = sorted;

        if v0.y == v2.y {
            let left = v0.x.min(v1.x).min(v2.x);
            let right = v0.x.max(v1.x).max(v2.x);
            self.draw_span(v0.y.round() as i32, left, right, color);
        } else if v1.y == v2.y {
            self.fill_flat_bottom(v0, v1, v2, color);
        } else if v0.y == v1.y {
            self.fill_flat_top(v0, v1, v2, color);
        } else {
            let split = Vec2::new(
                v0.x + (v1.y - v0.y) / (v2.y - v0.y) * (v2.x - v0.x),
                v1.y,
            );
            self.fill_flat_bottom(v0, v1, split, color);
            self.fill_flat_top(v1, split, v2, color);
        }
    }

    /// Fill a triangle whose two lower corners share a row, walking down
    /// from the apex
    fn fill_flat_bottom(&mut self, apex: Vec2, b: Vec2, c: Vec2, color: u32) {
        let Some((first, last)) = self.row_range(apex.y, b.y) else {
            return;
        };

        for y in first..=last {
            let row = y as f32;
            self.draw_span(y, edge_x(apex, b, row), edge_x(apex, c, row), color);
        }
    }

    /// Fill a triangle whose two upper corners share a row, walking up from
    /// the apex
    fn fill_flat_top(&mut self, a: Vec2, b: Vec2, apex: Vec2, color: u32) {
        let Some((first, last)) = self.row_range(a.y, apex.y) else {
            return;
        };

        for y in (first..=last).rev() {
            let row = y as f32;
            self.draw_span(y, edge_x(apex, a, row), edge_x(apex, b, row), color);
        }
    }

    /// Horizontal run on row `y` between two x positions, in either order
    fn draw_span(&mut self, y: i32, x0: f32, x1: f32, color: u32) {
        if y < 0 || y as usize >= self.height || self.width == 0 {
            return;
        }

        let start = (x0.min(x1).round() as i32).max(0);
        let end = (x0.max(x1).round() as i32).min(self.width as i32 - 1);
        if start > end {
            return;
        }

        let row = y as usize * self.width;
        self.pixels[row + start as usize..=row + end as usize].fill(color);
    }

    /// Integer rows covered between two y positions, clipped to the buffer
    fn row_range(&self, top: f32, bottom: f32) -> Option<(i32, i32)> {
        let first = (top.round() as i32).max(0);
        let last = (bottom.round() as i32).min(self.height as i32 - 1);
        (first <= last).then_some((first, last))
    }

    /// Whether the bounding box of `points` overlaps the buffer
    fn touches(&self, points: &[Vec2]) -> bool {
        let (min, max) = points.iter().fold(
            (Vec2::repeat(f32::INFINITY), Vec2::repeat(f32::NEG_INFINITY)),
            |(min, max), p| (min.inf(p), max.sup(p)),
        );
        max.x.round() >= 0.0
            && max.y.round() >= 0.0
            && min.x.round() < self.width as f32
            && min.y.round() < self.height as f32
    }
}

/// X of the edge `apex -> end` at row `y`, with `y` held to the edge's
/// own vertical extent. Rows rounded onto a triangle can sit up to half a
/// pixel past its corners; the clamp keeps them on the edge.
fn edge_x(apex: Vec2, end: Vec2, y: f32) -> f32 {
    let edge = end - apex;
    if edge.y.abs() < f32::EPSILON {
        return end.x;
    }
    let t = ((y - apex.y) / edge.y).clamp(0.0, 1.0);
    apex.x + edge.x * t
}

fn is_finite(point: &Vec2) -> bool {
    point.x.is_finite() && point.y.is_finite()
}
