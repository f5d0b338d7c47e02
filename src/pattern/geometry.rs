//! Plane geometry helpers: points, axis-aligned rectangles, rounding and
//! segment clipping.

/// Slack used when rounding up so values already on the grid stay put.
const GRID_EPSILON: f64 = 1e-9;

/// A 2D point in board-local millimetres (Y grows downward).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Creates a new point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    fn lerp(self, other: Self, t: f64) -> Self {
        Self::new(
            t.mul_add(other.x - self.x, self.x),
            t.mul_add(other.y - self.y, self.y),
        )
    }

    /// Distance to another point.
    #[must_use]
    pub fn distance(self, other: Self) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

/// An axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Rect {
    /// Creates a rectangle from two opposite corners in any order.
    #[must_use]
    pub fn from_corners(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self {
            min_x: x1.min(x2),
            min_y: y1.min(y2),
            max_x: x1.max(x2),
            max_y: y1.max(y2),
        }
    }

    /// Creates a rectangle centred at `(x, y)`.
    #[must_use]
    pub fn centred_at(x: f64, y: f64, width: f64, height: f64) -> Self {
        let half_w = width / 2.0;
        let half_h = height / 2.0;
        Self {
            min_x: x - half_w,
            min_y: y - half_h,
            max_x: x + half_w,
            max_y: y + half_h,
        }
    }

    /// Grows the rectangle by `margin` on every side.
    #[must_use]
    pub fn expand(&self, margin: f64) -> Self {
        Self {
            min_x: self.min_x - margin,
            min_y: self.min_y - margin,
            max_x: self.max_x + margin,
            max_y: self.max_y + margin,
        }
    }

    /// Smallest rectangle containing both.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        Self {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }

    /// Parameter interval `[t0, t1]` of the segment `a + t (b - a)` that lies
    /// inside this rectangle (Liang-Barsky), or `None`.
    fn segment_overlap(&self, a: Point, b: Point) -> Option<(f64, f64)> {
        let dx = b.x - a.x;
        let dy = b.y - a.y;
        let mut t0 = 0.0f64;
        let mut t1 = 1.0f64;

        for (p, q) in [
            (-dx, a.x - self.min_x),
            (dx, self.max_x - a.x),
            (-dy, a.y - self.min_y),
            (dy, self.max_y - a.y),
        ] {
            if p.abs() < f64::EPSILON {
                if q <= 0.0 {
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

        (t1 - t0 > GRID_EPSILON).then_some((t0, t1))
    }
}

/// Rounds to the nearest multiple of `step` (half away from zero).
#[must_use]
pub fn round_to(value: f64, step: f64) -> f64 {
    (value / step).round() * step
}

/// Rounds up to the next multiple of `step`.
#[must_use]
pub fn round_up_to(value: f64, step: f64) -> f64 {
    (value / step - GRID_EPSILON).ceil() * step
}

/// Rounds away from the origin to the given number of decimals, so a
/// boundary never shrinks.
#[must_use]
pub fn round_outward(value: f64, decimals: u32) -> f64 {
    let scale = 10f64.powi(i32::try_from(decimals).unwrap_or(3));
    if value >= 0.0 {
        (value * scale - GRID_EPSILON).ceil() / scale
    } else {
        (value * scale + GRID_EPSILON).floor() / scale
    }
}

/// Removes from segment `a-b` every part lying inside one of `keepout`,
/// returning the remaining pieces at least `min_length` long, in order.
#[must_use]
pub fn clip_segment(a: Point, b: Point, keepout: &[Rect], min_length: f64) -> Vec<(Point, Point)> {
    let mut cuts: Vec<(f64, f64)> = keepout
        .iter()
        .filter_map(|r| r.segment_overlap(a, b))
        .collect();
    cuts.sort_by(|l, r| l.0.total_cmp(&r.0));

    let mut pieces = Vec::new();
    let mut start = 0.0;
    for (t0, t1) in cuts {
        if t0 > start {
            pieces.push((start, t0));
        }
        start = f64::max(start, t1);
    }
    if start < 1.0 {
        pieces.push((start, 1.0));
    }

    pieces
        .into_iter()
        .map(|(t0, t1)| (a.lerp(b, t0), a.lerp(b, t1)))
        .filter(|(p, q)| p.distance(*q) >= min_length)
        .collect()
}
