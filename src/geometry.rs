//! Axis-aligned rectangles and the small set of numeric helpers shared by
//! placement, validation and routing.
//!
//! Every operation here treats its [`Rect`] arguments as already
//! [`Rect::normalized`] unless stated otherwise; callers that might hand in
//! negative extents (e.g. a drag gesture that grew leftward) should
//! normalize first.

use serde::{Deserialize, Serialize};

/// A point in world coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle.
///
/// `width`/`height` may be negative; [`Rect::normalized`] flips the origin
/// so that both are non-negative. Most free functions in this module
/// normalize their inputs internally, but [`Rect::left`]/[`top`]/[`right`]/
/// [`bottom`] read the raw fields, so callers that care should normalize
/// first.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub const fn left(&self) -> f64 {
        self.x
    }

    pub const fn top(&self) -> f64 {
        self.y
    }

    pub const fn right(&self) -> f64 {
        self.x + self.width
    }

    pub const fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// `true` if `width >= 0.0 && height >= 0.0`.
    pub const fn is_normalized(&self) -> bool {
        self.width >= 0.0 && self.height >= 0.0
    }

    /// Returns an equivalent rectangle with non-negative width and height,
    /// flipping the origin when an extent is negative.
    ///
    /// # Example
    /// ```
    /// use officelayout::geometry::Rect;
    ///
    /// let r = Rect::new(10.0, 10.0, -5.0, 4.0).normalized();
    /// assert_eq!(r, Rect::new(5.0, 10.0, 5.0, 4.0));
    /// ```
    pub fn normalized(&self) -> Rect {
        if self.is_normalized() {
            return *self;
        }
        let (x, width) = if self.width < 0.0 {
            (self.x + self.width, -self.width)
        } else {
            (self.x, self.width)
        };
        let (y, height) = if self.height < 0.0 {
            (self.y + self.height, -self.height)
        } else {
            (self.y, self.height)
        };
        Rect::new(x, y, width, height)
    }

    pub fn area(&self) -> f64 {
        let r = self.normalized();
        r.width * r.height
    }

    pub fn center(&self) -> Point {
        let r = self.normalized();
        Point::new(r.x + r.width / 2.0, r.y + r.height / 2.0)
    }
}

/// True iff the interiors of `a` and `b` overlap. Edges that merely touch do
/// not count as intersecting (half-open intervals on both axes).
pub fn intersects(a: &Rect, b: &Rect) -> bool {
    let a = a.normalized();
    let b = b.normalized();
    !(a.right() <= b.left()
        || a.left() >= b.right()
        || a.bottom() <= b.top()
        || a.top() >= b.bottom())
}

/// True iff every edge of `inner` lies within `outer` (closed comparison).
pub fn contains(outer: &Rect, inner: &Rect) -> bool {
    let outer = outer.normalized();
    let inner = inner.normalized();
    inner.left() >= outer.left()
        && inner.right() <= outer.right()
        && inner.top() >= outer.top()
        && inner.bottom() <= outer.bottom()
}

fn clamp(v: f64, lo: f64, hi: f64) -> f64 {
    if v < lo {
        lo
    } else if v > hi {
        hi
    } else {
        v
    }
}

/// Euclidean distance from `p` to the nearest point of `r`; zero if `p` is
/// inside (or on the boundary of) `r`.
pub fn distance_point_to_rect(p: Point, r: &Rect) -> f64 {
    let r = r.normalized();
    let cx = clamp(p.x, r.left(), r.right());
    let cy = clamp(p.y, r.top(), r.bottom());
    (p.x - cx).hypot(p.y - cy)
}

/// Zero if `a` and `b` intersect; otherwise the Euclidean distance between
/// their closest points, computed from the per-axis gaps.
pub fn distance_rect_to_rect(a: &Rect, b: &Rect) -> f64 {
    let a = a.normalized();
    let b = b.normalized();

    if intersects(&a, &b) {
        return 0.0;
    }

    let dx = if a.right() < b.left() {
        b.left() - a.right()
    } else if b.right() < a.left() {
        a.left() - b.right()
    } else {
        0.0
    };

    let dy = if a.bottom() < b.top() {
        b.top() - a.bottom()
    } else if b.bottom() < a.top() {
        a.top() - b.bottom()
    } else {
        0.0
    };

    dx.hypot(dy)
}

/// Grows every side of `r` by `margin` (negative margins shrink it).
pub fn inflate(r: &Rect, margin: f64) -> Rect {
    let r = r.normalized();
    Rect::new(
        r.x - margin,
        r.y - margin,
        r.width + 2.0 * margin,
        r.height + 2.0 * margin,
    )
}

/// Rounds `v` to the nearest multiple of `g`. Returns `v` unchanged if
/// `g <= 0.0`.
pub fn snap(v: f64, g: f64) -> f64 {
    if g <= 0.0 {
        v
    } else {
        (v / g).round() * g
    }
}

/// Converts a world coordinate to the `(row, col)` cell that contains it.
///
/// # Panics
/// Panics if `g <= 0.0`.
pub fn world_to_cell(x: f64, y: f64, g: f64) -> (i64, i64) {
    assert!(g > 0.0, "grid size must be > 0");
    ((y / g).floor() as i64, (x / g).floor() as i64)
}

/// The world-coordinate center of cell `(row, col)` on a grid of cell size
/// `g`.
///
/// # Panics
/// Panics if `g <= 0.0`.
pub fn cell_center(row: i64, col: i64, g: f64) -> Point {
    assert!(g > 0.0, "grid size must be > 0");
    Point::new((col as f64 + 0.5) * g, (row as f64 + 0.5) * g)
}

/// Enumerates every `(row, col)` cell a normalized rectangle covers, clamped
/// to `[0, max_rows) x [0, max_cols)`.
///
/// The upper bound on each axis backs off by a small epsilon so that a
/// rectangle exactly aligned with a cell edge does not spuriously cover the
/// next cell.
///
/// # Panics
/// Panics if `g <= 0.0`.
pub fn rect_to_cells(r: &Rect, g: f64, max_rows: i64, max_cols: i64) -> Vec<(i64, i64)> {
    assert!(g > 0.0, "grid size must be > 0");
    const EPS: f64 = 1e-9;
    let r = r.normalized();

    if max_rows <= 0 || max_cols <= 0 {
        return Vec::new();
    }

    let start_row = (r.top() / g).floor() as i64;
    let end_row = ((r.bottom() - EPS) / g).floor() as i64;
    let start_col = (r.left() / g).floor() as i64;
    let end_col = ((r.right() - EPS) / g).floor() as i64;

    let start_row = start_row.clamp(0, max_rows - 1);
    let end_row = end_row.clamp(0, max_rows - 1);
    let start_col = start_col.clamp(0, max_cols - 1);
    let end_col = end_col.clamp(0, max_cols - 1);

    let mut cells = Vec::with_capacity(((end_row - start_row + 1) * (end_col - start_col + 1)) as usize);
    for row in start_row..=end_row {
        for col in start_col..=end_col {
            cells.push((row, col));
        }
    }
    cells
}
