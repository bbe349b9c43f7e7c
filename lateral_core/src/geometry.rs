//! # Plan Geometry
//!
//! Small 2D primitives used by the diaphragm solver: points/vectors, wall line
//! segments and level boundary polygons. Coordinates are plan coordinates in
//! inches, X to the right and Y up; positive rotation is counterclockwise.

use serde::{Deserialize, Serialize};

/// Global plan axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    /// Both axes in standard order
    pub const ALL: [Axis; 2] = [Axis::X, Axis::Y];
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::X => write!(f, "X"),
            Axis::Y => write!(f, "Y"),
        }
    }
}

/// A plan point or vector.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    pub const ORIGIN: Point2 = Point2 { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Point2 { x, y }
    }

    /// Component along an axis
    pub fn along(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }

    /// Vector from `self` to `other`
    pub fn to(&self, other: Point2) -> Point2 {
        Point2::new(other.x - self.x, other.y - self.y)
    }

    pub fn length(&self) -> f64 {
        self.x.hypot(self.y)
    }

    pub fn distance_to(&self, other: Point2) -> f64 {
        self.to(other).length()
    }

    pub fn dot(&self, other: Point2) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// z-component of the 2D cross product `self × other`.
    ///
    /// Positive when `other` lies counterclockwise ("left") of `self`.
    pub fn cross(&self, other: Point2) -> f64 {
        self.x * other.y - self.y * other.x
    }

    /// Angle from the global X-axis to this vector, in radians (-π, π]
    pub fn angle(&self) -> f64 {
        self.y.atan2(self.x)
    }

    /// Whether two points coincide within `tolerance` in both coordinates
    pub fn approx_eq(&self, other: Point2, tolerance: f64) -> bool {
        (self.x - other.x).abs() <= tolerance && (self.y - other.y).abs() <= tolerance
    }
}

impl std::fmt::Display for Point2 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}

/// A wall line segment between two plan points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub start: Point2,
    pub end: Point2,
}

impl Segment {
    pub fn new(start: Point2, end: Point2) -> Self {
        Segment { start, end }
    }

    pub fn length(&self) -> f64 {
        self.start.distance_to(self.end)
    }

    pub fn midpoint(&self) -> Point2 {
        Point2::new((self.start.x + self.end.x) / 2.0, (self.start.y + self.end.y) / 2.0)
    }

    /// Unit direction vector from start to end, `None` for a zero-length segment
    pub fn unit_vector(&self) -> Option<Point2> {
        let d = self.start.to(self.end);
        let len = d.length();
        if len > 0.0 && len.is_finite() {
            Some(Point2::new(d.x / len, d.y / len))
        } else {
            None
        }
    }

    /// Signed perpendicular distance from the extended line to `point`.
    ///
    /// Positive when `point` lies to the left of the start→end direction,
    /// negative to the right, zero when colinear. Returns 0.0 for a
    /// zero-length segment.
    pub fn signed_distance_to(&self, point: Point2) -> f64 {
        match self.unit_vector() {
            Some(u) => u.cross(self.start.to(point)),
            None => 0.0,
        }
    }
}

/// Min/max plan extents of a point set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Extents {
    pub min: Point2,
    pub max: Point2,
}

impl Extents {
    /// Bounding extents of the points, `None` if empty
    pub fn of(points: &[Point2]) -> Option<Self> {
        let first = *points.first()?;
        Some(points.iter().skip(1).fold(
            Extents { min: first, max: first },
            |acc, p| Extents {
                min: Point2::new(acc.min.x.min(p.x), acc.min.y.min(p.y)),
                max: Point2::new(acc.max.x.max(p.x), acc.max.y.max(p.y)),
            },
        ))
    }

    /// Plan dimension along X (max - min)
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// Plan dimension along Y (max - min)
    pub fn depth(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Plan dimension along an axis
    pub fn span(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.width(),
            Axis::Y => self.depth(),
        }
    }
}

/// Signed polygon area by the shoelace formula (positive for counterclockwise)
pub fn signed_area(vertices: &[Point2]) -> f64 {
    if vertices.len() < 3 {
        return 0.0;
    }
    let n = vertices.len();
    (0..n)
        .map(|i| vertices[i].cross(vertices[(i + 1) % n]))
        .sum::<f64>()
        / 2.0
}

/// Area centroid of a simple polygon.
///
/// Falls back to the vertex average when the polygon has no area.
pub fn centroid(vertices: &[Point2]) -> Option<Point2> {
    if vertices.is_empty() {
        return None;
    }
    let area = signed_area(vertices);
    if area.abs() < f64::EPSILON {
        let n = vertices.len() as f64;
        let sum = vertices
            .iter()
            .fold(Point2::ORIGIN, |acc, p| Point2::new(acc.x + p.x, acc.y + p.y));
        return Some(Point2::new(sum.x / n, sum.y / n));
    }

    let n = vertices.len();
    let (mut cx, mut cy) = (0.0, 0.0);
    for i in 0..n {
        let a = vertices[i];
        let b = vertices[(i + 1) % n];
        let f = a.cross(b);
        cx += (a.x + b.x) * f;
        cy += (a.y + b.y) * f;
    }
    Some(Point2::new(cx / (6.0 * area), cy / (6.0 * area)))
}

/// Plan-extreme vertices of a boundary: the vertices with minimum X, maximum X,
/// minimum Y and maximum Y (first occurrence wins on ties), with duplicates
/// within `tolerance` removed. At most four points.
pub fn extreme_vertices(vertices: &[Point2], tolerance: f64) -> Vec<Point2> {
    let pick = |better: fn(&Point2, &Point2) -> bool| -> Option<Point2> {
        vertices
            .iter()
            .copied()
            .reduce(|best, p| if better(&p, &best) { p } else { best })
    };

    let candidates = [
        pick(|p, best| p.x < best.x),
        pick(|p, best| p.x > best.x),
        pick(|p, best| p.y < best.y),
        pick(|p, best| p.y > best.y),
    ];

    let mut points: Vec<Point2> = Vec::with_capacity(4);
    for candidate in candidates.into_iter().flatten() {
        if !points.iter().any(|p| p.approx_eq(candidate, tolerance)) {
            points.push(candidate);
        }
    }
    points
}
