use glam::{DVec2, DVec3};
use std::fmt;

/// Location in 3D space.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// Coordinate along the X axis.
    pub x: f64,
    /// Coordinate along the Y axis.
    pub y: f64,
    /// Coordinate along the Z axis.
    pub z: f64,
}

impl Point {
    /// Creates a point from its coordinates.
    #[inline(always)]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// The coordinate origin.
    pub const ORIGIN: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    /// Euclidean distance to another point. Symmetric; zero iff the points are equal.
    #[inline]
    pub fn distance(&self, other: &Point) -> f64 {
        DVec3::from(*self).distance(DVec3::from(*other))
    }

    /// Distance to another point measured in the XY plane only.
    #[inline]
    pub fn horizontal_distance(&self, other: &Point) -> f64 {
        DVec2::new(self.x, self.y).distance(DVec2::new(other.x, other.y))
    }

    /// Squared distance to another point measured in the XY plane only.
    #[inline]
    pub fn horizontal_distance_squared(&self, other: &Point) -> f64 {
        DVec2::new(self.x, self.y).distance_squared(DVec2::new(other.x, other.y))
    }
}

impl From<Point> for DVec3 {
    #[inline(always)]
    fn from(p: Point) -> Self {
        DVec3::new(p.x, p.y, p.z)
    }
}

impl From<DVec3> for Point {
    #[inline(always)]
    fn from(v: DVec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.1}, {:.1}, {:.1})", self.x, self.y, self.z)
    }
}
