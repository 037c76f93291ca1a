use std::fmt;

use super::point::Point;
use super::sphere::Sphere;

/// Axis-aligned solid cube defined by its center and full edge length.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct Cube {
    /// Center of the cube.
    pub center: Point,
    /// Full edge length of the cube.
    pub side: f64,
}

impl Cube {
    /// Creates a cube from its center coordinates and edge length.
    #[inline(always)]
    pub fn new(x: f64, y: f64, z: f64, side: f64) -> Self {
        Self {
            center: Point::new(x, y, z),
            side,
        }
    }

    /// Half of the cube's edge length, its extent from the center along each axis.
    #[inline]
    pub fn half_side(&self) -> f64 {
        self.side * 0.5
    }

    /// Surface area of the cube.
    #[inline]
    pub fn area(&self) -> f64 {
        6.0 * self.side * self.side
    }

    /// Volume of the cube.
    #[inline]
    pub fn volume(&self) -> f64 {
        self.side.powi(3)
    }

    /// Corner with the lowest coordinates on all three axes.
    #[inline]
    pub fn min_corner(&self) -> Point {
        let h = self.half_side();
        Point::new(self.center.x - h, self.center.y - h, self.center.z - h)
    }

    /// Corner with the highest coordinates on all three axes.
    #[inline]
    pub fn max_corner(&self) -> Point {
        let h = self.half_side();
        Point::new(self.center.x + h, self.center.y + h, self.center.z + h)
    }

    /// All eight corners of the cube. X varies slowest, with the positive
    /// offset before the negative one on every axis.
    pub fn corners(&self) -> [Point; 8] {
        let h = self.half_side();
        let mut corners = [Point::default(); 8];
        for (i, corner) in corners.iter_mut().enumerate() {
            let sx = if i & 4 == 0 { h } else { -h };
            let sy = if i & 2 == 0 { h } else { -h };
            let sz = if i & 1 == 0 { h } else { -h };
            *corner = Point::new(self.center.x + sx, self.center.y + sy, self.center.z + sz);
        }
        corners
    }

    /// Whether the point lies within the closed box: boundary points included.
    pub fn is_inside_point(&self, p: &Point) -> bool {
        let h = self.half_side();
        (self.center.x - p.x).abs() <= h
            && (self.center.y - p.y).abs() <= h
            && (self.center.z - p.z).abs() <= h
    }

    /// Whether the sphere's center offset plus its radius fits within the
    /// cube's half-extent, taken as a single scalar bound.
    #[inline]
    pub fn is_inside_sphere(&self, sphere: &Sphere) -> bool {
        sphere.center.distance(&self.center) + sphere.radius <= self.half_side()
    }

    /// Whether the point lies strictly inside the cube. Boundary points are excluded.
    pub fn is_point_inside(&self, p: &Point) -> bool {
        let h = self.half_side();
        self.center.x - h < p.x
            && p.x < self.center.x + h
            && self.center.y - h < p.y
            && p.y < self.center.y + h
            && self.center.z - h < p.z
            && p.z < self.center.z + h
    }

    /// Whether the other cube's extent is strictly nested within this cube's
    /// extent on all three axes.
    pub fn is_cube_inside(&self, other: &Cube) -> bool {
        let h = self.half_side();
        let other_h = other.half_side();
        self.center.x - h < other.center.x - other_h
            && self.center.x + h > other.center.x + other_h
            && self.center.y - h < other.center.y - other_h
            && self.center.y + h > other.center.y + other_h
            && self.center.z - h < other.center.z - other_h
            && self.center.z + h > other.center.z + other_h
    }

    /// Separating-axis test: the cubes intersect unless some axis separates
    /// their extents. Touching faces count as intersecting.
    pub fn does_intersect_cube(&self, other: &Cube) -> bool {
        let extent = self.half_side() + other.half_side();
        (self.center.x - other.center.x).abs() <= extent
            && (self.center.y - other.center.y).abs() <= extent
            && (self.center.z - other.center.z).abs() <= extent
    }

    /// Overlap volume estimate: zero when the cubes are disjoint, otherwise the
    /// cube of the smaller half-side.
    pub fn intersection_volume(&self, other: &Cube) -> f64 {
        if !self.does_intersect_cube(other) {
            return 0.0;
        }
        self.half_side().min(other.half_side()).powi(3)
    }

    /// Largest sphere fitting inside the cube, tangent to all six faces.
    #[inline]
    pub fn inscribe_sphere(&self) -> Sphere {
        Sphere {
            center: self.center,
            radius: self.half_side(),
        }
    }
}

impl fmt::Display for Cube {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Center: ({:.1}, {:.1}, {:.1}), Side: {:.1}",
            self.center.x, self.center.y, self.center.z, self.side
        )
    }
}
