use std::f64::consts::PI;
use std::fmt;

use super::cube::Cube;
use super::point::Point;
use super::sphere::Sphere;

/// Right circular cylinder with its axis parallel to the Z axis, defined by
/// the geometric center of the solid, its radius, and its full height.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct Cylinder {
    /// Geometric center of the solid.
    pub center: Point,
    /// Radius of the cylinder.
    pub radius: f64,
    /// Full height of the cylinder along the Z axis.
    pub height: f64,
}

impl Cylinder {
    /// Creates a cylinder from its center coordinates, radius, and height.
    #[inline(always)]
    pub fn new(x: f64, y: f64, z: f64, radius: f64, height: f64) -> Self {
        Self {
            center: Point::new(x, y, z),
            radius,
            height,
        }
    }

    /// Half of the cylinder's height, its extent from the center along the Z axis.
    #[inline]
    pub fn half_height(&self) -> f64 {
        self.height * 0.5
    }

    /// Surface area of the cylinder, caps included.
    #[inline]
    pub fn area(&self) -> f64 {
        2.0 * PI * self.radius * (self.radius + self.height)
    }

    /// Volume of the cylinder.
    #[inline]
    pub fn volume(&self) -> f64 {
        PI * self.radius * self.radius * self.height
    }

    /// Whether the point lies within the cylinder: inside or on the lateral
    /// surface, strictly between the cap planes.
    pub fn is_inside_point(&self, p: &Point) -> bool {
        let h = self.half_height();
        self.center.horizontal_distance_squared(p) <= self.radius * self.radius
            && self.center.z - h < p.z
            && p.z < self.center.z + h
    }

    /// Whether the sphere's offset from the axis plus its radius fits within
    /// the cylinder radius, with the sphere center's Z within
    /// `[center.z, center.z + height]`. The Z range is not symmetric about the
    /// cylinder's center.
    pub fn is_inside_sphere(&self, sphere: &Sphere) -> bool {
        self.center.horizontal_distance(&sphere.center) + sphere.radius <= self.radius
            && sphere.center.z >= self.center.z
            && sphere.center.z <= self.center.z + self.height
    }

    /// Whether all eight corners of the cube lie within the cylinder's radius
    /// and its closed Z range.
    pub fn is_cube_inside(&self, cube: &Cube) -> bool {
        let h = self.half_height();
        let radius_squared = self.radius * self.radius;
        cube.corners().iter().all(|corner| {
            self.center.horizontal_distance_squared(corner) <= radius_squared
                && self.center.z - h <= corner.z
                && corner.z <= self.center.z + h
        })
    }

    /// Whether the other cylinder is strictly nested inside this one, testing
    /// the horizontal offset plus radius against each axis independently and
    /// requiring strict Z-range nesting.
    pub fn is_inside_cylinder(&self, other: &Cylinder) -> bool {
        let h = self.half_height();
        let other_h = other.half_height();
        (self.center.x - other.center.x).abs() + other.radius < self.radius
            && (self.center.y - other.center.y).abs() + other.radius < self.radius
            && self.center.z - h < other.center.z - other_h
            && self.center.z + h > other.center.z + other_h
    }
}

impl fmt::Display for Cylinder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Center: ({:.1}, {:.1}, {:.1}), Radius: {:.1}, Height: {:.1}",
            self.center.x, self.center.y, self.center.z, self.radius, self.height
        )
    }
}
