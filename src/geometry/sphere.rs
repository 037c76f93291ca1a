use std::f64::consts::PI;
use std::fmt;

use super::cube::Cube;
use super::point::Point;

/// Solid sphere defined by its center and radius.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct Sphere {
    /// Center of the sphere.
    pub center: Point,
    /// Radius of the sphere.
    pub radius: f64,
}

impl Sphere {
    /// Creates a sphere from its center coordinates and radius.
    #[inline(always)]
    pub fn new(x: f64, y: f64, z: f64, radius: f64) -> Self {
        Self {
            center: Point::new(x, y, z),
            radius,
        }
    }

    /// Surface area of the sphere.
    #[inline]
    pub fn area(&self) -> f64 {
        4.0 * PI * self.radius * self.radius
    }

    /// Volume of the sphere.
    #[inline]
    pub fn volume(&self) -> f64 {
        (4.0 / 3.0) * PI * self.radius.powi(3)
    }

    /// Whether the point lies strictly inside the sphere. Boundary points are excluded.
    #[inline]
    pub fn is_inside_point(&self, p: &Point) -> bool {
        self.center.distance(p) < self.radius
    }

    /// Whether the other sphere is strictly nested inside this sphere.
    #[inline]
    pub fn is_inside_sphere(&self, other: &Sphere) -> bool {
        self.center.distance(&other.center) + other.radius < self.radius
    }

    /// Whether every corner of the cube lies strictly inside the sphere.
    pub fn is_inside_cube(&self, cube: &Cube) -> bool {
        cube.corners().iter().all(|corner| self.is_inside_point(corner))
    }

    /// Whether the two spheres touch or overlap. A sphere strictly nested
    /// inside the other is reported as non-intersecting.
    pub fn does_intersect_sphere(&self, other: &Sphere) -> bool {
        let distance = self.center.distance(&other.center);
        if distance + self.radius.min(other.radius) < self.radius.max(other.radius) {
            return false;
        }
        distance <= self.radius + other.radius
    }

    /// Separating-axis test between the sphere's bounding extents and the cube.
    pub fn does_intersect_cube(&self, cube: &Cube) -> bool {
        let extent = self.radius + cube.half_side();
        (self.center.x - cube.center.x).abs() <= extent
            && (self.center.y - cube.center.y).abs() <= extent
            && (self.center.z - cube.center.z).abs() <= extent
    }

    /// Largest cube inscribed in the sphere: same center, all eight corners on
    /// the sphere's surface.
    #[inline]
    pub fn circumscribe_cube(&self) -> Cube {
        Cube {
            center: self.center,
            side: 2.0 * self.radius / 3.0f64.sqrt(),
        }
    }
}

impl fmt::Display for Sphere {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Center: ({:.1}, {:.1}, {:.1}), Radius: {:.1}",
            self.center.x, self.center.y, self.center.z, self.radius
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_containment_is_strict() {
        let sphere = Sphere::new(0.0, 0.0, 0.0, 5.0);
        assert!(sphere.is_inside_point(&Point::new(0.0, 0.0, 4.9)));
        assert!(!sphere.is_inside_point(&Point::new(0.0, 0.0, 5.0)));
        assert!(!sphere.is_inside_point(&Point::new(0.0, 0.0, 5.1)));
    }

    #[test]
    fn test_nested_sphere_containment() {
        let outer = Sphere::new(0.0, 0.0, 0.0, 5.0);
        assert!(outer.is_inside_sphere(&Sphere::new(1.0, 0.0, 0.0, 2.0)));
        // Inner sphere tangent to the boundary is not strictly nested.
        assert!(!outer.is_inside_sphere(&Sphere::new(3.0, 0.0, 0.0, 2.0)));
    }

    #[test]
    fn test_cube_inside_sphere_by_corners() {
        let sphere = Sphere::new(0.0, 0.0, 0.0, 5.0);
        // side 4: half-diagonal is 2*sqrt(3) which is about 3.46, within radius 5.
        assert!(sphere.is_inside_cube(&Cube::new(0.0, 0.0, 0.0, 4.0)));
        // side 6: half-diagonal is 3*sqrt(3) which is about 5.2, outside radius 5.
        assert!(!sphere.is_inside_cube(&Cube::new(0.0, 0.0, 0.0, 6.0)));
    }

    #[test]
    fn test_identical_spheres_intersect() {
        let a = Sphere::new(1.0, 2.0, 3.0, 4.0);
        let b = Sphere::new(1.0, 2.0, 3.0, 4.0);
        assert!(a.does_intersect_sphere(&b));
    }

    #[test]
    fn test_nested_spheres_report_no_intersection() {
        let outer = Sphere::new(0.0, 0.0, 0.0, 5.0);
        let inner = Sphere::new(0.0, 0.0, 0.0, 1.0);
        assert!(!outer.does_intersect_sphere(&inner));
        assert!(!inner.does_intersect_sphere(&outer));
    }

    #[test]
    fn test_sphere_intersection_boundaries() {
        let a = Sphere::new(0.0, 0.0, 0.0, 2.0);
        // Externally tangent: distance equals the sum of radii.
        assert!(a.does_intersect_sphere(&Sphere::new(5.0, 0.0, 0.0, 3.0)));
        // Fully separate.
        assert!(!a.does_intersect_sphere(&Sphere::new(6.0, 0.0, 0.0, 3.0)));
    }

    #[test]
    fn test_sphere_cube_intersection_includes_touching() {
        let sphere = Sphere::new(0.0, 0.0, 0.0, 2.0);
        assert!(sphere.does_intersect_cube(&Cube::new(3.0, 0.0, 0.0, 2.0)));
        assert!(!sphere.does_intersect_cube(&Cube::new(3.1, 0.0, 0.0, 2.0)));
    }

    #[test]
    fn test_circumscribed_cube_side() {
        let sphere = Sphere::new(0.0, 0.0, 0.0, 3.0);
        let cube = sphere.circumscribe_cube();
        assert_eq!(cube.center, sphere.center);
        assert!((cube.side - 6.0 / 3.0f64.sqrt()).abs() < 1e-12);
        // The cube's corners land on the sphere's surface.
        for corner in cube.corners() {
            assert!((sphere.center.distance(&corner) - sphere.radius).abs() < 1e-12);
        }
    }

    #[test]
    fn test_circumscribe_then_inscribe_scales_by_sqrt3() {
        let sphere = Sphere::new(1.0, -2.0, 3.0, 6.0);
        let inscribed = sphere.circumscribe_cube().inscribe_sphere();
        assert!((inscribed.radius - sphere.radius / 3.0f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_measures() {
        let sphere = Sphere::new(0.0, 0.0, 0.0, 2.0);
        assert!((sphere.area() - 16.0 * PI).abs() < 1e-12);
        assert!((sphere.volume() - 32.0 * PI / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_display_uses_one_decimal_place() {
        let sphere = Sphere::new(1.0, -2.0, 3.5, 4.0);
        assert_eq!(
            sphere.to_string(),
            "Center: (1.0, -2.0, 3.5), Radius: 4.0"
        );
    }
}
