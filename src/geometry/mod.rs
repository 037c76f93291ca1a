pub mod point;

// Solid primitives
pub mod cube;
pub mod cylinder;
pub mod sphere;

pub use self::cube::Cube;
pub use self::cylinder::Cylinder;
pub use self::point::Point;
pub use self::sphere::Sphere;
