pub mod geometry;

pub use geometry::{Cube, Cylinder, Point, Sphere};
