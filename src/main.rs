use std::io::{self, Read};
use std::process::ExitCode;

use solid_predicates::{Cube, Cylinder, Point, Sphere};

/// Number of values consumed by the fixed battery of shapes:
/// two points, two spheres, two cubes, two cylinders.
const EXPECTED_VALUES: usize = 32;

/// Reads all of stdin and collects every whitespace-separated token that
/// parses as a number, skipping the rest.
fn read_numbers() -> io::Result<Vec<f64>> {
    let mut input = String::new();
    io::stdin().read_to_string(&mut input)?;
    Ok(input
        .split_whitespace()
        .filter_map(|token| token.parse().ok())
        .collect())
}

fn main() -> io::Result<ExitCode> {
    let numbers = read_numbers()?;
    if numbers.len() < EXPECTED_VALUES {
        eprintln!(
            "expected {} numeric values, found {}",
            EXPECTED_VALUES,
            numbers.len()
        );
        return Ok(ExitCode::FAILURE);
    }

    let point_p = Point::new(numbers[0], numbers[1], numbers[2]);
    let point_q = Point::new(numbers[3], numbers[4], numbers[5]);
    let sphere_a = Sphere::new(numbers[6], numbers[7], numbers[8], numbers[9]);
    let sphere_b = Sphere::new(numbers[10], numbers[11], numbers[12], numbers[13]);
    let cube_a = Cube::new(numbers[14], numbers[15], numbers[16], numbers[17]);
    let cube_b = Cube::new(numbers[18], numbers[19], numbers[20], numbers[21]);
    let cyl_a = Cylinder::new(
        numbers[22], numbers[23], numbers[24], numbers[25], numbers[26],
    );
    let _cyl_b = Cylinder::new(
        numbers[27], numbers[28], numbers[29], numbers[30], numbers[31],
    );

    let p_is_farther = point_p.distance(&Point::ORIGIN) > point_q.distance(&Point::ORIGIN);
    println!(
        "Distance of Point p from the origin {} greater than the distance of Point q from the origin",
        verdict(p_is_farther)
    );

    println!(
        "Point p {} inside sphereA",
        verdict(sphere_a.is_inside_point(&point_p))
    );
    println!(
        "sphereB {} inside sphereA",
        verdict(sphere_a.is_inside_sphere(&sphere_b))
    );
    println!(
        "cubeA {} inside sphereA",
        verdict(sphere_a.is_inside_cube(&cube_a))
    );
    println!(
        "sphereA {} intersect sphereB",
        action_verdict(sphere_a.does_intersect_sphere(&sphere_b))
    );
    println!(
        "cubeB {} intersect sphereB",
        action_verdict(sphere_b.does_intersect_cube(&cube_b))
    );
    println!(
        "Volume of the largest Cube that is circumscribed by sphereA {} greater than the volume of cylA",
        verdict(sphere_a.circumscribe_cube().volume() > cyl_a.volume())
    );

    println!(
        "Point p {} inside cubeA",
        verdict(cube_a.is_inside_point(&point_p))
    );
    println!(
        "sphereA {} inside cubeA",
        verdict(cube_a.is_inside_sphere(&sphere_a))
    );
    println!(
        "cubeB {} inside cubeA",
        verdict(cube_a.is_cube_inside(&cube_b))
    );
    println!(
        "cubeA {} intersect cubeB",
        action_verdict(cube_a.does_intersect_cube(&cube_b))
    );
    println!(
        "Intersection volume of cubeA and cubeB {} greater than the volume of sphereA",
        verdict(cube_a.intersection_volume(&cube_b) > sphere_a.volume())
    );
    println!(
        "Surface area of the largest Sphere object inscribed by cubeA {} greater than the surface area of cylA",
        verdict(cube_a.inscribe_sphere().area() > cyl_a.area())
    );

    println!(
        "Point p {} inside cylA",
        verdict(cyl_a.is_inside_point(&point_p))
    );
    println!(
        "sphereA {} inside cylA",
        verdict(cyl_a.is_inside_sphere(&sphere_a))
    );
    println!(
        "cubeA {} inside cylA",
        verdict(cyl_a.is_cube_inside(&cube_a))
    );

    Ok(ExitCode::SUCCESS)
}

fn verdict(result: bool) -> &'static str {
    if result {
        "is"
    } else {
        "is not"
    }
}

fn action_verdict(result: bool) -> &'static str {
    if result {
        "does"
    } else {
        "does not"
    }
}
