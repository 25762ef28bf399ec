//! Print sampled linear, quadratic and cubic curves using glam vectors.
//!
//! ```bash
//! cargo run -p curvekit-bezier --example glam_curves
//! ```

use curvekit_bezier::{sample_cubic, sample_linear, sample_quadratic, PathOptions, SmoothPath};
use glam::{dvec2, DVec2};

const SEGMENT_COUNT: usize = 10;

fn print_points(title: &str, points: &[DVec2]) {
    println!("{title} :");
    for (i, p) in points.iter().enumerate() {
        println!("{i} : {}, {}", p.x, p.y);
    }
    println!();
}

fn main() {
    let linear = sample_linear(dvec2(1.0, 0.0), dvec2(0.0, 1.0), SEGMENT_COUNT);
    print_points("Linear Curve", &linear);

    let quadratic = sample_quadratic(
        dvec2(0.0, 0.0),
        dvec2(0.4, 1.0),
        dvec2(1.0, 0.0),
        SEGMENT_COUNT,
    );
    print_points("Quadratic Curve", &quadratic);

    let cubic = sample_cubic(
        dvec2(0.0, 0.0),
        dvec2(-0.1, 1.0),
        dvec2(0.8, 1.0),
        dvec2(1.0, 0.0),
        SEGMENT_COUNT,
    );
    print_points("Cubic Curve", &cubic);

    let knots = [dvec2(0.0, 0.0), dvec2(1.0, 1.0), dvec2(2.0, 0.0), dvec2(3.0, 1.0)];
    match SmoothPath::new(&knots, &PathOptions::default()) {
        Ok(path) => print_points("Smooth Path", &path.sample::<f64>(SEGMENT_COUNT)),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
