//! Print sampled linear, quadratic and cubic curves using nalgebra vectors.
//!
//! ```bash
//! cargo run -p curvekit-bezier --example nalgebra_curves
//! ```

use curvekit_bezier::{cubic_bezier, linear_bezier, quadratic_bezier, sample_params};
use nalgebra::Vector2;

const SEGMENT_COUNT: usize = 10;

fn main() {
    println!("Linear Curve :");
    let (p1, p2) = (Vector2::new(1.0f32, 0.0), Vector2::new(0.0, 1.0));
    for (i, t) in sample_params::<f32>(SEGMENT_COUNT).enumerate() {
        let p = linear_bezier(p1, p2, t);
        println!("{i} : {:?}", (p.x, p.y));
    }
    println!();

    println!("Quadratic Curve :");
    let (p1, p2, p3) = (
        Vector2::new(0.0f32, 0.0),
        Vector2::new(0.4, 1.0),
        Vector2::new(1.0, 0.0),
    );
    for (i, t) in sample_params::<f32>(SEGMENT_COUNT).enumerate() {
        let p = quadratic_bezier(p1, p2, p3, t);
        println!("{i} : {:?}", (p.x, p.y));
    }
    println!();

    println!("Cubic Curve :");
    let (p1, p2, p3, p4) = (
        Vector2::new(0.0f32, 0.0),
        Vector2::new(-0.1, 1.0),
        Vector2::new(0.8, 1.0),
        Vector2::new(1.0, 0.0),
    );
    for (i, t) in sample_params::<f32>(SEGMENT_COUNT).enumerate() {
        let p = cubic_bezier(p1, p2, p3, p4, t);
        println!("{i} : {:?}", (p.x, p.y));
    }
}
