//! Read two 3D vectors from stdin and print how they relate.
//!
//! ```sh
//! printf '1 0 0\n0 1 0\n' | cargo run -p geovec --example read_vector
//! ```

use geovec::{vec3, ParseVectorError, Vec3};

fn main() -> Result<(), ParseVectorError> {
    let mut a = Vec3::<f64>::zero();
    let mut b = Vec3::<f64>::zero();
    a.read_stdin()?;
    b.read_stdin()?;
    println!();

    println!("a = {a}, |a| = {}", a.length());
    println!("b = {b}, |b| = {}", b.length());
    println!("a . b = {}", vec3::dot(a, b));
    println!("a x b = {}", vec3::cross(a, b));
    println!("distance = {}", vec3::distance(a, b));
    println!(
        "perpendicular: {}, collinear: {}, anticollinear: {}",
        a.is_perpendicular(b),
        a.is_collinear(b),
        a.is_anticollinear(b)
    );
    if a.is_zero() {
        println!("a is the zero vector; normalize would give NaN");
    } else {
        println!("a normalized = {}", a.normalize());
    }
    Ok(())
}
