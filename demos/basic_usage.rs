// demos/basic_usage.rs
use ndvec::prelude::*;
use ndvec::vector;

fn main() -> Result<()> {
    // creating vectors
    let a = vector![2.0, 0.5];
    let b = Vector::from_polar(10.0, std::f64::consts::PI)?;
    let c = Vector::from_points(&[0.0, 0.0, 0.0], &[-2.0, 2.0, 1.0])?;

    // basic arithmetic
    println!("a+b: {}", a.checked_add(&b)?);
    println!("a-b: {}", a.checked_sub(&b)?);
    println!("5*b: {}", b.scale(5.0));

    // direction and magnitude: normalise then rescale, or in one step
    let d = a.unit()?.scale(10.0);
    println!("10*(a/|a|): {}", Rounded::new(&d, 6));
    let d = a.with_magnitude(10.0)?;
    println!("same thing:  {}", Rounded::new(&d, 6));

    // products
    println!("c x (-1,2,1): {}", c.cross(&vector![-1.0, 2.0, 1.0])?);
    println!("a.b: {}", a.dot(&b)?);
    let volume =
        c.triple_scalar_product(&vector![1.0, 2.0, 0.0], &vector![-2.0, 0.0, 1.0])?;
    println!("c.((1,2,0) x (-2,0,1)): {}", volume);

    // projections and angles
    println!("scalar projection of b onto a: {}", a.scalar_projection(&b)?);
    println!("vector projection of b onto a: {}", Rounded::new(&a.projection(&b)?, 6));
    println!("angle between a and b: {}", b.angle_to(&a)?);
    println!("angle between a and the x-axis: {}", a.angle_to(&d2::I)?);

    // properties
    println!("|a| = {}", a.magnitude());
    println!("a has {} components", a.len());
    println!("a/|a| is a unit vector: {}", a.unit()?.is_unit());
    println!("a/|a| equals a within tolerance: {}", a.unit()?.approx_eq(&a));

    Ok(())
}
