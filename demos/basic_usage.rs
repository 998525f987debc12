use euclid_vec::vector::Vector;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let a = Vector::new_2d(1.0, 1.0);
    let b = Vector::new_3d(1.0, 1.0, 1.0);

    println!("2D Vector: {}", a);
    println!("Magnitude: {:.2}", a.magnitude());
    println!("Direction w.r.t. x-axis: {:.4}", a.dir_x()?);
    println!("Normalized: {}\n", a.normalized()?);

    println!("3D Vector: {}", b);
    println!("Magnitude: {:.2}", b.magnitude());
    println!("Direction cosines (x, y, z axes): {}", b.direction()?);
    println!("Normalized: {}\n", b.normalized()?);

    println!("Addition: {}", a + b);
    println!("Subtraction: {}", a - b);
    println!("Dot product: {}", a.dot(&b));
    println!("Angle between: {:.4} rad", a.angle(&b)?);

    if let Err(e) = a.cross(&b) {
        println!("Cross product: {}", e);
    }
    if let Err(e) = Vector::new_3d(0.0, 0.0, 0.0).normalized() {
        println!("Zero vector: {}", e);
    }

    Ok(())
}
