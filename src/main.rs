use clap::Parser;
use raycross::{Hit, Ray, Triangle, Vector3d};
use std::{error::Error, io::Write};

/// Intersect one ray with one triangle and print the hit point.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    #[arg(long, default_value = "0,0,0", allow_hyphen_values = true)]
    v1: Vector3d,
    #[arg(long, default_value = "50,0,0", allow_hyphen_values = true)]
    v2: Vector3d,
    #[arg(long, default_value = "0,50,0", allow_hyphen_values = true)]
    v3: Vector3d,
    /// Ray origin.
    #[arg(long, default_value = "5,10,-10", allow_hyphen_values = true)]
    origin: Vector3d,
    /// A point the ray passes through.
    #[arg(long, default_value = "10,10,10", allow_hyphen_values = true)]
    target: Vector3d,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    let triangle = Triangle::new(args.v1, args.v2, args.v3);
    let ray = Ray::through(args.origin, args.target);

    match triangle.hit(ray) {
        Some(record) => writeln!(std::io::stdout(), "{}", record.point)?,
        None => eprintln!("no intersection"),
    }
    Ok(())
}
