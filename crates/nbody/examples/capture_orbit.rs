//! Two-body capture demonstration.
//!
//! A heavy star and a light companion start on an escaping trajectory
//! inside the capture radius. Asymmetric damping bleeds off the radial
//! velocity until the pair settles into a bound orbit.
//!
//! Run with: cargo run --example capture_orbit

use nalgebra::{Point3, Vector3};
use nbody::{step, Body, BodyArena, BodyId};
use stellar::Archetype;

fn main() {
    let mut arena = BodyArena::new();

    arena.insert(Body::new(
        BodyId(0),
        Archetype::BlueGiant,
        70.0,
        2.2,
        Point3::origin(),
        Vector3::zeros(),
    ));
    arena.insert(Body::new(
        BodyId(1),
        Archetype::RedDwarf,
        18.0,
        1.0,
        Point3::new(12.0, 0.0, 0.0),
        Vector3::new(1.2, 1.6, 0.0),
    ));

    println!("tick    separation    radial speed");
    println!("-------------------------------------");

    let dt = 0.05;
    for tick in 0..400 {
        step(&mut arena, dt);

        if tick % 40 == 0 {
            let a = arena.get(BodyId(0)).unwrap();
            let b = arena.get(BodyId(1)).unwrap();
            let separation = b.position - a.position;
            let dist = separation.magnitude();
            let radial = (b.velocity - a.velocity).dot(&(separation / dist));

            println!("{tick:>4}    {dist:>10.3}    {radial:>+12.4}");
        }
    }

    let a = arena.get(BodyId(0)).unwrap();
    let b = arena.get(BodyId(1)).unwrap();
    println!("-------------------------------------");
    println!(
        "final separation: {:.3} (bound orbit: radial speed stays near zero)",
        a.distance_to(b)
    );
}
