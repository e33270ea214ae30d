use nalgebra::{Point3, Vector3};
use stellar::Archetype;

use crate::body::{Body, BodyId};
use crate::state::BodyArena;

fn make_body(id: u32, mass: f64) -> Body {
    Body::new(
        BodyId(id),
        Archetype::RedDwarf,
        mass,
        1.0,
        Point3::new(id as f64, 0.0, 0.0),
        Vector3::zeros(),
    )
}

#[test]
fn test_insert_and_get() {
    let mut arena = BodyArena::new();
    arena.insert(make_body(3, 20.0));

    assert_eq!(arena.len(), 1);
    assert!(arena.contains(BodyId(3)));
    assert_eq!(arena.get(BodyId(3)).unwrap().mass, 20.0);
    assert!(arena.get(BodyId(4)).is_none());
}

#[test]
fn test_remove_returns_body() {
    let mut arena = BodyArena::new();
    arena.insert(make_body(0, 10.0));
    arena.insert(make_body(1, 20.0));

    let removed = arena.remove(BodyId(0)).unwrap();
    assert_eq!(removed.id, BodyId(0));
    assert_eq!(arena.len(), 1);
    assert!(!arena.contains(BodyId(0)));
    assert!(arena.remove(BodyId(0)).is_none());
}

#[test]
fn test_swap_remove_keeps_index_consistent() {
    let mut arena = BodyArena::new();
    for id in 0..5 {
        arena.insert(make_body(id, 10.0 + id as f64));
    }

    // Removing from the middle displaces the tail body
    arena.remove(BodyId(1));

    for id in [0u32, 2, 3, 4] {
        let body = arena.get(BodyId(id)).unwrap();
        assert_eq!(body.id, BodyId(id));
        assert_eq!(body.mass, 10.0 + id as f64);
    }

    // Mutation through the map still lands on the right body
    arena.get_mut(BodyId(4)).unwrap().mass = 99.0;
    assert_eq!(arena.get(BodyId(4)).unwrap().mass, 99.0);
}

#[test]
fn test_totals() {
    let mut arena = BodyArena::new();
    let mut a = make_body(0, 10.0);
    a.velocity = Vector3::new(1.0, 0.0, 0.0);
    let mut b = make_body(1, 20.0);
    b.velocity = Vector3::new(0.0, 2.0, 0.0);

    arena.insert(a);
    arena.insert(b);

    assert_eq!(arena.total_mass(), 30.0);
    assert_eq!(arena.total_momentum(), Vector3::new(10.0, 40.0, 0.0));
}

#[test]
fn test_position_of() {
    let mut arena = BodyArena::new();
    arena.insert(make_body(7, 10.0));

    assert_eq!(
        arena.position_of(BodyId(7)),
        Some(Point3::new(7.0, 0.0, 0.0))
    );
    assert!(arena.position_of(BodyId(8)).is_none());
}
