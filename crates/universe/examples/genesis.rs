//! A complete universe run: clouds collapse, stars classify, gravity takes
//! over, and the event log narrates the outcome.
//!
//! Run with: RUST_LOG=info cargo run --example genesis

use universe::{BodyId, TimeScale, Universe};

fn main() {
    env_logger::init();

    let mut universe = Universe::new(2026);
    universe.reset(8, 2);

    println!("🌌 Seeding the universe: 8 clouds, 2 rogue planets\n");

    // Ignite every cloud at once
    let ids: Vec<u32> = universe.snapshot().clouds.iter().map(|c| c.id).collect();
    for id in &ids {
        universe.trigger_collapse(BodyId(*id));
    }

    // A trivial in-process narrative worker: drain requests, answer over
    // the completion channel
    let sender = universe.narrative().completion_sender();

    universe.set_time_scale(TimeScale::Fast);
    for _ in 0..2000 {
        universe.advance(0.016);

        for request in universe.narrative().take_requests() {
            let text = format!(
                "A {} of mass {:.0}, kindled from cold gas.",
                request.archetype, request.mass
            );
            let _ = sender.send((request.id, Ok(text)));
        }
    }

    let snapshot = universe.snapshot();
    println!("After {:.1} simulated seconds:", snapshot.time);
    println!("  {} stars, {} clouds remaining\n", snapshot.bodies.len(), snapshot.clouds.len());

    for body in &snapshot.bodies {
        println!(
            "  ⭐ #{:<3} {:<12?} {}  mass {:>6.1}  age {:>7.1}  planets: {}",
            body.id,
            body.archetype,
            body.color.to_hex(),
            body.mass,
            body.age,
            body.planets.len()
        );
        if let Some(description) = &body.description {
            println!("       \"{description}\"");
        }
    }

    println!("\nMost recent events:");
    for entry in universe.event_log().entries().take(10) {
        println!("  [t={:>7.1}] {:?}", entry.timestamp, entry.event);
    }
}
