//! One physics tick: gravity, interaction resolution, position integration.
//!
//! Semi-implicit Euler with a strict two-phase structure: every velocity
//! update (gravity plus interaction impulses) completes for all pairs
//! before any position is advanced. Interaction zones are evaluated per
//! pair immediately after that pair's gravity, in priority order
//! merge > feed > capture.

use crate::body::{Body, BodyId};
use crate::events::SimEvent;
use crate::forces::{softened_attraction, MIN_DISTANCE};
use crate::interactions::{capture_damp, feed, merge_into, predator_prey, Zone, ZoneRadii};
use crate::state::BodyArena;

/// Age accrues at this multiple of the scaled tick delta.
const AGE_RATE: f64 = 10.0;

/// Advance the arena by one tick of scaled time `dt`.
///
/// `dt` is the frame delta multiplied by the time scale; it may be negative
/// (rewind). A zero `dt` skips all physics entirely: no forces, no aging,
/// no interactions. Age only accrues forward: rewinding moves bodies
/// backward but never reduces age.
///
/// At most one merge is resolved per tick: the pairwise pass returns
/// immediately after the first merge found, a deliberate simplicity
/// trade-off for a universe of tens of bodies. Pairs not yet evaluated
/// when that happens skip their interaction for the tick, so a prey in one
/// of them carries cleared `shredding`/`consumed_by` flags for that frame;
/// consistent with the physics, since no mass moved either.
///
/// # Returns
/// The discrete events produced this tick, in the order they occurred.
///
/// # Examples
/// ```
/// use nalgebra::{Point3, Vector3};
/// use nbody::body::{Body, BodyId};
/// use nbody::state::BodyArena;
/// use stellar::Archetype;
///
/// let mut arena = BodyArena::new();
/// arena.insert(Body::new(BodyId(0), Archetype::YellowDwarf, 40.0, 1.4,
///     Point3::origin(), Vector3::zeros()));
/// arena.insert(Body::new(BodyId(1), Archetype::RedDwarf, 20.0, 1.0,
///     Point3::new(40.0, 0.0, 0.0), Vector3::zeros()));
///
/// let events = nbody::step(&mut arena, 0.016);
/// assert!(events.is_empty()); // far apart: gravity only
/// ```
pub fn step(arena: &mut BodyArena, dt: f64) -> Vec<SimEvent> {
    if dt == 0.0 || arena.is_empty() {
        return Vec::new();
    }

    let mut events = Vec::new();

    if dt > 0.0 {
        for body in arena.bodies_mut() {
            body.age += AGE_RATE * dt;
        }
    }

    // Feeding flags are re-derived every pass; prey that drifted out of
    // its predator's feed zone stops shredding.
    for body in arena.bodies_mut() {
        body.consumed_by = None;
        body.shredding = false;
    }

    let merge = velocity_pass(arena.bodies_mut(), dt, &mut events);

    // Mass stripped during feeding is credited to predators here, outside
    // the pairwise pass, so transfers never affect later pairs in the same
    // pass. Floored at zero: several prey rewinding against one predator
    // each clamp against the same starting mass.
    for event in &events {
        if let SimEvent::MassTransfer { target, amount, .. } = *event {
            if let Some(predator) = arena.get_mut(target) {
                predator.mass = (predator.mass + amount).max(0.0);
            }
        }
    }

    if let Some((winner_id, loser_id)) = merge {
        resolve_merge(arena, winner_id, loser_id);
        events.push(SimEvent::Merger {
            winner: winner_id,
            loser: loser_id,
        });
    }

    // Position pass: strictly after every velocity update
    for body in arena.bodies_mut() {
        body.position += body.velocity * dt;
    }

    events
}

/// Gravity plus interaction impulses for every unordered pair.
///
/// Returns the first merge found as `(winner, loser)` ids, if any; the
/// pass stops evaluating pairs at that point.
fn velocity_pass(
    bodies: &mut [Body],
    dt: f64,
    events: &mut Vec<SimEvent>,
) -> Option<(BodyId, BodyId)> {
    let n = bodies.len();

    for i in 0..n {
        for j in (i + 1)..n {
            let (a, b) = pair_mut(bodies, i, j);

            let separation = b.position - a.position;
            let dist_squared = separation.magnitude_squared();
            let dist = dist_squared.sqrt();

            if dist >= MIN_DISTANCE {
                // Symmetric softened gravity, velocities first
                let force = softened_attraction(a.mass, b.mass, dist_squared);
                let direction = separation / dist;
                if a.mass > 0.0 {
                    a.velocity += direction * (force / a.mass * dt);
                }
                if b.mass > 0.0 {
                    b.velocity -= direction * (force / b.mass * dt);
                }
            }

            // Coincident pairs have no meaningful direction; merge on the
            // spot instead of normalizing a zero vector
            let zone = if dist < MIN_DISTANCE {
                Zone::Merge
            } else {
                ZoneRadii::for_pair(a, b).classify(dist)
            };

            match zone {
                Zone::Merge => {
                    let (winner, loser) = predator_prey(i, j, a, b);
                    let winner_id = bodies[winner].id;
                    let loser_id = bodies[loser].id;
                    return Some((winner_id, loser_id));
                }
                Zone::Feed => {
                    let (winner, _) = predator_prey(i, j, a, b);
                    let (predator, prey) = if winner == i { (a, b) } else { (b, a) };

                    let amount = feed(predator, prey, dt);
                    if amount != 0.0 {
                        events.push(SimEvent::MassTransfer {
                            source: prey.id,
                            target: predator.id,
                            amount,
                        });
                    }
                }
                Zone::Capture => capture_damp(a, b, dt),
                Zone::None => {}
            }
        }
    }

    None
}

/// Apply a merge: combine into the winner, drop the loser, and repoint any
/// third body that was being consumed by the loser.
fn resolve_merge(arena: &mut BodyArena, winner_id: BodyId, loser_id: BodyId) {
    let Some(loser) = arena.remove(loser_id) else {
        return;
    };

    if let Some(winner) = arena.get_mut(winner_id) {
        merge_into(winner, &loser);
    }

    // Registry invariant: no dangling consumed_by references
    for body in arena.bodies_mut() {
        if body.consumed_by == Some(loser_id) {
            body.consumed_by = Some(winner_id);
        }
    }
}

/// Disjoint mutable borrows of two bodies, `i < j`.
fn pair_mut(bodies: &mut [Body], i: usize, j: usize) -> (&mut Body, &mut Body) {
    debug_assert!(i < j);
    let (left, right) = bodies.split_at_mut(j);
    (&mut left[i], &mut right[0])
}
