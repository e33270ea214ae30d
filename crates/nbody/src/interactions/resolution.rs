//! Merge, feed, and capture resolution.
//!
//! Mergers conserve mass, momentum, and volume (equal-density spheres).
//! Feeding drains prey mass continuously and spirals the prey inward.
//! Capture applies asymmetric damping that settles close pairs into stable
//! near-circular orbits.

use crate::body::Body;
use crate::forces::MIN_DISTANCE;

/// Mass stripped from prey per unit of scaled time while feeding.
pub const FEED_RATE: f64 = 0.1;

/// A body at or below this mass is no longer drained by a transfer, in
/// either direction, preventing negative mass. Feeding alone never removes
/// a body; only crossing the merge threshold does.
pub const MIN_PREY_MASS: f64 = 0.1;

/// Fraction of relative velocity removed per unit time as the prey spirals
/// toward its predator.
const SPIRAL_DRAG_RATE: f64 = 0.05;

/// Damping coefficient for pairs whose radial velocity is separating.
const DAMP_SEPARATING: f64 = 0.1;

/// Damping coefficient for pairs that are already approaching.
const DAMP_APPROACHING: f64 = 0.005;

/// Margin kept on the prey when clamping a transfer, so mass never reaches
/// exactly zero.
const MASS_MARGIN: f64 = 1e-6;

/// Combine the loser into the winner, conserving mass and momentum.
///
/// - velocity: mass-weighted average of both velocities
/// - mass: sum
/// - radius: `(r_w³ + r_l³)^(1/3)` (equal-density sphere assumption)
///
/// The winner keeps its id, archetype, and position; the caller removes the
/// loser from the arena and repoints any `consumed_by` references.
///
/// # Examples
/// ```
/// use nalgebra::{Point3, Vector3};
/// use nbody::body::{Body, BodyId};
/// use nbody::interactions::merge_into;
/// use stellar::Archetype;
///
/// let mut winner = Body::new(BodyId(0), Archetype::YellowDwarf, 20.0, 1.5,
///     Point3::origin(), Vector3::new(1.0, 0.0, 0.0));
/// let loser = Body::new(BodyId(1), Archetype::RedDwarf, 10.0, 1.0,
///     Point3::new(0.3, 0.0, 0.0), Vector3::new(-2.0, 0.0, 0.0));
///
/// let momentum_before = winner.momentum() + loser.momentum();
/// merge_into(&mut winner, &loser);
///
/// assert_eq!(winner.mass, 30.0);
/// assert!((winner.momentum() - momentum_before).magnitude() < 1e-12);
/// ```
pub fn merge_into(winner: &mut Body, loser: &Body) {
    let total_mass = winner.mass + loser.mass;
    debug_assert!(total_mass > 0.0, "merging two massless bodies");

    if total_mass > 0.0 {
        winner.velocity = (winner.momentum() + loser.momentum()) / total_mass;
    }
    winner.mass = total_mass;
    winner.radius = (winner.radius.powi(3) + loser.radius.powi(3)).cbrt();

    // The winner is no longer anyone's prey
    winner.consumed_by = None;
    winner.shredding = false;
}

/// Apply one tick of feeding from `prey` to `predator`.
///
/// Marks the prey as shredding, applies spiral drag toward the predator,
/// and returns the mass stripped this tick (zero once the drained side is
/// at or below [`MIN_PREY_MASS`]). A negative `dt` runs the transfer
/// backwards: the prey regains mass and the predator is drained instead,
/// with the same floor, so neither direction can push a mass below zero.
/// The predator side of the transfer is credited by the caller after the
/// pairwise pass, from the emitted event.
pub fn feed(predator: &Body, prey: &mut Body, dt: f64) -> f64 {
    prey.consumed_by = Some(predator.id);
    prey.shredding = true;

    // Spiral drag: decelerate the prey relative to its predator
    let relative = prey.velocity - predator.velocity;
    prey.velocity -= relative * (SPIRAL_DRAG_RATE * dt);

    let requested = FEED_RATE * dt;
    let amount = if requested >= 0.0 {
        if prey.mass <= MIN_PREY_MASS {
            return 0.0;
        }
        requested.min(prey.mass - MASS_MARGIN)
    } else {
        // Rewinding drains the predator; mirror the forward clamp
        if predator.mass <= MIN_PREY_MASS {
            return 0.0;
        }
        requested.max(-(predator.mass - MASS_MARGIN))
    };
    prey.mass -= amount;

    debug_assert!(prey.mass >= 0.0, "feeding drove prey mass negative");
    amount
}

/// Apply orbital stabilization damping to a captured pair.
///
/// The relative velocity is decomposed along the line connecting the
/// bodies. Separating pairs are damped hard (`0.1 * dt`), approaching
/// pairs barely (`0.005 * dt`). The asymmetry aggressively captures
/// escaping pairs into orbit while leaving converging pairs almost
/// untouched, which settles into near-circular orbits instead of
/// oscillating ones. The impulse is split in proportion to the *other*
/// body's mass, so the heavier body is displaced less.
pub fn capture_damp(a: &mut Body, b: &mut Body, dt: f64) {
    let separation = b.position - a.position;
    let dist = separation.magnitude();
    if dist < MIN_DISTANCE {
        return;
    }

    let direction = separation / dist;
    let relative = b.velocity - a.velocity;
    let radial_speed = relative.dot(&direction);

    let coefficient = if radial_speed > 0.0 {
        DAMP_SEPARATING
    } else {
        DAMP_APPROACHING
    };

    let impulse = relative * (coefficient * dt);
    let total_mass = a.mass + b.mass;
    if total_mass <= 0.0 {
        return;
    }

    a.velocity += impulse * (b.mass / total_mass);
    b.velocity -= impulse * (a.mass / total_mass);
}
