use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};
use stellar::Archetype;

/// Stable identity of a body, unique across clouds and stars for the
/// lifetime of a universe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BodyId(pub u32);

/// A celestial body in the physics arena.
///
/// Carries everything the force engine and interaction resolver touch.
/// Visual-only attributes (colors, luminosity, planets) live with the
/// registry that owns the arena, keyed by the same id.
///
/// Invariants: `mass >= 0`, `radius > 0`, at most one `consumed_by` target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub id: BodyId,
    /// Immutable after creation; mergers and feeding never re-classify.
    pub archetype: Archetype,
    pub mass: f64,
    pub radius: f64,
    pub position: Point3<f64>,
    pub velocity: Vector3<f64>,
    /// Accumulated age, advancing at 10x the scaled tick delta.
    pub age: f64,
    /// Predator currently draining this body, if any.
    pub consumed_by: Option<BodyId>,
    /// Set while mass is being stripped in a feeding interaction.
    pub shredding: bool,
}

impl Body {
    pub fn new(
        id: BodyId,
        archetype: Archetype,
        mass: f64,
        radius: f64,
        position: Point3<f64>,
        velocity: Vector3<f64>,
    ) -> Self {
        debug_assert!(mass >= 0.0, "body mass must be non-negative");
        debug_assert!(radius > 0.0, "body radius must be positive");

        Self {
            id,
            archetype,
            mass: mass.max(0.0),
            radius,
            position,
            velocity,
            age: 0.0,
            consumed_by: None,
            shredding: false,
        }
    }

    pub fn momentum(&self) -> Vector3<f64> {
        self.velocity * self.mass
    }

    pub fn distance_to(&self, other: &Body) -> f64 {
        (other.position - self.position).magnitude()
    }

    /// Whether this body is a compact object (black hole / quasar class).
    pub fn is_compact(&self) -> bool {
        self.archetype.is_compact()
    }
}
