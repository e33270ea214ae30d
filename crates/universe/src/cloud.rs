//! Dormant gas clouds, the precursors of stars.

use nalgebra::Point3;
use nbody::BodyId;
use rand::Rng;

/// Wall-clock seconds from collapse trigger to star materialization.
///
/// Independent of the time scale: the collapse is a dramatic pause for the
/// viewer, so it runs on raw frame time even while the simulation is paused
/// or rewinding.
pub const COLLAPSE_SECONDS: f64 = 2.5;

/// A gravitationally inert cloud waiting to collapse.
///
/// Clouds share the id space with stars; the star born from a cloud keeps
/// the cloud's id.
#[derive(Debug, Clone, PartialEq)]
pub struct Cloud {
    pub id: BodyId,
    pub position: Point3<f64>,
    /// Nominal 1-100 scale; becomes the star's mass on materialization.
    pub mass: f64,
    /// Visual extent only; clouds have no physics radius.
    pub size: f64,
    pub collapsing: bool,
    /// Collapse progress in `[0, 1]`, advancing on wall-clock time.
    pub progress: f64,
    pub rotation_rate: f64,
}

impl Cloud {
    pub fn new<R: Rng + ?Sized>(id: BodyId, position: Point3<f64>, mass: f64, rng: &mut R) -> Self {
        debug_assert!(mass > 0.0, "cloud mass must be positive");

        Self {
            id,
            position,
            mass,
            // Heavier clouds read larger on screen
            size: 1.5 + mass.sqrt() * 0.4,
            collapsing: false,
            progress: 0.0,
            rotation_rate: rng.random_range(0.02..0.12),
        }
    }

    /// Start the collapse. Idempotent; progress is never reset.
    pub fn trigger_collapse(&mut self) {
        self.collapsing = true;
    }

    /// Advance the collapse timer by raw frame time.
    ///
    /// Returns `true` once collapse is complete and the cloud should be
    /// replaced by a star. Dormant clouds never advance.
    pub fn advance_collapse(&mut self, wall_delta: f64) -> bool {
        if !self.collapsing {
            return false;
        }

        self.progress = (self.progress + wall_delta / COLLAPSE_SECONDS).min(1.0);
        self.progress >= 1.0
    }
}
