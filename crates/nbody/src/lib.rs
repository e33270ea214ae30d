//! N-body physics for a small simulated universe.
//!
//! Designed for tens of bodies: every pair is evaluated directly (O(N²))
//! each tick. Gravity is softened to avoid singular forces at near-zero
//! separation, integration is semi-implicit Euler, and close pairs resolve
//! into orbital capture, continuous accretion, or momentum-conserving
//! mergers depending on separation.

pub mod body;
pub mod events;
pub mod forces;
pub mod integrator;
pub mod interactions;
pub mod state;

#[cfg(test)]
mod state_test;

pub use body::{Body, BodyId};
pub use events::SimEvent;
pub use forces::{G, MIN_DISTANCE, SOFTENING};
pub use integrator::step;
pub use state::BodyArena;
