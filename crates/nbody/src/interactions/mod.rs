//! Proximity interaction resolution for close pairs.
//!
//! Each pair of bodies falls into one of four zones based on separation:
//! merge (unconditional combination), feed (continuous accretion onto a
//! compact predator), capture (orbital stabilization damping), or none.

pub mod resolution;
pub mod zones;


pub use resolution::{capture_damp, feed, merge_into, FEED_RATE, MIN_PREY_MASS};
pub use zones::{predator_prey, Zone, ZoneRadii};
