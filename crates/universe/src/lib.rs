//! Owning simulation context for the toy universe.
//!
//! A [`Universe`] owns everything: the physics arena, per-star visuals and
//! planet retinues, the population of dormant clouds, the event log, and
//! the narrative queue. It is passed explicitly wherever it is needed; there
//! is no global state. Callers drive it one frame at a time with
//! [`Universe::advance`] and render from the immutable snapshot it returns.

pub mod cloud;
pub mod driver;
pub mod event_log;
pub mod narrative;
pub mod snapshot;
pub mod timescale;
pub mod visuals;

pub use cloud::Cloud;
pub use driver::Universe;
pub use event_log::{EventLog, LogEntry};
pub use narrative::{NarrativeError, NarrativeQueue, NarrativeRequest, FALLBACK_DESCRIPTION};
pub use nbody::BodyId;
pub use snapshot::{BodySnapshot, CloudSnapshot, UniverseSnapshot};
pub use timescale::TimeScale;
pub use visuals::StarVisuals;
