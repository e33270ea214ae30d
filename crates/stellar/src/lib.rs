//! Stellar classification for collapsing gas clouds.
//!
//! Maps a cloud's mass (plus one uniform random draw) to a stellar archetype
//! and generates the visual/physical parameters that go with it: radius,
//! color, luminosity, accretion disk, and a small planetary retinue.

pub mod archetype;
pub mod classifier;
pub mod color;
pub mod planet;


pub use archetype::Archetype;
pub use classifier::{classify, StarProfile};
pub use color::StarColor;
pub use planet::{generate_retinue, Planet, PlanetKind};
