//! Render-facing star attributes, kept outside the physics arena.

use stellar::{Planet, StarColor, StarProfile};

/// Everything a renderer needs about a star that the physics engine never
/// touches, keyed by the same id as the arena entry.
#[derive(Debug, Clone, PartialEq)]
pub struct StarVisuals {
    pub color: StarColor,
    /// Second component color for binary systems.
    pub secondary_color: Option<StarColor>,
    pub luminosity: f64,
    pub rotation_rate: f64,
    pub has_disk: bool,
    pub planets: Vec<Planet>,
}

impl StarVisuals {
    pub fn from_profile(profile: &StarProfile, planets: Vec<Planet>) -> Self {
        Self {
            color: profile.color,
            secondary_color: profile.secondary_color,
            luminosity: profile.luminosity,
            rotation_rate: profile.rotation_rate,
            has_disk: profile.has_disk,
            planets,
        }
    }
}
