//! Immutable, render-ready views of the universe.
//!
//! Snapshots are plain data: camelCase-serialized DTOs with positions
//! flattened to `[x, y, z]` arrays, safe to hand to any rendering client.

use serde::Serialize;
use stellar::{Archetype, Planet, StarColor};

/// The full observable state of the universe at the end of a tick.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UniverseSnapshot {
    /// Accumulated simulation time (scaled seconds).
    pub time: f64,
    pub time_scale: f64,
    pub bodies: Vec<BodySnapshot>,
    pub clouds: Vec<CloudSnapshot>,
}

/// One star, physics plus visuals, resolved for rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BodySnapshot {
    pub id: u32,
    pub archetype: Archetype,
    pub mass: f64,
    pub radius: f64,
    pub position: [f64; 3],
    pub age: f64,
    pub color: StarColor,
    pub secondary_color: Option<StarColor>,
    pub luminosity: f64,
    pub rotation_rate: f64,
    pub has_disk: bool,
    pub shredding: bool,
    /// Position of the predator currently draining this body, already
    /// resolved from the registry so renderers can draw the mass stream.
    pub predator_position: Option<[f64; 3]>,
    /// Narrative text, present once its generation has completed.
    pub description: Option<String>,
    pub planets: Vec<Planet>,
}

/// One dormant or collapsing cloud.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CloudSnapshot {
    pub id: u32,
    pub position: [f64; 3],
    pub mass: f64,
    pub size: f64,
    pub collapsing: bool,
    pub progress: f64,
    pub rotation_rate: f64,
}
