use serde::{Deserialize, Serialize};

/// Discrete classification of a celestial body.
///
/// The archetype is assigned once, when a cloud collapses (or at universe
/// initialization for rogue planets), and never changes afterwards: mergers
/// and feeding grow a body's mass but do not re-classify it.
///
/// `SupermassiveBlackHole` exists in the type space but is never produced by
/// the current classification bands; it is reachable only if product rules
/// ever allow post-creation growth to re-classify.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Archetype {
    BrownDwarf,
    RedDwarf,
    YellowDwarf,
    BinaryStar,
    BlueGiant,
    NeutronStar,
    BlackHole,
    Quasar,
    /// Assigned only at universe initialization, never from cloud collapse.
    RoguePlanet,
    SupermassiveBlackHole,
}

impl Archetype {
    /// Whether this body is a compact object that can feed on neighbors.
    ///
    /// Compact objects are always the predator in a mixed pair, regardless
    /// of mass, and are the only bodies with a non-zero feeding threshold.
    pub fn is_compact(&self) -> bool {
        matches!(
            self,
            Archetype::BlackHole | Archetype::Quasar | Archetype::SupermassiveBlackHole
        )
    }

    /// Human-readable name, used in logs and narrative prompts.
    pub fn name(&self) -> &'static str {
        match self {
            Archetype::BrownDwarf => "brown dwarf",
            Archetype::RedDwarf => "red dwarf",
            Archetype::YellowDwarf => "yellow dwarf",
            Archetype::BinaryStar => "binary star",
            Archetype::BlueGiant => "blue giant",
            Archetype::NeutronStar => "neutron star",
            Archetype::BlackHole => "black hole",
            Archetype::Quasar => "quasar",
            Archetype::RoguePlanet => "rogue planet",
            Archetype::SupermassiveBlackHole => "supermassive black hole",
        }
    }
}

impl std::fmt::Display for Archetype {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
