//! Mass-band classification of collapsing clouds.
//!
//! The mapping from cloud mass to archetype is a pure function of the mass
//! and one uniform random draw, so it is fully reproducible when the random
//! source is injected (seed a `ChaChaRng` in callers that need determinism).

use rand::Rng;

use crate::archetype::Archetype;
use crate::color::StarColor;

/// Upper mass bound (exclusive) for brown dwarfs, on the cloud's 0-100 scale.
const BROWN_DWARF_MAX: f64 = 15.0;
/// Upper mass bound (exclusive) for red dwarfs.
const RED_DWARF_MAX: f64 = 30.0;
/// Upper mass bound (exclusive) for the yellow dwarf / binary band.
const YELLOW_DWARF_MAX: f64 = 60.0;
/// Upper mass bound (exclusive) for blue giants.
const BLUE_GIANT_MAX: f64 = 80.0;
/// Upper mass bound (exclusive) for neutron stars.
const NEUTRON_STAR_MAX: f64 = 90.0;
/// Lower mass bound (inclusive) for quasars.
const QUASAR_MIN: f64 = 98.0;

/// Fraction of the 30-60 band that classifies as a single yellow dwarf;
/// draws at or above this become binary systems.
const YELLOW_DWARF_FRACTION: f64 = 0.8;

/// Map a cloud mass and one uniform draw to a stellar archetype.
///
/// Deterministic given its inputs: the same `(mass, draw)` always yields the
/// same archetype. The draw is only consulted in the 30-60 band, where 80%
/// of clouds collapse into a yellow dwarf and 20% into a binary pair.
///
/// # Arguments
/// * `mass` - Cloud mass on the nominal 0-100 scale
/// * `draw` - A uniform random draw in `[0, 1)`
///
/// # Examples
/// ```
/// use stellar::{classify, Archetype};
///
/// assert_eq!(classify(10.0, 0.5), Archetype::BrownDwarf);
/// assert_eq!(classify(50.0, 0.9), Archetype::BinaryStar);
/// assert_eq!(classify(99.0, 0.0), Archetype::Quasar);
/// ```
pub fn classify(mass: f64, draw: f64) -> Archetype {
    match mass {
        m if m < BROWN_DWARF_MAX => Archetype::BrownDwarf,
        m if m < RED_DWARF_MAX => Archetype::RedDwarf,
        m if m < YELLOW_DWARF_MAX => {
            if draw < YELLOW_DWARF_FRACTION {
                Archetype::YellowDwarf
            } else {
                Archetype::BinaryStar
            }
        }
        m if m < BLUE_GIANT_MAX => Archetype::BlueGiant,
        m if m < NEUTRON_STAR_MAX => Archetype::NeutronStar,
        m if m < QUASAR_MIN => Archetype::BlackHole,
        _ => Archetype::Quasar,
    }
}

/// Physical and visual parameters assigned to a newly classified body.
///
/// Everything a renderer needs that is not part of the physics arena:
/// color(s), luminosity intensity, rotation, and the accretion-disk flag.
/// Radius feeds back into the physics (it drives the interaction zones).
#[derive(Debug, Clone, PartialEq)]
pub struct StarProfile {
    pub archetype: Archetype,
    pub radius: f64,
    pub color: StarColor,
    /// Second component color, present only for binary systems.
    pub secondary_color: Option<StarColor>,
    /// Glow intensity on an open scale (1.0 is a nominal yellow dwarf).
    pub luminosity: f64,
    /// Rotation rate in radians per simulated second.
    pub rotation_rate: f64,
    pub has_disk: bool,
}

impl StarProfile {
    /// Classify a cloud mass and generate the full parameter set.
    ///
    /// The archetype draw and the per-archetype parameter jitter both come
    /// from `rng`, so a seeded generator reproduces the exact profile.
    ///
    /// # Examples
    /// ```
    /// use rand::SeedableRng;
    /// use rand_chacha::ChaChaRng;
    /// use stellar::StarProfile;
    ///
    /// let mut rng = ChaChaRng::seed_from_u64(7);
    /// let profile = StarProfile::generate(42.0, &mut rng);
    /// assert!(profile.radius > 0.0);
    /// ```
    pub fn generate<R: Rng + ?Sized>(mass: f64, rng: &mut R) -> Self {
        let archetype = classify(mass, rng.random());
        Self::for_archetype(archetype, rng)
    }

    /// Build the profile for a rogue planet placed at universe init.
    ///
    /// Rogue planets never come out of `classify`; they only exist as part
    /// of the initial population.
    pub fn rogue_planet<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::for_archetype(Archetype::RoguePlanet, rng)
    }

    fn for_archetype<R: Rng + ?Sized>(archetype: Archetype, rng: &mut R) -> Self {
        let (radius, color, luminosity, has_disk) = match archetype {
            Archetype::BrownDwarf => (0.8, StarColor::new(139, 90, 60), 0.2, false),
            Archetype::RedDwarf => (1.0, StarColor::new(255, 99, 71), 0.5, false),
            Archetype::YellowDwarf => (1.4, StarColor::new(255, 221, 130), 0.9, false),
            Archetype::BinaryStar => (1.2, StarColor::new(255, 221, 130), 1.0, false),
            Archetype::BlueGiant => (2.2, StarColor::new(120, 170, 255), 1.6, false),
            Archetype::NeutronStar => (0.5, StarColor::new(200, 220, 255), 2.2, false),
            Archetype::BlackHole => (0.9, StarColor::new(20, 20, 30), 0.3, true),
            Archetype::Quasar => (1.1, StarColor::new(180, 130, 255), 3.0, true),
            Archetype::RoguePlanet => (0.4, StarColor::new(110, 130, 120), 0.05, false),
            Archetype::SupermassiveBlackHole => (3.0, StarColor::new(10, 10, 20), 0.5, true),
        };

        let secondary_color = match archetype {
            Archetype::BinaryStar => Some(StarColor::new(135, 206, 250)),
            _ => None,
        };

        Self {
            archetype,
            radius,
            color,
            secondary_color,
            luminosity,
            rotation_rate: Self::sample_rotation(archetype, rng),
            has_disk,
        }
    }

    /// Sample a rotation rate appropriate for the archetype.
    ///
    /// Compact remnants spin fast (neutron stars fastest), diffuse bodies
    /// slowly. Rates are radians per simulated second.
    fn sample_rotation<R: Rng + ?Sized>(archetype: Archetype, rng: &mut R) -> f64 {
        match archetype {
            Archetype::NeutronStar => rng.random_range(4.0..8.0),
            Archetype::BlackHole | Archetype::Quasar | Archetype::SupermassiveBlackHole => {
                rng.random_range(1.5..3.0)
            }
            Archetype::RoguePlanet => rng.random_range(0.2..0.6),
            _ => rng.random_range(0.05..0.4),
        }
    }
}
