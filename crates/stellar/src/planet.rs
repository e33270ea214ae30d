//! Planetary retinue generation.
//!
//! Every classified star receives a small set of purely kinematic planets.
//! They orbit their parent star, exert no gravity on anything, and exist
//! only for rendering and flavor.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::color::StarColor;

/// Minimum number of planets per retinue.
const MIN_PLANETS: usize = 2;
/// Maximum number of planets per retinue.
const MAX_PLANETS: usize = 7;

/// Probability that a generated planet is rocky (the rest are gas).
const ROCKY_FRACTION: f64 = 0.4;

/// Planet composition class.
///
/// `Ice` exists in the type space but is not produced by the current
/// generator, mirroring how `SupermassiveBlackHole` is never classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlanetKind {
    Rocky,
    Gas,
    Ice,
}

/// A purely kinematic planet owned by its parent star.
///
/// Planets carry no gravitational back-reaction; the driver advances
/// `angle` by `angular_speed * dt` each tick and nothing else touches them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Planet {
    /// Orbital distance from the parent star's center, in world units.
    pub distance: f64,
    pub size: f64,
    /// Orbital angular speed in radians per simulated second.
    pub angular_speed: f64,
    /// Current orbital phase in radians.
    pub angle: f64,
    pub color: StarColor,
    pub kind: PlanetKind,
    pub mass: f64,
}

/// Generate a planetary retinue of 2-7 planets.
///
/// Angular speed falls off with orbital index as `(0.8 + rand) / sqrt(i + 1)`,
/// mimicking slower orbits at larger distances. Composition splits 40/60
/// between rocky and gas.
///
/// # Examples
/// ```
/// use rand::SeedableRng;
/// use rand_chacha::ChaChaRng;
/// use stellar::generate_retinue;
///
/// let mut rng = ChaChaRng::seed_from_u64(3);
/// let planets = generate_retinue(&mut rng);
/// assert!(planets.len() >= 2 && planets.len() <= 7);
/// ```
pub fn generate_retinue<R: Rng + ?Sized>(rng: &mut R) -> Vec<Planet> {
    let count = rng.random_range(MIN_PLANETS..=MAX_PLANETS);

    (0..count)
        .map(|i| {
            let kind = if rng.random_bool(ROCKY_FRACTION) {
                PlanetKind::Rocky
            } else {
                PlanetKind::Gas
            };

            let size = match kind {
                PlanetKind::Rocky => rng.random_range(0.06..0.15),
                PlanetKind::Gas => rng.random_range(0.12..0.30),
                PlanetKind::Ice => rng.random_range(0.08..0.18),
            };

            Planet {
                distance: 2.0 + (i as f64) * 1.2 + rng.random::<f64>() * 0.8,
                size,
                angular_speed: (0.8 + rng.random::<f64>()) / ((i as f64) + 1.0).sqrt(),
                angle: rng.random::<f64>() * std::f64::consts::TAU,
                color: planet_color(kind, rng),
                kind,
                // Mass scales with volume; small enough to stay decorative
                mass: size * size * size * 10.0,
            }
        })
        .collect()
}

fn planet_color<R: Rng + ?Sized>(kind: PlanetKind, rng: &mut R) -> StarColor {
    match kind {
        PlanetKind::Rocky => StarColor::new(
            rng.random_range(140..200),
            rng.random_range(100..150),
            rng.random_range(80..120),
        ),
        PlanetKind::Gas => StarColor::new(
            rng.random_range(150..220),
            rng.random_range(150..210),
            rng.random_range(180..255),
        ),
        PlanetKind::Ice => StarColor::new(
            rng.random_range(190..230),
            rng.random_range(210..245),
            rng.random_range(230..255),
        ),
    }
}
