//! Softened pairwise gravity.
//!
//! The softening term keeps the force finite as separation approaches zero;
//! actual coincident pairs are handed to the interaction resolver as an
//! immediate merge instead of ever normalizing a zero-length direction.

/// Gravitational constant in world units.
pub const G: f64 = 0.5;

/// Additive softening term in the force denominator.
pub const SOFTENING: f64 = 2.0;

/// Minimum separation for which a direction vector is computed. Pairs at or
/// below this distance merge on the spot rather than dividing by ~zero.
pub const MIN_DISTANCE: f64 = 1e-6;

/// Softened gravitational attraction between two masses.
///
/// `F = G * m_a * m_b / (r² + SOFTENING)`
///
/// The result is a scalar magnitude; callers apply it along the separation
/// direction, symmetrically to both bodies (Newton's third law).
///
/// # Examples
/// ```
/// use nbody::forces::{softened_attraction, G, SOFTENING};
///
/// let f = softened_attraction(10.0, 20.0, 4.0);
/// assert_eq!(f, G * 200.0 / (4.0 + SOFTENING));
///
/// // Finite even at zero separation
/// assert!(softened_attraction(10.0, 20.0, 0.0).is_finite());
/// ```
pub fn softened_attraction(mass_a: f64, mass_b: f64, dist_squared: f64) -> f64 {
    G * mass_a * mass_b / (dist_squared + SOFTENING)
}
