//! Zone classification and predator/prey selection.

use crate::body::Body;

/// Merge threshold as a fraction of the pair's combined radius.
const MERGE_FACTOR: f64 = 0.4;
/// Capture radius as a multiple of the pair's combined radius.
const CAPTURE_FACTOR: f64 = 6.0;
/// Feeding threshold as a multiple of the combined radius, active only when
/// at least one body of the pair is compact.
const FEED_FACTOR: f64 = 8.0;

/// Interaction zone for a pair at a given separation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Zone {
    None,
    Capture,
    Feed,
    Merge,
}

/// The three zone radii derived from a pair's combined radius.
///
/// # Examples
/// ```
/// use nalgebra::{Point3, Vector3};
/// use nbody::body::{Body, BodyId};
/// use nbody::interactions::{Zone, ZoneRadii};
/// use stellar::Archetype;
///
/// let a = Body::new(BodyId(0), Archetype::YellowDwarf, 40.0, 1.0,
///     Point3::origin(), Vector3::zeros());
/// let b = Body::new(BodyId(1), Archetype::RedDwarf, 20.0, 1.5,
///     Point3::new(5.0, 0.0, 0.0), Vector3::zeros());
///
/// let radii = ZoneRadii::for_pair(&a, &b);
/// assert_eq!(radii.merge, 1.0);     // 0.4 * 2.5
/// assert_eq!(radii.capture, 15.0);  // 6.0 * 2.5
/// assert_eq!(radii.feeding, 0.0);   // neither body is compact
/// assert_eq!(radii.classify(5.0), Zone::Capture);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoneRadii {
    pub merge: f64,
    pub capture: f64,
    /// Zero when neither body is compact; non-compact bodies never feed
    /// on each other.
    pub feeding: f64,
}

impl ZoneRadii {
    pub fn for_pair(a: &Body, b: &Body) -> Self {
        let combined = a.radius + b.radius;
        let feeding = if a.is_compact() || b.is_compact() {
            FEED_FACTOR * combined
        } else {
            0.0
        };

        Self {
            merge: MERGE_FACTOR * combined,
            capture: CAPTURE_FACTOR * combined,
            feeding,
        }
    }

    /// Classify a separation, in priority order merge > feed > capture.
    ///
    /// For compact pairs the feed band fully covers the capture band, so a
    /// feeding pair is never capture-damped in the same tick.
    pub fn classify(&self, dist: f64) -> Zone {
        if dist < self.merge {
            Zone::Merge
        } else if dist < self.feeding {
            Zone::Feed
        } else if dist < self.capture {
            Zone::Capture
        } else {
            Zone::None
        }
    }
}

/// Select predator and prey for a pair, returning their indices as
/// `(predator, prey)`.
///
/// A lone compact object is always the predator regardless of mass;
/// otherwise the more massive body wins. Exact ties fall to the
/// first-indexed body.
///
/// Symmetric by construction: swapping the argument order yields the same
/// predator.
pub fn predator_prey(idx_a: usize, idx_b: usize, a: &Body, b: &Body) -> (usize, usize) {
    let a_is_predator = match (a.is_compact(), b.is_compact()) {
        (true, false) => true,
        (false, true) => false,
        _ => {
            if a.mass != b.mass {
                a.mass > b.mass
            } else {
                idx_a < idx_b
            }
        }
    };

    if a_is_predator {
        (idx_a, idx_b)
    } else {
        (idx_b, idx_a)
    }
}
