//! Discrete time scales for the control surface.

use serde::{Deserialize, Serialize};

/// Playback rate of the simulation.
///
/// Restricted to a fixed menu rather than a free multiplier; negative
/// scales rewind motion (aging still only accrues forward).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TimeScale {
    FastRewind,
    Rewind,
    Paused,
    #[default]
    Normal,
    Fast,
    Fastest,
}

impl TimeScale {
    pub const ALL: [TimeScale; 6] = [
        TimeScale::FastRewind,
        TimeScale::Rewind,
        TimeScale::Paused,
        TimeScale::Normal,
        TimeScale::Fast,
        TimeScale::Fastest,
    ];

    /// Multiplier applied to the clamped frame delta.
    pub fn factor(self) -> f64 {
        match self {
            TimeScale::FastRewind => -8.0,
            TimeScale::Rewind => -2.0,
            TimeScale::Paused => 0.0,
            TimeScale::Normal => 1.0,
            TimeScale::Fast => 4.0,
            TimeScale::Fastest => 8.0,
        }
    }

    pub fn is_paused(self) -> bool {
        self == TimeScale::Paused
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factors_match_the_menu() {
        let factors: Vec<f64> = TimeScale::ALL.iter().map(|s| s.factor()).collect();
        assert_eq!(factors, vec![-8.0, -2.0, 0.0, 1.0, 4.0, 8.0]);
    }

    #[test]
    fn default_is_normal() {
        assert_eq!(TimeScale::default(), TimeScale::Normal);
        assert!(!TimeScale::default().is_paused());
        assert!(TimeScale::Paused.is_paused());
    }
}
