use serde::Serialize;
use stellar::Archetype;

use crate::body::BodyId;

/// Discrete simulation events consumed by the log emitter.
///
/// `Merger` and `MassTransfer` come out of the interaction resolver;
/// `Birth` is produced by the lifecycle driver when a collapsed cloud
/// materializes as a star.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum SimEvent {
    Merger {
        winner: BodyId,
        loser: BodyId,
    },
    MassTransfer {
        source: BodyId,
        target: BodyId,
        amount: f64,
    },
    Birth {
        id: BodyId,
        archetype: Archetype,
    },
}
