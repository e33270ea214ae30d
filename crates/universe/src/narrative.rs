//! Asynchronous narrative generation, decoupled from the tick loop.
//!
//! Materializing a star enqueues a [`NarrativeRequest`]. An external worker
//! (an LLM client, a template engine, whatever the host provides) drains
//! the requests, produces a description per body, and sends the result back
//! over a channel. The driver applies completed results at the top of every
//! tick; a failed completion is replaced by a fixed fallback string and
//! logged, never propagated.

use std::error::Error;
use std::fmt;
use std::mem;
use std::sync::mpsc::{channel, Receiver, Sender, TryRecvError};

use log::warn;
use nbody::BodyId;
use stellar::Archetype;

/// Description applied when narrative generation fails.
pub const FALLBACK_DESCRIPTION: &str = "A newborn body, still unnamed, drifts through the dark.";

/// Why a narrative completion failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NarrativeError {
    /// No worker is attached or the backend is unreachable.
    Unavailable,
    /// The worker ran but produced no usable text.
    Generation(String),
}

impl fmt::Display for NarrativeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NarrativeError::Unavailable => write!(f, "narrative backend unavailable"),
            NarrativeError::Generation(reason) => {
                write!(f, "narrative generation failed: {reason}")
            }
        }
    }
}

impl Error for NarrativeError {}

/// One pending description request for a newly born star.
#[derive(Debug, Clone, PartialEq)]
pub struct NarrativeRequest {
    pub id: BodyId,
    pub archetype: Archetype,
    pub mass: f64,
}

/// A completed narrative, successful or not, addressed to a body.
pub type NarrativeCompletion = (BodyId, Result<String, NarrativeError>);

/// Queue of outgoing requests plus the return channel for completions.
///
/// The receiving half never blocks the tick loop; [`NarrativeQueue::drain`]
/// uses `try_recv` and stops as soon as the channel is empty.
#[derive(Debug)]
pub struct NarrativeQueue {
    pending: Vec<NarrativeRequest>,
    sender: Sender<NarrativeCompletion>,
    receiver: Receiver<NarrativeCompletion>,
}

impl NarrativeQueue {
    pub fn new() -> Self {
        let (sender, receiver) = channel();
        Self {
            pending: Vec::new(),
            sender,
            receiver,
        }
    }

    pub(crate) fn request(&mut self, request: NarrativeRequest) {
        self.pending.push(request);
    }

    /// Take all pending requests, leaving the queue empty.
    pub fn take_requests(&mut self) -> Vec<NarrativeRequest> {
        mem::take(&mut self.pending)
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Handle for workers to send completions back on. Cloneable; workers
    /// may live on other threads.
    pub fn completion_sender(&self) -> Sender<NarrativeCompletion> {
        self.sender.clone()
    }

    /// Collect every completion currently in the channel.
    ///
    /// Failures are logged and substituted with [`FALLBACK_DESCRIPTION`],
    /// so every drained entry carries usable text.
    pub fn drain(&mut self) -> Vec<(BodyId, String)> {
        let mut completed = Vec::new();

        loop {
            match self.receiver.try_recv() {
                Ok((id, Ok(text))) => completed.push((id, text)),
                Ok((id, Err(error))) => {
                    warn!("narrative for body {} failed: {error}", id.0);
                    completed.push((id, FALLBACK_DESCRIPTION.to_string()));
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }

        completed
    }
}

impl Default for NarrativeQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_request(id: u32) -> NarrativeRequest {
        NarrativeRequest {
            id: BodyId(id),
            archetype: Archetype::YellowDwarf,
            mass: 45.0,
        }
    }

    #[test]
    fn take_requests_empties_the_queue() {
        let mut queue = NarrativeQueue::new();
        queue.request(make_request(0));
        queue.request(make_request(1));

        let taken = queue.take_requests();
        assert_eq!(taken.len(), 2);
        assert_eq!(queue.pending_len(), 0);
        assert!(queue.take_requests().is_empty());
    }

    #[test]
    fn successful_completions_come_back_verbatim() {
        let mut queue = NarrativeQueue::new();
        let sender = queue.completion_sender();

        sender
            .send((BodyId(3), Ok("A patient yellow sun.".to_string())))
            .unwrap();

        let drained = queue.drain();
        assert_eq!(drained, vec![(BodyId(3), "A patient yellow sun.".to_string())]);
        assert!(queue.drain().is_empty());
    }

    #[test]
    fn failures_fall_back_instead_of_propagating() {
        let mut queue = NarrativeQueue::new();
        let sender = queue.completion_sender();

        sender
            .send((BodyId(5), Err(NarrativeError::Unavailable)))
            .unwrap();
        sender
            .send((
                BodyId(6),
                Err(NarrativeError::Generation("empty response".to_string())),
            ))
            .unwrap();

        let drained = queue.drain();
        assert_eq!(drained.len(), 2);
        for (_, text) in drained {
            assert_eq!(text, FALLBACK_DESCRIPTION);
        }
    }

    #[test]
    fn error_messages_are_descriptive() {
        assert_eq!(
            NarrativeError::Generation("timeout".to_string()).to_string(),
            "narrative generation failed: timeout"
        );
    }
}
