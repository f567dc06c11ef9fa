//! Notifications emitted by committed mutations.
use crate::identity::{Identity, Locator};

/// What an observer sees after a successful mutation.
///
/// Exactly one `Registered` per successful insert and one `Unregistered` per remove that actually
/// found an entry. Failed calls and no-op removes emit nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event<S> {
    Registered {
        identity: Identity,
        score: S,
        locator: Locator,
    },
    Unregistered {
        identity: Identity,
    },
}

impl<S> Event<S> {
    /// Identity the event is about.
    pub fn identity(&self) -> Identity {
        match self {
            Event::Registered { identity, .. } | Event::Unregistered { identity } => *identity,
        }
    }
}
