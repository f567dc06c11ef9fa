//! Error types for the locator index.
use crate::identity::Identity;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Locator already set for {identity}")]
    AlreadyRegistered { identity: Identity },

    #[error("The zero identity cannot hold a locator")]
    ZeroIdentity,

    #[error("Caller {caller} is not the owner")]
    Unauthorized { caller: Identity },

    #[error("Invalid hex {input:?}: {source}")]
    InvalidHex {
        input: String,
        #[source]
        source: hex::FromHexError,
    },

    #[error("Invalid length: expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
}

impl Error {
    /// Whether this error came from the ownership gate rather than the registry itself.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Error::Unauthorized { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;
