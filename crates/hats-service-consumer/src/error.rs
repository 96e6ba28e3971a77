use hats_lib::HatId;
use thiserror::Error;

/// Failure of a call from the consumer to the producer.
#[derive(Debug, Error)]
pub enum ProducerError {
    /// The producer answered 404 for the identifier.
    #[error("hat {id} not found at producer")]
    HatNotFound { id: HatId },

    /// The producer answered with a status outside the contract.
    #[error("producer returned unexpected status {status}")]
    UnexpectedStatus { status: u16 },

    /// The request could not be sent or the body could not be decoded.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

impl ProducerError {
    /// Short label used for metrics and logs.
    pub fn outcome(&self) -> &'static str {
        match self {
            ProducerError::HatNotFound { .. } => "not_found",
            ProducerError::UnexpectedStatus { .. } => "unexpected_status",
            ProducerError::Transport(_) => "transport_error",
        }
    }
}
