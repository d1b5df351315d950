use thiserror::Error;

#[derive(Debug, Error)]
pub enum BotError {
    #[error("unable to process action from webhook payload")]
    UnrecognizedEvent,

    #[error("payload has no pull request number")]
    MissingNumber,

    #[error("unknown rule: {0}")]
    UnknownRule(String),

    #[error("github returned {status} for {method} {path}")]
    RemoteStatus {
        method: String,
        path: String,
        status: u16,
    },

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl BotError {
    /// True for faults of the remote platform (network, non-2xx, bad JSON)
    /// as opposed to faults of the inbound payload or configuration.
    pub fn is_remote(&self) -> bool {
        matches!(
            self,
            BotError::RemoteStatus { .. } | BotError::Http(_) | BotError::Json(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, BotError>;
