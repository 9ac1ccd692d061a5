use thiserror::Error;

/// Why one remote fetch attempt failed, before any fallback tier ran.
///
/// This is also the error the resolver finally surfaces: when both fallback
/// tiers come up empty, the original transport/decode failure propagates
/// unchanged, never a fallback-stage error.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    #[error("Holdings endpoint error: {0}")]
    Endpoint(String),

    #[error("Holdings response did not decode: {0}")]
    Decode(#[from] serde_json::Error),
}

impl FetchError {
    /// Message shown to the user when a refresh fails with nothing to display.
    pub fn user_message(&self) -> &'static str {
        match self {
            FetchError::Transport(_) | FetchError::Endpoint(_) => {
                "Unable to reach the holdings service. Check your connection and try again."
            }
            FetchError::Decode(_) => "The holdings service returned data that could not be read.",
        }
    }
}

/// Cache file problems. A cache that was never written is not an error;
/// `load` reports that as an empty list.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Cached holdings did not parse: {0}")]
    Corrupt(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
