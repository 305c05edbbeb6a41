use thiserror::Error;

/// Everything that can go wrong between issuing a request and holding a typed payload.
///
/// The variants only ever reach the diagnostic log; views collapse all of them
/// into one static message.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("backend answered with status {status}")]
    Status { status: reqwest::StatusCode },

    #[error("backend reported an error: {message}")]
    Semantic { message: String },

    #[error("response body is not the expected JSON: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("response failed validation: {message}")]
    Schema { message: String },

    #[error("invalid endpoint url: {0}")]
    Url(#[from] url::ParseError),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{name} is not set; add it to the environment or .env")]
    MissingVar { name: &'static str },

    #[error("{name} has an invalid value {value:?}: {reason}")]
    InvalidVar {
        name: &'static str,
        value: String,
        reason: String,
    },
}
