use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid region: {0}")]
    InvalidRegion(String),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Malformed Riot ID input, rejected before any request is made.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Enter a Riot ID to search.")]
    EmptyInput,

    #[error("Invalid format. Use Name#TAG")]
    BadFormat,
}

/// Failure of a single profile request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Non-success HTTP status, with the service's message or a synthesized one.
    #[error("{message}")]
    Status { status: u16, message: String },

    #[error("{message}")]
    Network { message: String },

    /// Success status but the body is not a readable profile.
    #[error("Could not read the profile service response.")]
    Parse { message: String },
}

impl FetchError {
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Underlying description, including decoder detail hidden from `Display`.
    pub fn detail(&self) -> &str {
        match self {
            Self::Status { message, .. } | Self::Network { message } | Self::Parse { message } => {
                message
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Network,
    Status,
    Parse,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Fetch(#[from] FetchError),
}

impl SearchError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) => ErrorKind::Validation,
            Self::Fetch(FetchError::Status { .. }) => ErrorKind::Status,
            Self::Fetch(FetchError::Network { .. }) => ErrorKind::Network,
            Self::Fetch(FetchError::Parse { .. }) => ErrorKind::Parse,
        }
    }
}
