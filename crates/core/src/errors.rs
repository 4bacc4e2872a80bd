use thiserror::Error;

/// Error type shared across the backend.
///
/// Every variant renders as the exact message sent to the client; for
/// database and internal failures the underlying cause is carried along
/// so the API layer can log it before answering with the outer message.
#[derive(Error, Debug)]
pub enum SiteError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Config(String),

    #[error("{0}")]
    Database(#[from] eyre::Report),

    #[error("{0}")]
    Internal(eyre::Report),
}

pub type SiteResult<T> = Result<T, SiteError>;
