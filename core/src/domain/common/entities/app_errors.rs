use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("internal server error")]
    InternalServerError,

    #[error("resource not found")]
    NotFound,

    #[error("{0} already exists")]
    Conflict(String),

    #[error("invalid email or password")]
    InvalidCredentials,

    #[error("invalid or expired token")]
    InvalidToken,

    #[error("invalid input: {0}")]
    Invalid(String),

    #[error("external service error: {0}")]
    ExternalServiceError(String),

    #[error("oauth is not configured")]
    OAuthNotConfigured,
}
