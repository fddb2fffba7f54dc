use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum CoreError {
    #[error("The model returned a malformed response: {0}")]
    MalformedModelResponse(String),

    #[error("The model response did not match the expected shape: {0}")]
    ModelResponseSchemaMismatch(String),

    #[error("External service error: {0}")]
    ExternalServiceError(String),

    #[error("Invalid input: {0}")]
    Invalid(String),

    #[error("Internal server error")]
    InternalServerError,
}
