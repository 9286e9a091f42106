#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("not found: {0}")]
    NotFound(String),
    #[error("invalid transition: {0}")]
    InvalidTransition(String),
    #[error("constraint violation: {0}")]
    ConstraintViolation(String),
    #[error("storage failed: {0}")]
    StorageFailed(String),
}
