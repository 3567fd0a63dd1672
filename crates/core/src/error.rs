#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: String },

    #[error("Validation failed: {0}")]
    Validation(String),

    /// The underlying persistence layer failed. The message is for logs only.
    #[error("Store error: {0}")]
    Store(String),
}
