use crate::types::DbId;

/// Domain error taxonomy shared by every rule component.
///
/// None of these are retried or recovered inside the rule layer; the HTTP
/// boundary maps each variant to a status code.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("An asset named '{0}' already exists")]
    DuplicateName(String),

    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Minimum variation of 1% not reached (current {current}, requested {requested})")]
    InvalidVariation { current: f64, requested: f64 },

    #[error("Access code must be exactly 6 digits")]
    InvalidAccessCode,

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Failure reported by a store adapter.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A unique constraint rejected the write.
    #[error("Unique constraint violated: {constraint}")]
    UniqueViolation { constraint: String },

    /// The backing store failed for any other reason.
    #[error("Store failure: {0}")]
    Backend(String),
}

impl From<StoreError> for CoreError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::UniqueViolation { constraint } => {
                CoreError::Conflict(format!("Duplicate value violates {constraint}"))
            }
            StoreError::Backend(msg) => CoreError::Internal(msg),
        }
    }
}
