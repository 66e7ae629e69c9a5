//! Data-access error type

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} {id}")]
    NotFound { resource: &'static str, id: i32 },

    /// A write referenced a parent row that does not exist
    #[error("reference violation: {resource} {id} does not exist")]
    ReferenceViolation { resource: &'static str, id: i32 },

    #[error("no ids left for {resource}")]
    IdsExhausted { resource: &'static str },
}

impl DbError {
    /// Classify a write error, turning foreign key failures into
    /// `ReferenceViolation` against the given parent.
    pub(crate) fn on_write(err: sqlx::Error, resource: &'static str, id: i32) -> Self {
        if let sqlx::Error::Database(db) = &err {
            if db.is_foreign_key_violation() {
                return Self::ReferenceViolation { resource, id };
            }
        }
        Self::Sqlx(err)
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
