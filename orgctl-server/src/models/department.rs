//! Department schema
//!
//! `Department` is the record returned by the store; `NewDepartment` is the
//! validated payload for inserts and full overwrites.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::validation::{bounded_text, ValidationError};

/// Maximum length for department name and location
pub const MAX_DEPARTMENT_TEXT_LEN: usize = 100;

/// Department record as stored
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Department {
    pub id: i32,
    pub name: String,
    pub location: String,
}

/// Inbound department body.
///
/// `id` is tolerated so clients can send back a full record, but it is never
/// written: ids are assigned by the store.
#[derive(Debug, Clone, Deserialize)]
pub struct DepartmentBody {
    #[serde(default)]
    pub id: Option<i32>,
    pub name: String,
    pub location: String,
}

/// Validated department fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDepartment {
    name: String,
    location: String,
}

impl NewDepartment {
    /// Validate department fields.
    ///
    /// # Example
    /// ```
    /// use orgctl_server::models::NewDepartment;
    ///
    /// assert!(NewDepartment::new("Engineering", "Building A").is_ok());
    /// assert!(NewDepartment::new("", "Building A").is_err());
    /// ```
    pub fn new(name: &str, location: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            name: bounded_text("name", name, MAX_DEPARTMENT_TEXT_LEN)?,
            location: bounded_text("location", location, MAX_DEPARTMENT_TEXT_LEN)?,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    /// Attach a store-assigned id.
    pub fn into_record(self, id: i32) -> Department {
        Department {
            id,
            name: self.name,
            location: self.location,
        }
    }
}

impl TryFrom<DepartmentBody> for NewDepartment {
    type Error = ValidationError;

    fn try_from(body: DepartmentBody) -> Result<Self, Self::Error> {
        Self::new(&body.name, &body.location)
    }
}
