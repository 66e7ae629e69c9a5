//! Employee schema

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::validation::{bounded_text, ValidationError};

/// Maximum length for employee name and email
pub const MAX_EMPLOYEE_TEXT_LEN: usize = 100;

/// Maximum length for employee phone
pub const MAX_PHONE_LEN: usize = 20;

/// Employee record as stored
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Employee {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub department_id: i32,
}

/// Inbound employee body (`id` accepted and ignored)
#[derive(Debug, Clone, Deserialize)]
pub struct EmployeeBody {
    #[serde(default)]
    pub id: Option<i32>,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub department_id: i32,
}

/// Validated employee fields.
///
/// Email is length-checked only; neither format nor uniqueness is enforced.
/// `department_id` existence is left to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEmployee {
    name: String,
    email: String,
    phone: String,
    department_id: i32,
}

impl NewEmployee {
    pub fn new(
        name: &str,
        email: &str,
        phone: &str,
        department_id: i32,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            name: bounded_text("name", name, MAX_EMPLOYEE_TEXT_LEN)?,
            email: bounded_text("email", email, MAX_EMPLOYEE_TEXT_LEN)?,
            phone: bounded_text("phone", phone, MAX_PHONE_LEN)?,
            department_id,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn department_id(&self) -> i32 {
        self.department_id
    }

    pub fn into_record(self, id: i32) -> Employee {
        Employee {
            id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            department_id: self.department_id,
        }
    }
}

impl TryFrom<EmployeeBody> for NewEmployee {
    type Error = ValidationError;

    fn try_from(body: EmployeeBody) -> Result<Self, Self::Error> {
        Self::new(&body.name, &body.email, &body.phone, body.department_id)
    }
}
