//! Schemas crossing the HTTP boundary
//!
//! Inbound bodies are validated into `New*` types before they reach the store.
//! Invalid input returns ValidationError, not panic.

pub mod validation;
pub mod department;
pub mod employee;

pub use validation::ValidationError;
pub use department::{Department, DepartmentBody, NewDepartment};
pub use employee::{Employee, EmployeeBody, NewEmployee};
