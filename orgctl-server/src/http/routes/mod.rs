//! Route handlers organized by resource

use serde::Serialize;

pub mod departments;
pub mod docs;
pub mod employees;
pub mod health;

/// Acknowledgement body for updates and deletes
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

impl MessageResponse {
    pub fn new(message: &'static str) -> Self {
        Self { message }
    }
}
