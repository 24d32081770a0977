//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.

use serde::Serialize;

/// Member record as returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemberResponse {
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
    pub age: u32,
    pub lucky_numbers: Vec<i64>,
}

/// Confirmation body for a successful delete
#[derive(Debug, Serialize)]
pub struct DeleteConfirmation {
    pub done: bool,
}

impl DeleteConfirmation {
    /// Confirmation for a completed deletion
    pub fn confirmed() -> Self {
        Self { done: true }
    }
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self { status: "ok" }
    }
}
