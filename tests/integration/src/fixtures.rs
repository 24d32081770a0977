//! Test fixtures and data generators
//!
//! Provides reusable request builders and response mirrors for
//! integration tests.

use serde::{Deserialize, Serialize};

/// Create member request
#[derive(Debug, Serialize)]
pub struct CreateMemberRequest {
    pub first_name: String,
    pub age: u32,
    pub lucky_numbers: Vec<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
}

impl CreateMemberRequest {
    pub fn margaret() -> Self {
        Self {
            first_name: "Margaret".to_string(),
            age: 60,
            lucky_numbers: vec![4],
            id: None,
        }
    }

    #[must_use]
    pub fn with_id(mut self, id: u64) -> Self {
        self.id = Some(id);
        self
    }
}

/// Member record response
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MemberRecord {
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
    pub age: u32,
    pub lucky_numbers: Vec<i64>,
}

/// Delete confirmation response
#[derive(Debug, Deserialize)]
pub struct DeleteConfirmation {
    pub done: bool,
}

/// Body of the GET-one-member miss
#[derive(Debug, Deserialize)]
pub struct NotFoundBody {
    pub error: String,
}

/// Generic error response body
#[derive(Debug, Deserialize)]
pub struct MessageBody {
    pub message: String,
}

/// Health check response
#[derive(Debug, Deserialize)]
pub struct HealthBody {
    pub status: String,
}
