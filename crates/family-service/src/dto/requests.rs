//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input
//! validation. Field presence and integer-ness are enforced by typed
//! deserialization; `Validate` covers the range rules on top.

use serde::Deserialize;
use validator::Validate;

/// Create member request
///
/// `last_name` is deliberately absent: the store stamps the family name
/// onto every record at insertion. `id` is optional; the store assigns the
/// next auto-generated id when it is omitted.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateMemberRequest {
    pub first_name: String,

    #[validate(range(min = 1, message = "Age must be a positive integer"))]
    pub age: u32,

    pub lucky_numbers: Vec<i64>,

    pub id: Option<u64>,
}
