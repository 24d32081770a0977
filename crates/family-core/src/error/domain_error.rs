//! Domain errors - error types for the domain layer

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Member not found")]
    MemberNotFound(u64),

    #[error("Member id {0} is already in use")]
    DuplicateMemberId(u64),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::MemberNotFound(_) => "UNKNOWN_MEMBER",
            Self::DuplicateMemberId(_) => "DUPLICATE_MEMBER_ID",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::MemberNotFound(_))
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::DuplicateMemberId(_))
    }
}
