//! Service layer - business logic on top of the family store

mod context;
mod error;
mod member;

pub use context::ServiceContext;
pub use error::{ServiceError, ServiceResult};
pub use member::MemberService;
