//! Domain entities - core business objects

mod member;

pub use member::{FamilyMember, NewMember};
