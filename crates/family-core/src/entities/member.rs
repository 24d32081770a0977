//! Member entity - one record in the family collection

use serde::Serialize;

/// A member of the family, identified by `id`
///
/// `id` and `last_name` are store-managed: the store resolves the id and
/// stamps its own family name onto every record at insertion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FamilyMember {
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
    pub age: u32,
    pub lucky_numbers: Vec<i64>,
}

impl FamilyMember {
    /// Full display name of the member
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Check whether a number is among the member's lucky numbers
    #[inline]
    pub fn has_lucky_number(&self, number: i64) -> bool {
        self.lucky_numbers.contains(&number)
    }
}

/// Insertion input for the store
///
/// Carries the caller-controlled fields of a member. `id` is optional; the
/// store assigns the next auto-generated id when it is absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMember {
    pub id: Option<u64>,
    pub first_name: String,
    pub age: u32,
    pub lucky_numbers: Vec<i64>,
}

impl NewMember {
    /// Create an insertion input with an auto-generated id
    pub fn new(first_name: impl Into<String>, age: u32, lucky_numbers: Vec<i64>) -> Self {
        Self {
            id: None,
            first_name: first_name.into(),
            age,
            lucky_numbers,
        }
    }

    /// Request a specific id instead of an auto-generated one
    #[must_use]
    pub fn with_id(mut self, id: u64) -> Self {
        self.id = Some(id);
        self
    }
}
