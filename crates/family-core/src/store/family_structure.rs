//! Family structure - owns the member collection and the id counter
//!
//! All mutation and lookup of member records passes through this store.

use crate::entities::{FamilyMember, NewMember};
use crate::error::DomainError;

/// Seed members present in every freshly constructed store
const SEED_MEMBERS: [(&str, u32, &[i64]); 3] = [
    ("John", 33, &[7, 13, 22]),
    ("Jane", 35, &[10, 14, 3]),
    ("Jimmy", 5, &[1]),
];

/// In-memory store of family member records
///
/// Owns an insertion-ordered collection of members and a monotonically
/// increasing id counter. Ids are never reused, even after deletions.
#[derive(Debug, Clone)]
pub struct FamilyStructure {
    last_name: String,
    next_id: u64,
    members: Vec<FamilyMember>,
}

impl FamilyStructure {
    /// Create a store seeded with the three initial members (ids 1-3)
    pub fn new(last_name: impl Into<String>) -> Self {
        let mut store = Self::empty(last_name);
        for (first_name, age, lucky_numbers) in SEED_MEMBERS {
            let id = store.generate_id();
            let record = store.stamp(id, NewMember::new(first_name, age, lucky_numbers.to_vec()));
            store.members.push(record);
        }
        store
    }

    /// Create a store with no members
    pub fn empty(last_name: impl Into<String>) -> Self {
        Self {
            last_name: last_name.into(),
            next_id: 1,
            members: Vec::new(),
        }
    }

    /// Add a member to the collection
    ///
    /// Resolves the id (auto-generated when the input carries none), stamps
    /// the store's family name onto the record, and appends it. An explicit
    /// id that matches an existing member is rejected; an accepted explicit
    /// id advances the counter so auto-generated ids can never collide.
    pub fn add_member(&mut self, member: NewMember) -> Result<FamilyMember, DomainError> {
        let id = match member.id {
            Some(id) => {
                if self.members.iter().any(|m| m.id == id) {
                    return Err(DomainError::DuplicateMemberId(id));
                }
                self.next_id = self.next_id.max(id + 1);
                id
            }
            None => self.generate_id(),
        };

        let record = self.stamp(id, member);
        self.members.push(record.clone());
        Ok(record)
    }

    /// Look up a member by id
    pub fn get_member(&self, id: u64) -> Option<&FamilyMember> {
        self.members.iter().find(|m| m.id == id)
    }

    /// Remove the member with the given id
    ///
    /// Returns `false` when no member has the id. Scanning stops at the
    /// first match; ids are unique so later elements need no inspection.
    pub fn delete_member(&mut self, id: u64) -> bool {
        match self.members.iter().position(|m| m.id == id) {
            Some(index) => {
                self.members.remove(index);
                true
            }
            None => false,
        }
    }

    /// All members, insertion order preserved
    pub fn get_all_members(&self) -> &[FamilyMember] {
        &self.members
    }

    /// The family name stamped onto every member
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Number of members currently in the store
    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    /// Whether the store holds no members
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Return the current counter value and advance it
    fn generate_id(&mut self) -> u64 {
        let generated = self.next_id;
        self.next_id += 1;
        generated
    }

    /// Materialize a full record from insertion input and a resolved id
    fn stamp(&self, id: u64, member: NewMember) -> FamilyMember {
        FamilyMember {
            id,
            first_name: member.first_name,
            last_name: self.last_name.clone(),
            age: member.age,
            lucky_numbers: member.lucky_numbers,
        }
    }
}
