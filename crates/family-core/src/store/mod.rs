//! The family record store

mod family_structure;

pub use family_structure::FamilyStructure;
