//! Mappers between domain entities and DTOs

use family_core::{FamilyMember, NewMember};

use super::requests::CreateMemberRequest;
use super::responses::MemberResponse;

impl From<&FamilyMember> for MemberResponse {
    fn from(member: &FamilyMember) -> Self {
        Self {
            id: member.id,
            first_name: member.first_name.clone(),
            last_name: member.last_name.clone(),
            age: member.age,
            lucky_numbers: member.lucky_numbers.clone(),
        }
    }
}

impl From<FamilyMember> for MemberResponse {
    fn from(member: FamilyMember) -> Self {
        Self {
            id: member.id,
            first_name: member.first_name,
            last_name: member.last_name,
            age: member.age,
            lucky_numbers: member.lucky_numbers,
        }
    }
}

impl From<CreateMemberRequest> for NewMember {
    fn from(request: CreateMemberRequest) -> Self {
        Self {
            id: request.id,
            first_name: request.first_name,
            age: request.age,
            lucky_numbers: request.lucky_numbers,
        }
    }
}
