//! Member service
//!
//! Translates validated requests into store operations and domain entities
//! into response DTOs.

use family_core::{DomainError, NewMember};
use tracing::{info, instrument};

use crate::dto::{CreateMemberRequest, MemberResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Member service
pub struct MemberService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> MemberService<'a> {
    /// Create a new MemberService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List every member, insertion order preserved
    #[instrument(skip(self))]
    pub fn list_members(&self) -> Vec<MemberResponse> {
        self.ctx
            .family()
            .get_all_members()
            .iter()
            .map(MemberResponse::from)
            .collect()
    }

    /// Look up one member by id
    #[instrument(skip(self))]
    pub fn find_member(&self, member_id: u64) -> Option<MemberResponse> {
        self.ctx
            .family()
            .get_member(member_id)
            .map(MemberResponse::from)
    }

    /// Add a member and return its stored shape
    ///
    /// The returned record carries the resolved id and the stamped family
    /// name. Validation has already happened at the request boundary; the
    /// only remaining failure is an explicit id collision.
    #[instrument(skip(self, request))]
    pub fn add_member(&self, request: CreateMemberRequest) -> ServiceResult<MemberResponse> {
        let mut family = self.ctx.family();
        let member = family.add_member(NewMember::from(request))?;

        info!(member_id = member.id, first_name = %member.first_name, "Member added");
        Ok(MemberResponse::from(member))
    }

    /// Remove the member with the given id
    #[instrument(skip(self))]
    pub fn remove_member(&self, member_id: u64) -> ServiceResult<()> {
        let mut family = self.ctx.family();
        if family.delete_member(member_id) {
            info!(member_id, "Member removed");
            Ok(())
        } else {
            Err(DomainError::MemberNotFound(member_id).into())
        }
    }
}
