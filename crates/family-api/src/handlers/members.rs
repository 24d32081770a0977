//! Member handlers
//!
//! Endpoints for the family member collection.

use axum::{
    extract::{Path, State},
    Json,
};
use family_service::{CreateMemberRequest, DeleteConfirmation, MemberResponse, MemberService};

use crate::extractors::ValidatedJson;
use crate::response::{ApiError, ApiResult};
use crate::state::AppState;

/// List all members
///
/// GET /members
pub async fn list_members(State(state): State<AppState>) -> Json<Vec<MemberResponse>> {
    let service = MemberService::new(state.service_context());
    Json(service.list_members())
}

/// Get one member by id
///
/// GET /members/{member_id}
pub async fn get_member(
    State(state): State<AppState>,
    Path(member_id): Path<u64>,
) -> ApiResult<Json<MemberResponse>> {
    let service = MemberService::new(state.service_context());
    match service.find_member(member_id) {
        Some(member) => Ok(Json(member)),
        None => Err(ApiError::MemberNotFound),
    }
}

/// Add a member
///
/// POST /members
///
/// Returns the stored shape of the record: the store-stamped `last_name`
/// and the resolved `id` (auto-generated when the body carries none).
pub async fn add_member(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateMemberRequest>,
) -> ApiResult<Json<MemberResponse>> {
    let service = MemberService::new(state.service_context());
    let member = service.add_member(request)?;
    Ok(Json(member))
}

/// Delete a member by id
///
/// DELETE /members/{member_id}
pub async fn delete_member(
    State(state): State<AppState>,
    Path(member_id): Path<u64>,
) -> ApiResult<Json<DeleteConfirmation>> {
    let service = MemberService::new(state.service_context());
    service.remove_member(member_id)?;
    Ok(Json(DeleteConfirmation::confirmed()))
}
