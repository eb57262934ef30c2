//! Services and team members: plain CRUD with no uniqueness rules.
//! Update and delete on an unknown id succeed without touching any row.

use axum::{Json, extract::State};

use crate::db::{DbService, DbTeamMember};
use crate::middleware::record_id::RecordId;
use crate::types::content::{ServicePayload, SuccessResponse, TeamMemberPayload};
use crate::{CmsError, router::CmsState};

pub async fn list_services(State(state): State<CmsState>) -> Result<Json<Vec<DbService>>, CmsError> {
    Ok(Json(state.services.list().await?))
}

pub async fn create_service(
    State(state): State<CmsState>,
    Json(service): Json<ServicePayload>,
) -> Result<Json<DbService>, CmsError> {
    Ok(Json(state.services.create(service).await?))
}

pub async fn update_service(
    State(state): State<CmsState>,
    RecordId(id): RecordId,
    Json(service): Json<ServicePayload>,
) -> Result<Json<SuccessResponse>, CmsError> {
    state.services.update(id, service).await?;
    Ok(Json(SuccessResponse::ok()))
}

pub async fn delete_service(
    State(state): State<CmsState>,
    RecordId(id): RecordId,
) -> Result<Json<SuccessResponse>, CmsError> {
    state.services.delete(id).await?;
    Ok(Json(SuccessResponse::ok()))
}

pub async fn list_team(State(state): State<CmsState>) -> Result<Json<Vec<DbTeamMember>>, CmsError> {
    Ok(Json(state.team.list().await?))
}

pub async fn create_team_member(
    State(state): State<CmsState>,
    Json(member): Json<TeamMemberPayload>,
) -> Result<Json<DbTeamMember>, CmsError> {
    Ok(Json(state.team.create(member).await?))
}

pub async fn update_team_member(
    State(state): State<CmsState>,
    RecordId(id): RecordId,
    Json(member): Json<TeamMemberPayload>,
) -> Result<Json<SuccessResponse>, CmsError> {
    state.team.update(id, member).await?;
    Ok(Json(SuccessResponse::ok()))
}

pub async fn delete_team_member(
    State(state): State<CmsState>,
    RecordId(id): RecordId,
) -> Result<Json<SuccessResponse>, CmsError> {
    state.team.delete(id).await?;
    Ok(Json(SuccessResponse::ok()))
}
