use axum::{Json, extract::State};
use tracing::info;

use crate::db::PublicUser;
use crate::middleware::record_id::RecordId;
use crate::types::content::{LoginRequest, LoginResponse, NewUser, SuccessResponse, UserUpdate};
use crate::{CmsError, router::CmsState};

/// POST /api/login -> public user fields on an exact username/password match.
pub async fn login(
    State(state): State<CmsState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, CmsError> {
    let user = state
        .auth
        .authenticate(&req.username, &req.password)
        .await?
        .ok_or(CmsError::InvalidCredentials)?;

    info!(user_id = user.id, "login succeeded");
    Ok(Json(LoginResponse {
        success: true,
        user,
    }))
}

pub async fn list_users(State(state): State<CmsState>) -> Result<Json<Vec<PublicUser>>, CmsError> {
    Ok(Json(state.users.list().await?))
}

pub async fn create_user(
    State(state): State<CmsState>,
    Json(user): Json<NewUser>,
) -> Result<Json<PublicUser>, CmsError> {
    let created = state.users.create(user).await?;
    info!(user_id = created.id, role = %created.role, "user created");
    Ok(Json(created))
}

pub async fn update_user(
    State(state): State<CmsState>,
    RecordId(id): RecordId,
    Json(user): Json<UserUpdate>,
) -> Result<Json<SuccessResponse>, CmsError> {
    state.users.update(id, user).await?;
    Ok(Json(SuccessResponse::ok()))
}

pub async fn delete_user(
    State(state): State<CmsState>,
    RecordId(id): RecordId,
) -> Result<Json<SuccessResponse>, CmsError> {
    state.users.delete(id).await?;
    Ok(Json(SuccessResponse::ok()))
}
