use serde::{Deserialize, Serialize};

use crate::db::PublicUser;

pub const DEFAULT_ROLE: &str = "editor";

#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub user: PublicUser,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewUser {
    pub username: String,
    pub password: String,
    pub name: String,
    #[serde(default)]
    pub role: Option<String>,
}

impl NewUser {
    pub fn role_or_default(&self) -> &str {
        self.role.as_deref().unwrap_or(DEFAULT_ROLE)
    }
}

/// Body of `PUT /api/users/:id`.
///
/// An absent or empty `password` keeps the stored one; an absent `role`
/// keeps the stored role.
#[derive(Debug, Clone, Deserialize)]
pub struct UserUpdate {
    pub username: String,
    #[serde(default)]
    pub password: Option<String>,
    pub name: String,
    #[serde(default)]
    pub role: Option<String>,
}

impl UserUpdate {
    pub fn new_password(&self) -> Option<&str> {
        self.password.as_deref().filter(|p| !p.is_empty())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServicePayload {
    pub title: String,
    pub description: String,
    pub icon: String,
    #[serde(default)]
    pub file_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TeamMemberPayload {
    pub name: String,
    pub title: String,
    pub image: String,
    #[serde(default)]
    pub icon: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}

#[derive(Debug, Serialize)]
#[allow(non_snake_case)]
pub struct UploadResponse {
    pub success: bool,
    pub imageUrl: String,
}

#[derive(Debug, Serialize)]
pub struct UploadListResponse {
    pub success: bool,
    pub files: Vec<String>,
}
