use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Full `users` row. Only the authenticator reads this; everything that
/// leaves the process goes through [`PublicUser`].
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct DbUser {
    pub id: i64,
    pub username: String,
    pub password: String,
    pub name: String,
    pub role: String,
}

/// User projection without the password.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct PublicUser {
    pub id: i64,
    pub username: String,
    pub name: String,
    pub role: String,
}

impl From<DbUser> for PublicUser {
    fn from(u: DbUser) -> Self {
        Self {
            id: u.id,
            username: u.username,
            name: u.name,
            role: u.role,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct DbService {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub file_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct DbTeamMember {
    pub id: i64,
    pub name: String,
    pub title: String,
    pub image: String,
    pub icon: Option<String>,
}
