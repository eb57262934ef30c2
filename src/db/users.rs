use crate::db::models::{DbUser, PublicUser};
use crate::db::sqlite::SqlitePool;
use crate::error::CmsError;
use crate::types::content::{DEFAULT_ROLE, NewUser, UserUpdate};

#[derive(Clone)]
pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<PublicUser>, CmsError> {
        let rows = sqlx::query_as(
            "SELECT id, username, name, COALESCE(role, 'editor') AS role FROM users ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Full row including the stored password, for credential checks only.
    pub async fn find_with_password(&self, username: &str) -> Result<Option<DbUser>, CmsError> {
        let row = sqlx::query_as(
            r#"SELECT id, username, password, name, COALESCE(role, 'editor') AS role
               FROM users WHERE username = ?"#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    pub async fn create(&self, user: NewUser) -> Result<PublicUser, CmsError> {
        let role = user.role_or_default().to_string();
        let id = sqlx::query("INSERT INTO users (username, password, name, role) VALUES (?, ?, ?, ?)")
            .bind(&user.username)
            .bind(&user.password)
            .bind(&user.name)
            .bind(&role)
            .execute(&self.pool)
            .await
            .map_err(CmsError::from_user_write)?
            .last_insert_rowid();

        Ok(PublicUser {
            id,
            username: user.username,
            name: user.name,
            role,
        })
    }

    /// Overwrite username and name; password and role only when supplied.
    /// Updating an unknown id affects no rows and is not an error.
    pub async fn update(&self, id: i64, user: UserUpdate) -> Result<(), CmsError> {
        sqlx::query(
            r#"UPDATE users SET
                username = ?,
                name = ?,
                role = COALESCE(?, role, ?),
                password = COALESCE(?, password)
              WHERE id = ?"#,
        )
        .bind(&user.username)
        .bind(&user.name)
        .bind(user.role.as_deref())
        .bind(DEFAULT_ROLE)
        .bind(user.new_password())
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(CmsError::from_user_write)?;
        Ok(())
    }

    pub async fn delete(&self, id: i64) -> Result<(), CmsError> {
        sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
