use crate::db::models::DbTeamMember;
use crate::db::sqlite::SqlitePool;
use crate::error::CmsError;
use crate::types::content::TeamMemberPayload;

#[derive(Clone)]
pub struct TeamRepository {
    pool: SqlitePool,
}

impl TeamRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<DbTeamMember>, CmsError> {
        let rows = sqlx::query_as("SELECT id, name, title, image, icon FROM team ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    pub async fn create(&self, member: TeamMemberPayload) -> Result<DbTeamMember, CmsError> {
        let id = sqlx::query("INSERT INTO team (name, title, image, icon) VALUES (?, ?, ?, ?)")
            .bind(&member.name)
            .bind(&member.title)
            .bind(&member.image)
            .bind(&member.icon)
            .execute(&self.pool)
            .await?
            .last_insert_rowid();

        Ok(DbTeamMember {
            id,
            name: member.name,
            title: member.title,
            image: member.image,
            icon: member.icon,
        })
    }

    pub async fn update(&self, id: i64, member: TeamMemberPayload) -> Result<(), CmsError> {
        sqlx::query("UPDATE team SET name = ?, title = ?, image = ?, icon = ? WHERE id = ?")
            .bind(member.name)
            .bind(member.title)
            .bind(member.image)
            .bind(member.icon)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    pub async fn delete(&self, id: i64) -> Result<(), CmsError> {
        sqlx::query("DELETE FROM team WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
