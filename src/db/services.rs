use crate::db::models::DbService;
use crate::db::sqlite::SqlitePool;
use crate::error::CmsError;
use crate::types::content::ServicePayload;

#[derive(Clone)]
pub struct ServiceRepository {
    pool: SqlitePool,
}

impl ServiceRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<DbService>, CmsError> {
        let rows = sqlx::query_as(
            "SELECT id, title, description, icon, file_url FROM services ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn create(&self, service: ServicePayload) -> Result<DbService, CmsError> {
        let id = sqlx::query(
            "INSERT INTO services (title, description, icon, file_url) VALUES (?, ?, ?, ?)",
        )
        .bind(&service.title)
        .bind(&service.description)
        .bind(&service.icon)
        .bind(&service.file_url)
        .execute(&self.pool)
        .await?
        .last_insert_rowid();

        Ok(DbService {
            id,
            title: service.title,
            description: service.description,
            icon: service.icon,
            file_url: service.file_url,
        })
    }

    pub async fn update(&self, id: i64, service: ServicePayload) -> Result<(), CmsError> {
        sqlx::query(
            "UPDATE services SET title = ?, description = ?, icon = ?, file_url = ? WHERE id = ?",
        )
        .bind(service.title)
        .bind(service.description)
        .bind(service.icon)
        .bind(service.file_url)
        .bind(id)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    pub async fn delete(&self, id: i64) -> Result<(), CmsError> {
        sqlx::query("DELETE FROM services WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
