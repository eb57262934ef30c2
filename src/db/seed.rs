//! Default content inserted at startup.
//!
//! Each step runs in its own transaction: the existence/count check and the
//! write it guards commit together, but steps are independent of each other.

use crate::db::sqlite::SqlitePool;
use crate::error::CmsError;
use tracing::info;

pub const ADMIN_USERNAME: &str = "admin";
pub const ADMIN_PASSWORD: &str = "admin123";
pub const ADMIN_NAME: &str = "Administrator";
pub const ADMIN_ROLE: &str = "admin";

/// (title, description, icon)
pub const DEFAULT_SERVICES: &[(&str, &str, &str)] = &[
    (
        "Web Development",
        "Fast, accessible websites built on modern frameworks and tuned for search.",
        "code",
    ),
    (
        "Brand Identity",
        "Logos, color systems and typography that make your business recognisable.",
        "palette",
    ),
    (
        "Digital Marketing",
        "Campaigns across search, social and email that turn visitors into customers.",
        "megaphone",
    ),
    (
        "Content Strategy",
        "Editorial planning and copywriting that keeps your audience coming back.",
        "file-text",
    ),
];

/// (name, title, image)
pub const DEFAULT_TEAM: &[(&str, &str, &str)] = &[
    ("Sarah Johnson", "Founder & CEO", "/images/team/sarah.jpg"),
    ("Michael Chen", "Lead Developer", "/images/team/michael.jpg"),
    ("Emily Rodriguez", "Creative Director", "/images/team/emily.jpg"),
];

/// Run all seed steps in order.
pub async fn run(pool: &SqlitePool) -> Result<(), CmsError> {
    ensure_admin(pool).await?;
    seed_services(pool).await?;
    seed_team(pool).await?;
    Ok(())
}

/// Insert the admin account, or restore its role if someone demoted it.
pub async fn ensure_admin(pool: &SqlitePool) -> Result<(), CmsError> {
    let mut tx = pool.begin().await?;

    let existing: Option<(i64,)> = sqlx::query_as("SELECT id FROM users WHERE username = ?")
        .bind(ADMIN_USERNAME)
        .fetch_optional(&mut *tx)
        .await?;

    match existing {
        Some((id,)) => {
            sqlx::query("UPDATE users SET role = ? WHERE id = ?")
                .bind(ADMIN_ROLE)
                .bind(id)
                .execute(&mut *tx)
                .await?;
            info!(user_id = id, "admin role enforced");
        }
        None => {
            sqlx::query("INSERT INTO users (username, password, name, role) VALUES (?, ?, ?, ?)")
                .bind(ADMIN_USERNAME)
                .bind(ADMIN_PASSWORD)
                .bind(ADMIN_NAME)
                .bind(ADMIN_ROLE)
                .execute(&mut *tx)
                .await?;
            info!("admin account created");
        }
    }

    tx.commit().await?;
    Ok(())
}

pub async fn seed_services(pool: &SqlitePool) -> Result<(), CmsError> {
    let mut tx = pool.begin().await?;

    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM services")
        .fetch_one(&mut *tx)
        .await?;
    if count > 0 {
        info!(count, "services present; skipping seed");
        return Ok(());
    }

    for &(title, description, icon) in DEFAULT_SERVICES {
        sqlx::query("INSERT INTO services (title, description, icon) VALUES (?, ?, ?)")
            .bind(title)
            .bind(description)
            .bind(icon)
            .execute(&mut *tx)
            .await?;
    }

    tx.commit().await?;
    info!(count = DEFAULT_SERVICES.len(), "seeded services");
    Ok(())
}

pub async fn seed_team(pool: &SqlitePool) -> Result<(), CmsError> {
    let mut tx = pool.begin().await?;

    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM team")
        .fetch_one(&mut *tx)
        .await?;
    if count > 0 {
        info!(count, "team present; skipping seed");
        return Ok(());
    }

    for &(name, title, image) in DEFAULT_TEAM {
        sqlx::query("INSERT INTO team (name, title, image) VALUES (?, ?, ?)")
            .bind(name)
            .bind(title)
            .bind(image)
            .execute(&mut *tx)
            .await?;
    }

    tx.commit().await?;
    info!(count = DEFAULT_TEAM.len(), "seeded team");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::sqlite::{connect, init_schema};
    use crate::db::{DbService, ServiceRepository, TeamRepository};
    use tempfile::TempDir;

    async fn fresh_pool() -> (TempDir, SqlitePool) {
        let dir = tempfile::tempdir().expect("create temp dir");
        let url = format!("sqlite:{}", dir.path().join("seed.sqlite").display());
        let pool = connect(&url).await.expect("connect");
        init_schema(&pool).await.expect("schema");
        (dir, pool)
    }

    #[tokio::test]
    async fn empty_services_get_exact_default_set() {
        let (_dir, pool) = fresh_pool().await;
        run(&pool).await.expect("seed");

        let services = ServiceRepository::new(pool.clone()).list().await.unwrap();
        let expected: Vec<(String, String, String, Option<String>)> = DEFAULT_SERVICES
            .iter()
            .map(|(t, d, i)| (t.to_string(), d.to_string(), i.to_string(), None))
            .collect();
        let actual: Vec<_> = services
            .into_iter()
            .map(|DbService { title, description, icon, file_url, .. }| {
                (title, description, icon, file_url)
            })
            .collect();
        assert_eq!(actual, expected);
    }

    #[tokio::test]
    async fn seeding_twice_does_not_duplicate() {
        let (_dir, pool) = fresh_pool().await;
        run(&pool).await.unwrap();
        run(&pool).await.unwrap();

        let team = TeamRepository::new(pool.clone()).list().await.unwrap();
        assert_eq!(team.len(), DEFAULT_TEAM.len());
        assert!(team.iter().all(|m| m.icon.is_none()));

        let (admins,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users WHERE username = 'admin'")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(admins, 1);
    }

    #[tokio::test]
    async fn demoted_admin_is_restored() {
        let (_dir, pool) = fresh_pool().await;
        run(&pool).await.unwrap();

        sqlx::query("UPDATE users SET role = 'editor' WHERE username = 'admin'")
            .execute(&pool)
            .await
            .unwrap();
        run(&pool).await.unwrap();

        let (role,): (String,) = sqlx::query_as("SELECT role FROM users WHERE username = 'admin'")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(role, ADMIN_ROLE);
    }

    #[tokio::test]
    async fn emptied_collection_is_reseeded() {
        let (_dir, pool) = fresh_pool().await;
        run(&pool).await.unwrap();
        sqlx::query("DELETE FROM team").execute(&pool).await.unwrap();

        run(&pool).await.unwrap();
        let team = TeamRepository::new(pool.clone()).list().await.unwrap();
        assert_eq!(team.len(), DEFAULT_TEAM.len());
        assert_eq!(team[0].name, DEFAULT_TEAM[0].0);
    }
}
