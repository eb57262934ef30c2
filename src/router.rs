use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post, put},
};
use std::sync::Arc;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::{Config, Mode};
use crate::CmsError;
use crate::db::{ServiceRepository, SqlitePool, TeamRepository, UserRepository, seed, sqlite};
use crate::handlers::{content, uploads, users};
use crate::service::auth::{Authenticator, PlaintextAuthenticator};
use crate::service::uploads::{UPLOADS_URL_PREFIX, UploadStore};

/// Dependencies injected into every handler.
#[derive(Clone)]
pub struct CmsState {
    pub users: UserRepository,
    pub services: ServiceRepository,
    pub team: TeamRepository,
    pub auth: Arc<dyn Authenticator>,
    pub uploads: UploadStore,
}

impl CmsState {
    /// Wire repositories over `pool` with the plaintext authenticator.
    pub fn new(pool: SqlitePool, uploads: UploadStore) -> Self {
        let users = UserRepository::new(pool.clone());
        Self {
            auth: Arc::new(PlaintextAuthenticator::new(users.clone())),
            users,
            services: ServiceRepository::new(pool.clone()),
            team: TeamRepository::new(pool),
            uploads,
        }
    }
}

pub fn cms_router(state: CmsState, cfg: &Config) -> Router {
    let upload_dir = state.uploads.dir().to_path_buf();

    let api = Router::new()
        .route("/login", post(users::login))
        .route("/users", get(users::list_users).post(users::create_user))
        .route(
            "/users/{id}",
            put(users::update_user).delete(users::delete_user),
        )
        .route(
            "/services",
            get(content::list_services).post(content::create_service),
        )
        .route(
            "/services/{id}",
            put(content::update_service).delete(content::delete_service),
        )
        .route("/team", get(content::list_team).post(content::create_team_member))
        .route(
            "/team/{id}",
            put(content::update_team_member).delete(content::delete_team_member),
        )
        .route(
            "/upload",
            post(uploads::upload_file)
                .layer(DefaultBodyLimit::max(cfg.storage.max_upload_bytes)),
        )
        .route("/uploads", get(uploads::list_uploads));

    let mut app = Router::new()
        .nest("/api", api)
        .nest_service(UPLOADS_URL_PREFIX, ServeDir::new(upload_dir));

    if cfg.basic.mode == Mode::Production {
        let static_dir = &cfg.storage.static_dir;
        if static_dir.exists() {
            info!(path = %static_dir.display(), "serving frontend build");
            let index_html = static_dir.join("index.html");
            app = app.fallback_service(ServeDir::new(static_dir).fallback(ServeFile::new(index_html)));
        } else {
            info!(path = %static_dir.display(), "frontend build not found; serving API only");
        }
    }

    app.layer(TraceLayer::new_for_http()).with_state(state)
}

/// Startup sequence: upload dir, data file, schema, seed, then the router.
pub async fn build_app(cfg: &Config) -> Result<Router, CmsError> {
    let uploads = UploadStore::new(&cfg.storage.upload_dir, cfg.storage.io_timeout());
    uploads.ensure_dir()?;

    let pool = sqlite::connect(&cfg.storage.database_url).await?;
    sqlite::init_schema(&pool).await?;
    seed::run(&pool).await?;
    info!(database_url = %cfg.storage.database_url, "database ready");

    Ok(cms_router(CmsState::new(pool, uploads), cfg))
}
