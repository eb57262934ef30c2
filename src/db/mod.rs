//! Database module: schema management, seeding and one repository per collection.
//!
//! Layout:
//! - `schema.rs`: SQL DDL and the list of columns added after the first release
//! - `sqlite.rs`: pool setup and the self-healing schema pass
//! - `seed.rs`: default content and the admin account
//! - `models.rs`: Rust structs mirroring DB rows
//! - `users.rs`, `services.rs`, `team.rs`: per-collection repositories

pub mod models;
pub mod schema;
pub mod seed;
pub mod services;
pub mod sqlite;
pub mod team;
pub mod users;

pub use models::{DbService, DbTeamMember, DbUser, PublicUser};
pub use schema::SQLITE_INIT;
pub use services::ServiceRepository;
pub use sqlite::SqlitePool;
pub use team::TeamRepository;
pub use users::UserRepository;
