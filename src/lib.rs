pub mod config;
pub mod error;
pub mod router;
pub mod middleware;
pub mod handlers;
pub mod service;
pub mod db;
pub mod types;

pub use error::CmsError;
pub use router::{CmsState, build_app};
