pub mod config;
pub mod error;
pub mod routes;

pub use config::{Environment, SiteConfig};
pub use error::ConfigError;
pub use routes::build_router;
