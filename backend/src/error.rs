use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("ENVIRONMENT must be development, staging or production, got `{0}`")]
    InvalidEnvironment(String),
    #[error("PORT must be a port number, got `{0}`")]
    InvalidPort(String),
    #[error("BIND_ADDR must be an IP address, got `{0}`")]
    InvalidBindAddr(String),
    #[error("static directory {0} does not exist, build the frontend with `trunk build --release` first")]
    MissingStaticDir(PathBuf),
}
