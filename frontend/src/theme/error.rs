use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ThemeError {
    #[error("unknown theme `{0}`")]
    UnknownTheme(String),
    #[error("local storage is not available")]
    StorageUnavailable,
    #[error("storage operation failed: {0}")]
    Storage(String),
}
