use std::path::PathBuf;
use thiserror::Error;

/// Precondition failures. Each one aborts the current action before any
/// collaborator runs; the menu loop keeps going.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ActionError {
    #[error("This function requires root privileges.")]
    NotPrivileged,

    #[error("Invalid username '{0}'!")]
    InvalidUsername(String),

    #[error("User '{0}' already exists!")]
    UserExists(String),

    #[error("Directory '{}' does not exist!", .0.display())]
    MissingDirectory(PathBuf),

    #[error("Script '{}' does not exist!", .0.display())]
    MissingScript(PathBuf),

    #[error("Invalid time format!")]
    InvalidTimeFormat,

    #[error("Invalid key type '{0}'!")]
    InvalidKeyType(String),
}
