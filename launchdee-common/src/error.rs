use std::path::PathBuf;
use std::sync::Arc;

use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum LaunchdeeError {
    #[error("I/O Error: {0}")]
    Io(#[from] Arc<std::io::Error>),

    #[error("Property List Error: {0}")]
    Plist(#[from] Arc<plist::Error>),

    #[error("JSON Error: {0}")]
    Json(#[from] Arc<serde_json::Error>),

    #[error("Configuration Error: {0}")]
    Config(String),

    /// A single manifest could not be read. Enumerators isolate this per item.
    #[error("Parsing Error in {}: {reason}", .path.display())]
    Parse { path: PathBuf, reason: String },

    /// The override or login items registry is missing or corrupt. Aborts a discovery pass.
    #[error("Registry unavailable at {}: {reason}", .path.display())]
    RegistryUnavailable { path: PathBuf, reason: String },

    /// The external enable/disable command exited unsuccessfully.
    #[error("launchctl {verb} {target} failed ({status}): {diagnostic}")]
    Action {
        verb: String,
        target: String,
        status: String,
        diagnostic: String,
    },

    #[error("Resource Not Found: {0}")]
    NotFound(String),

    #[error("Failed to execute command: {0}")]
    CommandExecError(String),

    #[error("Generic Error: {0}")]
    Generic(String),
}

impl LaunchdeeError {
    pub fn parse(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Self::Parse {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    pub fn registry_unavailable(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Self::RegistryUnavailable {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}

impl From<std::io::Error> for LaunchdeeError {
    fn from(err: std::io::Error) -> Self {
        LaunchdeeError::Io(Arc::new(err))
    }
}

impl From<plist::Error> for LaunchdeeError {
    fn from(err: plist::Error) -> Self {
        LaunchdeeError::Plist(Arc::new(err))
    }
}

impl From<serde_json::Error> for LaunchdeeError {
    fn from(err: serde_json::Error) -> Self {
        LaunchdeeError::Json(Arc::new(err))
    }
}

pub type Result<T> = std::result::Result<T, LaunchdeeError>;
