// launchdee-common/src/lib.rs
pub mod config;
pub mod error;
pub mod model;

// Re-export key types
pub use config::{Config, RegistryFallback};
pub use error::{LaunchdeeError, Result};
pub use model::{
    BareLabel, ExecutionCandidate, LaunchAgent, LoginItem, QualifiedTarget, ResolvedTarget, Scope,
    ServiceTarget, TargetResolution, Uid, UnresolvedReason,
};
