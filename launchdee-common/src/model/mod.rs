// launchdee-common/src/model/mod.rs
// Value objects materialized by a discovery pass and discarded at the next one.
pub mod launch_agent;
pub mod login_item;
pub mod service;
pub mod target;

// Re-export
pub use launch_agent::{ExecutionCandidate, LaunchAgent};
pub use login_item::LoginItem;
pub use service::{BareLabel, QualifiedTarget, Scope, ServiceTarget, Uid};
pub use target::{ResolvedTarget, TargetResolution, UnresolvedReason};
