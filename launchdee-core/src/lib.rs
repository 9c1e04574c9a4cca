// launchdee-core/src/lib.rs

pub mod control;
pub mod discovery;
pub mod macos;
pub mod manifest;
pub mod reconcile;
pub mod registry;
pub mod resolve;
pub mod source;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export key types for easier use by the CLI crate
pub use control::{Launchctl, ServiceController, Toggle};
pub use discovery::{
    discover_all, discover_launch_agents, discover_login_items, discover_scoped, AgentDiscovery,
    AgentRecord, LoginItemRecord, Snapshot,
};
pub use macos::{AppLocator, BundleInfo, SpotlightLocator};
pub use registry::{LoginItemRegistry, OverrideRegistry};
pub use resolve::TargetResolver;
