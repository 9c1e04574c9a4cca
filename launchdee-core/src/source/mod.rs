// launchdee-core/src/source/mod.rs
pub mod launch_agents;
pub mod login_items;

pub use launch_agents::{
    enumerate_launch_agents, list_manifest_files, ManifestFile, ScopeListing, ScopedAgent,
    SkippedManifest,
};
pub use login_items::enumerate_login_items;
