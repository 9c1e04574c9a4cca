// launchdee-core/src/macos/mod.rs
//! Lookups answered by the rest of macOS rather than by launchd's own files.
pub mod bundle;
pub mod spotlight;

pub use bundle::BundleInfo;
pub use spotlight::{AppLocator, SpotlightLocator};
