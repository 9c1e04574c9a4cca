// launchdee-core/src/source/login_items.rs
use launchdee_common::config::Config;
use launchdee_common::error::Result;
use launchdee_common::model::LoginItem;
use tracing::debug;

use crate::reconcile::reconcile_login_item;
use crate::registry::{LoginItemRegistry, OverrideRegistry};

/// One reconciled `LoginItem` per registry entry, in registry order.
pub fn enumerate_login_items(config: &Config, overrides: &OverrideRegistry) -> Result<Vec<LoginItem>> {
    let path = config.login_items_registry_path();
    let registry = LoginItemRegistry::load(&path, config.registry_fallback)?;
    let items: Vec<LoginItem> = registry
        .entries()
        .iter()
        .map(|entry| reconcile_login_item(entry, overrides))
        .collect();
    debug!("Enumerated {} login items", items.len());
    Ok(items)
}
