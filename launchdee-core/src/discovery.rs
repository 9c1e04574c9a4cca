// launchdee-core/src/discovery.rs
//! A full discovery pass: enumerate, parse, reconcile, resolve. Results are plain values built
//! from scratch each time; nothing is cached between passes.

use std::path::PathBuf;

use launchdee_common::config::Config;
use launchdee_common::error::Result;
use launchdee_common::model::{LaunchAgent, LoginItem, Scope, TargetResolution};
use serde::Serialize;
use tracing::debug;

use crate::macos::AppLocator;
use crate::registry::OverrideRegistry;
use crate::resolve::TargetResolver;
use crate::source::{enumerate_launch_agents, enumerate_login_items, SkippedManifest};

#[derive(Debug, Clone, Serialize)]
pub struct AgentRecord {
    #[serde(flatten)]
    pub agent: LaunchAgent,
    pub manifest_path: PathBuf,
    pub target: TargetResolution,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct AgentDiscovery {
    pub agents: Vec<AgentRecord>,
    pub skipped: Vec<SkippedManifest>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginItemRecord {
    #[serde(flatten)]
    pub item: LoginItem,
    /// Installed application for `app_identifier`, when a locator was used and found one.
    pub app_path: Option<PathBuf>,
}

/// Both listings from one pass.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Snapshot {
    pub login_items: Vec<LoginItemRecord>,
    pub launch_agents: AgentDiscovery,
}

impl Snapshot {
    pub fn login_item(&self, label: &str) -> Option<&LoginItemRecord> {
        self.login_items
            .iter()
            .find(|r| r.item.service.label == label)
    }

    /// Every agent with this label, one per scope at most.
    pub fn agents_labelled<'a>(&'a self, label: &'a str) -> impl Iterator<Item = &'a AgentRecord> {
        self.launch_agents
            .agents
            .iter()
            .filter(move |r| r.agent.service.label == label)
    }
}

/// Scopes are enumerated in the order given. The override registry is read once up front; if it
/// is unavailable the whole pass fails.
pub fn discover_launch_agents(config: &Config, scopes: &[Scope]) -> Result<AgentDiscovery> {
    let overrides = OverrideRegistry::load(&config.override_registry_path(), config.registry_fallback)?;
    discover_launch_agents_with(config, scopes, &overrides)
}

fn discover_launch_agents_with(
    config: &Config,
    scopes: &[Scope],
    overrides: &OverrideRegistry,
) -> Result<AgentDiscovery> {
    let resolver = TargetResolver::new(config.working_dir.clone());
    let mut discovery = AgentDiscovery::default();

    for &scope in scopes {
        let listing = enumerate_launch_agents(config, scope, overrides)?;
        discovery
            .agents
            .extend(listing.agents.into_iter().map(|scoped| {
                let target = resolver.resolve(&scoped.agent);
                AgentRecord {
                    agent: scoped.agent,
                    manifest_path: scoped.manifest_path,
                    target,
                }
            }));
        discovery.skipped.extend(listing.skipped);
    }

    debug!(
        "Discovered {} launch agents ({} skipped)",
        discovery.agents.len(),
        discovery.skipped.len()
    );
    Ok(discovery)
}

pub fn discover_login_items(
    config: &Config,
    locator: Option<&dyn AppLocator>,
) -> Result<Vec<LoginItemRecord>> {
    let overrides = OverrideRegistry::load(&config.override_registry_path(), config.registry_fallback)?;
    discover_login_items_with(config, locator, &overrides)
}

fn discover_login_items_with(
    config: &Config,
    locator: Option<&dyn AppLocator>,
    overrides: &OverrideRegistry,
) -> Result<Vec<LoginItemRecord>> {
    let items = enumerate_login_items(config, overrides)?;
    Ok(items
        .into_iter()
        .map(|item| {
            let app_path = match (locator, item.app_identifier.as_deref()) {
                (Some(locator), Some(bundle_id)) => locator.locate(bundle_id),
                _ => None,
            };
            LoginItemRecord { item, app_path }
        })
        .collect())
}

/// Login items plus agents in every scope (user first), sharing one read of the override registry.
pub fn discover_all(config: &Config, locator: Option<&dyn AppLocator>) -> Result<Snapshot> {
    discover_scoped(config, &Scope::ALL, true, locator)
}

/// Agents in `scopes`, plus login items when `with_login_items` is set. Without login items the
/// login items registry is never read, so its absence cannot fail the pass.
pub fn discover_scoped(
    config: &Config,
    scopes: &[Scope],
    with_login_items: bool,
    locator: Option<&dyn AppLocator>,
) -> Result<Snapshot> {
    let overrides = OverrideRegistry::load(&config.override_registry_path(), config.registry_fallback)?;
    let login_items = if with_login_items {
        discover_login_items_with(config, locator, &overrides)?
    } else {
        Vec::new()
    };
    Ok(Snapshot {
        login_items,
        launch_agents: discover_launch_agents_with(config, scopes, &overrides)?,
    })
}
