// launchdee-core/src/reconcile.rs
//! Merges the independent "disabled" authorities into one verdict per service.
//!
//! Disabled wins: a service is enabled only if *no* authority disables it. Every default for a
//! missing key lives here, not at the read sites.

use launchdee_common::model::{LaunchAgent, LoginItem, Scope, ServiceTarget};

use crate::manifest::{keys, ManifestDocument};
use crate::registry::{LoginItemEntry, OverrideRegistry};

/// No override entry means no override.
pub const DEFAULT_DISABLED_BY_OVERRIDE: bool = false;
/// A manifest without `Disabled` does not disable itself.
pub const DEFAULT_SELF_DECLARED_DISABLED: bool = false;
/// A manifest without `RunAtLoad` does not run at load.
pub const DEFAULT_RUN_AT_LOAD: bool = false;

/// Bundle identifiers are reverse-DNS; the registry's numeric placeholders have no dot.
const IDENTIFIER_SEPARATOR: char = '.';

pub fn disabled_by_override(overrides: &OverrideRegistry, label: &str) -> bool {
    overrides
        .get(label)
        .unwrap_or(DEFAULT_DISABLED_BY_OVERRIDE)
}

/// Keeps `raw` only when it looks like a real bundle identifier.
///
/// Dotless identifiers are dropped even when genuine; that matches what launchd tooling
/// has always shown for these entries.
pub fn prune_app_identifier(raw: Option<&str>) -> Option<String> {
    raw.filter(|id| id.contains(IDENTIFIER_SEPARATOR))
        .map(String::from)
}

pub fn effective_enabled(disabled_by_override: bool, self_declared_disabled: bool) -> bool {
    !(disabled_by_override || self_declared_disabled)
}

pub fn reconcile_login_item(entry: &LoginItemEntry, overrides: &OverrideRegistry) -> LoginItem {
    let disabled_by_override = disabled_by_override(overrides, &entry.label);
    LoginItem {
        service: ServiceTarget::new(entry.label.clone()),
        app_identifier: prune_app_identifier(entry.raw_identifier.as_deref()),
        disabled_by_override,
        effective_enabled: !disabled_by_override,
    }
}

pub fn reconcile_launch_agent(
    scope: Scope,
    label: &str,
    manifest: &ManifestDocument,
    overrides: &OverrideRegistry,
) -> LaunchAgent {
    let disabled_by_override = disabled_by_override(overrides, label);
    let self_declared_disabled = manifest.bool(keys::DISABLED);
    let effective_enabled = effective_enabled(
        disabled_by_override,
        self_declared_disabled.unwrap_or(DEFAULT_SELF_DECLARED_DISABLED),
    );

    LaunchAgent {
        service: ServiceTarget::new(label),
        scope,
        run_at_load: manifest
            .bool(keys::RUN_AT_LOAD)
            .unwrap_or(DEFAULT_RUN_AT_LOAD),
        program: manifest.string(keys::PROGRAM).map(String::from),
        program_arguments: manifest.string_list(keys::PROGRAM_ARGUMENTS),
        self_declared_disabled,
        disabled_by_override,
        effective_enabled,
    }
}
