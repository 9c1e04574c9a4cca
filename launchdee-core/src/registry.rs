// launchdee-core/src/registry.rs
//! The two centrally maintained launchd registries: the override (disabled) list and the
//! login items list. Both are read-only from our side.

use std::collections::HashMap;
use std::io;
use std::path::Path;

use launchdee_common::config::RegistryFallback;
use launchdee_common::error::{LaunchdeeError, Result};
use plist::{Dictionary, Value};
use tracing::{debug, warn};

use crate::manifest::read_plist_dictionary;

/// Label -> forced-disabled. `true` disables a service no matter what its manifest says.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverrideRegistry {
    entries: HashMap<String, bool>,
}

impl OverrideRegistry {
    pub fn load(path: &Path, fallback: RegistryFallback) -> Result<Self> {
        let Some(dict) = load_registry(path, fallback)? else {
            return Ok(Self::default());
        };

        let mut entries = HashMap::with_capacity(dict.len());
        for (label, value) in dict {
            match value.as_boolean() {
                Some(disabled) => {
                    entries.insert(label, disabled);
                }
                None => warn!(
                    "Ignoring override for {} in {}: value is not a boolean ({:?})",
                    label,
                    path.display(),
                    value
                ),
            }
        }
        debug!("Loaded {} overrides from {}", entries.len(), path.display());
        Ok(Self { entries })
    }

    /// The raw entry. `None` means the registry has no opinion on this label.
    pub fn get(&self, label: &str) -> Option<bool> {
        self.entries.get(label).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, bool)> for OverrideRegistry {
    fn from_iter<I: IntoIterator<Item = (String, bool)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// One raw login items registry entry, before reconciliation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginItemEntry {
    pub label: String,
    /// Bundle identifier or numeric placeholder, exactly as stored.
    pub raw_identifier: Option<String>,
}

/// Label -> identifier-or-placeholder, in the registry document's own order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginItemRegistry {
    entries: Vec<LoginItemEntry>,
}

impl LoginItemRegistry {
    pub fn load(path: &Path, fallback: RegistryFallback) -> Result<Self> {
        let Some(dict) = load_registry(path, fallback)? else {
            return Ok(Self::default());
        };

        let entries: Vec<LoginItemEntry> = dict
            .into_iter()
            .map(|(label, value)| {
                let raw_identifier = match value {
                    Value::String(s) => Some(s),
                    other => {
                        debug!("Login item {} has non-string identifier {:?}", label, other);
                        None
                    }
                };
                LoginItemEntry {
                    label,
                    raw_identifier,
                }
            })
            .collect();
        debug!("Loaded {} login items from {}", entries.len(), path.display());
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[LoginItemEntry] {
        &self.entries
    }
}

impl FromIterator<LoginItemEntry> for LoginItemRegistry {
    fn from_iter<I: IntoIterator<Item = LoginItemEntry>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// `Ok(None)` only when the file is absent and the fallback allows treating that as empty.
fn load_registry(path: &Path, fallback: RegistryFallback) -> Result<Option<Dictionary>> {
    debug!("Reading registry {}", path.display());
    match path.try_exists() {
        Ok(false) if fallback == RegistryFallback::Empty => {
            warn!(
                "Registry {} does not exist, treating it as empty",
                path.display()
            );
            return Ok(None);
        }
        Ok(false) => {
            return Err(LaunchdeeError::registry_unavailable(
                path,
                io::Error::from(io::ErrorKind::NotFound),
            ))
        }
        Ok(true) => {}
        Err(e) => return Err(LaunchdeeError::registry_unavailable(path, e)),
    }
    read_plist_dictionary(path)
        .map(Some)
        .map_err(|reason| LaunchdeeError::registry_unavailable(path, reason))
}
