// launchdee-core/src/source/launch_agents.rs
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use launchdee_common::config::Config;
use launchdee_common::error::{LaunchdeeError, Result};
use launchdee_common::model::{LaunchAgent, Scope};
use serde::Serialize;
use tracing::{debug, warn};

use crate::manifest::read_manifest;
use crate::reconcile::reconcile_launch_agent;
use crate::registry::OverrideRegistry;

const MANIFEST_SUFFIX: &str = ".plist";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestFile {
    pub label: String,
    pub path: PathBuf,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScopedAgent {
    #[serde(flatten)]
    pub agent: LaunchAgent,
    pub manifest_path: PathBuf,
}

/// A manifest that failed to parse and was left out of the listing.
#[derive(Debug, Clone, Serialize)]
pub struct SkippedManifest {
    pub scope: Scope,
    pub label: String,
    pub path: PathBuf,
    pub reason: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ScopeListing {
    pub agents: Vec<ScopedAgent>,
    pub skipped: Vec<SkippedManifest>,
}

/// Lists `*.plist` directly inside `dir`, in filesystem order. A missing directory is empty.
pub fn list_manifest_files(dir: &Path) -> Result<Vec<ManifestFile>> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!("Launch agents directory {} does not exist", dir.display());
            return Ok(Vec::new());
        }
        Err(e) => return Err(LaunchdeeError::from(e)),
    };

    let mut files = Vec::new();
    for entry_res in entries {
        let entry = match entry_res {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Error reading entry in {}: {}", dir.display(), e);
                continue;
            }
        };
        let file_name = entry.file_name();
        let Some(name) = file_name.to_str() else {
            warn!("Skipping non UTF-8 file name {:?} in {}", file_name, dir.display());
            continue;
        };
        match name.strip_suffix(MANIFEST_SUFFIX) {
            Some(label) if !label.is_empty() => files.push(ManifestFile {
                label: label.to_string(),
                path: entry.path(),
            }),
            _ => continue,
        }
    }
    Ok(files)
}

/// Reads and reconciles every manifest in one scope's directory.
///
/// A manifest that fails to parse is logged and recorded in `skipped`; it never fails the scope.
pub fn enumerate_launch_agents(
    config: &Config,
    scope: Scope,
    overrides: &OverrideRegistry,
) -> Result<ScopeListing> {
    let dir = config.agents_dir(scope);
    debug!("Enumerating {} launch agents in {}", scope, dir.display());

    let mut listing = ScopeListing::default();
    for file in list_manifest_files(dir)? {
        match read_manifest(&file.path) {
            Ok(manifest) => {
                let agent = reconcile_launch_agent(scope, &file.label, &manifest, overrides);
                listing.agents.push(ScopedAgent {
                    agent,
                    manifest_path: file.path,
                });
            }
            Err(e) => {
                warn!("Skipping launch agent {}, got error while parsing: {}", file.label, e);
                let reason = match e {
                    LaunchdeeError::Parse { reason, .. } => reason,
                    other => other.to_string(),
                };
                listing.skipped.push(SkippedManifest {
                    scope,
                    label: file.label,
                    path: file.path,
                    reason,
                });
            }
        }
    }
    Ok(listing)
}
