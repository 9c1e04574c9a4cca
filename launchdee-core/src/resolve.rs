// launchdee-core/src/resolve.rs
//! Picks the one path that best represents what a launch agent runs.

use std::fs;
use std::path::{Path, PathBuf};

use launchdee_common::model::{
    ExecutionCandidate, LaunchAgent, ResolvedTarget, TargetResolution, UnresolvedReason,
};
use tracing::debug;

const BUNDLE_SUFFIX: &str = ".app";

#[derive(Debug, Clone)]
pub struct TargetResolver {
    working_dir: Option<PathBuf>,
}

impl TargetResolver {
    /// `working_dir` anchors relative program paths, the way the process launcher would.
    pub fn new(working_dir: Option<PathBuf>) -> Self {
        Self { working_dir }
    }

    pub fn resolve(&self, agent: &LaunchAgent) -> TargetResolution {
        let resolution = self.resolve_candidate(agent.execution_candidate());
        if let TargetResolution::Unresolved(reason) = &resolution {
            debug!(
                "No target for launch agent {}: {:?}",
                agent.service.label, reason
            );
        }
        resolution
    }

    pub fn resolve_candidate(&self, candidate: Option<ExecutionCandidate<'_>>) -> TargetResolution {
        let Some(candidate) = candidate.filter(|c| !c.as_str().is_empty()) else {
            return TargetResolution::Unresolved(UnresolvedReason::NoCandidate);
        };

        let written = Path::new(candidate.as_str());
        let path = if written.is_absolute() {
            written.to_path_buf()
        } else {
            match &self.working_dir {
                Some(dir) => dir.join(written),
                None => return TargetResolution::Unresolved(UnresolvedReason::NoWorkingDirectory),
            }
        };

        // exists() follows symlinks, so a dangling link is missing.
        if !path.exists() {
            return TargetResolution::Unresolved(UnresolvedReason::Missing(path));
        }

        // argv[0] is followed through symlinks and `..` before looking for a bundle.
        let path = match candidate {
            ExecutionCandidate::Argument(_) => canonical_or_written(path),
            ExecutionCandidate::Program(_) => path,
        };

        match enclosing_bundle(&path) {
            Some(bundle) => TargetResolution::Resolved(ResolvedTarget {
                path: bundle.to_path_buf(),
                is_bundle: true,
            }),
            None => TargetResolution::Resolved(ResolvedTarget {
                path,
                is_bundle: false,
            }),
        }
    }
}

fn canonical_or_written(path: PathBuf) -> PathBuf {
    match fs::canonicalize(&path) {
        Ok(canonical) => canonical,
        Err(e) => {
            debug!("Could not canonicalize {}: {}", path.display(), e);
            path
        }
    }
}

/// Nearest ancestor directory whose name ends in `.app`. The path itself is not considered.
pub fn enclosing_bundle(path: &Path) -> Option<&Path> {
    path.ancestors().skip(1).find(|ancestor| is_bundle_dir(ancestor))
}

fn is_bundle_dir(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.ends_with(BUNDLE_SUFFIX))
        && path.is_dir()
}
