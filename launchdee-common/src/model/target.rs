use std::path::{Path, PathBuf};

use serde::Serialize;

/// The single path chosen to represent what a launch agent runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedTarget {
    pub path: PathBuf,
    pub is_bundle: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", content = "path", rename_all = "snake_case")]
pub enum UnresolvedReason {
    /// Neither `Program` nor `ProgramArguments[0]` was usable.
    NoCandidate,
    /// The candidate was relative and there was no working directory to anchor it.
    NoWorkingDirectory,
    /// The candidate does not exist on disk (broken symlinks included).
    Missing(PathBuf),
}

/// Outcome of target resolution. `Unresolved` is a legitimate terminal state, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetResolution {
    Resolved(ResolvedTarget),
    Unresolved(UnresolvedReason),
}

impl TargetResolution {
    pub fn resolved(&self) -> Option<&ResolvedTarget> {
        match self {
            TargetResolution::Resolved(target) => Some(target),
            TargetResolution::Unresolved(_) => None,
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.resolved().map(|t| t.path.as_path())
    }
}
