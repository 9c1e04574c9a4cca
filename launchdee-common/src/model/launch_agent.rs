use serde::Serialize;

use super::service::{QualifiedTarget, Scope, ServiceTarget};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LaunchAgent {
    #[serde(flatten)]
    pub service: ServiceTarget,
    pub scope: Scope,
    pub run_at_load: bool,
    pub program: Option<String>,
    pub program_arguments: Option<Vec<String>>,
    /// What the manifest itself says. The override registry can still disable it.
    pub self_declared_disabled: Option<bool>,
    pub disabled_by_override: bool,
    pub effective_enabled: bool,
}

/// Where the executable path of a launch agent came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionCandidate<'a> {
    /// `Program`, taken as written.
    Program(&'a str),
    /// `ProgramArguments[0]`, canonicalized once it is known to exist.
    Argument(&'a str),
}

impl<'a> ExecutionCandidate<'a> {
    pub fn as_str(&self) -> &'a str {
        match *self {
            ExecutionCandidate::Program(path) | ExecutionCandidate::Argument(path) => path,
        }
    }
}

impl LaunchAgent {
    /// The executable path launchd would use: `Program` if non-empty, else `argv[0]`.
    pub fn execution_candidate(&self) -> Option<ExecutionCandidate<'_>> {
        match self.program.as_deref() {
            Some(program) if !program.is_empty() => Some(ExecutionCandidate::Program(program)),
            _ => self
                .program_arguments
                .as_ref()
                .and_then(|args| args.first())
                .map(String::as_str)
                .filter(|arg| !arg.is_empty())
                .map(ExecutionCandidate::Argument),
        }
    }
}

impl QualifiedTarget for LaunchAgent {
    fn label(&self) -> &str {
        &self.service.label
    }
}
