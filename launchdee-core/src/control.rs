// launchdee-core/src/control.rs
//! The one mutating operation: `launchctl enable|disable <target>`.
//!
//! Nothing here updates any in-memory state. After a call, run a fresh discovery pass to see
//! what actually happened; another actor may have re-disabled the service in between.

use std::path::PathBuf;
use std::process::{Command, Stdio};

use launchdee_common::config::Config;
use launchdee_common::error::{LaunchdeeError, Result};
use launchdee_common::model::{QualifiedTarget, Uid};
use tracing::{debug, error, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    Enable,
    Disable,
}

impl Toggle {
    pub fn from_enabled(enabled: bool) -> Self {
        if enabled {
            Toggle::Enable
        } else {
            Toggle::Disable
        }
    }

    pub fn verb(&self) -> &'static str {
        match self {
            Toggle::Enable => "enable",
            Toggle::Disable => "disable",
        }
    }
}

pub trait ServiceController {
    /// Issues exactly one enable/disable call. Not checked against current state.
    fn set_enabled(&self, target: &dyn QualifiedTarget, enabled: bool) -> Result<()>;
}

#[derive(Debug, Clone)]
pub struct Launchctl {
    program: PathBuf,
    uid: Uid,
}

impl Launchctl {
    pub fn new(program: impl Into<PathBuf>, uid: Uid) -> Self {
        Self {
            program: program.into(),
            uid,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.launchctl_path, config.uid)
    }
}

impl ServiceController for Launchctl {
    fn set_enabled(&self, target: &dyn QualifiedTarget, enabled: bool) -> Result<()> {
        let toggle = Toggle::from_enabled(enabled);
        let qualified = target.qualified_target(self.uid);
        debug!(
            "Running {} {} {}",
            self.program.display(),
            toggle.verb(),
            qualified
        );

        let output = Command::new(&self.program)
            .arg(toggle.verb())
            .arg(&qualified)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| {
                error!("Failed to execute {}: {}", self.program.display(), e);
                LaunchdeeError::CommandExecError(format!("{}: {e}", self.program.display()))
            })?;

        if output.status.success() {
            info!("launchctl {} {} succeeded", toggle.verb(), qualified);
            return Ok(());
        }

        let stderr = String::from_utf8_lossy(&output.stderr);
        let stdout = String::from_utf8_lossy(&output.stdout);
        let diagnostic = [stderr.trim(), stdout.trim()]
            .into_iter()
            .find(|text| !text.is_empty())
            .unwrap_or("no diagnostic output")
            .to_string();
        debug!(
            "launchctl {} {} failed with {}: {}",
            toggle.verb(),
            qualified,
            output.status,
            diagnostic
        );
        Err(LaunchdeeError::Action {
            verb: toggle.verb().to_string(),
            target: qualified,
            status: output.status.to_string(),
            diagnostic,
        })
    }
}

#[cfg(all(test, unix))]
mod tests {
    use std::fs;

    use launchdee_common::model::{BareLabel, ServiceTarget};

    use super::*;
    use crate::test_support::write_script;

    #[test]
    fn success_issues_one_call_with_qualified_target() {
        let dir = tempfile::tempdir().unwrap();
        let log = dir.path().join("calls.log");
        let script = write_script(
            dir.path(),
            "launchctl",
            &format!("echo \"$@\" >> '{}'\nexit 0\n", log.display()),
        );

        let launchctl = Launchctl::new(&script, Uid(501));
        launchctl
            .set_enabled(&ServiceTarget::new("com.example.agent"), false)
            .unwrap();

        assert_eq!(
            fs::read_to_string(&log).unwrap(),
            "disable user/501/com.example.agent\n"
        );
    }

    #[test]
    fn bare_label_goes_through_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let log = dir.path().join("calls.log");
        let script = write_script(
            dir.path(),
            "launchctl",
            &format!("echo \"$@\" >> '{}'\n", log.display()),
        );

        Launchctl::new(&script, Uid(501))
            .set_enabled(&BareLabel("com.example.global".into()), true)
            .unwrap();
        assert_eq!(fs::read_to_string(&log).unwrap(), "enable com.example.global\n");
    }

    #[test]
    fn failure_surfaces_action_error_with_diagnostic() {
        let dir = tempfile::tempdir().unwrap();
        let script = write_script(
            dir.path(),
            "launchctl",
            "echo 'Could not find service \"nope\" in domain' >&2\nexit 113\n",
        );

        let err = Launchctl::new(&script, Uid(501))
            .set_enabled(&ServiceTarget::new("nope"), true)
            .unwrap_err();
        match err {
            LaunchdeeError::Action {
                verb,
                target,
                diagnostic,
                ..
            } => {
                assert_eq!(verb, "enable");
                assert_eq!(target, "user/501/nope");
                assert_eq!(diagnostic, "Could not find service \"nope\" in domain");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn silent_failure_still_reports() {
        let dir = tempfile::tempdir().unwrap();
        let script = write_script(dir.path(), "launchctl", "exit 1\n");
        let err = Launchctl::new(&script, Uid(0))
            .set_enabled(&ServiceTarget::new("x"), false)
            .unwrap_err();
        assert!(err.to_string().contains("no diagnostic output"));
    }

    #[test]
    fn missing_program_is_a_command_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Launchctl::new(dir.path().join("absent"), Uid(0))
            .set_enabled(&ServiceTarget::new("x"), false)
            .unwrap_err();
        assert!(matches!(err, LaunchdeeError::CommandExecError(_)));
    }
}
