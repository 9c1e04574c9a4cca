// launchdee/src/cli/toggle.rs
use clap::Args;
use colored::Colorize;
use launchdee_common::config::Config;
use launchdee_common::error::Result;
use launchdee_common::model::{BareLabel, QualifiedTarget, Scope, ServiceTarget};
use launchdee_core::{discover_login_items, discover_scoped, Launchctl, ServiceController, Snapshot};
use tracing::{debug, warn};

use super::output::state_word;
use super::run_pass;

#[derive(Args, Debug)]
pub struct ToggleArgs {
    /// The service label
    pub label: String,
    /// Pass the label to launchctl as-is instead of as user/<uid>/<label>
    #[arg(long)]
    pub bare: bool,
}

impl ToggleArgs {
    pub async fn run(&self, config: &Config, enabled: bool) -> Result<()> {
        let label = self.label.clone();
        let bare = self.bare;
        let action = run_pass(config, move |config| {
            let target: Box<dyn QualifiedTarget> = if bare {
                Box::new(BareLabel(label))
            } else {
                Box::new(ServiceTarget::new(label))
            };
            Launchctl::from_config(config).set_enabled(target.as_ref(), enabled)
        })
        .await;

        match &action {
            Ok(()) => println!(
                "✓ Requested {} for {}",
                if enabled { "enable" } else { "disable" },
                self.label.green()
            ),
            Err(e) => debug!("✖ Failed to toggle '{}': {}", self.label, e),
        }

        // Never trust the request alone: re-read what launchd now reports.
        // Agents are re-read even when the login items registry cannot be.
        let observed = run_pass(config, |config| {
            let mut snapshot = discover_scoped(config, &Scope::ALL, false, None)?;
            match discover_login_items(config, None) {
                Ok(items) => snapshot.login_items = items,
                Err(e) => warn!("Login items not re-read after toggle: {}", e),
            }
            Ok(snapshot)
        })
        .await;
        match observed {
            Ok(snapshot) => report_observed(&snapshot, &self.label, enabled, action.is_ok()),
            Err(e) => warn!("Could not re-read service state after toggle: {}", e),
        }

        action
    }
}

fn report_observed(snapshot: &Snapshot, label: &str, requested: bool, applied: bool) {
    let mut found = false;

    if let Some(record) = snapshot.login_item(label) {
        found = true;
        let observed = record.item.effective_enabled;
        println!("  login item {}: {}", label, state_word(observed));
        if applied && observed != requested {
            warn_mismatch(label, requested);
        }
    }

    for record in snapshot.agents_labelled(label) {
        found = true;
        let agent = &record.agent;
        println!(
            "  {} launch agent {}: {}",
            agent.scope,
            label,
            state_word(agent.effective_enabled)
        );
        if applied && agent.effective_enabled != requested {
            if requested && agent.self_declared_disabled == Some(true) {
                println!(
                    "    {}",
                    format!(
                        "its manifest ({}) sets Disabled = true",
                        record.manifest_path.display()
                    )
                    .yellow()
                );
            }
            warn_mismatch(label, requested);
        }
    }

    if !found {
        debug!("{} not present in any listing after toggle", label);
        println!("  {}", format!("{label} is not a known login item or launch agent").dimmed());
    }
}

fn warn_mismatch(label: &str, requested: bool) {
    warn!(
        "{} is still {} after the request",
        label,
        if requested { "disabled" } else { "enabled" }
    );
}
