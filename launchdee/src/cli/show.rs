// launchdee/src/cli/show.rs
use clap::Args;
use colored::Colorize;
use launchdee_common::config::Config;
use launchdee_common::error::{LaunchdeeError, Result};
use launchdee_common::model::Scope;
use launchdee_core::{
    discover_scoped, AgentRecord, AppLocator, BundleInfo, LoginItemRecord, SpotlightLocator,
};
use serde::Serialize;

use super::output::{describe_target, optional_path, print_json, state_word};
use super::{run_pass, scopes_for, ScopeArg};

#[derive(Args, Debug)]
pub struct Show {
    /// The service label
    pub label: String,
    /// Only look at launch agents from this scope (login items are skipped)
    #[arg(long, value_enum)]
    pub scope: Option<ScopeArg>,
    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct AgentDetail {
    #[serde(flatten)]
    record: AgentRecord,
    bundle: Option<BundleInfo>,
}

#[derive(Debug, Serialize)]
struct ShowReport {
    login_item: Option<LoginItemRecord>,
    launch_agents: Vec<AgentDetail>,
}

impl Show {
    pub async fn run(&self, config: &Config) -> Result<()> {
        let label = self.label.clone();
        let scopes: Vec<Scope> = scopes_for(self.scope);
        let with_login_items = self.scope.is_none();
        let report = run_pass(config, move |config| {
            let snapshot = discover_scoped(config, &scopes, with_login_items, None)?;

            let mut login_item = snapshot.login_item(&label).cloned();
            if let Some(record) = login_item.as_mut() {
                if let Some(bundle_id) = record.item.app_identifier.as_deref() {
                    record.app_path = SpotlightLocator::new(&config.mdfind_path).locate(bundle_id);
                }
            }

            let launch_agents = snapshot
                .agents_labelled(&label)
                .map(|record| AgentDetail {
                    bundle: record
                        .target
                        .resolved()
                        .filter(|t| t.is_bundle)
                        .and_then(|t| BundleInfo::read(&t.path)),
                    record: record.clone(),
                })
                .collect();

            Ok(ShowReport {
                login_item,
                launch_agents,
            })
        })
        .await?;

        if report.login_item.is_none() && report.launch_agents.is_empty() {
            return Err(LaunchdeeError::NotFound(format!(
                "no login item or launch agent labelled '{}'",
                self.label
            )));
        }
        if self.json {
            return print_json(&report);
        }

        if let Some(record) = &report.login_item {
            let item = &record.item;
            println!("{} {}", "Login item".bold(), item.service.label.cyan());
            println!("  State:          {}", state_word(item.effective_enabled));
            println!("  Override:       {}", override_word(item.disabled_by_override));
            println!(
                "  App identifier: {}",
                item.app_identifier.as_deref().unwrap_or("-")
            );
            println!("  Application:    {}", optional_path(record.app_path.as_deref()));
            println!("  Target:         user/{}/{}", config.uid, item.service.label);
        }

        for detail in &report.launch_agents {
            let agent = &detail.record.agent;
            println!(
                "{} {} ({})",
                "Launch agent".bold(),
                agent.service.label.cyan(),
                agent.scope
            );
            println!("  State:          {}", state_word(agent.effective_enabled));
            println!("  Override:       {}", override_word(agent.disabled_by_override));
            println!(
                "  Manifest:       {}",
                match agent.self_declared_disabled {
                    Some(true) => "Disabled = true",
                    Some(false) => "Disabled = false",
                    None => "no Disabled key",
                }
            );
            println!("  Run at load:    {}", agent.run_at_load);
            println!("  Program:        {}", agent.program.as_deref().unwrap_or("-"));
            if let Some(args) = &agent.program_arguments {
                println!("  Arguments:      {}", args.join(" "));
            }
            println!("  Target:         {}", describe_target(&detail.record.target));
            if let Some(bundle) = &detail.bundle {
                println!(
                    "  Bundle:         {} ({})",
                    bundle.name.as_deref().unwrap_or("-"),
                    bundle.identifier.as_deref().unwrap_or("-")
                );
            }
            println!(
                "  File:           {}",
                detail.record.manifest_path.display()
            );
        }
        Ok(())
    }
}

fn override_word(disabled_by_override: bool) -> String {
    if disabled_by_override {
        "disabled by override registry".red().to_string()
    } else {
        "none".to_string()
    }
}
