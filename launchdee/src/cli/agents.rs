// launchdee/src/cli/agents.rs
use clap::Args;
use colored::Colorize;
use launchdee_common::config::Config;
use launchdee_common::error::Result;
use launchdee_core::discover_launch_agents;
use prettytable::{Cell, Row};

use super::output::{enabled_cell, flag_cell, new_table, print_json, target_cell};
use super::{run_pass, scopes_for, ScopeArg};

#[derive(Args, Debug)]
pub struct Agents {
    /// Only list agents from this scope
    #[arg(long, value_enum)]
    pub scope: Option<ScopeArg>,
    /// Only list agents that are effectively enabled
    #[arg(long, conflicts_with = "disabled")]
    pub enabled: bool,
    /// Only list agents that are effectively disabled
    #[arg(long)]
    pub disabled: bool,
    /// Print JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

impl Agents {
    pub async fn run(&self, config: &Config) -> Result<()> {
        let scopes = scopes_for(self.scope);
        let mut discovery = run_pass(config, move |config| {
            discover_launch_agents(config, &scopes)
        })
        .await?;

        discovery.agents.retain(|r| {
            (!self.enabled || r.agent.effective_enabled)
                && (!self.disabled || !r.agent.effective_enabled)
        });
        discovery.agents.sort_by(|a, b| {
            a.agent
                .scope
                .cmp(&b.agent.scope)
                .then_with(|| a.agent.service.label.cmp(&b.agent.service.label))
        });

        if self.json {
            return print_json(&discovery);
        }

        if discovery.agents.is_empty() {
            println!("{}", "0 launch agents".yellow());
        } else {
            let mut table = new_table(&["Enabled", "Run at load", "Type", "Label", "Target"]);
            for record in &discovery.agents {
                let agent = &record.agent;
                table.add_row(Row::new(vec![
                    enabled_cell(agent.effective_enabled),
                    flag_cell(agent.run_at_load),
                    Cell::new(agent.scope.display_name()),
                    Cell::new(&agent.service.label).style_spec("Fb"),
                    target_cell(&record.target),
                ]));
            }
            table.printstd();

            let enabled = discovery
                .agents
                .iter()
                .filter(|r| r.agent.effective_enabled)
                .count();
            println!(
                "{}",
                format!(
                    "{} launch agents, {} enabled",
                    discovery.agents.len(),
                    enabled
                )
                .bold()
            );
        }

        if !discovery.skipped.is_empty() {
            println!(
                "{}",
                format!(
                    "{} manifests could not be parsed:",
                    discovery.skipped.len()
                )
                .yellow()
            );
            for skipped in &discovery.skipped {
                println!(
                    "  {} ({}): {}",
                    skipped.path.display(),
                    skipped.scope,
                    skipped.reason.dimmed()
                );
            }
        }
        Ok(())
    }
}
