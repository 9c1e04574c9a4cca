// launchdee/src/cli/paths.rs
use clap::Args;
use launchdee_common::config::Config;
use launchdee_common::error::Result;
use launchdee_common::model::Scope;
use prettytable::{Cell, Row};

use super::output::{new_table, optional_path, print_json};

#[derive(Args, Debug)]
pub struct Paths {
    /// Print JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

impl Paths {
    pub fn run(&self, config: &Config) -> Result<()> {
        if self.json {
            return print_json(config);
        }

        let rows = [
            ("uid", config.uid.to_string()),
            (
                "override registry",
                config.override_registry_path().display().to_string(),
            ),
            (
                "login items registry",
                config.login_items_registry_path().display().to_string(),
            ),
            (
                "user agents",
                config.agents_dir(Scope::User).display().to_string(),
            ),
            (
                "global agents",
                config.agents_dir(Scope::Global).display().to_string(),
            ),
            ("launchctl", config.launchctl_path.display().to_string()),
            ("mdfind", config.mdfind_path.display().to_string()),
            ("working directory", optional_path(config.working_dir.as_deref())),
            (
                "missing registry",
                format!("{:?}", config.registry_fallback).to_lowercase(),
            ),
            ("logs", config.logs_dir().display().to_string()),
        ];

        let mut table = new_table(&["Setting", "Value"]);
        for (name, value) in rows {
            table.add_row(Row::new(vec![Cell::new(name), Cell::new(&value)]));
        }
        table.printstd();
        Ok(())
    }
}
