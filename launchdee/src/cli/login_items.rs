// launchdee/src/cli/login_items.rs
use clap::Args;
use colored::Colorize;
use launchdee_common::config::Config;
use launchdee_common::error::Result;
use launchdee_core::{discover_login_items, AppLocator, SpotlightLocator};
use prettytable::{Cell, Row};

use super::output::{enabled_cell, new_table, optional_path, print_json};
use super::run_pass;

#[derive(Args, Debug)]
pub struct LoginItems {
    /// Look up the installed application for each bundle identifier (uses Spotlight)
    #[arg(long)]
    pub locate: bool,
    /// Print JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

impl LoginItems {
    pub async fn run(&self, config: &Config) -> Result<()> {
        let locate = self.locate;
        let items = run_pass(config, move |config| {
            let locator = SpotlightLocator::new(&config.mdfind_path);
            let locator = locate.then_some(&locator as &dyn AppLocator);
            discover_login_items(config, locator)
        })
        .await?;

        if self.json {
            return print_json(&items);
        }
        if items.is_empty() {
            println!("{}", "0 login items".yellow());
            return Ok(());
        }

        let mut headers = vec!["Enabled", "Label", "App identifier"];
        if self.locate {
            headers.push("Application");
        }
        let mut table = new_table(&headers);
        // Registry order, as launchd keeps it.
        for record in &items {
            let mut cells = vec![
                enabled_cell(record.item.effective_enabled),
                Cell::new(&record.item.service.label).style_spec("Fb"),
                Cell::new(record.item.app_identifier.as_deref().unwrap_or("-")),
            ];
            if self.locate {
                cells.push(Cell::new(&optional_path(record.app_path.as_deref())));
            }
            table.add_row(Row::new(cells));
        }
        table.printstd();

        let enabled = items.iter().filter(|r| r.item.effective_enabled).count();
        println!(
            "{}",
            format!("{} login items, {} enabled", items.len(), enabled).bold()
        );
        Ok(())
    }
}
