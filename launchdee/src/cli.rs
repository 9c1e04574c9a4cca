// launchdee/src/cli.rs
//! Defines the command-line argument structure using clap.
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use launchdee_common::error::{LaunchdeeError, Result};
use launchdee_common::model::Scope;
use launchdee_common::Config;

pub mod agents;
pub mod login_items;
pub mod output;
pub mod paths;
pub mod show;
pub mod toggle;

use crate::cli::agents::Agents;
use crate::cli::login_items::LoginItems;
use crate::cli::paths::Paths;
use crate::cli::show::Show;
use crate::cli::toggle::ToggleArgs;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None, name = "launchdee", bin_name = "launchdee")]
#[command(propagate_version = true)]
pub struct CliArgs {
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List launch agents from the user and global LaunchAgents directories
    Agents(Agents),
    /// List registered login items
    LoginItems(LoginItems),
    /// Show everything known about one label
    Show(Show),
    /// Enable a service, then re-read its state
    Enable(ToggleArgs),
    /// Disable a service, then re-read its state
    Disable(ToggleArgs),
    /// Print the effective configuration
    Paths(Paths),
}

impl Command {
    pub async fn run(&self, config: &Config) -> Result<()> {
        match self {
            Self::Agents(command) => command.run(config).await,
            Self::LoginItems(command) => command.run(config).await,
            Self::Show(command) => command.run(config).await,
            Self::Enable(command) => command.run(config, true).await,
            Self::Disable(command) => command.run(config, false).await,
            Self::Paths(command) => command.run(config),
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopeArg {
    User,
    Global,
}

impl From<ScopeArg> for Scope {
    fn from(arg: ScopeArg) -> Self {
        match arg {
            ScopeArg::User => Scope::User,
            ScopeArg::Global => Scope::Global,
        }
    }
}

/// User first, then global, unless narrowed.
pub(crate) fn scopes_for(arg: Option<ScopeArg>) -> Vec<Scope> {
    match arg {
        Some(arg) => vec![arg.into()],
        None => Scope::ALL.to_vec(),
    }
}

/// Runs a whole discovery pass off the async runtime and hands back only the finished result.
pub(crate) async fn run_pass<T, F>(config: &Config, pass: F) -> Result<T>
where
    F: FnOnce(&Config) -> Result<T> + Send + 'static,
    T: Send + 'static,
{
    let config = config.clone();
    tokio::task::spawn_blocking(move || pass(&config))
        .await
        .map_err(|e| LaunchdeeError::Generic(format!("discovery task failed: {e}")))?
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        CliArgs::command().debug_assert();
    }

    #[test]
    fn parses_toggle_and_listing_flags() {
        let args = CliArgs::parse_from(["launchdee", "-vv", "disable", "com.example.agent", "--bare"]);
        assert_eq!(args.verbose, 2);
        match args.command {
            Command::Disable(toggle) => {
                assert_eq!(toggle.label, "com.example.agent");
                assert!(toggle.bare);
            }
            other => panic!("unexpected command: {other:?}"),
        }

        let args = CliArgs::parse_from(["launchdee", "agents", "--scope", "global", "--json"]);
        match args.command {
            Command::Agents(agents) => {
                assert_eq!(agents.scope, Some(ScopeArg::Global));
                assert!(agents.json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn enabled_and_disabled_filters_conflict() {
        assert!(CliArgs::try_parse_from(["launchdee", "agents", "--enabled", "--disabled"]).is_err());
    }

    #[test]
    fn scopes_default_to_user_then_global() {
        assert_eq!(scopes_for(None), vec![Scope::User, Scope::Global]);
        assert_eq!(scopes_for(Some(ScopeArg::Global)), vec![Scope::Global]);
    }
}
