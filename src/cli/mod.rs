//! Thin command-line front-end over the ledger store and aggregator.

pub mod commands;
pub mod output;
pub mod table;

use std::path::PathBuf;

use clap::{ArgGroup, Args, Parser, Subcommand};
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::ConfigManager;
use crate::core::{utils::app_data_dir, LedgerStore};
use crate::errors::{ConfigError, LedgerError};

pub use output::Output;

#[derive(Parser, Debug)]
#[command(name = "ledger_core_cli", version, about = "Personal income and expense ledger")]
pub struct Cli {
    /// Ledger snapshot file; overrides the configured location
    #[arg(long, global = true, value_name = "PATH")]
    pub ledger: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Record an income or expense transaction
    Add(AddArgs),
    /// List every transaction in arrival order
    List,
    /// Show income and expense totals and the current balance
    Summary,
    /// Break totals down by category
    Categories {
        /// Show income categories instead of expenses
        #[arg(long)]
        income: bool,
    },
    /// Break totals down by calendar month
    Months,
    /// Import transactions from a legacy JSON export
    Import {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
    /// Show or change CLI preferences
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
    /// Print build information
    Version,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Print the effective preferences
    Show,
    /// Set one preference: ledger_file, currency_symbol or color_enabled
    Set {
        key: String,
        /// New value; `none` resets ledger_file to the default location
        value: String,
    },
}

#[derive(Args, Debug)]
#[command(group(ArgGroup::new("kind").required(true).args(["income", "expense"])))]
pub struct AddArgs {
    /// Amount of the transaction, e.g. 42.50
    #[arg(allow_negative_numbers = true)]
    pub amount: String,

    pub category: String,

    /// Description of the transaction
    #[arg(short = 'd', long = "description", default_value = "")]
    pub description: String,

    /// Mark this transaction as income
    #[arg(long)]
    pub income: bool,

    /// Mark this transaction as an expense
    #[arg(long)]
    pub expense: bool,

    /// Backfill timestamp, `YYYY-MM-DD HH:MM:SS`; defaults to now
    #[arg(long = "at", value_name = "TIMESTAMP")]
    pub at: Option<String>,
}

/// User-facing CLI error wrapper.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl CliError {
    /// Rejected input exits with 2, storage and configuration failures with 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Ledger(LedgerError::Validation { .. })
            | CliError::Config(ConfigError::Invalid { .. }) => 2,
            _ => 1,
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            CliError::Ledger(err @ LedgerError::Validation { .. }) => {
                format!("transaction rejected, {err}")
            }
            CliError::Ledger(LedgerError::StoreCorrupt { .. }) => {
                "the ledger file could not be read; it was left untouched".into()
            }
            CliError::Ledger(LedgerError::Persist { .. }) => {
                "the ledger could not be saved; the previous version is still in place".into()
            }
            CliError::Config(err @ ConfigError::Invalid { .. }) => {
                format!("configuration unchanged, {err}")
            }
            CliError::Config(_) => "the configuration file could not be read or written".into(),
        }
    }
}

/// Parses arguments, runs one command and maps failures to an exit status.
pub fn run_cli() -> i32 {
    let cli = Cli::parse();
    let out = Output::new(!cli.no_color, "$");
    match run(cli) {
        Ok(()) => 0,
        Err(err) => {
            warn!(error = %err, "command failed");
            out.error(err.user_message());
            err.exit_code()
        }
    }
}

pub fn run(cli: Cli) -> Result<(), CliError> {
    let base = app_data_dir();
    let manager = ConfigManager::with_base_dir(&base);
    let config = manager.load()?;
    let out = Output::from_config(&config, cli.no_color);

    match cli.command {
        Command::Version => {
            commands::version(&out);
            return Ok(());
        }
        Command::Config { action } => {
            match action.unwrap_or(ConfigAction::Show) {
                ConfigAction::Show => commands::config_show(&config, &base, &out),
                ConfigAction::Set { key, value } => {
                    commands::config_set(&manager, config, &key, &value, &out)?
                }
            }
            return Ok(());
        }
        _ => {}
    }

    let path = cli
        .ledger
        .clone()
        .unwrap_or_else(|| config.resolve_ledger_file(&base));
    debug!(path = %path.display(), "opening ledger");
    let mut store = LedgerStore::open_json(path)?;

    match cli.command {
        Command::Add(args) => commands::add(&mut store, &out, args)?,
        Command::List => commands::list(&store, &out),
        Command::Summary => commands::summary(&store, &out),
        Command::Categories { income } => commands::categories(&store, &out, income),
        Command::Months => commands::months(&store, &out),
        Command::Import { file } => commands::import(&mut store, &out, &file)?,
        Command::Version | Command::Config { .. } => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn add_requires_exactly_one_kind() {
        assert!(Cli::try_parse_from(["ledger_core_cli", "add", "5", "food"]).is_err());
        assert!(
            Cli::try_parse_from(["ledger_core_cli", "add", "5", "food", "--income", "--expense"])
                .is_err()
        );
        let cli = Cli::try_parse_from(["ledger_core_cli", "add", "-5", "food", "--expense"])
            .expect("negative amounts reach validation");
        assert!(matches!(cli.command, Command::Add(AddArgs { ref amount, .. }) if amount == "-5"));
    }

    #[test]
    fn exit_codes_separate_validation_from_storage() {
        let rejected = CliError::from(LedgerError::validation("amount", "negative"));
        assert_eq!(rejected.exit_code(), 2);
        assert!(rejected.user_message().contains("amount"));

        let failed = CliError::from(LedgerError::persist("ledger.json", "denied"));
        assert_eq!(failed.exit_code(), 1);
        assert!(!failed.user_message().contains("denied"));

        let bad_setting = CliError::from(ConfigError::invalid("theme", "unknown key"));
        assert_eq!(bad_setting.exit_code(), 2);
        assert!(bad_setting.user_message().contains("theme"));
    }

    #[test]
    fn config_defaults_to_show() {
        let cli = Cli::try_parse_from(["ledger_core_cli", "config"]).unwrap();
        assert!(matches!(cli.command, Command::Config { action: None }));
        let cli =
            Cli::try_parse_from(["ledger_core_cli", "config", "set", "currency_symbol", "€"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Config { action: Some(ConfigAction::Set { ref key, .. }) } if key == "currency_symbol"
        ));
    }
}
