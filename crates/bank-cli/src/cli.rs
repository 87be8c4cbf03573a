//! Command line arguments

use bank_core::Uuid;
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Query the bank service from the command line.
///
/// Connection settings come from BANK_SERVICE_* environment variables, or
/// from a YAML file given with --config (environment values still win).
#[derive(Parser, Debug)]
#[command(name = "bankserv", version)]
pub struct Cli {
    /// YAML file with scheme, host, token, api_key and timeout_secs
    #[arg(long, env = "BANK_SERVICE_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List banks
    Banks,

    /// List accounts for a user, organisation or entity
    Accounts(OwnerArgs),

    /// List transactions for an account or entity
    Transactions(TransactionArgs),

    /// List default tags, or an entity's own tags
    Tags {
        #[arg(long)]
        entity: Option<Uuid>,
    },

    /// Show an account's balance on a date
    Balance {
        account: Uuid,

        /// Date as YYYY-MM-DD
        #[arg(long)]
        date: NaiveDate,
    },

    /// Run an ad hoc query, e.g. `bankserv query q=monthly_totals`
    Query {
        /// KEY=VALUE pairs sent as query parameters
        #[arg(value_parser = parse_pair)]
        params: Vec<(String, String)>,
    },
}

#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub struct OwnerArgs {
    #[arg(long)]
    pub user: Option<Uuid>,

    #[arg(long)]
    pub organisation: Option<Uuid>,

    #[arg(long)]
    pub entity: Option<Uuid>,
}

#[derive(Args, Debug)]
pub struct TransactionArgs {
    #[command(flatten)]
    pub source: TransactionSource,

    /// Earliest date (entity listings only)
    #[arg(long, requires = "entity")]
    pub start_date: Option<NaiveDate>,

    /// Latest date (entity listings only)
    #[arg(long, requires = "entity")]
    pub end_date: Option<NaiveDate>,
}

#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub struct TransactionSource {
    #[arg(long)]
    pub account: Option<Uuid>,

    #[arg(long)]
    pub entity: Option<Uuid>,
}

fn parse_pair(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .ok_or_else(|| format!("expected KEY=VALUE, got '{raw}'"))
}
