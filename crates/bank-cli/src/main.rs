//! `bankserv`: command line front end for the bank service

mod cli;

use anyhow::{Context, Result};
use bank_client::{BankService, DateRange, QueryParams};
use bank_config::ServiceConfig;
use clap::Parser;
use cli::{Cli, Command, OwnerArgs, TransactionArgs};
use serde::Serialize;
use std::io::Write;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // stdout carries results; logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => ServiceConfig::load(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => ServiceConfig::from_env().context("reading BANK_SERVICE_* environment")?,
    };
    debug!("Using bank service at {}", config.base_url());

    let service = BankService::new(&config).context("creating bank service client")?;
    run(&service, cli.command).await
}

async fn run(service: &BankService, command: Command) -> Result<()> {
    match command {
        Command::Banks => print_json(&service.get_banks().await?),
        Command::Accounts(OwnerArgs {
            user,
            organisation,
            entity,
        }) => {
            let accounts = match (user, organisation, entity) {
                (Some(user), _, _) => service.get_user_accounts(user).await?,
                (_, Some(organisation), _) => service.get_organisation_accounts(organisation).await?,
                (_, _, Some(entity)) => service.get_entity_accounts(entity).await?,
                (None, None, None) => anyhow::bail!("one of --user, --organisation or --entity is required"),
            };
            print_json(&accounts)
        }
        Command::Transactions(TransactionArgs {
            source,
            start_date,
            end_date,
        }) => {
            let transactions = match (source.account, source.entity) {
                (Some(account), _) => service.get_account_transactions(account).await?,
                (_, Some(entity)) => {
                    let range = DateRange {
                        start: start_date,
                        end: end_date,
                    };
                    service.get_entity_transactions(entity, range).await?
                }
                (None, None) => anyhow::bail!("one of --account or --entity is required"),
            };
            print_json(&transactions)
        }
        Command::Tags { entity } => {
            let tags = match entity {
                Some(entity) => service.get_entity_tags(entity).await?,
                None => service.get_tags().await?,
            };
            print_json(&tags)
        }
        Command::Balance { account, date } => {
            print_json(&service.get_account_balance(account, date).await?)
        }
        Command::Query { params } => {
            let params: QueryParams = params.into_iter().collect();
            let body = service.query(&params).await?;
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(&body)?;
            writeln!(stdout)?;
            Ok(())
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
