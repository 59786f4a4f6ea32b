mod cli;
mod db;
mod error;
mod fmt;
mod ledger;
mod models;
mod reports;
mod settings;

use clap::Parser;

use cli::{
    AccountsCommands, Cli, Commands, ExportCommands, ReportCommands, RoomCommands, TxnCommands,
};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init { data_dir } => cli::init::run(data_dir),
        Commands::Load { path } => cli::load::run(&path),
        Commands::Accounts { command } => match command {
            AccountsCommands::Add {
                name,
                cra_name,
                account_type,
                institution,
                account_number,
                opening_date,
                close_date,
                notes,
            } => cli::accounts::add(&cli::accounts::AccountInput {
                name: &name,
                cra_name: &cra_name,
                account_type: account_type.as_deref(),
                institution: institution.as_deref(),
                account_number: account_number.as_deref(),
                opening_date: opening_date.as_deref(),
                close_date: close_date.as_deref(),
                notes: notes.as_deref(),
            }),
            AccountsCommands::List => cli::accounts::list(),
            AccountsCommands::Update {
                id,
                name,
                cra_name,
                account_type,
                institution,
                account_number,
                opening_date,
                close_date,
                notes,
            } => cli::accounts::update(
                id,
                name.as_deref(),
                cra_name.as_deref(),
                account_type.as_deref(),
                institution.as_deref(),
                account_number.as_deref(),
                opening_date.as_deref(),
                close_date.as_deref(),
                notes.as_deref(),
            ),
            AccountsCommands::Delete { id } => cli::accounts::delete(id),
        },
        Commands::Txn { command } => match command {
            TxnCommands::Add {
                account,
                date,
                kind,
                amount,
                notes,
            } => cli::txn::add(&account, &date, &kind, &amount, notes.as_deref()),
            TxnCommands::List => cli::txn::list(),
            TxnCommands::Update {
                id,
                account,
                date,
                kind,
                amount,
                notes,
            } => cli::txn::update(
                id,
                account.as_deref(),
                date.as_deref(),
                kind.as_deref(),
                amount.as_deref(),
                notes.as_deref(),
            ),
            TxnCommands::Delete { id } => cli::txn::delete(id),
        },
        Commands::Room { command } => match command {
            RoomCommands::Add { year, amount } => cli::room::add(year, &amount),
            RoomCommands::List => cli::room::list(),
            RoomCommands::Delete { year } => cli::room::delete(year),
        },
        Commands::Report { command } => match command {
            ReportCommands::Summary => cli::report::summary(),
            ReportCommands::Cra => cli::report::cra(),
        },
        Commands::Export { command } => match command {
            ExportCommands::Summary { output } => cli::export::summary(output),
            ExportCommands::Cra { output } => cli::export::cra(output),
        },
        Commands::Backup { output } => cli::backup::run(output),
        Commands::Status => cli::status::run(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
