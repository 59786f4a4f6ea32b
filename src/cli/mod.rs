pub mod accounts;
pub mod backup;
pub mod export;
pub mod init;
pub mod load;
pub mod report;
pub mod room;
pub mod status;
pub mod txn;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use crate::error::{Result, TfsaidError};

/// Validate a YYYY-MM-DD date string and return it unchanged.
pub(crate) fn parse_date(s: &str) -> Result<String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| {
        TfsaidError::InvalidInput(format!(
            "date must be in YYYY-MM-DD format (e.g. 2025-01-15), got '{s}'"
        ))
    })?;
    Ok(s.to_string())
}

/// Parse a strictly positive money amount with at most two decimal digits.
pub(crate) fn parse_amount(s: &str) -> Result<f64> {
    let value = parse_money(s)?;
    if value <= 0.0 {
        return Err(TfsaidError::InvalidInput(
            "amount must be greater than zero".to_string(),
        ));
    }
    Ok(value)
}

/// Parse a non-negative money amount (room grants may be zero).
pub(crate) fn parse_room_amount(s: &str) -> Result<f64> {
    let value = parse_money(s)?;
    if value < 0.0 {
        return Err(TfsaidError::InvalidInput(
            "room amount must not be negative".to_string(),
        ));
    }
    Ok(value)
}

fn parse_money(s: &str) -> Result<f64> {
    let value: f64 = s
        .trim()
        .parse()
        .map_err(|_| TfsaidError::InvalidInput(format!("'{s}' is not a valid number")))?;
    if let Some((_, decimals)) = s.trim().split_once('.') {
        if decimals.len() > 2 {
            return Err(TfsaidError::InvalidInput(format!(
                "amount can have at most two decimal digits, got '{s}'"
            )));
        }
    }
    Ok(value)
}

pub(crate) fn parse_year(year: i32) -> Result<i32> {
    if !(1000..=9999).contains(&year) {
        return Err(TfsaidError::InvalidInput(format!(
            "year must be a 4-digit year (e.g. 2025), got '{year}'"
        )));
    }
    Ok(year)
}

#[derive(Parser)]
#[command(name = "tfsaid", about = "TFSA contribution-room tracking CLI.", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Set up tfsaid: choose a data directory and create the database.
    Init {
        /// Path for tfsaid data (default: ~/Documents/tfsaid)
        #[arg(long = "data-dir")]
        data_dir: Option<String>,
    },
    /// Switch to an existing tfsaid data directory.
    Load {
        /// Path to data directory containing tfsaid.db
        path: String,
    },
    /// Manage TFSA accounts.
    Accounts {
        #[command(subcommand)]
        command: AccountsCommands,
    },
    /// Manage deposits and withdrawals.
    Txn {
        #[command(subcommand)]
        command: TxnCommands,
    },
    /// Manage annual contribution-room grants.
    Room {
        #[command(subcommand)]
        command: RoomCommands,
    },
    /// Generate reports.
    Report {
        #[command(subcommand)]
        command: ReportCommands,
    },
    /// Export reports to CSV.
    Export {
        #[command(subcommand)]
        command: ExportCommands,
    },
    /// Back up the database.
    Backup {
        /// Output path (default: <data_dir>/backups/tfsaid-YYYYMMDD-HHMMSS.db)
        #[arg(long)]
        output: Option<String>,
    },
    /// Show current database and summary statistics.
    Status,
}

#[derive(Subcommand)]
pub enum AccountsCommands {
    /// Add a new account.
    Add {
        /// Internal account name, e.g. 'Questrade TFSA'
        name: String,
        /// Account name as reported to the CRA
        #[arg(long = "cra-name")]
        cra_name: String,
        /// Account type, e.g. savings, brokerage
        #[arg(long = "type")]
        account_type: Option<String>,
        /// Institution name
        #[arg(long)]
        institution: Option<String>,
        /// Account number at the institution
        #[arg(long = "number")]
        account_number: Option<String>,
        /// Opening date: YYYY-MM-DD
        #[arg(long = "opened")]
        opening_date: Option<String>,
        /// Close date: YYYY-MM-DD
        #[arg(long = "closed")]
        close_date: Option<String>,
        /// Free-text notes
        #[arg(long)]
        notes: Option<String>,
    },
    /// List all accounts.
    List,
    /// Update an existing account.
    Update {
        /// Account ID (shown in `tfsaid accounts list`)
        id: i64,
        /// New internal name
        #[arg(long)]
        name: Option<String>,
        /// New CRA-reported name
        #[arg(long = "cra-name")]
        cra_name: Option<String>,
        /// New account type
        #[arg(long = "type")]
        account_type: Option<String>,
        /// New institution
        #[arg(long)]
        institution: Option<String>,
        /// New account number
        #[arg(long = "number")]
        account_number: Option<String>,
        /// New opening date: YYYY-MM-DD
        #[arg(long = "opened")]
        opening_date: Option<String>,
        /// New close date: YYYY-MM-DD
        #[arg(long = "closed")]
        close_date: Option<String>,
        /// New notes
        #[arg(long)]
        notes: Option<String>,
    },
    /// Delete an account and all of its transactions.
    Delete {
        /// Account ID (shown in `tfsaid accounts list`)
        id: i64,
    },
}

#[derive(Subcommand)]
pub enum TxnCommands {
    /// Record a deposit or withdrawal.
    Add {
        /// Account name the transaction belongs to
        #[arg(long)]
        account: String,
        /// Date: YYYY-MM-DD
        #[arg(long)]
        date: String,
        /// Transaction type: deposit or withdrawal
        #[arg(long = "type")]
        kind: String,
        /// Amount (positive, at most two decimal digits)
        #[arg(long, allow_hyphen_values = true)]
        amount: String,
        /// Free-text notes
        #[arg(long)]
        notes: Option<String>,
    },
    /// List all transactions, oldest first.
    List,
    /// Update an existing transaction.
    Update {
        /// Transaction ID (shown in `tfsaid txn list`)
        id: i64,
        /// New account name
        #[arg(long)]
        account: Option<String>,
        /// New date: YYYY-MM-DD
        #[arg(long)]
        date: Option<String>,
        /// New type: deposit or withdrawal
        #[arg(long = "type")]
        kind: Option<String>,
        /// New amount
        #[arg(long)]
        amount: Option<String>,
        /// New notes
        #[arg(long)]
        notes: Option<String>,
    },
    /// Delete a transaction by ID.
    Delete {
        /// Transaction ID (shown in `tfsaid txn list`)
        id: i64,
    },
}

#[derive(Subcommand)]
pub enum RoomCommands {
    /// Record the new contribution room granted for a year.
    Add {
        /// 4-digit calendar year, e.g. 2025
        year: i32,
        /// New room amount for that year
        amount: String,
    },
    /// List all recorded room grants.
    List,
    /// Delete the room grant for a year.
    Delete {
        /// 4-digit calendar year
        year: i32,
    },
}

#[derive(Subcommand)]
pub enum ReportCommands {
    /// Annual contribution-room summary with over-contribution flags.
    Summary,
    /// Transactions grouped by CRA-reported account name.
    Cra,
}

#[derive(Subcommand)]
pub enum ExportCommands {
    /// Export the annual summary to CSV.
    Summary {
        /// Output file path
        #[arg(long)]
        output: Option<String>,
    },
    /// Export the CRA report to CSV.
    Cra {
        /// Output file path
        #[arg(long)]
        output: Option<String>,
    },
}
