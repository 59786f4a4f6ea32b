use std::fmt;

use crate::error::{Result, TfsaidError};

#[allow(dead_code)]
#[derive(Debug, Clone)]
pub struct Account {
    pub id: i64,
    pub name: String,
    pub cra_name: String,
    pub account_type: Option<String>,
    pub institution: Option<String>,
    pub account_number: Option<String>,
    pub opening_date: Option<String>,
    pub close_date: Option<String>,
    pub notes: Option<String>,
}

/// Deposit consumes contribution room; Withdrawal restores it starting the
/// following year. No other transaction kinds exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TxKind {
    Deposit,
    Withdrawal,
}

impl TxKind {
    pub fn as_str(self) -> &'static str {
        match self {
            TxKind::Deposit => "Deposit",
            TxKind::Withdrawal => "Withdrawal",
        }
    }

    pub fn parse(s: &str) -> Result<TxKind> {
        match s.to_ascii_lowercase().as_str() {
            "deposit" => Ok(TxKind::Deposit),
            "withdrawal" => Ok(TxKind::Withdrawal),
            _ => Err(TfsaidError::InvalidInput(format!(
                "transaction type must be 'deposit' or 'withdrawal', got '{s}'"
            ))),
        }
    }
}

impl fmt::Display for TxKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[allow(dead_code)]
#[derive(Debug, Clone)]
pub struct Transaction {
    pub id: Option<i64>,
    pub account_id: i64,
    pub date: String,
    pub kind: TxKind,
    pub amount: f64,
    pub notes: Option<String>,
}

/// CRA-granted new room, keyed by the year's first calendar day.
#[allow(dead_code)]
#[derive(Debug, Clone)]
pub struct RoomYear {
    pub id: i64,
    pub year: i32,
    pub new_room: f64,
}
