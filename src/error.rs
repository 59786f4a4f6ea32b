use thiserror::Error;

#[derive(Error, Debug)]
pub enum TfsaidError {
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Unknown account: {0}")]
    UnknownAccount(String),

    #[error("A room entry for {0} already exists")]
    DuplicateRoomYear(i32),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Ledger contract violation: {0}")]
    Ledger(String),

    #[error("Settings error: {0}")]
    Settings(String),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, TfsaidError>;
