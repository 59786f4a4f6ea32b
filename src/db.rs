use std::path::Path;

use rusqlite::Connection;

use crate::error::Result;

pub const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS accounts (
    id INTEGER PRIMARY KEY,
    name TEXT NOT NULL UNIQUE,
    cra_name TEXT NOT NULL,
    account_type TEXT,
    institution TEXT,
    account_number TEXT,
    opening_date TEXT,
    close_date TEXT,
    notes TEXT,
    created_at TEXT DEFAULT (datetime('now'))
);

CREATE TABLE IF NOT EXISTS transactions (
    id INTEGER PRIMARY KEY,
    account_id INTEGER NOT NULL,
    date TEXT NOT NULL,
    kind TEXT NOT NULL CHECK (kind IN ('Deposit', 'Withdrawal')),
    amount REAL NOT NULL CHECK (amount > 0),
    notes TEXT,
    created_at TEXT DEFAULT (datetime('now')),
    FOREIGN KEY (account_id) REFERENCES accounts(id) ON DELETE CASCADE
);

CREATE TABLE IF NOT EXISTS room_years (
    id INTEGER PRIMARY KEY,
    year_first_day TEXT NOT NULL UNIQUE,
    new_room REAL NOT NULL CHECK (new_room >= 0),
    created_at TEXT DEFAULT (datetime('now'))
);
";

pub fn get_connection(db_path: &Path) -> Result<Connection> {
    let conn = Connection::open(db_path)?;
    conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA foreign_keys=ON;")?;
    Ok(conn)
}

pub fn init_db(conn: &Connection) -> Result<()> {
    conn.execute_batch(SCHEMA)?;
    Ok(())
}

/// Open (or create) the database inside a data directory. The schema is
/// idempotent, so this is safe to call on every command.
pub fn open_data_dir(data_dir: &Path) -> Result<Connection> {
    let conn = get_connection(&data_dir.join("tfsaid.db"))?;
    init_db(&conn)?;
    Ok(conn)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_db() -> (tempfile::TempDir, Connection) {
        let dir = tempfile::tempdir().unwrap();
        let conn = open_data_dir(dir.path()).unwrap();
        (dir, conn)
    }

    #[test]
    fn test_init_db_creates_tables() {
        let (_dir, conn) = test_db();
        let tables: Vec<String> = conn
            .prepare("SELECT name FROM sqlite_master WHERE type='table' AND name NOT LIKE 'sqlite_%'")
            .unwrap()
            .query_map([], |row| row.get(0))
            .unwrap()
            .collect::<std::result::Result<Vec<_>, _>>()
            .unwrap();
        for expected in &["accounts", "transactions", "room_years"] {
            assert!(tables.contains(&expected.to_string()), "missing table: {expected}");
        }
    }

    #[test]
    fn test_init_db_is_idempotent() {
        let (_dir, conn) = test_db();
        init_db(&conn).unwrap();
    }

    #[test]
    fn test_delete_account_cascades_to_transactions() {
        let (_dir, conn) = test_db();
        conn.execute(
            "INSERT INTO accounts (name, cra_name) VALUES ('Main', 'TFSA Main')",
            [],
        )
        .unwrap();
        let acct = conn.last_insert_rowid();
        conn.execute(
            "INSERT INTO transactions (account_id, date, kind, amount) \
             VALUES (?1, '2024-03-01', 'Deposit', 500.0)",
            rusqlite::params![acct],
        )
        .unwrap();

        conn.execute("DELETE FROM accounts WHERE id = ?1", rusqlite::params![acct])
            .unwrap();
        let orphans: i64 = conn
            .query_row("SELECT count(*) FROM transactions", [], |r| r.get(0))
            .unwrap();
        assert_eq!(orphans, 0);
    }

    #[test]
    fn test_transaction_requires_existing_account() {
        let (_dir, conn) = test_db();
        let result = conn.execute(
            "INSERT INTO transactions (account_id, date, kind, amount) \
             VALUES (999, '2024-03-01', 'Deposit', 500.0)",
            [],
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_transaction_kind_is_constrained() {
        let (_dir, conn) = test_db();
        conn.execute(
            "INSERT INTO accounts (name, cra_name) VALUES ('Main', 'TFSA Main')",
            [],
        )
        .unwrap();
        let acct = conn.last_insert_rowid();
        let result = conn.execute(
            "INSERT INTO transactions (account_id, date, kind, amount) \
             VALUES (?1, '2024-03-01', 'Transfer', 500.0)",
            rusqlite::params![acct],
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_transaction_amount_must_be_positive() {
        let (_dir, conn) = test_db();
        conn.execute(
            "INSERT INTO accounts (name, cra_name) VALUES ('Main', 'TFSA Main')",
            [],
        )
        .unwrap();
        let acct = conn.last_insert_rowid();
        for bad in ["0", "-25.0"] {
            let result = conn.execute(
                &format!(
                    "INSERT INTO transactions (account_id, date, kind, amount) \
                     VALUES (?1, '2024-03-01', 'Deposit', {bad})"
                ),
                rusqlite::params![acct],
            );
            assert!(result.is_err(), "amount {bad} should be rejected");
        }
    }

    #[test]
    fn test_room_year_is_unique_per_year() {
        let (_dir, conn) = test_db();
        conn.execute(
            "INSERT INTO room_years (year_first_day, new_room) VALUES ('2024-01-01', 7000.0)",
            [],
        )
        .unwrap();
        let result = conn.execute(
            "INSERT INTO room_years (year_first_day, new_room) VALUES ('2024-01-01', 6500.0)",
            [],
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_account_name_is_unique() {
        let (_dir, conn) = test_db();
        conn.execute(
            "INSERT INTO accounts (name, cra_name) VALUES ('Main', 'TFSA Main')",
            [],
        )
        .unwrap();
        let result = conn.execute(
            "INSERT INTO accounts (name, cra_name) VALUES ('Main', 'Other')",
            [],
        );
        assert!(result.is_err());
    }
}
