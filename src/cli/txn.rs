use comfy_table::{Cell, Table};
use rusqlite::Connection;

use crate::cli::{parse_amount, parse_date};
use crate::db::open_data_dir;
use crate::error::{Result, TfsaidError};
use crate::fmt::amount2;
use crate::models::{Transaction, TxKind};
use crate::settings::get_data_dir;

pub fn add(account: &str, date: &str, kind: &str, amount: &str, notes: Option<&str>) -> Result<()> {
    let date = parse_date(date)?;
    let kind = TxKind::parse(kind)?;
    let amount = parse_amount(amount)?;

    let conn = open_data_dir(&get_data_dir())?;
    let account_id = account_id_by_name(&conn, account)?;

    conn.execute(
        "INSERT INTO transactions (account_id, date, kind, amount, notes) \
         VALUES (?1, ?2, ?3, ?4, ?5)",
        rusqlite::params![account_id, date, kind.as_str(), amount, notes],
    )?;
    println!("Recorded {kind} of {} on {date}.", amount2(amount));
    Ok(())
}

pub fn list() -> Result<()> {
    let conn = open_data_dir(&get_data_dir())?;
    let mut stmt = conn.prepare(
        "SELECT t.id, a.name, t.date, t.kind, t.amount, t.notes \
         FROM transactions t JOIN accounts a ON t.account_id = a.id \
         ORDER BY t.date, t.id",
    )?;
    let rows: Vec<(i64, String, String, String, f64, Option<String>)> = stmt
        .query_map([], |row| {
            Ok((
                row.get(0)?,
                row.get(1)?,
                row.get(2)?,
                row.get(3)?,
                row.get(4)?,
                row.get(5)?,
            ))
        })?
        .collect::<std::result::Result<Vec<_>, _>>()?;

    let mut table = Table::new();
    table.set_header(vec!["ID", "Account", "Date", "Deposit", "Withdrawal", "Notes"]);
    for (id, account, date, kind, amount, notes) in &rows {
        let kind = TxKind::parse(kind)?;
        // Deposits and withdrawals get their own columns, as on a statement.
        let (dep, wd) = match kind {
            TxKind::Deposit => (amount2(*amount), String::new()),
            TxKind::Withdrawal => (String::new(), amount2(*amount)),
        };
        table.add_row(vec![
            Cell::new(id),
            Cell::new(account),
            Cell::new(date),
            Cell::new(dep),
            Cell::new(wd),
            Cell::new(notes.as_deref().unwrap_or("")),
        ]);
    }
    println!("Transactions ({})\n{table}", rows.len());
    Ok(())
}

pub fn update(
    id: i64,
    account: Option<&str>,
    date: Option<&str>,
    kind: Option<&str>,
    amount: Option<&str>,
    notes: Option<&str>,
) -> Result<()> {
    let conn = open_data_dir(&get_data_dir())?;
    let current = fetch_one(&conn, id)?;

    let account_id = match account {
        Some(name) => account_id_by_name(&conn, name)?,
        None => current.account_id,
    };
    let date = match date {
        Some(d) => parse_date(d)?,
        None => current.date,
    };
    let kind = match kind {
        Some(k) => TxKind::parse(k)?,
        None => current.kind,
    };
    let amount = match amount {
        Some(a) => parse_amount(a)?,
        None => current.amount,
    };
    let notes = notes.map(str::to_string).or(current.notes);

    conn.execute(
        "UPDATE transactions SET account_id = ?1, date = ?2, kind = ?3, amount = ?4, notes = ?5 \
         WHERE id = ?6",
        rusqlite::params![account_id, date, kind.as_str(), amount, notes, id],
    )?;
    println!("Updated transaction {id}");
    Ok(())
}

pub fn delete(id: i64) -> Result<()> {
    let conn = open_data_dir(&get_data_dir())?;
    let deleted = conn.execute("DELETE FROM transactions WHERE id = ?1", rusqlite::params![id])?;
    if deleted == 0 {
        return Err(TfsaidError::Other(format!("no transaction with id {id}")));
    }
    println!("Deleted transaction {id}");
    Ok(())
}

fn fetch_one(conn: &Connection, id: i64) -> Result<Transaction> {
    let mut stmt = conn.prepare(
        "SELECT account_id, date, kind, amount, notes FROM transactions WHERE id = ?1",
    )?;
    let mut rows = stmt.query_map(rusqlite::params![id], |row| {
        Ok((
            row.get::<_, i64>(0)?,
            row.get::<_, String>(1)?,
            row.get::<_, String>(2)?,
            row.get::<_, f64>(3)?,
            row.get::<_, Option<String>>(4)?,
        ))
    })?;
    match rows.next() {
        Some(row) => {
            let (account_id, date, kind, amount, notes) = row?;
            Ok(Transaction {
                id: Some(id),
                account_id,
                date,
                kind: TxKind::parse(&kind)?,
                amount,
                notes,
            })
        }
        None => Err(TfsaidError::Other(format!("no transaction with id {id}"))),
    }
}

pub(crate) fn account_id_by_name(conn: &Connection, name: &str) -> Result<i64> {
    conn.query_row(
        "SELECT id FROM accounts WHERE name = ?1",
        rusqlite::params![name],
        |row| row.get(0),
    )
    .map_err(|e| match e {
        rusqlite::Error::QueryReturnedNoRows => TfsaidError::UnknownAccount(name.to_string()),
        other => TfsaidError::Db(other),
    })
}
