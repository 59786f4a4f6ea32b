use comfy_table::{Cell, Table};
use rusqlite::Connection;

use crate::cli::parse_date;
use crate::db::open_data_dir;
use crate::error::{Result, TfsaidError};
use crate::models::Account;
use crate::settings::get_data_dir;

pub struct AccountInput<'a> {
    pub name: &'a str,
    pub cra_name: &'a str,
    pub account_type: Option<&'a str>,
    pub institution: Option<&'a str>,
    pub account_number: Option<&'a str>,
    pub opening_date: Option<&'a str>,
    pub close_date: Option<&'a str>,
    pub notes: Option<&'a str>,
}

pub fn add(input: &AccountInput) -> Result<()> {
    if input.name.trim().is_empty() {
        return Err(TfsaidError::InvalidInput(
            "the internal account name is required".to_string(),
        ));
    }
    if input.cra_name.trim().is_empty() {
        return Err(TfsaidError::InvalidInput(
            "the CRA account name is required".to_string(),
        ));
    }
    if let Some(date) = input.opening_date {
        parse_date(date)?;
    }
    if let Some(date) = input.close_date {
        parse_date(date)?;
    }

    let conn = open_data_dir(&get_data_dir())?;
    conn.execute(
        "INSERT INTO accounts (name, cra_name, account_type, institution, account_number, \
         opening_date, close_date, notes) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        rusqlite::params![
            input.name.trim(),
            input.cra_name.trim(),
            input.account_type,
            input.institution,
            input.account_number,
            input.opening_date,
            input.close_date,
            input.notes,
        ],
    )?;
    println!("Added account: {}", input.name.trim());
    Ok(())
}

pub fn list() -> Result<()> {
    let conn = open_data_dir(&get_data_dir())?;
    let accounts = fetch_all(&conn)?;

    let mut table = Table::new();
    table.set_header(vec!["ID", "Name", "CRA Name", "Type", "Institution", "Number", "Opened", "Closed"]);
    for a in &accounts {
        table.add_row(vec![
            Cell::new(a.id),
            Cell::new(&a.name),
            Cell::new(&a.cra_name),
            Cell::new(a.account_type.as_deref().unwrap_or("")),
            Cell::new(a.institution.as_deref().unwrap_or("")),
            Cell::new(a.account_number.as_deref().unwrap_or("")),
            Cell::new(a.opening_date.as_deref().unwrap_or("")),
            Cell::new(a.close_date.as_deref().unwrap_or("")),
        ]);
    }
    println!("Accounts\n{table}");
    Ok(())
}

#[allow(clippy::too_many_arguments)]
pub fn update(
    id: i64,
    name: Option<&str>,
    cra_name: Option<&str>,
    account_type: Option<&str>,
    institution: Option<&str>,
    account_number: Option<&str>,
    opening_date: Option<&str>,
    close_date: Option<&str>,
    notes: Option<&str>,
) -> Result<()> {
    if let Some(n) = name {
        if n.trim().is_empty() {
            return Err(TfsaidError::InvalidInput(
                "the internal account name cannot be empty".to_string(),
            ));
        }
    }
    if let Some(n) = cra_name {
        if n.trim().is_empty() {
            return Err(TfsaidError::InvalidInput(
                "the CRA account name cannot be empty".to_string(),
            ));
        }
    }
    if let Some(date) = opening_date {
        parse_date(date)?;
    }
    if let Some(date) = close_date {
        parse_date(date)?;
    }

    let conn = open_data_dir(&get_data_dir())?;
    let current = fetch_one(&conn, id)?;

    conn.execute(
        "UPDATE accounts SET name = ?1, cra_name = ?2, account_type = ?3, institution = ?4, \
         account_number = ?5, opening_date = ?6, close_date = ?7, notes = ?8 WHERE id = ?9",
        rusqlite::params![
            name.map(str::trim).unwrap_or(current.name.as_str()),
            cra_name.map(str::trim).unwrap_or(current.cra_name.as_str()),
            account_type.or(current.account_type.as_deref()),
            institution.or(current.institution.as_deref()),
            account_number.or(current.account_number.as_deref()),
            opening_date.or(current.opening_date.as_deref()),
            close_date.or(current.close_date.as_deref()),
            notes.or(current.notes.as_deref()),
            id,
        ],
    )?;
    println!("Updated account {id}");
    Ok(())
}

pub fn delete(id: i64) -> Result<()> {
    let conn = open_data_dir(&get_data_dir())?;
    let account = fetch_one(&conn, id)?;
    let txn_count: i64 = conn.query_row(
        "SELECT count(*) FROM transactions WHERE account_id = ?1",
        rusqlite::params![id],
        |r| r.get(0),
    )?;

    conn.execute("DELETE FROM accounts WHERE id = ?1", rusqlite::params![id])?;
    println!(
        "Deleted account '{}' and {txn_count} transaction(s).",
        account.name
    );
    Ok(())
}

fn fetch_all(conn: &Connection) -> Result<Vec<Account>> {
    let mut stmt = conn.prepare(
        "SELECT id, name, cra_name, account_type, institution, account_number, \
         opening_date, close_date, notes FROM accounts ORDER BY name",
    )?;
    let rows = stmt.query_map([], |row| {
        Ok(Account {
            id: row.get(0)?,
            name: row.get(1)?,
            cra_name: row.get(2)?,
            account_type: row.get(3)?,
            institution: row.get(4)?,
            account_number: row.get(5)?,
            opening_date: row.get(6)?,
            close_date: row.get(7)?,
            notes: row.get(8)?,
        })
    })?;
    Ok(rows.collect::<std::result::Result<Vec<_>, _>>()?)
}

fn fetch_one(conn: &Connection, id: i64) -> Result<Account> {
    let mut stmt = conn.prepare(
        "SELECT id, name, cra_name, account_type, institution, account_number, \
         opening_date, close_date, notes FROM accounts WHERE id = ?1",
    )?;
    let mut rows = stmt.query_map(rusqlite::params![id], |row| {
        Ok(Account {
            id: row.get(0)?,
            name: row.get(1)?,
            cra_name: row.get(2)?,
            account_type: row.get(3)?,
            institution: row.get(4)?,
            account_number: row.get(5)?,
            opening_date: row.get(6)?,
            close_date: row.get(7)?,
            notes: row.get(8)?,
        })
    })?;
    match rows.next() {
        Some(account) => Ok(account?),
        None => Err(TfsaidError::UnknownAccount(format!("id {id}"))),
    }
}
