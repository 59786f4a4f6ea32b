use comfy_table::{Cell, Table};

use crate::cli::{parse_room_amount, parse_year};
use crate::db::open_data_dir;
use crate::error::{Result, TfsaidError};
use crate::fmt::money;
use crate::models::RoomYear;
use crate::settings::get_data_dir;

pub fn add(year: i32, amount: &str) -> Result<()> {
    let year = parse_year(year)?;
    let amount = parse_room_amount(amount)?;
    // The grant is keyed by the year's first calendar day.
    let year_first_day = format!("{year}-01-01");

    let conn = open_data_dir(&get_data_dir())?;
    let exists: i64 = conn.query_row(
        "SELECT count(*) FROM room_years WHERE year_first_day = ?1",
        rusqlite::params![year_first_day],
        |r| r.get(0),
    )?;
    if exists > 0 {
        return Err(TfsaidError::DuplicateRoomYear(year));
    }

    conn.execute(
        "INSERT INTO room_years (year_first_day, new_room) VALUES (?1, ?2)",
        rusqlite::params![year_first_day, amount],
    )?;
    println!("Recorded {} of new room for {year}.", money(amount));
    Ok(())
}

pub fn list() -> Result<()> {
    let conn = open_data_dir(&get_data_dir())?;
    let mut stmt = conn.prepare(
        "SELECT id, CAST(substr(year_first_day, 1, 4) AS INTEGER), new_room \
         FROM room_years ORDER BY year_first_day",
    )?;
    let rows: Vec<RoomYear> = stmt
        .query_map([], |row| {
            Ok(RoomYear {
                id: row.get(0)?,
                year: row.get(1)?,
                new_room: row.get(2)?,
            })
        })?
        .collect::<std::result::Result<Vec<_>, _>>()?;

    let mut table = Table::new();
    table.set_header(vec!["Year", "New Room"]);
    for room in &rows {
        table.add_row(vec![Cell::new(room.year), Cell::new(money(room.new_room))]);
    }
    println!("TFSA Annual Limits\n{table}");
    Ok(())
}

pub fn delete(year: i32) -> Result<()> {
    let year = parse_year(year)?;
    let conn = open_data_dir(&get_data_dir())?;
    let deleted = conn.execute(
        "DELETE FROM room_years WHERE year_first_day = ?1",
        rusqlite::params![format!("{year}-01-01")],
    )?;
    if deleted == 0 {
        return Err(TfsaidError::Other(format!("no room entry for {year}")));
    }
    println!("Deleted room entry for {year}");
    Ok(())
}
