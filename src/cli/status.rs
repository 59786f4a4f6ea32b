use crate::db::get_connection;
use crate::error::Result;
use crate::settings::get_data_dir;

pub fn run() -> Result<()> {
    let data_dir = get_data_dir();
    let db_path = data_dir.join("tfsaid.db");

    println!("Data dir:   {}", data_dir.display());
    println!("Database:   {}", db_path.display());

    if db_path.exists() {
        let size = std::fs::metadata(&db_path)?.len();
        println!("DB size:    {size} bytes");

        let conn = get_connection(&db_path)?;
        let accounts: i64 = conn.query_row("SELECT count(*) FROM accounts", [], |r| r.get(0))?;
        let transactions: i64 =
            conn.query_row("SELECT count(*) FROM transactions", [], |r| r.get(0))?;
        let room_years: i64 =
            conn.query_row("SELECT count(*) FROM room_years", [], |r| r.get(0))?;

        println!();
        println!("Accounts:      {accounts}");
        println!("Transactions:  {transactions}");
        println!("Room years:    {room_years}");
    } else {
        println!();
        println!("Database not found. Run `tfsaid init` to set up.");
    }

    Ok(())
}
