use std::path::PathBuf;

use rusqlite::backup::Backup;

use crate::db::get_connection;
use crate::error::{Result, TfsaidError};
use crate::settings::get_data_dir;

pub fn run(output: Option<String>) -> Result<()> {
    let data_dir = get_data_dir();
    let db_path = data_dir.join("tfsaid.db");
    if !db_path.exists() {
        return Err(TfsaidError::Settings(format!(
            "No database found at {}. Run `tfsaid init` first.",
            db_path.display()
        )));
    }
    let conn = get_connection(&db_path)?;

    let dest_path = match output {
        Some(p) => PathBuf::from(p),
        None => {
            let backups_dir = data_dir.join("backups");
            std::fs::create_dir_all(&backups_dir)?;
            let stamp = chrono::Local::now().format("%Y%m%d-%H%M%S");
            backups_dir.join(format!("tfsaid-{stamp}.db"))
        }
    };

    let mut dest_conn = rusqlite::Connection::open(&dest_path)?;
    let backup = Backup::new(&conn, &mut dest_conn)?;
    backup.run_to_completion(100, std::time::Duration::from_millis(10), None)?;

    println!("Backup saved to {}", dest_path.display());
    Ok(())
}
