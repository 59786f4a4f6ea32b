use std::path::PathBuf;

use crate::error::{Result, TfsaidError};
use crate::settings::{load_settings, save_settings, shellexpand_path};

pub fn run(path: &str) -> Result<()> {
    let resolved = PathBuf::from(shellexpand_path(path));
    let db_path = resolved.join("tfsaid.db");

    if !db_path.exists() {
        return Err(TfsaidError::Settings(format!(
            "No database found at {}\nRun `tfsaid init --data-dir {}` to create one.",
            db_path.display(),
            resolved.display()
        )));
    }

    let mut settings = load_settings();
    settings.data_dir = resolved.to_string_lossy().to_string();
    save_settings(&settings)?;

    println!("Switched to {}", resolved.display());
    Ok(())
}
