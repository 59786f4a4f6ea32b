use std::path::PathBuf;

use crate::db::open_data_dir;
use crate::error::Result;
use crate::fmt::amount2;
use crate::models::TxKind;
use crate::reports;
use crate::settings::get_data_dir;

fn default_path(name: &str) -> PathBuf {
    let date = chrono::Local::now().format("%Y-%m-%d").to_string();
    get_data_dir().join("exports").join(format!("{name}-{date}.csv"))
}

fn resolve_path(output: Option<String>, name: &str) -> Result<PathBuf> {
    let path = output.map(PathBuf::from).unwrap_or_else(|| default_path(name));
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    Ok(path)
}

pub fn summary(output: Option<String>) -> Result<()> {
    let conn = open_data_dir(&get_data_dir())?;
    let data = reports::get_annual_summary(&conn)?;

    let path = resolve_path(output, "annual-summary")?;
    let mut writer = csv::Writer::from_path(&path)?;
    writer.write_record([
        "Year",
        "New Room",
        "Total Start Room",
        "Deposits",
        "Withdrawals",
        "Remaining Room",
        "Over Contribution",
    ])?;
    for row in &data.rows {
        writer.write_record([
            row.year.to_string(),
            amount2(row.new_room),
            amount2(row.total_start_room),
            amount2(row.deposits),
            amount2(row.withdrawals),
            amount2(row.remaining_room),
            if row.is_overcontribution { "yes" } else { "no" }.to_string(),
        ])?;
    }
    writer.flush()?;
    println!("Wrote {}", path.display());
    Ok(())
}

pub fn cra(output: Option<String>) -> Result<()> {
    let conn = open_data_dir(&get_data_dir())?;
    let report = reports::get_cra_report(&conn)?;

    let path = resolve_path(output, "cra-report")?;
    let mut writer = csv::Writer::from_path(&path)?;
    writer.write_record(["Account Name in CRA", "Date", "Deposit", "Withdrawal", "Net Change"])?;
    for group in &report.groups {
        for row in &group.rows {
            let (dep, wd) = match row.kind {
                TxKind::Deposit => (amount2(row.amount), String::new()),
                TxKind::Withdrawal => (String::new(), amount2(row.amount)),
            };
            writer.write_record([group.cra_name.clone(), row.date.clone(), dep, wd, String::new()])?;
        }
        writer.write_record([
            format!("TOTALS: {}", group.cra_name),
            String::new(),
            amount2(group.deposit_total),
            amount2(group.withdrawal_total),
            amount2(group.net_change()),
        ])?;
    }
    writer.write_record([
        "REPORT TOTALS".to_string(),
        "All Accounts".to_string(),
        amount2(report.grand_deposits),
        amount2(report.grand_withdrawals),
        amount2(report.grand_net()),
    ])?;
    writer.flush()?;
    println!("Wrote {}", path.display());
    Ok(())
}
