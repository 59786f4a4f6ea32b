use colored::Colorize;
use comfy_table::{Cell, Table};

use crate::db::open_data_dir;
use crate::error::Result;
use crate::fmt::{amount2, money};
use crate::models::TxKind;
use crate::reports;
use crate::settings::get_data_dir;

pub fn summary() -> Result<()> {
    let conn = open_data_dir(&get_data_dir())?;
    let data = reports::get_annual_summary(&conn)?;

    if data.rows.is_empty() {
        println!("No room years recorded. Add one with `tfsaid room add <year> <amount>`.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec![
        "Year",
        "New Room",
        "Total Start Room",
        "Deposits",
        "Withdrawals",
        "Remaining Room",
    ]);
    for row in &data.rows {
        let remaining = if row.remaining_room < 0.0 {
            money(row.remaining_room).red().to_string()
        } else if row.remaining_room == 0.0 {
            money(row.remaining_room).yellow().to_string()
        } else {
            money(row.remaining_room).green().to_string()
        };
        table.add_row(vec![
            Cell::new(row.year),
            Cell::new(money(row.new_room)),
            Cell::new(money(row.total_start_room)),
            Cell::new(money(row.deposits)),
            Cell::new(money(row.withdrawals)),
            Cell::new(remaining),
        ]);
    }
    println!("Annual Contribution Room Summary\n{table}");

    if data.overcontribution_years.is_empty() {
        println!("{}", "No over-contribution in any year.".green());
    } else {
        let years: Vec<String> = data
            .overcontribution_years
            .iter()
            .map(|y| y.to_string())
            .collect();
        println!(
            "{}",
            format!("Over-contribution in year(s): {}", years.join(", ")).red()
        );
    }
    Ok(())
}

pub fn cra() -> Result<()> {
    let conn = open_data_dir(&get_data_dir())?;
    let report = reports::get_cra_report(&conn)?;

    if report.groups.is_empty() {
        println!("No transactions recorded.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec![
        "Account Name in CRA",
        "Date",
        "Deposit",
        "Withdrawal",
        "Net Change",
    ]);
    for group in &report.groups {
        for row in &group.rows {
            let (dep, wd) = match row.kind {
                TxKind::Deposit => (amount2(row.amount), String::new()),
                TxKind::Withdrawal => (String::new(), amount2(row.amount)),
            };
            table.add_row(vec![
                Cell::new(&group.cra_name),
                Cell::new(&row.date),
                Cell::new(dep),
                Cell::new(wd),
                Cell::new(""),
            ]);
        }
        table.add_row(vec![
            Cell::new(format!("TOTALS: {}", group.cra_name).bold()),
            Cell::new(""),
            Cell::new(amount2(group.deposit_total)),
            Cell::new(amount2(group.withdrawal_total)),
            Cell::new(amount2(group.net_change())),
        ]);
    }
    table.add_row(vec![
        Cell::new("REPORT TOTALS".bold()),
        Cell::new("All Accounts"),
        Cell::new(amount2(report.grand_deposits)),
        Cell::new(amount2(report.grand_withdrawals)),
        Cell::new(amount2(report.grand_net())),
    ]);
    println!("TFSA Report (CRA Format)\n{table}");
    Ok(())
}
