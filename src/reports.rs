use rusqlite::Connection;

use crate::error::Result;
use crate::ledger::{self, AnnualSummary, Flow, RoomGrant};
use crate::models::TxKind;

// ---------------------------------------------------------------------------
// Annual contribution-room summary
// ---------------------------------------------------------------------------

/// Fetch room grants and per-year transaction activity, then hand both to
/// the pure ledger fold. The ledger never sees the connection.
pub fn get_annual_summary(conn: &Connection) -> Result<AnnualSummary> {
    let mut stmt = conn.prepare(
        "SELECT CAST(substr(year_first_day, 1, 4) AS INTEGER), new_room \
         FROM room_years ORDER BY year_first_day",
    )?;
    let grants: Vec<RoomGrant> = stmt
        .query_map([], |row| {
            Ok(RoomGrant {
                year: row.get(0)?,
                new_room: row.get(1)?,
            })
        })?
        .collect::<std::result::Result<Vec<_>, _>>()?;

    let mut tstmt = conn.prepare(
        "SELECT CAST(substr(date, 1, 4) AS INTEGER), kind, SUM(amount) \
         FROM transactions \
         GROUP BY substr(date, 1, 4), kind \
         ORDER BY substr(date, 1, 4)",
    )?;
    let raw: Vec<(i32, String, f64)> = tstmt
        .query_map([], |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)))?
        .collect::<std::result::Result<Vec<_>, _>>()?;

    let mut flows = Vec::with_capacity(raw.len());
    for (year, kind, amount) in raw {
        flows.push(Flow {
            year,
            kind: TxKind::parse(&kind)?,
            amount,
        });
    }

    ledger::compute_annual_summary(&grants, &flows)
}

// ---------------------------------------------------------------------------
// CRA-format report
// ---------------------------------------------------------------------------

pub struct CraRow {
    pub date: String,
    pub kind: TxKind,
    pub amount: f64,
}

pub struct CraAccountGroup {
    pub cra_name: String,
    pub rows: Vec<CraRow>,
    pub deposit_total: f64,
    pub withdrawal_total: f64,
}

impl CraAccountGroup {
    pub fn net_change(&self) -> f64 {
        self.deposit_total - self.withdrawal_total
    }
}

pub struct CraReport {
    pub groups: Vec<CraAccountGroup>,
    pub grand_deposits: f64,
    pub grand_withdrawals: f64,
}

impl CraReport {
    pub fn grand_net(&self) -> f64 {
        self.grand_deposits - self.grand_withdrawals
    }
}

/// Transactions grouped by CRA-reported account name, with per-account and
/// report-wide deposit/withdrawal totals.
pub fn get_cra_report(conn: &Connection) -> Result<CraReport> {
    let mut stmt = conn.prepare(
        "SELECT a.cra_name, t.date, t.kind, t.amount \
         FROM transactions t JOIN accounts a ON t.account_id = a.id \
         ORDER BY a.cra_name, t.date, t.id",
    )?;
    let raw: Vec<(String, String, String, f64)> = stmt
        .query_map([], |row| {
            Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?))
        })?
        .collect::<std::result::Result<Vec<_>, _>>()?;

    let mut groups: Vec<CraAccountGroup> = Vec::new();
    let mut grand_deposits = 0.0f64;
    let mut grand_withdrawals = 0.0f64;

    for (cra_name, date, kind, amount) in raw {
        let kind = TxKind::parse(&kind)?;
        if groups.last().map(|g| g.cra_name.as_str()) != Some(cra_name.as_str()) {
            groups.push(CraAccountGroup {
                cra_name,
                rows: Vec::new(),
                deposit_total: 0.0,
                withdrawal_total: 0.0,
            });
        }
        let group = groups.last_mut().unwrap();
        match kind {
            TxKind::Deposit => {
                group.deposit_total += amount;
                grand_deposits += amount;
            }
            TxKind::Withdrawal => {
                group.withdrawal_total += amount;
                grand_withdrawals += amount;
            }
        }
        group.rows.push(CraRow { date, kind, amount });
    }

    Ok(CraReport {
        groups,
        grand_deposits,
        grand_withdrawals,
    })
}
