use std::collections::HashMap;

use crate::error::{Result, TfsaidError};
use crate::models::TxKind;

/// New contribution room granted for a single calendar year.
#[derive(Debug, Clone, Copy)]
pub struct RoomGrant {
    pub year: i32,
    pub new_room: f64,
}

/// A deposit or withdrawal, reduced to the fields the fold needs.
#[derive(Debug, Clone, Copy)]
pub struct Flow {
    pub year: i32,
    pub kind: TxKind,
    pub amount: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct YearRow {
    pub year: i32,
    pub new_room: f64,
    pub total_start_room: f64,
    pub deposits: f64,
    pub withdrawals: f64,
    pub remaining_room: f64,
    pub is_overcontribution: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnnualSummary {
    pub rows: Vec<YearRow>,
    pub overcontribution_years: Vec<i32>,
}

/// Fold the room grants and transaction flows into the per-year
/// contribution-room table.
///
/// One row is produced per grant year, ascending. Withdrawn amounts restore
/// room only from the following year onward, so the carryover into year N+1
/// is `remaining_room(N) + withdrawals(N)`. Years that have flows but no
/// grant are not reported and do not feed the carryover.
///
/// Inputs are assumed validated at the data-entry boundary; a grant list
/// that is unsorted or contains a duplicate year, or a flow with a
/// non-positive amount, is a contract violation and aborts the computation.
pub fn compute_annual_summary(grants: &[RoomGrant], flows: &[Flow]) -> Result<AnnualSummary> {
    for pair in grants.windows(2) {
        if pair[1].year <= pair[0].year {
            return Err(TfsaidError::Ledger(format!(
                "room grants must be strictly ascending by year ({} then {})",
                pair[0].year, pair[1].year
            )));
        }
    }
    for grant in grants {
        if !(grant.new_room >= 0.0) {
            return Err(TfsaidError::Ledger(format!(
                "new room for {} must be non-negative, got {}",
                grant.year, grant.new_room
            )));
        }
    }
    for flow in flows {
        if !(flow.amount > 0.0) {
            return Err(TfsaidError::Ledger(format!(
                "{} amount in {} must be positive, got {}",
                flow.kind, flow.year, flow.amount
            )));
        }
    }

    // (deposits, withdrawals) per year
    let mut totals: HashMap<i32, (f64, f64)> = HashMap::new();
    for flow in flows {
        let entry = totals.entry(flow.year).or_insert((0.0, 0.0));
        match flow.kind {
            TxKind::Deposit => entry.0 += flow.amount,
            TxKind::Withdrawal => entry.1 += flow.amount,
        }
    }

    let mut rows = Vec::with_capacity(grants.len());
    let mut overcontribution_years = Vec::new();
    let mut carryover = 0.0f64;

    for grant in grants {
        let (deposits, withdrawals) = totals.get(&grant.year).copied().unwrap_or((0.0, 0.0));
        let total_start_room = grant.new_room + carryover;
        let remaining_room = total_start_room - deposits;
        carryover = remaining_room + withdrawals;

        let is_overcontribution = remaining_room < 0.0;
        if is_overcontribution {
            overcontribution_years.push(grant.year);
        }

        rows.push(YearRow {
            year: grant.year,
            new_room: grant.new_room,
            total_start_room,
            deposits,
            withdrawals,
            remaining_room,
            is_overcontribution,
        });
    }

    Ok(AnnualSummary {
        rows,
        overcontribution_years,
    })
}
