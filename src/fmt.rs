/// Format a float as a dollar amount with thousands separators: $1,234.56
pub fn money(val: f64) -> String {
    let negative = val < 0.0;
    let with_commas = group_thousands(val.abs());
    if negative {
        format!("-${with_commas}")
    } else {
        format!("${with_commas}")
    }
}

/// Plain two-decimal amount, no currency symbol. Used by the CRA report
/// columns and CSV export.
pub fn amount2(val: f64) -> String {
    format!("{val:.2}")
}

fn group_thousands(abs: f64) -> String {
    let cents = format!("{abs:.2}");
    let (int_part, dec_part) = cents.split_once('.').unwrap_or((cents.as_str(), "00"));

    let mut with_commas = String::new();
    for (i, c) in int_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            with_commas.push(',');
        }
        with_commas.push(c);
    }
    let with_commas: String = with_commas.chars().rev().collect();
    format!("{with_commas}.{dec_part}")
}
