//! Number formatting for dashboard values.
//!
//! Currency follows the `${:,.2f}` convention: a leading dollar sign, comma
//! thousands separators and two decimals, with the minus sign after the
//! dollar sign (`$-1,234.50`). As with that format, a negative amount keeps
//! its sign even when it rounds to zero (`$-0.00`).

/// Formats an amount as `$1,234.56`.
pub fn format_currency(value: f64) -> String {
    format!("${}", format_grouped(value, 2))
}

/// Formats a count as a truncated integer with separators (`12,345`).
pub fn format_count(value: f64) -> String {
    // Integers have no negative zero
    let whole = value.trunc();
    format_grouped(if whole == 0.0 { 0.0 } else { whole }, 0)
}

/// Formats `value` with `decimals` fraction digits and comma-grouped integer part.
pub fn format_grouped(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let fixed = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (fixed.as_str(), None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3 + 4);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if value.is_sign_negative() { "-" } else { "" };

    match frac_part {
        Some(frac) => format!("{}{}.{}", sign, grouped, frac),
        None => format!("{}{}", sign, grouped),
    }
}
