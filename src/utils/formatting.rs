//! Formatting utilities used for CLI output.

use rust_decimal::Decimal;

/// pt-BR currency: `R$ 1.234,50`.
pub fn format_currency(value: Decimal, symbol: &str) -> String {
    let rounded = value.round_dp(2);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };

    let digits = format!("{:.2}", rounded.abs());
    let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

    format!("{}{} {},{}", sign, symbol, group_thousands(int_part), frac_part)
}

fn group_thousands(int_part: &str) -> String {
    let len = int_part.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}

/// Describe the active date filter in one line.
pub fn describe_filters(filters: &crate::models::FilterCriteria) -> String {
    use crate::utils::date::format_br;
    match (filters.start, filters.end) {
        (None, None) => "todas as datas".to_string(),
        (Some(s), None) => format!("a partir de {}", format_br(&s)),
        (None, Some(e)) => format!("até {}", format_br(&e)),
        (Some(s), Some(e)) => format!("de {} até {}", format_br(&s), format_br(&e)),
    }
}
