use chrono::NaiveDate;

/// Parse an ISO calendar date (YYYY-MM-DD).
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Display form used in tables: dd/mm/yyyy.
pub fn format_br(d: &NaiveDate) -> String {
    d.format("%d/%m/%Y").to_string()
}
