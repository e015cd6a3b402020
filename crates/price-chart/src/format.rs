use chrono::NaiveDateTime;

/// Axis and tooltip label, e.g. `Mar 5, 2025`
pub fn format_tick_label(ts: &NaiveDateTime) -> String {
    ts.format("%b %-d, %Y").to_string()
}

/// Tooltip close, e.g. `$187.40`
pub fn format_close(close: f64) -> String {
    format!("${:.2}", close)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_tick_label() {
        let ts = NaiveDate::from_ymd_opt(2025, 3, 5).unwrap().and_hms_opt(14, 30, 0).unwrap();
        assert_eq!(format_tick_label(&ts), "Mar 5, 2025");
        let ts = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap().and_hms_opt(0, 0, 0).unwrap();
        assert_eq!(format_tick_label(&ts), "Dec 31, 2024");
    }

    #[test]
    fn test_close_two_decimals() {
        assert_eq!(format_close(187.4), "$187.40");
        assert_eq!(format_close(0.0), "$0.00");
    }
}
