use crate::Signal;

/// Render an optional reading as-is, or `N/A` when missing.
pub fn format_metric(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => format!("{}", v),
        _ => Signal::UNAVAILABLE_LABEL.to_string(),
    }
}

/// `1234567` -> `1,234,567`
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Whole-dollar amount with grouping, e.g. `-$1,250,000`.
pub fn format_dollars(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => {
            let rounded = v.round();
            let sign = if rounded < 0.0 { "-" } else { "" };
            format!("{}${}", sign, group_thousands(rounded.abs() as u64))
        }
        _ => Signal::UNAVAILABLE_LABEL.to_string(),
    }
}
