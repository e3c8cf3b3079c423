/// Format an integer with comma thousands separators (`1234567` -> `1,234,567`).
pub fn format_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Percentage with two decimals, e.g. `62.86%`.
pub fn format_percent(value: f64) -> String {
    format!("{value:.2}%")
}
