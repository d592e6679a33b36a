// File: crates/chart-core/src/format.rs
// Summary: Number formatting for value labels and axis ticks.

/// Group an integer with `,` every three digits: `1234567` -> `1,234,567`.
pub fn thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Whole-dollar currency label, rounded half-to-even: `45000.0` -> `$45,000`.
pub fn currency(value: f64) -> String {
    format!("${}", thousands(value.round_ties_even() as i64))
}

/// Plain tick label: integers without a fraction, otherwise trimmed decimals.
pub fn tick(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        let s = format!("{value:.3}");
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_groups_thousands() {
        assert_eq!(currency(45_000.0), "$45,000");
        assert_eq!(currency(10_000.0), "$10,000");
        assert_eq!(currency(1_234_567.0), "$1,234,567");
        assert_eq!(currency(999.0), "$999");
        assert_eq!(currency(0.0), "$0");
    }

    #[test]
    fn thousands_negative() {
        assert_eq!(thousands(-1_000), "-1,000");
        assert_eq!(thousands(-12), "-12");
    }

    #[test]
    fn tick_labels() {
        assert_eq!(tick(20_000.0), "20000");
        assert_eq!(tick(0.0), "0");
        assert_eq!(tick(2.5), "2.5");
    }
}
