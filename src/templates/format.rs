// src/templates/format.rs

/// `1234567` -> `"1,234,567"`.
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Locale-style number: grouped whole part, at most three decimals,
/// trailing zeros dropped. `12345.5` -> `"12,345.5"`.
pub fn format_number(n: f64) -> String {
    let rounded = (n * 1000.0).round() / 1000.0;
    let abs = rounded.abs();
    let whole = group_thousands(abs.trunc() as u64);

    let frac = format!("{:.3}", abs.fract());
    let frac = frac.trim_start_matches('0').trim_end_matches('0');
    let frac = if frac == "." { "" } else { frac };

    let sign = if rounded < 0.0 { "-" } else { "" };
    format!("{sign}{whole}{frac}")
}
