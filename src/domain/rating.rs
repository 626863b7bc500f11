// src/domain/rating.rs

use std::fmt;

/// Qualitative label shown next to the rating badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatingLabel {
    Exceptional,
    Wonderful,
    Excellent,
    VeryGood,
    Good,
}

impl RatingLabel {
    /// Thresholds are inclusive lower bounds, checked top-down.
    /// NaN falls through every threshold and lands on `Good`.
    pub fn from_score(score: f64) -> Self {
        if score >= 9.5 {
            RatingLabel::Exceptional
        } else if score >= 9.0 {
            RatingLabel::Wonderful
        } else if score >= 8.5 {
            RatingLabel::Excellent
        } else if score >= 8.0 {
            RatingLabel::VeryGood
        } else {
            RatingLabel::Good
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RatingLabel::Exceptional => "Exceptional",
            RatingLabel::Wonderful => "Wonderful",
            RatingLabel::Excellent => "Excellent",
            RatingLabel::VeryGood => "Very Good",
            RatingLabel::Good => "Good",
        }
    }
}

impl fmt::Display for RatingLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Label for a raw `rating` cell. Absent or empty gives `""`; text that is not
/// a number is labelled `Good`.
pub fn rating_desc(raw: Option<&str>) -> &'static str {
    match raw.filter(|s| !s.is_empty()) {
        None => "",
        Some(s) => {
            let score = leading_float(s).unwrap_or(f64::NAN);
            RatingLabel::from_score(score).as_str()
        }
    }
}

/// Parses the longest numeric prefix, so `"9.1/10"` reads as `9.1`.
/// Accepts a sign, a decimal point, an exponent and `Infinity`.
fn leading_float(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    if s[end..].starts_with("Infinity") {
        let inf = if s.starts_with('-') { f64::NEG_INFINITY } else { f64::INFINITY };
        return Some(inf);
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;
    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        end += 1 + frac_digits;
    }
    if int_digits + frac_digits == 0 {
        return None;
    }

    // Exponent only counts when digits follow it.
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    s[..end].parse().ok()
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
