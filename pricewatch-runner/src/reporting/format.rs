//! Number formatting for the summary.

use num_format::{Locale, ToFormattedString};

/// Two decimals with the integer part grouped by thousands: `-1,234.50`.
///
/// NaN and infinities pass through as plain fixed-point output.
pub fn format_amount(value: f64) -> String {
    let fixed = format!("{value:.2}");
    let (sign, digits) = match fixed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", fixed.as_str()),
    };
    let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits, ""));

    if !int_part.bytes().all(|b| b.is_ascii_digit()) {
        return fixed.clone();
    }

    let grouped = match int_part.parse::<u128>() {
        Ok(n) => n.to_formatted_string(&Locale::en),
        Err(_) => group_digits(int_part, Locale::en.separator()),
    };

    if frac_part.is_empty() {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped}.{frac_part}")
    }
}

/// Grouping for digit strings beyond `u128`.
fn group_digits(digits: &str, separator: &str) -> String {
    let lead = match digits.len() % 3 {
        0 => 3,
        n => n,
    };
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 * separator.len());
    out.push_str(&digits[..lead]);
    for chunk in digits.as_bytes()[lead..].chunks(3) {
        out.push_str(separator);
        out.extend(chunk.iter().map(|&b| b as char));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(format_amount(45_000.0), "45,000.00");
        assert_eq!(format_amount(1_234_567.891), "1,234,567.89");
    }

    #[test]
    fn small_values_are_not_grouped() {
        assert_eq!(format_amount(0.0812), "0.08");
        assert_eq!(format_amount(999.999), "1,000.00");
        assert_eq!(format_amount(2.5), "2.50");
    }

    #[test]
    fn negatives_keep_sign() {
        assert_eq!(format_amount(-3.4121), "-3.41");
        assert_eq!(format_amount(-12_345.6), "-12,345.60");
    }

    #[test]
    fn groups_beyond_u128() {
        let formatted = format_amount(1e40);
        let (int_part, frac_part) = formatted.split_once('.').unwrap();
        assert_eq!(frac_part, "00");
        assert!(int_part.starts_with("10,000,"));
        assert!(int_part.split(',').skip(1).all(|g| g.len() == 3));
        assert_eq!(int_part.replace(',', ""), format!("{:.0}", 1e40));

        assert_eq!(format_amount(-1e40), format!("-{formatted}"));
    }

    #[test]
    fn digit_grouping_boundaries() {
        assert_eq!(group_digits("1", ","), "1");
        assert_eq!(group_digits("123", ","), "123");
        assert_eq!(group_digits("1234", ","), "1,234");
        assert_eq!(group_digits("123456789", ","), "123,456,789");
    }

    #[test]
    fn non_finite_passthrough() {
        assert_eq!(format_amount(f64::NAN), "NaN");
        assert_eq!(format_amount(f64::INFINITY), "inf");
    }
}
