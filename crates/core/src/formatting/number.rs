/// Groups a non-negative integer's decimal digits with commas,
/// three at a time from the right.
pub(crate) fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Formats an integer with commas as thousands separators.
/// A leading `-` is preserved and never grouped.
///
/// # Examples
///
/// ```
/// use dashkit_core::formatting::format_number_with_commas;
///
/// assert_eq!(format_number_with_commas(1234567), "1,234,567");
/// ```
pub fn format_number_with_commas(num: i64) -> String {
    let grouped = group_thousands(num.unsigned_abs());
    if num < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Converts a number to its ordinal representation (e.g., 1st, 2nd, 3rd).
///
/// Uses the standard English rule: 11-13 always take "th", otherwise the
/// suffix follows the last digit. Negative numbers take the same suffix
/// as their magnitude.
pub fn to_ordinal(num: i64) -> String {
    let value = (num % 100).unsigned_abs();
    let suffix = if (11..=13).contains(&value) {
        "th"
    } else {
        match value % 10 {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        }
    };
    format!("{}{}", num, suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commas_every_three_digits() {
        assert_eq!(format_number_with_commas(1234567), "1,234,567");
        assert_eq!(format_number_with_commas(1000), "1,000");
    }

    #[test]
    fn test_short_numbers_unchanged() {
        assert_eq!(format_number_with_commas(0), "0");
        assert_eq!(format_number_with_commas(999), "999");
    }

    #[test]
    fn test_negative_sign_not_grouped() {
        assert_eq!(format_number_with_commas(-1234567), "-1,234,567");
        assert_eq!(format_number_with_commas(-100), "-100");
    }

    #[test]
    fn test_ordinal_basic_suffixes() {
        assert_eq!(to_ordinal(1), "1st");
        assert_eq!(to_ordinal(2), "2nd");
        assert_eq!(to_ordinal(3), "3rd");
        assert_eq!(to_ordinal(4), "4th");
    }

    #[test]
    fn test_ordinal_teens_always_th() {
        assert_eq!(to_ordinal(11), "11th");
        assert_eq!(to_ordinal(12), "12th");
        assert_eq!(to_ordinal(13), "13th");
        assert_eq!(to_ordinal(111), "111th");
        assert_eq!(to_ordinal(113), "113th");
    }

    #[test]
    fn test_ordinal_larger_numbers_follow_last_digit() {
        assert_eq!(to_ordinal(22), "22nd");
        assert_eq!(to_ordinal(101), "101st");
        assert_eq!(to_ordinal(120), "120th");
    }

    #[test]
    fn test_ordinal_negative_uses_magnitude() {
        assert_eq!(to_ordinal(-2), "-2nd");
        assert_eq!(to_ordinal(-11), "-11th");
    }
}
