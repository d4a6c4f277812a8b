//! Token-shape helpers shared by the row scanners.
//!
//! Template rows are whitespace separated, so every builder splits a line into tokens
//! and checks each token against the shape its column requires before converting it.

pub(crate) fn is_word(token: &str) -> bool {
    !token.is_empty() && token.chars().all(|c| c.is_alphanumeric() || c == '_')
}

pub(crate) fn parse_index(token: &str) -> Option<usize> {
    if !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit()) {
        token.parse().ok()
    } else {
        None
    }
}

fn all_digits(part: &str) -> bool {
    part.bytes().all(|b| b.is_ascii_digit())
}

/// Parses `digits.digits`, optionally signed, optionally with a fixed number of
/// fractional digits.
pub(crate) fn parse_decimal(token: &str, signed: bool, decimals: Option<usize>) -> Option<f64> {
    let unsigned = match token.strip_prefix('-') {
        Some(rest) if signed => rest,
        Some(_) => return None,
        None => token,
    };
    let (int_part, frac_part) = unsigned.split_once('.')?;
    if int_part.is_empty() || frac_part.is_empty() || !all_digits(int_part) || !all_digits(frac_part)
    {
        return None;
    }
    if decimals.is_some_and(|n| frac_part.len() != n) {
        return None;
    }
    token.parse().ok()
}

/// Parses an atom-row coordinate.
///
/// Coordinates must contain a `.` and may omit the digits on either side of it, so
/// `.5`, `3.` and `-.` are all accepted (an absent number reads as zero). With
/// `inner_sign`, a `-` directly after the `.` is tolerated as well; it marks the value
/// as negative, like a leading sign.
pub(crate) fn parse_coordinate(token: &str, inner_sign: bool) -> Option<f64> {
    let (mut negative, unsigned) = match token.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, token),
    };
    let (int_part, frac_part) = unsigned.split_once('.')?;
    let frac_part = match frac_part.strip_prefix('-') {
        Some(rest) if inner_sign => {
            negative = true;
            rest
        }
        Some(_) => return None,
        None => frac_part,
    };
    if !all_digits(int_part) || !all_digits(frac_part) {
        return None;
    }

    let magnitude = if int_part.is_empty() && frac_part.is_empty() {
        0.0
    } else {
        format!(
            "{}.{}",
            if int_part.is_empty() { "0" } else { int_part },
            if frac_part.is_empty() { "0" } else { frac_part }
        )
        .parse::<f64>()
        .ok()?
    };
    Some(if negative { -magnitude } else { magnitude })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_tokens_allow_underscores_and_digits() {
        assert!(is_word("_C1_"));
        assert!(is_word("CT"));
        assert!(!is_word(""));
        assert!(!is_word("C-1"));
    }

    #[test]
    fn index_requires_plain_digits() {
        assert_eq!(parse_index("17"), Some(17));
        assert_eq!(parse_index("-1"), None);
        assert_eq!(parse_index("1.0"), None);
        assert_eq!(parse_index(""), None);
    }

    #[test]
    fn decimal_checks_sign_and_fraction_width() {
        assert_eq!(parse_decimal("1.7500", false, Some(4)), Some(1.75));
        assert_eq!(parse_decimal("1.750", false, Some(4)), None);
        assert_eq!(parse_decimal("-0.18", true, None), Some(-0.18));
        assert_eq!(parse_decimal("-0.18", false, None), None);
        assert_eq!(parse_decimal("1", true, None), None);
        assert_eq!(parse_decimal(".5", true, None), None);
        assert_eq!(parse_decimal("1.", true, None), None);
    }

    #[test]
    fn coordinate_accepts_missing_digits() {
        assert_eq!(parse_coordinate("1.5000", false), Some(1.5));
        assert_eq!(parse_coordinate("-180.0000", false), Some(-180.0));
        assert_eq!(parse_coordinate(".5", false), Some(0.5));
        assert_eq!(parse_coordinate("3.", false), Some(3.0));
        assert_eq!(parse_coordinate("-.", false), Some(-0.0));
        assert_eq!(parse_coordinate("15", false), None);
    }

    #[test]
    fn inner_sign_is_only_accepted_when_enabled() {
        assert_eq!(parse_coordinate("1.-5", true), Some(-1.5));
        assert_eq!(parse_coordinate("1.-5", false), None);
        assert_eq!(parse_coordinate("-1.-5", true), Some(-1.5));
    }
}
