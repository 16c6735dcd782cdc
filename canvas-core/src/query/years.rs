/// Inclusive year bounds for the year-range filter.
///
/// Bounds are not reordered: a range whose `min` is above its `max` is valid
/// and contains nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct YearRange {
    pub min: i64,
    pub max: i64,
}

impl YearRange {
    pub fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    /// Parse both bounds from path tokens.
    ///
    /// Returns `None` when either bound has no leading integer; callers treat
    /// that as a range nothing falls into.
    pub fn parse(min: &str, max: &str) -> Option<Self> {
        Some(Self::new(parse_leading_int(min)?, parse_leading_int(max)?))
    }

    pub fn contains(&self, year: f64) -> bool {
        year >= self.min as f64 && year <= self.max as f64
    }
}

/// Lenient integer parse: skips leading whitespace, accepts one sign, then
/// reads digits up to the first character that is not one. `"1900abc"` reads
/// as 1900 and `"19.5"` as 19. A `0x` prefix switches to hexadecimal, so
/// `"0x700"` reads as 1792. Input without leading digits has no value; a
/// digit run too large for `i64` saturates.
pub fn parse_leading_int(token: &str) -> Option<i64> {
    let trimmed = token.trim_start();
    let (negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let magnitude = match unsigned
        .strip_prefix("0x")
        .or_else(|| unsigned.strip_prefix("0X"))
    {
        Some(hex) => hex_magnitude(hex)?,
        None => decimal_magnitude(unsigned)?,
    };

    let signed = if negative { -magnitude } else { magnitude };
    // `as` saturates at the i64 bounds.
    Some(signed as i64)
}

fn decimal_magnitude(text: &str) -> Option<f64> {
    let len = text.bytes().take_while(u8::is_ascii_digit).count();
    if len == 0 {
        return None;
    }
    text[..len].parse().ok()
}

fn hex_magnitude(text: &str) -> Option<f64> {
    let digits: Vec<u32> = text.chars().map_while(|c| c.to_digit(16)).collect();
    if digits.is_empty() {
        return None;
    }
    Some(
        digits
            .into_iter()
            .fold(0.0, |acc, digit| acc * 16.0 + f64::from(digit)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leading_integer_parse() {
        assert_eq!(parse_leading_int("1900"), Some(1900));
        assert_eq!(parse_leading_int("  1900"), Some(1900));
        assert_eq!(parse_leading_int("1900abc"), Some(1900));
        assert_eq!(parse_leading_int("19.5"), Some(19));
        assert_eq!(parse_leading_int("-50"), Some(-50));
        assert_eq!(parse_leading_int("+7"), Some(7));
        assert_eq!(parse_leading_int("abc"), None);
        assert_eq!(parse_leading_int(""), None);
        assert_eq!(parse_leading_int("-"), None);
    }

    #[test]
    fn oversized_bounds_saturate() {
        assert_eq!(parse_leading_int("99999999999999999999"), Some(i64::MAX));
        assert_eq!(parse_leading_int("-99999999999999999999"), Some(i64::MIN));
        assert!(
            YearRange::parse("1900", "99999999999999999999")
                .unwrap()
                .contains(1919.0)
        );
    }

    #[test]
    fn hex_prefix_is_honoured() {
        assert_eq!(parse_leading_int("0x700"), Some(1792));
        assert_eq!(parse_leading_int("-0X10"), Some(-16));
        assert_eq!(parse_leading_int("0x7g"), Some(7));
        assert_eq!(parse_leading_int("0x"), None);
        assert_eq!(parse_leading_int("0b101"), Some(0));
    }

    #[test]
    fn bounds_are_inclusive() {
        let range = YearRange::new(1900, 1920);
        assert!(range.contains(1900.0));
        assert!(range.contains(1920.0));
        assert!(range.contains(1919.0));
        assert!(!range.contains(1899.0));
        assert!(!range.contains(1921.0));
    }

    #[test]
    fn inverted_range_contains_nothing() {
        let range = YearRange::parse("1930", "1920").unwrap();
        assert!(!range.contains(1925.0));
        assert!(!range.contains(1920.0));
        assert!(!range.contains(1930.0));
    }

    #[test]
    fn unparsable_bound_has_no_range() {
        assert_eq!(YearRange::parse("nineteen", "1920"), None);
        assert_eq!(YearRange::parse("1900", ""), None);
    }
}
