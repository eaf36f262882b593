/// Multiplier for a single-letter scale suffix as YouTube renders them.
fn suffix_multiplier(c: char) -> Option<u64> {
    match c {
        'k' => Some(1_000),
        'm' => Some(1_000_000),
        'b' => Some(1_000_000_000),
        _ => None,
    }
}

/// Convert a displayed view-count string to a number:
///
/// ```text
/// "1,234 views" -> 1234
/// "12K views"   -> 12000
/// "1.2M views"  -> 1200000
/// "3.4B views"  -> 3400000000
/// ```
///
/// Returns `None` when the text carries no usable count: "No views", a live
/// or premiere badge, an empty string, or anything that does not start with
/// a number. `None` is a classification, not a failure; callers keep the
/// record and simply exclude it from the total.
pub fn parse_view_count(raw: &str) -> Option<u64> {
    let text = raw.trim().to_lowercase().replace(',', "");

    // The numeric token must lead the normalized string; "No views" and
    // friends fall out here.
    let int_end = text
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(text.len());
    if int_end == 0 {
        return None;
    }
    let int_digits = &text[..int_end];
    let mut rest = &text[int_end..];

    let mut frac_digits = "";
    if let Some(after_dot) = rest.strip_prefix('.') {
        let frac_end = after_dot
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(after_dot.len());
        if frac_end == 0 {
            // "1. views" is malformed
            return None;
        }
        frac_digits = &after_dot[..frac_end];
        rest = &after_dot[frac_end..];
    }

    let rest = rest.trim_start();

    // Try the suffixed reading first ("1.2m views"), then the plain one.
    if let Some(c) = rest.chars().next() {
        if let Some(multiplier) = suffix_multiplier(c) {
            let after_suffix = &rest[c.len_utf8()..];
            if has_views_word(after_suffix) {
                return scaled_value(int_digits, frac_digits, multiplier);
            }
        }
    }

    // Displayed counts are integers unless a suffix justifies the fraction.
    if !frac_digits.is_empty() {
        return None;
    }
    if !has_views_word(rest) {
        return None;
    }
    scaled_value(int_digits, frac_digits, 1)
}

/// True when `s` begins with the word "view"/"views" at a word boundary.
/// Trailing metadata ("• 3 days ago") is allowed; "viewers" is not a match.
fn has_views_word(s: &str) -> bool {
    let s = s.trim_start();
    let Some(rest) = s.strip_prefix("view") else {
        return false;
    };
    let rest = rest.strip_prefix('s').unwrap_or(rest);
    rest.chars().next().map_or(true, |c| !c.is_alphanumeric())
}

/// Apply the scale multiplier to the decimal digits. Integer arithmetic with
/// round-half-up: "1.2345K" is exactly 1235.
fn scaled_value(int_digits: &str, frac_digits: &str, multiplier: u64) -> Option<u64> {
    let mantissa: u128 = format!("{int_digits}{frac_digits}").parse().ok()?;
    let denom = 10u128.checked_pow(frac_digits.len() as u32)?;
    let value = (mantissa.checked_mul(multiplier as u128)? + denom / 2) / denom;
    u64::try_from(value).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_counts_with_separators() {
        assert_eq!(parse_view_count("1,234 views"), Some(1234));
        assert_eq!(parse_view_count("1,234,567 views"), Some(1_234_567));
        assert_eq!(parse_view_count("42 views"), Some(42));
        assert_eq!(parse_view_count("0 views"), Some(0));
    }

    #[test]
    fn test_singular_view() {
        assert_eq!(parse_view_count("1 view"), Some(1));
    }

    #[test]
    fn test_scale_suffixes() {
        assert_eq!(parse_view_count("12K views"), Some(12_000));
        assert_eq!(parse_view_count("1.2M views"), Some(1_200_000));
        assert_eq!(parse_view_count("3.4B views"), Some(3_400_000_000));
        assert_eq!(parse_view_count("4.5K views"), Some(4_500));
    }

    #[test]
    fn test_suffix_case_insensitive() {
        assert_eq!(parse_view_count("12k views"), Some(12_000));
        assert_eq!(parse_view_count("1.2m VIEWS"), Some(1_200_000));
    }

    #[test]
    fn test_whitespace_before_suffix() {
        assert_eq!(parse_view_count("12 K views"), Some(12_000));
        assert_eq!(parse_view_count("  1,234 views  "), Some(1234));
    }

    #[test]
    fn test_trailing_metadata_ignored() {
        assert_eq!(parse_view_count("1,234 views • 3 days ago"), Some(1234));
        assert_eq!(parse_view_count("2.1M views • 1 year ago"), Some(2_100_000));
    }

    #[test]
    fn test_round_half_up() {
        // 1.2345 * 1000 = 1234.5, half rounds up
        assert_eq!(parse_view_count("1.2345K views"), Some(1235));
        // 1.15 * 1000 = 1150 exactly, no float drift
        assert_eq!(parse_view_count("1.15K views"), Some(1150));
        // 1.0004 * 1000 = 1000.4, rounds down
        assert_eq!(parse_view_count("1.0004K views"), Some(1000));
    }

    #[test]
    fn test_unparseable_inputs() {
        assert_eq!(parse_view_count("No views"), None);
        assert_eq!(parse_view_count("Premiering now"), None);
        assert_eq!(parse_view_count("LIVE"), None);
        assert_eq!(parse_view_count(""), None);
        assert_eq!(parse_view_count("   "), None);
    }

    #[test]
    fn test_fraction_without_suffix_rejected() {
        assert_eq!(parse_view_count("1.2 views"), None);
        assert_eq!(parse_view_count("0.5 views"), None);
    }

    #[test]
    fn test_leading_tokens_rejected() {
        assert_eq!(parse_view_count("Streamed 1.2M views"), None);
        assert_eq!(parse_view_count("about 12 views"), None);
    }

    #[test]
    fn test_number_without_views_word_rejected() {
        assert_eq!(parse_view_count("1,234"), None);
        assert_eq!(parse_view_count("12K"), None);
        assert_eq!(parse_view_count("1.2K watching"), None);
    }

    #[test]
    fn test_word_boundary_after_views() {
        assert_eq!(parse_view_count("7 viewers"), None);
        assert_eq!(parse_view_count("7 views!"), Some(7));
    }

    #[test]
    fn test_malformed_numeric_token() {
        assert_eq!(parse_view_count("1. views"), None);
        assert_eq!(parse_view_count(". views"), None);
    }

    #[test]
    fn test_idempotent() {
        for input in ["1,234 views", "1.2M views", "No views"] {
            assert_eq!(parse_view_count(input), parse_view_count(input));
        }
    }
}
