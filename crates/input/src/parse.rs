//! Line parsing - malformed input never reaches the core.

/// Parse a line as a roll value.
///
/// Returns `None` for anything that is not a small non-negative integer; the
/// caller re-prompts. Range rules (0-10, frame totals) belong to the core,
/// which only ever sees integers.
pub fn parse_roll(input: &str) -> Option<u8> {
    input.trim().parse().ok()
}

/// Parse a yes/no answer, case-insensitive.
pub fn parse_confirm(input: &str) -> Option<bool> {
    match input.trim().to_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_roll_accepts_integers() {
        assert_eq!(parse_roll("7"), Some(7));
        assert_eq!(parse_roll(" 10 \n"), Some(10));
        assert_eq!(parse_roll("0"), Some(0));
        // Out-of-range integers are still integers; the core rejects them.
        assert_eq!(parse_roll("11"), Some(11));
    }

    #[test]
    fn test_parse_roll_rejects_malformed_input() {
        assert_eq!(parse_roll(""), None);
        assert_eq!(parse_roll("seven"), None);
        assert_eq!(parse_roll("-1"), None);
        assert_eq!(parse_roll("3.5"), None);
        assert_eq!(parse_roll("300000"), None);
    }

    #[test]
    fn test_parse_confirm() {
        assert_eq!(parse_confirm("y"), Some(true));
        assert_eq!(parse_confirm("YES\n"), Some(true));
        assert_eq!(parse_confirm("n"), Some(false));
        assert_eq!(parse_confirm("No"), Some(false));
        assert_eq!(parse_confirm("maybe"), None);
        assert_eq!(parse_confirm(""), None);
    }
}
