/// Current UTC timestamp in milliseconds
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Strip the formatting characters staff type into phone numbers.
///
/// Keeps everything except `(`, `)`, `-` and whitespace, so `(555) 123-4567`
/// and `5551234567` compare equal.
pub fn normalize_mobile_number(raw: &str) -> String {
    raw.chars()
        .filter(|c| !matches!(c, '(' | ')' | '-') && !c.is_whitespace())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_mobile_number() {
        assert_eq!(normalize_mobile_number("(555) 123-4567"), "5551234567");
        assert_eq!(normalize_mobile_number("555-1234"), "5551234");
        assert_eq!(normalize_mobile_number("5551234"), "5551234");
        assert_eq!(normalize_mobile_number(""), "");
    }
}
