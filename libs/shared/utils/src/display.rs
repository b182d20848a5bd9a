use chrono::NaiveTime;

pub const AVATAR_BASE_URL: &str = "https://placehold.co/100x100.png";

/// First character of every whitespace-separated token, upper-cased.
/// Falls back to `fallback` when the name has no tokens.
pub fn initials(name: &str, fallback: &str) -> String {
    let initials: String = name
        .split_whitespace()
        .filter_map(|token| token.chars().next())
        .flat_map(char::to_uppercase)
        .collect();

    if initials.is_empty() {
        fallback.to_string()
    } else {
        initials
    }
}

pub fn avatar_url(initials: &str) -> String {
    format!("{}?text={}", AVATAR_BASE_URL, urlencoding::encode(initials))
}

/// Converts a 24-hour `H:MM`/`HH:MM` string into `HH:MM AM|PM`.
pub fn to_twelve_hour(time: &str) -> Option<String> {
    NaiveTime::parse_from_str(time.trim(), "%H:%M")
        .ok()
        .map(|t| t.format("%I:%M %p").to_string())
}

/// Keeps at most `max_chars` characters of `text`.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initials() {
        assert_eq!(initials("Dr. Jane Smith", "DR"), "DJS");
        assert_eq!(initials("alice   wonderland", "NP"), "AW");
        assert_eq!(initials("", "NP"), "NP");
        assert_eq!(initials("   ", "DR"), "DR");
    }

    #[test]
    fn test_avatar_url_encodes_text() {
        assert_eq!(avatar_url("TU"), "https://placehold.co/100x100.png?text=TU");
        assert_eq!(avatar_url("Ö&"), "https://placehold.co/100x100.png?text=%C3%96%26");
    }

    #[test]
    fn test_twelve_hour_conversion() {
        assert_eq!(to_twelve_hour("00:00").as_deref(), Some("12:00 AM"));
        assert_eq!(to_twelve_hour("12:00").as_deref(), Some("12:00 PM"));
        assert_eq!(to_twelve_hour("23:45").as_deref(), Some("11:45 PM"));
        assert_eq!(to_twelve_hour("09:05").as_deref(), Some("09:05 AM"));
        assert_eq!(to_twelve_hour("9:05").as_deref(), Some("09:05 AM"));
        assert_eq!(to_twelve_hour("24:00"), None);
    }

    #[test]
    fn test_truncate_chars() {
        assert_eq!(truncate_chars("abcdef", 3), "abc");
        assert_eq!(truncate_chars("ab", 3), "ab");
        assert_eq!(truncate_chars("ééé", 2), "éé");
    }
}
