//! Text helpers: casing, contact fields.

/// Title-case `value`: a letter is upper-cased when it follows a non-letter
/// (or starts the string) and lower-cased otherwise.
///
/// Letters whose case mapping expands to several characters (`ß`) are kept
/// as-is, so the output is stable under a second pass.
pub fn title_case(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut at_word_start = true;
    for ch in value.chars() {
        if ch.is_alphabetic() {
            let mapped = if at_word_start {
                single_char(ch.to_uppercase())
            } else {
                single_char(ch.to_lowercase())
            };
            out.push(mapped.unwrap_or(ch));
            at_word_start = false;
        } else {
            out.push(ch);
            at_word_start = true;
        }
    }
    out
}

fn single_char(mut chars: impl Iterator<Item = char>) -> Option<char> {
    let first = chars.next()?;
    chars.next().is_none().then_some(first)
}

/// Trimmed, title-cased personal name.
pub fn normalize_name(value: &str) -> String {
    title_case(value.trim())
}

/// Trimmed, lower-cased email address.
pub fn normalize_email(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Digits only, keeping the trailing ten. Shorter numbers pass through.
pub fn normalize_phone(value: &str) -> String {
    let digits: Vec<char> = value.chars().filter(char::is_ascii_digit).collect();
    let start = digits.len().saturating_sub(10);
    digits[start..].iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_case_handles_separators() {
        assert_eq!(title_case("mary-jane o'brien"), "Mary-Jane O'Brien");
        assert_eq!(title_case("SMITH"), "Smith");
        assert_eq!(normalize_name("  alice  "), "Alice");
    }

    #[test]
    fn expanding_case_mappings_are_kept() {
        assert_eq!(title_case("ßa"), "ßa");
        assert_eq!(title_case("aß"), "Aß");
        assert_eq!(title_case(&title_case("ßa")), title_case("ßa"));
    }

    #[test]
    fn phone_keeps_trailing_ten_digits() {
        assert_eq!(normalize_phone("+1 (555) 123-4567"), "5551234567");
        assert_eq!(normalize_phone("001-555-123-4567x89"), "5123456789");
        assert_eq!(normalize_phone("123-45"), "12345");
        assert_eq!(normalize_phone("n/a"), "");
    }

    #[test]
    fn email_is_lowercased() {
        assert_eq!(normalize_email(" Jane.Doe@Example.COM "), "jane.doe@example.com");
    }
}
