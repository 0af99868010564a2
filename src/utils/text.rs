//! Element text helpers.

use scraper::ElementRef;

/// Concatenated text content of an element and its descendants, trimmed.
///
/// Entities are decoded by the parser; nested markup contributes only its text.
pub fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Truncates `text` to at most `max_chars` characters.
///
/// Returns the (possibly shortened) text and whether anything was cut.
/// Counts characters, not bytes, so multi-byte text is never split mid-character.
pub fn truncate_chars(text: &str, max_chars: usize) -> (&str, bool) {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => (&text[..byte_index], true),
        None => (text, false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::{Html, Selector};

    #[test]
    fn test_element_text_joins_nested_text() {
        let document = Html::parse_fragment("<p>  Hello <b>bold</b> world  </p>");
        let selector = Selector::parse("p").unwrap();
        let p = document.select(&selector).next().unwrap();
        assert_eq!(element_text(p), "Hello bold world");
    }

    #[test]
    fn test_truncate_chars_short_text_untouched() {
        assert_eq!(truncate_chars("short", 10), ("short", false));
        assert_eq!(truncate_chars("exact", 5), ("exact", false));
    }

    #[test]
    fn test_truncate_chars_multibyte() {
        let (cut, truncated) = truncate_chars("héllo wörld", 4);
        assert_eq!(cut, "héll");
        assert!(truncated);
    }
}
