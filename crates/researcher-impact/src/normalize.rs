//! Text normalization shared by name matching, title matching and venue lookup.
//!
//! Latin-script characters are transliterated to ASCII (`é` → `e`, `ß` → `ss`);
//! other scripts pass through untouched so CJK or Cyrillic names still compare
//! by identity. The result is lower-cased, stripped of punctuation (keeping
//! alphanumerics, `_` and whitespace) and whitespace-collapsed.

/// Returns true if `c` belongs to one of the Latin Unicode blocks.
fn is_latin(c: char) -> bool {
    matches!(c,
        '\u{0000}'..='\u{024F}'   // Basic Latin through Latin Extended-B
        | '\u{1E00}'..='\u{1EFF}' // Latin Extended Additional
        | '\u{2C60}'..='\u{2C7F}' // Latin Extended-C
        | '\u{A720}'..='\u{A7FF}' // Latin Extended-D
        | '\u{FB00}'..='\u{FB06}' // Latin ligatures
    )
}

/// Combining diacritical marks left over from decomposed input.
fn is_combining_mark(c: char) -> bool {
    matches!(c, '\u{0300}'..='\u{036F}' | '\u{1AB0}'..='\u{1AFF}' | '\u{1DC0}'..='\u{1DFF}')
}

/// Normalize free text for comparison.
///
/// ```
/// use researcher_impact::normalize::normalize_text;
///
/// assert_eq!(normalize_text("  José  García-López "), "jose garcialopez");
/// assert_eq!(normalize_text("Attention Is All You Need!"), "attention is all you need");
/// ```
#[must_use]
pub fn normalize_text(s: &str) -> String {
    let mut folded = String::with_capacity(s.len());
    for c in s.to_lowercase().chars() {
        if is_combining_mark(c) {
            continue;
        }
        if c.is_ascii() || !is_latin(c) {
            folded.push(c);
        } else if let Some(ascii) = deunicode::deunicode_char(c) {
            folded.push_str(ascii);
        }
    }

    let cleaned: String = folded
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_' || c.is_whitespace())
        .collect();

    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Normalize a paper title for duplicate and authority matching.
#[must_use]
pub fn normalize_title(title: &str) -> String {
    normalize_text(title)
}

/// Normalize a venue name for tier lookup.
#[must_use]
pub fn normalize_venue(venue: &str) -> String {
    normalize_text(venue)
}

/// First character of the normalized name, if any.
#[must_use]
pub fn first_initial(name: &str) -> Option<char> {
    normalize_text(name).chars().next()
}

/// A first name is incomplete when it is missing, blank, at most two characters
/// long after trimming, or ends with a period (`"J."`, `"JR"`, `""`).
#[must_use]
pub fn is_incomplete_first_name(first_name: Option<&str>) -> bool {
    let Some(name) = first_name.map(str::trim) else {
        return true;
    };
    name.is_empty() || name.chars().count() <= 2 || name.ends_with('.')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_diacritics_and_punctuation() {
        assert_eq!(normalize_text("Zoë Müller"), "zoe muller");
        assert_eq!(normalize_text("Ångström, A."), "angstrom a");
        assert_eq!(normalize_text("Straße"), "strasse");
        assert_eq!(normalize_text("snake_case"), "snake_case");
    }

    #[test]
    fn test_keeps_non_latin_scripts() {
        assert_eq!(normalize_text("王 小明"), "王 小明");
        assert_eq!(normalize_text("Пётр"), "пётр");
    }

    #[test]
    fn test_collapses_whitespace() {
        assert_eq!(normalize_text("\tdeep \n  learning  "), "deep learning");
        assert_eq!(normalize_text("   "), "");
        assert_eq!(normalize_text("..."), "");
    }

    #[test]
    fn test_combining_marks_dropped() {
        // "e" followed by U+0301 COMBINING ACUTE ACCENT
        assert_eq!(normalize_text("Rene\u{301}e"), "renee");
    }

    #[test]
    fn test_first_initial() {
        assert_eq!(first_initial("Émile"), Some('e'));
        assert_eq!(first_initial("  j. "), Some('j'));
        assert_eq!(first_initial(""), None);
        assert_eq!(first_initial("."), None);
    }

    #[test]
    fn test_incomplete_first_name() {
        assert!(is_incomplete_first_name(None));
        assert!(is_incomplete_first_name(Some("")));
        assert!(is_incomplete_first_name(Some("   ")));
        assert!(is_incomplete_first_name(Some("J")));
        assert!(is_incomplete_first_name(Some("JR")));
        assert!(is_incomplete_first_name(Some("Jo.")));
        assert!(is_incomplete_first_name(Some(" Al ")));
        assert!(!is_incomplete_first_name(Some("Ann")));
        assert!(!is_incomplete_first_name(Some("Jean-Luc")));
    }
}
