// SPDX-License-Identifier: PMPL-1.0-or-later

//! Lexeme extraction: reduce raw text to the letter alphabet and split it
//! into boundary-padded single-character tokens.

use crate::types::Token;
use regex::Regex;
use std::sync::LazyLock;

/// Language-specific letters kept alongside ASCII letters and whitespace.
pub const SPECIAL_LETTERS: &str = "ÄäÖöÜüßČčŠšŽžáéíóúüñĆćĐđ";

// Whitespace also covers the information separators U+001C..U+001F,
// which the Unicode White_Space class behind `\s` leaves out.
static DISALLOWED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"[^a-zA-Z{SPECIAL_LETTERS}\s\x1C-\x1F]"))
        .expect("alphabet pattern is valid")
});

/// Deletes every character outside the alphabet.
pub fn clean(text: &str) -> String {
    DISALLOWED.replace_all(text, "").into_owned()
}

/// Turns each surviving character into a token wrapped as `" c "`.
///
/// Whitespace survives cleaning and becomes a token like any letter, so
/// windows still span word boundaries.
pub fn extract_lexemes(text: &str) -> Vec<Token> {
    clean(text).chars().map(|c| format!(" {c} ")).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_become_padded_tokens() {
        assert_eq!(extract_lexemes("ab"), vec![" a ", " b "]);
    }

    #[test]
    fn disallowed_characters_are_deleted_not_replaced() {
        assert_eq!(extract_lexemes("a1,b"), vec![" a ", " b "]);
    }

    #[test]
    fn whitespace_is_kept_as_tokens() {
        assert_eq!(extract_lexemes("a b\n"), vec![" a ", "   ", " b ", " \n "]);
    }

    #[test]
    fn information_separators_count_as_whitespace() {
        assert_eq!(extract_lexemes("a\u{1f}b").len(), 3);
        assert_eq!(clean("a\u{1c}\u{1d}\u{1e}b"), "a\u{1c}\u{1d}\u{1e}b");
        // other control characters are still deleted
        assert_eq!(clean("a\u{1b}\u{7}b"), "ab");
    }

    #[test]
    fn special_letters_survive() {
        let tokens = extract_lexemes("Straße čšž ñ Đđ");
        assert!(tokens.contains(&" ß ".to_string()));
        assert!(tokens.contains(&" č ".to_string()));
        assert!(tokens.contains(&" ñ ".to_string()));
        assert!(tokens.contains(&" Đ ".to_string()));
    }

    #[test]
    fn letters_outside_allowlist_are_dropped() {
        // à and ø are not in any of the five alphabets
        assert_eq!(clean("àøx"), "x");
        assert_eq!(clean("Привет"), "");
    }

    #[test]
    fn only_disallowed_input_is_empty() {
        assert!(extract_lexemes("1234!?.,;:-_()[]").is_empty());
        assert!(extract_lexemes("").is_empty());
    }
}
