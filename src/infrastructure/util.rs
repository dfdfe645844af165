use crate::application::ports::util::SlugGenerator;
use once_cell::sync::Lazy;
use regex::Regex;

// ASCII classes spelled out: `\d` would also match non-ASCII digits.
// U+FEFF counts as whitespace so a pasted byte-order mark is trimmed.
static NON_WORD_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-zA-Z0-9\s\x{FEFF}]+").expect("static slug pattern"));
static WHITESPACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\s\x{FEFF}]").expect("static slug pattern"));

const BYTE_ORDER_MARK: char = '\u{FEFF}';

fn is_blank(c: char) -> bool {
    c.is_whitespace() || c == BYTE_ORDER_MARK
}

/// Title-to-slug rule used by the post form.
///
/// Trims, lowercases, turns every run of characters other than ASCII
/// letters, digits and whitespace into one `-`, then turns each whitespace
/// character into `-`. The second pass can leave hyphen runs such as
/// `"rust---go"`; they are kept.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultSlugGenerator;

impl SlugGenerator for DefaultSlugGenerator {
    fn slugify(&self, input: &str) -> String {
        slugify(input)
    }
}

pub fn slugify(input: &str) -> String {
    let lowercase = input.trim_matches(is_blank).to_lowercase();
    let collapsed = NON_WORD_RUN.replace_all(&lowercase, "-");
    WHITESPACE.replace_all(&collapsed, "-").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pinned_examples() {
        let cases = [
            ("Hello World", "hello-world"),
            ("  Mixed_CASE!! 123  ", "mixed-case--123"),
            ("Rust & Go", "rust---go"),
            ("a  b", "a--b"),
            ("Crème brûlée", "cr-me-br-l-e"),
            ("hello!", "hello-"),
            ("tab\tseparated", "tab-separated"),
            ("", ""),
            ("   ", ""),
        ];
        for (input, expected) in cases {
            assert_eq!(slugify(input), expected, "input {input:?}");
        }
    }

    #[test]
    fn byte_order_mark_is_whitespace() {
        assert_eq!(slugify("\u{FEFF}Hello World"), "hello-world");
        assert_eq!(slugify("Hello\u{FEFF}World\u{FEFF}"), "hello-world");
        assert_eq!(slugify("\u{FEFF}"), "");
    }

    #[test]
    fn punctuation_runs_become_one_hyphen() {
        assert_eq!(slugify("what?!?now"), "what-now");
        assert_eq!(slugify("---"), "-");
    }

    #[test]
    fn idempotent_without_hyphen_runs() {
        for input in ["Hello World", "My Post", "version 2.0", "ALL CAPS"] {
            let once = slugify(input);
            assert!(!once.contains("--"), "{once}");
            assert_eq!(slugify(&once), once);
        }
    }

    #[test]
    fn fixed_point_after_two_applications() {
        for input in ["  Mixed_CASE!! 123  ", "Rust & Go", "a  b", "x !! y"] {
            let twice = slugify(&slugify(input));
            assert_eq!(slugify(&twice), twice);
        }
    }

    #[test]
    fn output_uses_slug_alphabet_only() {
        for input in ["Ünïcödé Tïtle", "emoji 🚀 launch", "İstanbul", "snake_case_name"] {
            let slug = slugify(input);
            assert!(
                slug.chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'),
                "{input:?} -> {slug:?}"
            );
        }
    }
}
