use crate::config::ConfigError;
use crate::constants::{REDACTION_PATTERN_SIZE_LIMIT, REDACTION_PLACEHOLDER};
use regex::{Regex, RegexBuilder};
use std::borrow::Cow;

/// Ordered, de-duplicated set of words to blank out of note contents.
#[derive(Debug, Clone, Default)]
pub struct RedactionSet {
    terms: Vec<String>,
    patterns: Vec<Regex>,
}

impl RedactionSet {
    /// Builds the set, dropping blank terms and case-insensitive repeats.
    ///
    /// A term whose pattern cannot be compiled is a configuration error.
    pub fn new<I, S>(terms: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = RedactionSet::default();
        for term in terms {
            let term = term.as_ref().trim();
            if term.is_empty() {
                continue;
            }
            let folded = term.to_lowercase();
            if set.terms.iter().any(|t| t.to_lowercase() == folded) {
                continue;
            }
            let pattern = RegexBuilder::new(&regex::escape(term))
                .case_insensitive(true)
                .size_limit(REDACTION_PATTERN_SIZE_LIMIT)
                .build()
                .map_err(|e| ConfigError::InvalidTerm(e.to_string()))?;
            set.terms.push(term.to_string());
            set.patterns.push(pattern);
        }
        Ok(set)
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Replaces whole-word occurrences of every term, in order, with the placeholder.
    pub fn apply<'a>(
        &self,
        text: &'a str,
    ) -> Cow<'a, str> {
        let mut out = Cow::Borrowed(text);
        for pattern in &self.patterns {
            if let Some(replaced) = replace_whole_words(pattern, &out) {
                out = Cow::Owned(replaced);
            }
        }
        out
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

// A match counts only when the chars on both sides are not word chars.
fn replace_whole_words(
    pattern: &Regex,
    text: &str,
) -> Option<String> {
    let mut result: Option<String> = None;
    let mut copied = 0usize;
    let mut search_from = 0usize;

    while search_from <= text.len() {
        let Some(m) = pattern.find_at(text, search_from) else {
            break;
        };
        let before_ok = text[..m.start()].chars().next_back().is_none_or(|c| !is_word_char(c));
        let after_ok = text[m.end()..].chars().next().is_none_or(|c| !is_word_char(c));

        if before_ok && after_ok && m.end() > m.start() {
            let buf = result.get_or_insert_with(|| String::with_capacity(text.len()));
            buf.push_str(&text[copied..m.start()]);
            buf.push_str(REDACTION_PLACEHOLDER);
            copied = m.end();
            search_from = m.end();
        } else {
            // retry one char further along so overlapping candidates are seen
            match text[m.start()..].chars().next() {
                Some(c) => search_from = m.start() + c.len_utf8(),
                None => break,
            }
        }
    }

    result.map(|mut buf| {
        buf.push_str(&text[copied..]);
        buf
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn redact(
        text: &str,
        terms: &[&str],
    ) -> String {
        RedactionSet::new(terms).unwrap().apply(text).into_owned()
    }

    #[test]
    fn empty_set_borrows_input() {
        let set = RedactionSet::new(Vec::<String>::new()).unwrap();
        assert!(matches!(set.apply("hello world"), Cow::Borrowed(_)));
    }

    #[test]
    fn replaces_whole_words_case_insensitively() {
        assert_eq!(redact("hello World, world!", &["world"]), "hello REDACTED, REDACTED!");
    }

    #[test]
    fn ignores_matches_inside_words() {
        assert_eq!(redact("worldly underworld world_x", &["world"]), "worldly underworld world_x");
    }

    #[test]
    fn terms_with_punctuation_edges_are_literal() {
        assert_eq!(redact("I like c++ and c.", &["c++"]), "I like REDACTED and c.");
        assert_eq!(redact("a.b axb", &["a.b"]), "REDACTED axb");
    }

    #[test]
    fn overlapping_candidate_after_rejected_match_is_found() {
        // "aa" at 0 is glued to the next 'a'; the later standalone one still counts
        assert_eq!(redact("aaa aa", &["aa"]), "aaa REDACTED");
    }

    #[test]
    fn blank_and_duplicate_terms_are_dropped() {
        let set = RedactionSet::new(["Secret", "", "  ", "secret", "other"]).unwrap();
        assert_eq!(set.terms(), ["Secret", "other"]);
    }

    #[test]
    fn placeholder_term_is_stable() {
        assert_eq!(redact("redacted secret", &["secret", "redacted"]), "REDACTED REDACTED");
    }

    #[test]
    fn oversized_term_is_config_error() {
        let huge = "a".repeat(REDACTION_PATTERN_SIZE_LIMIT);
        let err = RedactionSet::new([huge.as_str()]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidTerm(_)));
    }

    #[test]
    fn is_empty_tracks_kept_terms() {
        assert!(RedactionSet::new(["", "   "]).unwrap().is_empty());
        assert!(!RedactionSet::new(["x"]).unwrap().is_empty());
    }

    #[test]
    fn non_ascii_neighbours_count_as_word_chars() {
        assert_eq!(redact("éworld world", &["world"]), "éworld REDACTED");
    }
}
