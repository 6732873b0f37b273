//! Name normalization and whole-word fragment matching
//!
//! Catalog names are free text ("Cherry Tomatoes", "Basil (Sweet)",
//! "Brussels sprouts"). Every name is normalized and tokenized once, when the
//! catalog loads, and all rule lookups run against the tokens:
//! - Lower-case, non-alphanumeric characters become separators
//! - A multi-character fragment matches a whole-word token sequence
//! - A single-character fragment matches as a plain substring
//! - Plural `s` / `es` suffixes on name tokens are tolerated

use smallvec::SmallVec;

/// Normalized, tokenized form of a free-text name
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NameTokens {
    normalized: String,
    tokens: SmallVec<[String; 4]>,
}

impl NameTokens {
    pub fn new(raw: &str) -> Self {
        let normalized = normalize_name(raw);
        let tokens = normalized.split_whitespace().map(str::to_string).collect();
        Self { normalized, tokens }
    }

    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// True when `fragment` occurs in this name.
    ///
    /// "cherry tomatoes" contains `tomato`; "peppermint" does not contain `pepper`.
    pub fn contains_fragment(&self, fragment: &NameTokens) -> bool {
        if fragment.is_empty() || self.is_empty() {
            return false;
        }

        if fragment.normalized.chars().count() == 1 {
            return self.normalized.contains(fragment.normalized.as_str());
        }

        let width = fragment.tokens.len();
        if width > self.tokens.len() {
            return false;
        }

        self.tokens.windows(width).any(|window| {
            window
                .iter()
                .zip(fragment.tokens.iter())
                .all(|(word, frag)| word_matches(word, frag))
        })
    }

    /// True when either name contains the other as a whole-word sequence
    pub fn overlaps(&self, other: &NameTokens) -> bool {
        self.contains_fragment(other) || other.contains_fragment(self)
    }

    /// True when any of `fragments` occurs in this name
    pub fn matches_any(&self, fragments: &[NameTokens]) -> bool {
        fragments.iter().any(|f| self.contains_fragment(f))
    }

    /// Position of the first fragment that occurs in this name
    pub fn first_match(&self, fragments: &[NameTokens]) -> Option<usize> {
        fragments.iter().position(|f| self.contains_fragment(f))
    }
}

/// Lower-case, replace punctuation with spaces, collapse whitespace
pub fn normalize_name(raw: &str) -> String {
    let spaced: String = raw
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect::<String>()
        .to_lowercase();

    spaced.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Deduplication key: lower-cased, whitespace collapsed, punctuation kept
///
/// Returns None for blank input.
pub fn identity_key(raw: &str) -> Option<String> {
    let key = raw
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");

    if key.is_empty() {
        None
    } else {
        Some(key)
    }
}

/// Split a `;` or `|` separated list column, trimming blanks
pub fn split_list(raw: &str) -> Vec<String> {
    let separators = [';', '|'];
    raw.split(|c| separators.contains(&c))
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .collect()
}

fn word_matches(word: &str, fragment: &str) -> bool {
    if word == fragment {
        return true;
    }
    word.strip_suffix("es") == Some(fragment) || word.strip_suffix('s') == Some(fragment)
}
