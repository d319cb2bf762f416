/*!
 * Ordered literal substitution tables.
 *
 * A table is applied pair by pair in declaration order. Every pair replaces
 * all non-overlapping occurrences of its pattern, left to right, in the text
 * produced by the pairs before it.
 */

use serde::{Deserialize, Serialize};

/// Ordered sequence of `(pattern, replacement)` pairs.
///
/// Serializes as a JSON array of two-element arrays so the order survives
/// a round trip through the config file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubstitutionTable {
    pairs: Vec<(String, String)>,
}

impl SubstitutionTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from pairs, keeping their order
    pub fn from_pairs<P, R>(pairs: impl IntoIterator<Item = (P, R)>) -> Self
    where
        P: Into<String>,
        R: Into<String>,
    {
        Self {
            pairs: pairs
                .into_iter()
                .map(|(pattern, replacement)| (pattern.into(), replacement.into()))
                .collect(),
        }
    }

    /// Append a pair after every existing one
    pub fn push(&mut self, pattern: impl Into<String>, replacement: impl Into<String>) {
        self.pairs.push((pattern.into(), replacement.into()));
    }

    /// Pairs in application order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(p, r)| (p.as_str(), r.as_str()))
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// First pair whose pattern is empty, if any
    pub fn find_empty_pattern(&self) -> Option<usize> {
        self.pairs.iter().position(|(pattern, _)| pattern.is_empty())
    }

    /// Apply every pair to `text` in order.
    ///
    /// Patterns are literal strings. Empty patterns are skipped.
    pub fn apply(&self, text: &str) -> String {
        let mut current = text.to_string();
        for (pattern, replacement) in self.iter() {
            if pattern.is_empty() || !current.contains(pattern) {
                continue;
            }
            current = current.replace(pattern, replacement);
        }
        current
    }
}
