//! Path remapping and ignore filtering.

use crate::error::Result;
use regex::Regex;

/// Ordered `(pattern, replacement)` rules that rename or collapse paths.
///
/// A pattern is matched by exact equality against a document's directory
/// and by substring containment against target identifiers. Rules apply in
/// insertion order against the evolving value, so when several rules match
/// the last applied one wins.
#[derive(Debug, Clone, Default)]
pub struct RemapTable {
    pairs: Vec<(String, String)>,
}

impl RemapTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a rule. Insertion order is the application order.
    pub fn insert(&mut self, pattern: impl Into<String>, replacement: impl Into<String>) {
        self.pairs.push((pattern.into(), replacement.into()));
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Apply every rule to a document identifier and a joined target.
    ///
    /// A rule whose pattern equals `dir` replaces the document identifier;
    /// a rule whose pattern occurs anywhere in the target replaces the
    /// whole target, not just the matched fragment. Returns the resulting
    /// `(document, target)` pair.
    pub fn apply(&self, dir: &str, key: &str, target: &str) -> (String, String) {
        let mut key = key.to_string();
        let mut target = target.to_string();

        for (pattern, replacement) in &self.pairs {
            if pattern == dir {
                key = replacement.clone();
            }
            if target.contains(pattern.as_str()) {
                target = replacement.clone();
            }
        }

        (key, target)
    }
}

/// Optional compiled pattern that excludes matching paths from the graph.
#[derive(Debug, Clone, Default)]
pub struct IgnoreFilter {
    pattern: Option<Regex>,
}

impl IgnoreFilter {
    /// Compile the configured pattern. `None` or an empty string ignores
    /// nothing; a malformed pattern is a configuration error.
    pub fn from_pattern(pattern: Option<&str>) -> Result<Self> {
        let pattern = match pattern {
            Some(p) if !p.is_empty() => Some(Regex::new(p)?),
            _ => None,
        };
        Ok(Self { pattern })
    }

    /// True when `path` matches the ignore pattern.
    pub fn matches(&self, path: &str) -> bool {
        self.pattern.as_ref().is_some_and(|re| re.is_match(path))
    }
}
