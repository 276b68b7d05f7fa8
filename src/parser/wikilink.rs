//! Vimwiki-syntax link parsing.

use regex::Regex;
use std::sync::LazyLock;

// Wikilink pattern: [[target]] or [[target|description]].
// The target may not contain brackets; an empty target is allowed.
static WIKILINK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[\[([^\[\]]*)\]\]").unwrap());

/// Return all raw wiki-syntax matches in a line, left to right.
pub fn wiki_matches(line: &str) -> Vec<&str> {
    WIKILINK.find_iter(line).map(|m| m.as_str()).collect()
}

/// Extract the target filename from a raw wiki-syntax match.
///
/// `[[file]]` becomes `file.wiki`; a `|description` part is discarded.
/// Targets that already end in `.md` or `.wiki` are kept as-is.
pub fn parse_wiki_target(raw: &str) -> String {
    let inner = raw.trim_matches(|c| c == '[' || c == ']');

    let target = match inner.find('|') {
        Some(idx) => &inner[..idx],
        None => inner,
    };

    if super::is_document(target) {
        target.to_string()
    } else {
        format!("{target}.wiki")
    }
}
