//! Markdown-syntax link parsing.

use regex::Regex;
use std::sync::LazyLock;

// Markdown pattern: [description](target). Image embeds ![alt](target)
// match as well; the leading ! is not part of the match. The restricted
// character classes keep several links on one line from fusing into a
// single greedy match.
static MARKDOWNLINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]*)\]\(([^()]*)\)").unwrap());

/// Return all raw markdown-syntax matches in a line, left to right.
pub fn markdown_matches(line: &str) -> Vec<&str> {
    MARKDOWNLINK.find_iter(line).map(|m| m.as_str()).collect()
}

/// Extract the target filename from a raw markdown-syntax match.
///
/// Targets without an extension are assumed to refer to a local markdown
/// file. Any extension other than `.md` or `.wiki` marks a non-document
/// target (an image, say); those decompose to an empty string and the
/// caller drops them.
pub fn parse_markdown_target(raw: &str) -> String {
    let Some(caps) = MARKDOWNLINK.captures(raw) else {
        return String::new();
    };
    let target = caps.get(2).map(|m| m.as_str()).unwrap_or("");

    match super::link_extension(target) {
        Some(".md") | Some(".wiki") => target.to_string(),
        None => format!("{target}.md"),
        Some(_) => String::new(),
    }
}
