//! Parsers for the two recognized link syntaxes.

pub mod markdown;
pub mod wikilink;

pub use markdown::{markdown_matches, parse_markdown_target};
pub use wikilink::{parse_wiki_target, wiki_matches};

/// Extract every document link target from a line of text.
///
/// Wiki-syntax targets come first, then markdown-syntax targets, each in
/// match order. Markdown targets that do not refer to a document (images
/// and the like) decompose to an empty string and are dropped here.
pub fn links(line: &str) -> Vec<String> {
    let mut targets: Vec<String> = wiki_matches(line)
        .into_iter()
        .map(parse_wiki_target)
        .collect();

    for raw in markdown_matches(line) {
        let target = parse_markdown_target(raw);
        if !target.is_empty() {
            targets.push(target);
        }
    }

    targets
}

/// Extension of the final path segment, including the leading dot.
///
/// A dot in an earlier segment does not count: `a.b/c` has no extension,
/// while `.wiki` alone does.
fn link_extension(target: &str) -> Option<&str> {
    let name = match target.rsplit_once('/') {
        Some((_, name)) => name,
        None => target,
    };
    name.rfind('.').map(|idx| &name[idx..])
}

/// True when the target already carries one of the recognized document
/// extensions.
fn is_document(target: &str) -> bool {
    matches!(link_extension(target), Some(".md") | Some(".wiki"))
}
