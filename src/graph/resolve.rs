//! Canonical target-path resolution.

/// Join a document's directory with a parsed link target.
///
/// Lexically normalizes the result: `..` pops the previous segment, `.` is
/// dropped, repeated separators collapse. A `..` that walks above the root
/// is kept, so the caller still gets a stable identifier for targets that
/// point outside the wiki.
pub fn join(dir: &str, target: &str) -> String {
    if dir.is_empty() || dir == "." {
        normalize(target)
    } else {
        normalize(&format!("{dir}/{target}"))
    }
}

fn normalize(path: &str) -> String {
    let mut segments: Vec<&str> = Vec::new();

    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => match segments.last() {
                Some(&last) if last != ".." => {
                    segments.pop();
                }
                _ => segments.push(".."),
            },
            other => segments.push(other),
        }
    }

    if segments.is_empty() {
        ".".to_string()
    } else {
        segments.join("/")
    }
}
