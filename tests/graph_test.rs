//! End-to-end tests driving the compiled binary against fixture wikis.

use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

fn write_file(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

/// Run the wikigraph binary and return (stdout, stderr, exit code).
fn run_wikigraph(root: &Path, args: &[&str]) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_wikigraph"))
        .arg(root)
        .args(args)
        .output()
        .expect("failed to execute wikigraph");

    (
        String::from_utf8_lossy(&output.stdout).to_string(),
        String::from_utf8_lossy(&output.stderr).to_string(),
        output.status.code().unwrap_or(-1),
    )
}

/// A small wiki with a diary subdirectory and both link syntaxes.
fn basic_wiki() -> TempDir {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    write_file(
        root,
        "index.wiki",
        "[[projects]]\n[[diary/2024-01-01]]\nSee [notes](notes).\n",
    );
    write_file(root, "projects.wiki", "[[index]]\n![chart](chart.png)\n");
    write_file(root, "diary/2024-01-01.wiki", "[[../projects]]\n");
    write_file(root, "notes.md", "plain text, no links\n");
    temp
}

mod dot_output {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn renders_left_to_right_digraph() {
        let temp = basic_wiki();
        let (stdout, _, code) = run_wikigraph(temp.path(), &[]);

        assert_eq!(code, 0);
        assert!(stdout.starts_with("digraph {"));
        assert!(stdout.contains("rankdir=\"LR\";"));
        assert!(stdout.trim_end().ends_with('}'));
    }

    #[test]
    fn exact_output_for_tiny_wiki() {
        let temp = TempDir::new().unwrap();
        write_file(temp.path(), "a.wiki", "[[b]]\n");
        write_file(temp.path(), "b.wiki", "no links\n");

        let (stdout, _, code) = run_wikigraph(temp.path(), &[]);
        assert_eq!(code, 0);
        assert_eq!(
            stdout,
            "digraph {\n\
             \trankdir=\"LR\";\n\
             \t\"a.wiki\";\n\
             \t\"b.wiki\";\n\
             \t\"a.wiki\" -> \"b.wiki\";\n\
             }\n"
        );
    }

    #[test]
    fn diary_entries_collapse_by_default() {
        let temp = basic_wiki();
        let (stdout, _, code) = run_wikigraph(temp.path(), &[]);

        assert_eq!(code, 0);
        assert!(stdout.contains("\"index.wiki\" -> \"diary.wiki\";"));
        assert!(stdout.contains("\"diary.wiki\" -> \"projects.wiki\";"));
        assert!(!stdout.contains("\"index.wiki\" -> \"diary/2024-01-01.wiki\";"));
    }

    #[test]
    fn keep_diary_disables_collapsing() {
        let temp = basic_wiki();
        let (stdout, _, code) = run_wikigraph(temp.path(), &["--keep-diary"]);

        assert_eq!(code, 0);
        assert!(stdout.contains("\"index.wiki\" -> \"diary/2024-01-01.wiki\";"));
        assert!(stdout.contains("\"diary/2024-01-01.wiki\" -> \"projects.wiki\";"));
        assert!(!stdout.contains("\"diary.wiki\""));
    }

    #[test]
    fn image_links_never_become_nodes() {
        let temp = basic_wiki();
        let (stdout, _, _) = run_wikigraph(temp.path(), &[]);
        assert!(!stdout.contains("chart"));
    }

    #[test]
    fn markdown_links_resolve_to_md_nodes() {
        let temp = basic_wiki();
        let (stdout, _, _) = run_wikigraph(temp.path(), &[]);
        assert!(stdout.contains("\"index.wiki\" -> \"notes.md\";"));
    }

    #[test]
    fn empty_wiki_renders_empty_graph() {
        let temp = TempDir::new().unwrap();
        let (stdout, _, code) = run_wikigraph(temp.path(), &[]);
        assert_eq!(code, 0);
        assert_eq!(stdout, "digraph {\n\trankdir=\"LR\";\n}\n");
    }
}

mod clustering {
    use super::*;

    #[test]
    fn nodes_group_into_directory_clusters() {
        let temp = basic_wiki();
        let (stdout, _, code) = run_wikigraph(temp.path(), &["--cluster", "--keep-diary"]);

        assert_eq!(code, 0);
        assert!(stdout.contains("subgraph cluster_0 {"));
        assert!(stdout.contains("label=\"diary\";"));
        assert!(stdout.contains("\t\t\"diary/2024-01-01.wiki\";"));
        // edges cross the cluster boundary
        assert!(stdout.contains("\"diary/2024-01-01.wiki\" -> \"projects.wiki\";"));
    }

    #[test]
    fn no_clusters_without_the_flag() {
        let temp = basic_wiki();
        let (stdout, _, _) = run_wikigraph(temp.path(), &["--keep-diary"]);
        assert!(!stdout.contains("subgraph"));
    }
}

mod level_filtering {
    use super::*;

    #[test]
    fn low_degree_sources_are_dropped() {
        let temp = basic_wiki();
        let (stdout, _, code) = run_wikigraph(temp.path(), &["--level", "2"]);

        assert_eq!(code, 0);
        // index.wiki (3 outgoing links) survives with its edges
        assert!(stdout.contains("\"index.wiki\" -> \"projects.wiki\";"));
        // projects.wiki has a single link and loses its edge
        assert!(!stdout.contains("\"projects.wiki\" -> \"index.wiki\";"));
        // but it is still drawn as a target of index.wiki
        assert!(stdout.contains("\"projects.wiki\""));
    }

    #[test]
    fn level_above_everything_renders_nothing() {
        let temp = basic_wiki();
        let (stdout, _, code) = run_wikigraph(temp.path(), &["--level", "10"]);
        assert_eq!(code, 0);
        assert!(!stdout.contains("index.wiki"));
    }
}

mod ignoring {
    use super::*;

    #[test]
    fn ignored_paths_vanish_from_the_graph() {
        let temp = basic_wiki();
        let (stdout, _, code) = run_wikigraph(temp.path(), &["--ignore", "diary"]);

        assert_eq!(code, 0);
        // neither as a source (the file is never scanned) nor as a target
        assert!(!stdout.contains("diary"));
        assert!(stdout.contains("\"index.wiki\" -> \"projects.wiki\";"));
    }

    #[test]
    fn malformed_pattern_is_a_startup_error() {
        let temp = basic_wiki();
        let (stdout, stderr, code) = run_wikigraph(temp.path(), &["--ignore", "["]);

        assert_eq!(code, 2);
        assert!(stdout.is_empty());
        assert!(stderr.contains("Error"));
    }
}

mod traversal {
    use super::*;

    #[test]
    fn named_directories_are_skipped() {
        let temp = basic_wiki();
        write_file(temp.path(), "attic/old.wiki", "[[forgotten]]\n");

        let (stdout, stderr, code) = run_wikigraph(temp.path(), &["--skip", "attic"]);
        assert_eq!(code, 0);
        assert!(!stdout.contains("attic"));
        assert!(!stdout.contains("forgotten"));
        assert!(stderr.contains("skipping: attic"));
    }

    #[test]
    fn git_directory_is_always_skipped() {
        let temp = basic_wiki();
        write_file(temp.path(), ".git/config", "[[fake]]\n");

        let (stdout, _, code) = run_wikigraph(temp.path(), &[]);
        assert_eq!(code, 0);
        assert!(!stdout.contains("fake.wiki"));
    }

    #[test]
    fn missing_root_fails() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("nope");
        let (_, stderr, code) = run_wikigraph(&missing, &[]);
        assert_ne!(code, 0);
        assert!(stderr.contains("Error"));
    }
}

mod json_output {
    use super::*;

    #[test]
    fn adjacency_map_dump() {
        let temp = basic_wiki();
        let (stdout, _, code) = run_wikigraph(temp.path(), &["--format", "json"]);

        assert_eq!(code, 0);
        let graph: serde_json::Value = serde_json::from_str(&stdout).unwrap();
        let index = graph["index.wiki"].as_array().unwrap();
        assert!(index.iter().any(|t| t == "projects.wiki"));
        assert!(index.iter().any(|t| t == "diary.wiki"));
        assert!(index.iter().any(|t| t == "notes.md"));
        // linkless documents still appear
        assert_eq!(graph["notes.md"].as_array().unwrap().len(), 0);
    }
}

mod config_file {
    use super::*;

    #[test]
    fn config_in_root_is_picked_up() {
        let temp = basic_wiki();
        write_file(temp.path(), ".wikigraph.toml", "cluster = true\ncollapse_diary = false\n");

        let (stdout, _, code) = run_wikigraph(temp.path(), &[]);
        assert_eq!(code, 0);
        assert!(stdout.contains("subgraph cluster_0 {"));
        assert!(stdout.contains("\"diary/2024-01-01.wiki\""));
    }

    #[test]
    fn remap_rules_from_config() {
        let temp = basic_wiki();
        write_file(
            temp.path(),
            ".wikigraph.toml",
            "[remap]\nprojects = \"work.wiki\"\n",
        );

        let (stdout, _, code) = run_wikigraph(temp.path(), &[]);
        assert_eq!(code, 0);
        assert!(stdout.contains("\"index.wiki\" -> \"work.wiki\";"));
        assert!(!stdout.contains("\"index.wiki\" -> \"projects.wiki\";"));
    }

    #[test]
    fn cli_flags_override_config() {
        let temp = basic_wiki();
        write_file(temp.path(), ".wikigraph.toml", "level = 10\n");

        let (stdout, _, code) = run_wikigraph(temp.path(), &["--level", "0"]);
        assert_eq!(code, 0);
        assert!(stdout.contains("\"index.wiki\""));
    }

    #[test]
    fn malformed_config_is_a_startup_error() {
        let temp = basic_wiki();
        write_file(temp.path(), ".wikigraph.toml", "no_such_key = true\n");

        let (_, stderr, code) = run_wikigraph(temp.path(), &[]);
        assert_eq!(code, 2);
        assert!(stderr.contains("Error"));
    }
}
