//! End-to-end tests over a real directory tree.

use std::fs;
use std::path::Path;

use folio_content::{ContentError, ContentLoader, SUMMARY_LIMIT, source_path_for};
use pretty_assertions::assert_eq;

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

#[test]
fn parse_one_splits_header_and_body() {
    let temp_dir = tempfile::tempdir().unwrap();
    write(temp_dir.path(), "hello.txt", "Hello\nmeta-author: Jane\n\nWorld\n");

    let doc = ContentLoader::new()
        .parse_one(&temp_dir.path().join("hello.txt"))
        .unwrap();

    assert_eq!(doc.title, "Hello");
    assert_eq!(doc.author.as_deref(), Some("Jane"));
    assert_eq!(doc.body, "World\n");
    assert!(doc.tags.is_empty());
}

#[test]
fn parse_one_missing_file_is_not_found() {
    let temp_dir = tempfile::tempdir().unwrap();

    let err = ContentLoader::new()
        .parse_one(&temp_dir.path().join("nope.txt"))
        .unwrap_err();

    assert!(matches!(err, ContentError::NotFound(_)));
}

#[test]
fn parse_tree_ignores_non_txt_files() {
    let temp_dir = tempfile::tempdir().unwrap();
    write(temp_dir.path(), "post.txt", "Post\n\nBody\n");
    write(temp_dir.path(), "notes.md", "Notes\n\nBody\n");

    let collection = ContentLoader::new()
        .parse_tree(temp_dir.path(), false)
        .unwrap()
        .unwrap();

    assert_eq!(collection.len(), 1);
    assert_eq!(collection.documents()[0].title, "Post");
}

#[test]
fn parse_tree_empty_directory_is_no_collection() {
    let temp_dir = tempfile::tempdir().unwrap();

    let result = ContentLoader::new()
        .parse_tree(temp_dir.path(), true)
        .unwrap();

    assert!(result.is_none());
}

#[test]
fn parse_tree_missing_root_fails() {
    let temp_dir = tempfile::tempdir().unwrap();

    let err = ContentLoader::new()
        .parse_tree(&temp_dir.path().join("missing"), false)
        .unwrap_err();

    assert!(err.is_not_found());
}

#[test]
fn parse_tree_keeps_body_when_summary_fails() {
    let temp_dir = tempfile::tempdir().unwrap();
    write(temp_dir.path(), "a.txt", "A\n\n<p>Hi <!--x-->there</p>");

    let collection = ContentLoader::new()
        .parse_tree(temp_dir.path(), true)
        .unwrap()
        .unwrap();

    assert_eq!(collection.documents()[0].body, "<p>Hi <!--x-->there</p>\n");
}

#[test]
fn parse_tree_summary_keeps_less_than_in_text() {
    let temp_dir = tempfile::tempdir().unwrap();
    write(temp_dir.path(), "math.txt", "Math\n\n<p>1 < 2 and 3 > 2</p>\n<p>x < y</p>\n");

    let collection = ContentLoader::new()
        .parse_tree(temp_dir.path(), true)
        .unwrap()
        .unwrap();

    assert_eq!(collection.documents()[0].body, "1 < 2 and 3 > 2\nx < y\n");
}

#[test]
fn parse_tree_truncates_long_summaries() {
    let temp_dir = tempfile::tempdir().unwrap();
    let long = format!("Long\n\n<p>{}</p>\n", "x".repeat(SUMMARY_LIMIT + 50));
    let exact = format!("Exact\n\n<div>{}</div>", "y".repeat(SUMMARY_LIMIT - 1));
    write(temp_dir.path(), "long.txt", &long);
    write(temp_dir.path(), "exact.txt", &exact);

    let collection = ContentLoader::new()
        .parse_tree(temp_dir.path(), true)
        .unwrap()
        .unwrap();

    let exact = collection.get("exact.html").unwrap();
    assert_eq!(exact.body, format!("{}\n", "y".repeat(SUMMARY_LIMIT - 1)));

    let long = collection.get("long.html").unwrap();
    assert_eq!(long.body, format!("{}...", "x".repeat(SUMMARY_LIMIT)));
}

#[test]
fn identifiers_round_trip_to_source_paths() {
    let temp_dir = tempfile::tempdir().unwrap();
    write(temp_dir.path(), "index.txt", "Index");
    write(temp_dir.path(), "2024/01/new-year.txt", "New Year");
    write(temp_dir.path(), "drafts/v0.1.txt", "Draft");

    let collection = ContentLoader::new()
        .parse_tree(temp_dir.path(), false)
        .unwrap()
        .unwrap();

    let ids: Vec<_> = collection
        .iter()
        .map(|d| d.identifier.as_deref().unwrap())
        .collect();
    assert_eq!(
        ids,
        vec!["2024/01/new-year.html", "drafts/v0.1.html", "index.html"]
    );

    for doc in &collection {
        let id = doc.identifier.as_deref().unwrap();
        let source = source_path_for(collection.root(), id).unwrap();
        assert_eq!(source, doc.source_path);
        assert_eq!(ContentLoader::new().parse_one(&source).unwrap().title, doc.title);
    }
}
