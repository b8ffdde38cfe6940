// tests/integration/end_to_end.rs
use sloc::config::ScanConfigBuilder;

use crate::common::{Tree, sample_tree};

fn scan(tree: &Tree, filters: &[&str]) -> (String, sloc::ScanSummary) {
    let config = ScanConfigBuilder::default()
        .root(tree.path())
        .filters(filters.iter().map(|s| (*s).to_string()).collect::<Vec<_>>())
        .build()
        .unwrap();
    let mut out = Vec::new();
    let summary = sloc::run(&config, &mut out).unwrap();
    (String::from_utf8(out).unwrap(), summary)
}

#[test]
fn go_filter_reports_only_go_files() {
    let tree = sample_tree();
    let (out, summary) = scan(&tree, &["go"]);

    assert_eq!(summary.total_lines, 5);
    let root = tree.path().display();
    let expected = format!(
        "Searching for types: go in directory tree {root}.\n\
         Counted 5 lines in file {}.\n\
         \n\
         TOTAL: Counted 5 lines of code.\n",
        tree.join("b.go").display()
    );
    assert_eq!(out, expected);
}

#[test]
fn all_filter_counts_text_and_warns_on_binary() {
    let tree = sample_tree();
    let (out, summary) = scan(&tree, &["all"]);

    assert_eq!(summary.total_lines, 8);
    assert!(out.contains(&format!("Counted 3 lines in file {}.", tree.join("a.txt").display())));
    assert!(out.contains(&format!("Counted 5 lines in file {}.", tree.join("b.go").display())));
    assert!(out.contains(&format!(
        "Warning: did not process file: {} as valid Unicode text.",
        tree.join("c.bin").display()
    )));
    assert!(out.ends_with("\nTOTAL: Counted 8 lines of code.\n"));
}

#[test]
fn no_filters_total_is_zero() {
    let tree = sample_tree();
    let (out, summary) = scan(&tree, &[]);
    assert_eq!(summary.total_lines, 0);
    assert!(!out.contains("Counted 3"));
    assert!(out.ends_with("TOTAL: Counted 0 lines of code.\n"));
}

#[test]
fn several_filters_accumulate() {
    let tree = sample_tree()
        .file("src/lib.rs", "pub mod a;\npub mod b;\n")
        .file("src/a/deep/x.rs", "// x\n");
    let (_, summary) = scan(&tree, &["rs", "txt"]);
    assert_eq!(summary.total_lines, 2 + 1 + 3);
    assert_eq!(summary.counted_files, 3);
}

#[test]
fn missing_root_reports_no_total() {
    let tree = Tree::new();
    let config = ScanConfigBuilder::default()
        .root(tree.join("missing"))
        .filters(vec!["rs".to_string()])
        .build()
        .unwrap();
    let mut out = Vec::new();
    let err = sloc::run(&config, &mut out).unwrap_err();

    assert!(format!("{err:#}").contains("does not exist"));
    let out = String::from_utf8(out).unwrap();
    assert!(out.starts_with("Searching for types: rs "));
    assert!(!out.contains("TOTAL"));
}
