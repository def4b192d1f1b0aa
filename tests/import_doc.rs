// tests/import_doc.rs
//
// Importer behavior against whole documents, including the documented
// leniency rules: malformed rows drop silently and never raise errors.

use stocktake::import::{self, ImportError};

fn row8(category: &str, id: &str, name: &str, status: &str) -> String {
    // Export rows carry 8 cells; only 4 of them matter.
    format!(
        "<tr><td>x</td><td>{category}</td><td>{id}</td><td>{name}</td>\
         <td></td><td></td><td></td><td>{status}</td></tr>"
    )
}

fn doc(rows: &[String]) -> String {
    // Two header rows, skipped by position like the real export.
    let header = row8("Category", "Id", "Name", "Status");
    format!(
        "<html><body><h1>Machine export</h1>\
         <table border=\"1\">{header}{header}{}</table></body></html>",
        rows.concat()
    )
}

#[test]
fn no_table_yields_no_table_found() {
    let err = import::parse("<html><body><p>nothing here</p></body></html>").unwrap_err();
    assert!(matches!(err, ImportError::NoTableFound));
    assert_eq!(err.to_string(), "No table found in file");
}

#[test]
fn header_only_table_parses_to_empty() {
    let out = import::parse(&doc(&[])).unwrap();
    assert!(out.is_empty());
}

#[test]
fn documented_offsets_reach_the_right_cells() {
    let out = import::parse(&doc(&[row8("Tools", "7", "Press", "Active")])).unwrap();
    assert_eq!(out.len(), 1);
    let m = &out[0];
    assert_eq!(m.id, "7");
    assert_eq!(m.name, "Press");
    assert_eq!(m.category, "Tools");
    assert_eq!(m.status, "Active");
}

#[test]
fn malformed_rows_drop_silently() {
    let rows = vec![
        row8("Tools", "1", "Lathe", "Active"),
        "<tr><td>only</td><td>three</td><td>cells</td></tr>".into(), // too short
        row8("Tools", "2", "   ", "Active"),                         // name blank after trim
        row8("Tools", "", "Ghost", "Idle"),                          // id blank
        row8("Tools", "3", "Press", "Idle"),
    ];
    let out = import::parse(&doc(&rows)).unwrap();
    let ids: Vec<&str> = out.iter().map(|m| m.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "3"]);
}

#[test]
fn cell_markup_and_entities_are_cleaned() {
    let rows = vec![row8(
        "Tools &amp; Dies",
        " 42 ",
        "<b>Big</b>&nbsp;Press",
        "Active",
    )];
    let out = import::parse(&doc(&rows)).unwrap();
    assert_eq!(out[0].id, "42");
    assert_eq!(out[0].name, "Big Press");
    assert_eq!(out[0].category, "Tools & Dies");
}

#[test]
fn duplicate_ids_are_kept_as_is() {
    let rows = vec![
        row8("Tools", "7", "Press", "Active"),
        row8("Tools", "7", "Press (spare)", "Idle"),
    ];
    let out = import::parse(&doc(&rows)).unwrap();
    assert_eq!(out.len(), 2);
    assert_eq!(out[0].id, out[1].id);
}

#[test]
fn only_the_first_table_is_read() {
    let html = format!(
        "<html><body><table><tr></tr><tr></tr>{}</table>\
         <table><tr></tr><tr></tr>{}</table></body></html>",
        row8("Tools", "1", "Lathe", "Active"),
        row8("Tools", "2", "Mill", "Active"),
    );
    let out = import::parse(&html).unwrap();
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].id, "1");
}
