//! Codec tests - text round-trips and file persistence

mod common;

use common::{cells, grid_from, numbered_grid};
use gridcalc::codec::{
    load_file, parse, parse_with, save_file, serialize, serialize_with, Delimiter, FileOpenError,
};
use gridcalc::error::GridError;

// ========================================================================
// Text round-trips
// ========================================================================

#[test]
fn test_load_example_text() {
    let grid = parse("1,2\n3,4\n").unwrap();
    assert_eq!(grid.row_count(), 2);
    assert_eq!(grid.column_count(), 2);
    assert_eq!(grid.get_cell(1, 0).unwrap(), 3.0);
}

#[test]
fn test_round_trip_preserves_awkward_values() {
    let grid = grid_from(&[
        &[0.1, 1.0 / 3.0, -0.0],
        &[1e-300, 123456789.123456789, f64::MAX],
        &[f64::MIN_POSITIVE, -2.5e10, 7.0],
    ]);
    let text = serialize(&grid);
    let parsed = parse(&text).unwrap();

    assert_eq!(cells(&parsed), cells(&grid));
    // -0.0 == 0.0, so check the sign explicitly
    assert!(parsed.get_cell(0, 2).unwrap().is_sign_negative());
}

#[test]
fn test_round_trip_every_delimiter() {
    let grid = numbered_grid(3, 4);
    for delimiter in [
        Delimiter::Comma,
        Delimiter::Tab,
        Delimiter::Pipe,
        Delimiter::Semicolon,
    ] {
        let text = serialize_with(&grid, delimiter);
        assert_eq!(parse_with(&text, delimiter).unwrap(), grid);
    }
}

#[test]
fn test_serialize_has_newline_after_last_row() {
    let grid = numbered_grid(2, 2);
    let text = serialize(&grid);
    assert_eq!(text, "0,1\n10,11\n");
    assert!(!text.lines().any(|l| l.ends_with(',')));
}

#[test]
fn test_parse_error_reports_line_and_field() {
    match parse("1,2\n3,4\n5,x6\n") {
        Err(GridError::Parse(e)) => {
            assert_eq!(e.line, 3);
            assert_eq!(e.field.as_deref(), Some("x6"));
            assert!(e.to_string().contains("line 3"));
        }
        other => panic!("expected parse error, got {:?}", other),
    }
}

#[test]
fn test_ragged_text_is_rejected() {
    assert!(matches!(parse("1\n2,3\n"), Err(GridError::Parse(_))));
}

#[test]
fn test_error_line_is_physical_after_blank_lines() {
    // Blank and whitespace-only lines are skipped but still counted
    let cases = [
        ("1,2\n\n3,x\n", 3),
        ("1,2\r\n\r\n3,x\r\n", 3),
        ("1,2\n   \n\n4,x\n", 4),
        ("1,2\n\n3\n", 3),
        ("1,2\r\n  \r\n3,4,5\r\n", 3),
    ];
    for (text, line) in cases {
        match parse(text) {
            Err(GridError::Parse(e)) => assert_eq!(e.line, line, "input {:?}", text),
            other => panic!("expected parse error for {:?}, got {:?}", text, other),
        }
    }
}

#[test]
fn test_whitespace_only_trailing_line_is_skipped() {
    let grid = parse("1,2\n   \n").unwrap();
    assert_eq!(cells(&grid), vec![vec![1.0, 2.0]]);
}

// ========================================================================
// Files
// ========================================================================

#[test]
fn test_save_and_load_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sheet.csv");

    let grid = grid_from(&[&[1.5, -2.0], &[0.0, 42.0]]);
    save_file(&grid, &path).unwrap();

    assert_eq!(std::fs::read_to_string(&path).unwrap(), "1.5,-2\n0,42\n");
    assert_eq!(load_file(&path).unwrap(), grid);
}

#[test]
fn test_save_overwrites_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sheet.csv");
    std::fs::write(&path, "9,9,9\n9,9,9\n9,9,9\n").unwrap();

    save_file(&grid_from(&[&[1.0]]), &path).unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "1\n");
}

#[test]
fn test_tsv_extension_uses_tabs() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sheet.tsv");

    let grid = numbered_grid(1, 3);
    save_file(&grid, &path).unwrap();

    assert_eq!(std::fs::read_to_string(&path).unwrap(), "0\t1\t2\n");
    assert_eq!(load_file(&path).unwrap(), grid);
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = load_file(&dir.path().join("missing.csv"));
    assert!(matches!(
        result,
        Err(GridError::FileOpen(FileOpenError::NotFound))
    ));
}

#[test]
fn test_load_directory() {
    let dir = tempfile::tempdir().unwrap();
    assert!(matches!(
        load_file(dir.path()),
        Err(GridError::FileOpen(FileOpenError::IsDirectory))
    ));
}

#[test]
fn test_save_into_missing_directory_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no-such-dir").join("sheet.csv");
    assert!(matches!(
        save_file(&numbered_grid(1, 1), &path),
        Err(GridError::Io(_))
    ));
}

#[test]
fn test_load_malformed_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.csv");
    std::fs::write(&path, "1,2\nthree,4\n").unwrap();

    match load_file(&path) {
        Err(GridError::Parse(e)) => assert_eq!(e.line, 2),
        other => panic!("expected parse error, got {:?}", other),
    }
}
