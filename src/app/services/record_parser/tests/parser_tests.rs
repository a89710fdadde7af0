//! Tests for the main record parser functionality

use super::*;
use crate::RecordsError;
use crate::app::services::record_parser::{LineDiagnostic, RecordParser};
use tempfile::TempDir;

#[test]
fn test_parse_str_preserves_order() {
    let result = RecordParser::new().parse_str(&create_sample_input());

    assert_eq!(result.records.len(), 2);
    assert_eq!(result.records[0].id(), "S001");
    assert_eq!(result.records[1].id(), "S002");
    assert!(result.stats.is_clean());
}

#[test]
fn test_invalid_middle_line_is_skipped() {
    let result = RecordParser::new().parse_str(&create_input_with_invalid_grade());

    let ids: Vec<&str> = result.records.iter().map(|r| r.id()).collect();
    assert_eq!(ids, vec!["S001", "S003"]);

    assert_eq!(result.stats.total_lines, 3);
    assert_eq!(result.stats.records_parsed, 2);
    assert_eq!(result.stats.lines_skipped, 1);
    assert_eq!(result.stats.diagnostics.len(), 1);
    assert_eq!(result.stats.diagnostics[0].line(), 2);
    assert!(result.stats.diagnostics[0].to_string().contains("line 2"));
}

#[test]
fn test_many_lines_round_trip_in_order() {
    let content: String = (0..50)
        .map(|i| format!("ID{:03},Student {},{},{},{},{}\n", i, i, i, i + 10, i + 20, i + 30))
        .collect();

    let result = RecordParser::new().parse_str(&content);

    assert_eq!(result.records.len(), 50);
    for (i, record) in result.records.iter().enumerate() {
        assert_eq!(record.id(), format!("ID{:03}", i));
    }
}

#[test]
fn test_every_failure_kind_in_one_file() {
    let content = "S1,A,90,90,90,90\nshort,line\nS3,C,90,x,90,90\nS4,D,90,90,90,-1\nS5,E,70,70,70,70";
    let result = RecordParser::new().parse_str(content);

    assert_eq!(result.records.len(), 2);
    let lines: Vec<usize> = result.stats.diagnostics.iter().map(|d| d.line()).collect();
    assert_eq!(lines, vec![2, 3, 4]);
    assert!(matches!(
        result.stats.diagnostics[0],
        LineDiagnostic::InvalidFormat { .. }
    ));
    assert!(matches!(
        result.stats.diagnostics[1],
        LineDiagnostic::ParseError { .. }
    ));
    assert!(matches!(
        result.stats.diagnostics[2],
        LineDiagnostic::InvalidGrade { grade: -1, .. }
    ));
}

#[test]
fn test_empty_input() {
    let result = RecordParser::new().parse_str("");

    assert!(result.records.is_empty());
    assert_eq!(result.stats.total_lines, 0);
    assert!(result.stats.diagnostics.is_empty());
}

#[test]
fn test_crlf_line_endings() {
    let result = RecordParser::new().parse_str("S1,A,80,80,80,80\r\nS2,B,70,70,70,70\r\n");

    assert_eq!(result.records.len(), 2);
    assert_eq!(result.records[1].grades(), &[70, 70, 70, 70]);
}

#[test]
fn test_parse_lines_from_iterator() {
    let lines = vec!["S1,A,80,80,80,80".to_string(), "bad".to_string()];
    let result = RecordParser::new().parse_lines(lines);

    assert_eq!(result.records.len(), 1);
    assert_eq!(result.stats.diagnostics[0].line(), 2);
}

#[test]
fn test_parse_file() {
    let temp_file = create_temp_file(&create_input_with_invalid_grade());
    let result = RecordParser::new().parse_file(temp_file.path()).unwrap();

    assert_eq!(result.records.len(), 2);
    assert_eq!(result.stats.lines_skipped, 1);
}

#[test]
fn test_parse_file_with_invalid_utf8() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("records.txt");
    let mut bytes = b"S1,A,80,80,80,80\nS2,B\xff,70,70,70,70\n".to_vec();
    bytes.extend_from_slice(b"S3,C,60,60,60,60\n");
    std::fs::write(&path, bytes).unwrap();

    let result = RecordParser::new().parse_file(&path).unwrap();

    assert_eq!(result.records.len(), 3);
    assert!(result.records[1].name().starts_with('B'));
}

#[test]
fn test_parse_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("missing.txt");

    let err = RecordParser::new().parse_file(&missing).unwrap_err();
    match err {
        RecordsError::InputNotFound { path } => assert_eq!(path, missing),
        other => panic!("Expected InputNotFound, got {:?}", other),
    }
}

#[test]
fn test_parse_directory_is_not_found() {
    let temp_dir = TempDir::new().unwrap();

    let err = RecordParser::new().parse_file(temp_dir.path()).unwrap_err();
    assert!(matches!(err, RecordsError::InputNotFound { .. }));
}
