//! Reading workloads from files.

use std::fs;

use pagesim::{Comparison, Error, PageId, Policy, Workload};
use tempfile::tempdir;

fn write_workload(contents: &str) -> (std::path::PathBuf, tempfile::TempDir) {
    let dir = tempdir().unwrap();
    let path = dir.path().join("workload.txt");
    fs::write(&path, contents).unwrap();
    (path, dir)
}

#[test]
fn test_read_workload_file() {
    let (path, _dir) = write_workload("7 0 1 2 0 3 0 4 2 3 0 3 2\n3\n");
    let workload = Workload::from_path(&path).unwrap();

    assert_eq!(workload.pages.len(), 13);
    assert_eq!(workload.pages[3], PageId::new(2));
    assert_eq!(workload.frames, 3);

    let cmp = Comparison::run(&workload.pages, &workload.config().unwrap()).unwrap();
    assert_eq!(cmp.get(Policy::Fifo).unwrap().faults, 10);
}

#[test]
fn test_file_without_trailing_newline() {
    let (path, _dir) = write_workload("1 2 3\n2");
    let workload = Workload::from_path(&path).unwrap();

    assert_eq!(workload.frames, 2);
}

#[test]
fn test_file_with_bad_page_token() {
    let (path, _dir) = write_workload("1 2 x\n3\n");
    let err = Workload::from_path(&path).unwrap_err();

    assert!(matches!(err, Error::InvalidPage(ref t) if t == "x"));
    assert!(err.is_input_error());
    assert!(err.to_string().contains("Example page input: 7 0 1 2 0 3 0 4 2 3 0 3"));
}

#[test]
fn test_file_missing_frames() {
    let (path, _dir) = write_workload("1 2 3\n");
    assert!(matches!(Workload::from_path(&path), Err(Error::MissingFrames)));
}

#[test]
fn test_missing_file() {
    let dir = tempdir().unwrap();
    let err = Workload::from_path(dir.path().join("absent.txt")).unwrap_err();

    assert!(matches!(err, Error::Io(_)));
    assert!(!err.is_input_error());
}
