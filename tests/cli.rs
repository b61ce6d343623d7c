//! Tests running the pdfu binary

mod common;

use common::{files_containing, write_pdf_with_forms, write_pdf_without_forms};
use std::process::{Command, Output};
use tempfile::TempDir;

fn pdfu(args: &[&std::ffi::OsStr]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_pdfu"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run pdfu")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).trim_end().to_string()
}

#[test]
fn test_no_arguments_prints_usage() {
    let output = pdfu(&[]);
    assert_eq!(stdout(&output), "Usage: pdfu \"filename\"");
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_missing_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let missing = temp_dir.path().join("missing.pdf");

    let output = pdfu(&[missing.as_os_str()]);
    assert_eq!(stdout(&output), "File not found.");
    assert_eq!(output.status.code(), Some(3));
    assert_eq!(std::fs::read_dir(temp_dir.path()).unwrap().count(), 0);
}

#[test]
fn test_success_line() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let input = write_pdf_with_forms(temp_dir.path(), "deck.pdf", &[100]);
    let expected = temp_dir.path().join("deck_deembedded.pdf");

    let output = pdfu(&[input.as_os_str()]);
    assert_eq!(
        stdout(&output),
        format!("Deembedding successful. File saved in {}", expected.display())
    );
    assert!(output.status.success());
    assert!(expected.exists());
}

#[test]
fn test_error_line_and_exit_code() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let input = write_pdf_without_forms(temp_dir.path(), "plain.pdf");

    let output = pdfu(&[input.as_os_str()]);
    assert_eq!(stdout(&output), "Error: No embedded pages found.");
    assert_eq!(output.status.code(), Some(5));
    assert!(files_containing(temp_dir.path(), "_inter").is_empty());
}

#[test]
fn test_existing_non_pdf() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let input = temp_dir.path().join("notes.txt");
    std::fs::write(&input, "hello").unwrap();

    let output = pdfu(&[input.as_os_str()]);
    assert_eq!(stdout(&output), "Error: File is not a .pdf file.");
    assert_eq!(output.status.code(), Some(4));
}

#[test]
fn test_extra_arguments_ignored() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let input = write_pdf_with_forms(temp_dir.path(), "deck.pdf", &[100]);
    let expected = temp_dir.path().join("deck_deembedded.pdf");

    let output = pdfu(&[
        input.as_os_str(),
        std::ffi::OsStr::new("extra"),
        std::ffi::OsStr::new("--more"),
    ]);
    assert_eq!(
        stdout(&output),
        format!("Deembedding successful. File saved in {}", expected.display())
    );
    assert!(output.status.success());
}

#[test]
fn test_hyphen_path_is_a_path() {
    let output = pdfu(&[std::ffi::OsStr::new("-missing.pdf")]);
    assert_eq!(stdout(&output), "File not found.");
    assert_eq!(output.status.code(), Some(3));
}
