//! Integration tests for error handling and edge cases.

use pdfpages::PdfPagesError;
use pdfpages::commands::{CommandArgs, execute};
use rstest::rstest;

use crate::common::Workspace;

#[rstest]
#[case("0")]
#[case("12-12")]
#[case("10-2")]
#[case("ad--2")]
#[case("")]
#[case("12-14-16")]
#[case("asd")]
#[case("20ds")]
fn test_invalid_page_tokens(#[case] token: &str) {
    let ws = Workspace::new();
    let src = ws.pdf("src.pdf", 1, 20);

    for args in [
        CommandArgs::Remove {
            src_pdf: src.clone(),
            pages: vec!["1".into(), token.into()],
        },
        CommandArgs::Split {
            src_pdf: src.clone(),
            pages: vec![token.into()],
        },
    ] {
        let err = execute(&args, &ws.config()).unwrap_err();
        assert!(
            matches!(err, PdfPagesError::InvalidPageInput { token: ref t } if t == token),
            "{err}"
        );
        assert_eq!(err.exit_code(), 1);
    }
    assert!(ws.outputs().is_empty());
}

#[test]
fn test_missing_file() {
    let ws = Workspace::new();
    let a = ws.pdf("pdf_1.pdf", 1, 1);

    let err = execute(
        &CommandArgs::Merge {
            pdfs: vec![a, ws.path("pdf_5.pdf")],
        },
        &ws.config(),
    )
    .unwrap_err();

    assert!(matches!(err, PdfPagesError::FileNotFound { .. }));
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn test_merge_requires_pdf_extension() {
    let ws = Workspace::new();
    let a = ws.pdf("pdf_1.pdf", 1, 1);
    let doc = ws.file("pdf_1.docx", b"not a pdf");

    let err = execute(&CommandArgs::Merge { pdfs: vec![a, doc] }, &ws.config()).unwrap_err();
    assert!(matches!(err, PdfPagesError::InvalidFileType { .. }));
}

#[test]
fn test_merge_needs_two_files() {
    let ws = Workspace::new();
    let a = ws.pdf("pdf_1.pdf", 1, 1);

    let err = execute(&CommandArgs::Merge { pdfs: vec![a] }, &ws.config()).unwrap_err();
    assert!(matches!(
        err,
        PdfPagesError::InsufficientArguments {
            minimum: 2,
            supplied: 1,
            ..
        }
    ));
}

#[test]
fn test_corrupted_pdf_fails_to_load() {
    let ws = Workspace::new();
    let a = ws.pdf("a.pdf", 1, 1);
    let broken = ws.file("broken.pdf", b"");

    let err = execute(&CommandArgs::Merge { pdfs: vec![a, broken] }, &ws.config()).unwrap_err();

    assert!(matches!(err, PdfPagesError::FailedToLoadPdf { .. }));
    assert_eq!(err.exit_code(), 3);
    assert!(ws.outputs().is_empty());
}

#[test]
fn test_validation_runs_before_loading() {
    let ws = Workspace::new();
    let broken = ws.file("broken.pdf", b"garbage");

    let err = execute(
        &CommandArgs::Remove {
            src_pdf: broken,
            pages: vec!["x".into()],
        },
        &ws.config(),
    )
    .unwrap_err();

    assert!(matches!(err, PdfPagesError::InvalidPageInput { .. }));
    assert_eq!(err.exit_code(), 1);
}

#[test]
fn test_split_checks_every_span_first() {
    let ws = Workspace::new();
    let src = ws.pdf("src.pdf", 1, 5);

    let err = execute(
        &CommandArgs::Split {
            src_pdf: src,
            pages: vec!["1".into(), "2-3".into(), "5-9".into()],
        },
        &ws.config(),
    )
    .unwrap_err();

    assert!(matches!(err, PdfPagesError::PageRangeExceeded { .. }));
    assert!(ws.outputs().is_empty());
}
