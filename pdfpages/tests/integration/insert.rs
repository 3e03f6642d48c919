//! Integration tests for `insert`.

use pdfpages::PdfPagesError;
use pdfpages::commands::{CommandArgs, execute};

use crate::common::{Workspace, expected, markers};

#[test]
fn test_insert_in_the_middle() {
    let ws = Workspace::new();
    let src = ws.pdf("pdf_1.pdf", 1, 3);
    let ins = ws.pdf("pdf_2.pdf", 2, 3);

    let outcome = execute(
        &CommandArgs::Insert {
            src_pdf: src,
            ins_pdf: ins,
            page: 2,
        },
        &ws.config(),
    )
    .unwrap();

    let pages = markers(&outcome.documents[0].path);
    assert_eq!(pages.len(), 6);
    assert_eq!(pages[3], "file 2 page 2");

    let mut want = expected(1, [1, 2]);
    want.extend(expected(2, 1..=3));
    want.extend(expected(1, [3]));
    assert_eq!(pages, want);
}

#[test]
fn test_insert_into_long_document() {
    let ws = Workspace::new();
    let src = ws.pdf("pdf_3.pdf", 3, 20);
    let ins = ws.pdf("pdf_4.pdf", 4, 4);

    let outcome = execute(
        &CommandArgs::Insert {
            src_pdf: src,
            ins_pdf: ins,
            page: 14,
        },
        &ws.config(),
    )
    .unwrap();

    let pages = markers(&outcome.documents[0].path);
    assert_eq!(pages.len(), 24);
    assert_eq!(pages[13], "file 3 page 14");
    assert_eq!(pages[16], "file 4 page 3");
    assert_eq!(pages[18], "file 3 page 15");
}

#[test]
fn test_insert_at_zero_prepends() {
    let ws = Workspace::new();
    let src = ws.pdf("src.pdf", 1, 2);
    let ins = ws.pdf("ins.pdf", 2, 1);

    let outcome = execute(
        &CommandArgs::Insert {
            src_pdf: src,
            ins_pdf: ins,
            page: 0,
        },
        &ws.config(),
    )
    .unwrap();

    assert_eq!(markers(&outcome.documents[0].path)[0], "file 2 page 1");
}

#[test]
fn test_insert_at_page_count_appends() {
    let ws = Workspace::new();
    let src = ws.pdf("src.pdf", 1, 2);
    let ins = ws.pdf("ins.pdf", 2, 2);

    let outcome = execute(
        &CommandArgs::Insert {
            src_pdf: src,
            ins_pdf: ins,
            page: 2,
        },
        &ws.config(),
    )
    .unwrap();

    let mut want = expected(1, [1, 2]);
    want.extend(expected(2, [1, 2]));
    assert_eq!(markers(&outcome.documents[0].path), want);
}

#[test]
fn test_insert_past_end_fails() {
    let ws = Workspace::new();
    let src = ws.pdf("src.pdf", 1, 3);
    let ins = ws.pdf("ins.pdf", 2, 3);

    let err = execute(
        &CommandArgs::Insert {
            src_pdf: src.clone(),
            ins_pdf: ins,
            page: 7,
        },
        &ws.config(),
    )
    .unwrap_err();

    match err {
        PdfPagesError::PageRangeExceeded {
            path,
            requested,
            page_count,
        } => {
            assert_eq!(path, src);
            assert_eq!(requested, 7);
            assert_eq!(page_count, 3);
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(ws.outputs().is_empty());
}
