//! Integration tests for `merge`.

use pdfpages::commands::{CommandArgs, CommandKind, execute};

use crate::common::{Workspace, expected, every_page_has_media_box, markers, page_count};

#[test]
fn test_merge_two_documents() {
    let ws = Workspace::new();
    let a = ws.pdf("pdf_1.pdf", 1, 2);
    let b = ws.pdf("pdf_2.pdf", 2, 4);

    let outcome = execute(&CommandArgs::Merge { pdfs: vec![a, b] }, &ws.config()).unwrap();

    assert_eq!(outcome.command, CommandKind::Merge);
    assert_eq!(outcome.documents.len(), 1);

    let output = &outcome.documents[0].path;
    assert_eq!(page_count(output), 6);
    assert_eq!(markers(output)[4], "file 2 page 3");
    assert_eq!(ws.outputs(), vec![output.clone()]);
}

#[test]
fn test_merge_keeps_command_line_order() {
    let ws = Workspace::new();
    let a = ws.pdf("a.pdf", 1, 1);
    let b = ws.pdf("b.pdf", 2, 2);
    let c = ws.pdf("c.pdf", 3, 1);

    let outcome = execute(&CommandArgs::Merge { pdfs: vec![c, a, b] }, &ws.config()).unwrap();

    let mut want = expected(3, [1]);
    want.extend(expected(1, [1]));
    want.extend(expected(2, [1, 2]));
    assert_eq!(markers(&outcome.documents[0].path), want);
}

#[test]
fn test_merge_same_file_twice() {
    let ws = Workspace::new();
    let a = ws.pdf("a.pdf", 1, 3);

    let outcome = execute(
        &CommandArgs::Merge {
            pdfs: vec![a.clone(), a],
        },
        &ws.config(),
    )
    .unwrap();

    let mut want = expected(1, 1..=3);
    want.extend(expected(1, 1..=3));
    assert_eq!(markers(&outcome.documents[0].path), want);
}

#[test]
fn test_merge_materializes_inherited_attributes() {
    let ws = Workspace::new();
    let a = ws.pdf("a.pdf", 1, 2);
    let b = ws.pdf("b.pdf", 2, 2);

    let outcome = execute(&CommandArgs::Merge { pdfs: vec![a, b] }, &ws.config()).unwrap();
    assert!(every_page_has_media_box(&outcome.documents[0].path));
}

#[test]
fn test_merge_leaves_inputs_untouched() {
    let ws = Workspace::new();
    let a = ws.pdf("a.pdf", 1, 2);
    let b = ws.pdf("b.pdf", 2, 2);
    let before = (std::fs::read(&a).unwrap(), std::fs::read(&b).unwrap());

    execute(
        &CommandArgs::Merge {
            pdfs: vec![a.clone(), b.clone()],
        },
        &ws.config(),
    )
    .unwrap();

    assert_eq!(std::fs::read(&a).unwrap(), before.0);
    assert_eq!(std::fs::read(&b).unwrap(), before.1);
}
