//! Fixture builders shared by unit tests.

use lopdf::content::{Content, Operation};
use lopdf::{Dictionary, Document, Object, Stream, dictionary};
use std::path::{Path, PathBuf};

use crate::document::PdfDocument;

/// Build a document whose page `n` shows the text `file <id> page <n>`.
pub(crate) fn marked_document(id: u32, pages: u32) -> PdfDocument {
    let mut doc = Document::with_version("1.7");
    let pages_id = doc.new_object_id();
    let mut kids = Vec::new();

    for n in 1..=pages {
        let content = Content {
            operations: vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 12.into()]),
                Operation::new("Td", vec![72.into(), 720.into()]),
                Operation::new(
                    "Tj",
                    vec![Object::string_literal(format!("file {id} page {n}"))],
                ),
                Operation::new("ET", vec![]),
            ],
        };
        let content_id = doc.add_object(Stream::new(Dictionary::new(), content.encode().unwrap()));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(Object::Reference(page_id));
    }

    doc.objects.insert(
        pages_id,
        dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => pages as i64,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
        }
        .into(),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    PdfDocument::from_document(doc, format!("file{id}.pdf"))
}

/// Write a marked document to `dir/name`.
pub(crate) fn write_marked_pdf(dir: &Path, name: &str, id: u32, pages: u32) -> PathBuf {
    let path = dir.join(name);
    marked_document(id, pages).into_inner().save(&path).unwrap();
    path
}

/// The `file <id> page <n>` marker of every page, in order.
pub(crate) fn page_markers(doc: &Document) -> Vec<String> {
    doc.get_pages()
        .into_values()
        .map(|id| {
            let content = doc.get_page_content(id).unwrap();
            let text = String::from_utf8_lossy(&content);
            let start = text.find("file ").expect("page has no marker");
            let end = start + text[start..].find(')').expect("unterminated marker");
            text[start..end].to_string()
        })
        .collect()
}
