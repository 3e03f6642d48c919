//! Shared fixtures for the integration tests.
//!
//! Fixture PDFs are generated with lopdf. Page `n` of fixture `id` draws the
//! text `file <id> page <n>`, so tests can tell exactly which page ended up
//! where.

use lopdf::content::{Content, Operation};
use lopdf::{Dictionary, Document, Object, Stream, dictionary};
use pdfpages::Config;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A scratch directory with an `out/` subdirectory for command outputs.
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join("out")).unwrap();
        Self { dir }
    }

    /// Write an `pages`-page fixture named `name` and return its path.
    pub fn pdf(&self, name: &str, id: u32, pages: u32) -> PathBuf {
        let path = self.dir.path().join(name);
        write_marked_pdf(&path, id, pages);
        path
    }

    /// Write arbitrary bytes to `name`.
    pub fn file(&self, name: &str, contents: &[u8]) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    pub fn out_dir(&self) -> PathBuf {
        self.dir.path().join("out")
    }

    /// Quiet configuration writing to `out/`.
    pub fn config(&self) -> Config {
        let mut config = Config::new(self.out_dir());
        config.quiet = true;
        config
    }

    /// Files written to `out/`.
    pub fn outputs(&self) -> Vec<PathBuf> {
        let mut files: Vec<PathBuf> = std::fs::read_dir(self.out_dir())
            .unwrap()
            .map(|entry| entry.unwrap().path())
            .collect();
        files.sort();
        files
    }
}

fn write_marked_pdf(path: &Path, id: u32, pages: u32) {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });

    let mut kids = Vec::new();
    for n in 1..=pages {
        let content = Content {
            operations: vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 24.into()]),
                Operation::new("Td", vec![100.into(), 600.into()]),
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

    // Resources and MediaBox live on the root node and are inherited.
    doc.objects.insert(
        pages_id,
        dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => pages as i64,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
        }
        .into(),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc.compress();
    doc.save(path).unwrap();
}

/// Page count of the PDF at `path`.
pub fn page_count(path: &Path) -> usize {
    Document::load(path).unwrap().get_pages().len()
}

/// The `file <id> page <n>` marker of every page of the PDF at `path`.
pub fn markers(path: &Path) -> Vec<String> {
    let doc = Document::load(path).unwrap();
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

/// `file <id> page <n>` for each `n` in `pages`.
pub fn expected(id: u32, pages: impl IntoIterator<Item = u32>) -> Vec<String> {
    pages
        .into_iter()
        .map(|n| format!("file {id} page {n}"))
        .collect()
}

/// Whether every page of the PDF at `path` carries a MediaBox of its own.
pub fn every_page_has_media_box(path: &Path) -> bool {
    let doc = Document::load(path).unwrap();
    doc.get_pages()
        .into_values()
        .all(|id| doc.get_dictionary(id).unwrap().has(b"MediaBox"))
}
