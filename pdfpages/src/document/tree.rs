//! Page tree manipulation.
//!
//! Documents produced by pdfpages always carry a flat page tree: the root
//! `Pages` node lists every page directly. Attributes that pages may inherit
//! from intermediate nodes are copied onto the pages first, so dropping
//! those nodes never changes how a page renders.

use lopdf::{Document, Object, ObjectId};

use crate::error::{PdfPagesError, Result};

/// Page attributes a page may inherit from its ancestors.
const INHERITABLE: [&[u8]; 4] = [b"Resources", b"MediaBox", b"CropBox", b"Rotate"];

/// Guard against `Parent` cycles in malformed files.
const MAX_TREE_DEPTH: usize = 64;

/// Object id of the root `Pages` node.
pub(crate) fn root_pages_id(doc: &Document) -> Result<ObjectId> {
    let catalog = doc
        .catalog()
        .map_err(|e| PdfPagesError::malformed(format!("Failed to get catalog: {e}")))?;

    catalog
        .get(b"Pages")
        .and_then(Object::as_reference)
        .map_err(|e| PdfPagesError::malformed(format!("Failed to get pages reference: {e}")))
}

/// Page object ids in document order.
pub(crate) fn page_ids(doc: &Document) -> Vec<ObjectId> {
    doc.get_pages().into_values().collect()
}

/// Copy inherited attributes from ancestor nodes onto each page.
pub(crate) fn materialize_inherited(doc: &mut Document, page_ids: &[ObjectId]) -> Result<()> {
    for &page_id in page_ids {
        let page = doc.get_dictionary(page_id)?;
        let mut missing: Vec<&[u8]> = INHERITABLE
            .iter()
            .copied()
            .filter(|key| !page.has(key))
            .collect();
        let mut next = page.get(b"Parent").and_then(Object::as_reference).ok();

        let mut inherited: Vec<(&[u8], Object)> = Vec::new();
        let mut depth = 0;

        while let Some(node_id) = next {
            if missing.is_empty() || depth >= MAX_TREE_DEPTH {
                break;
            }

            let node = doc.get_dictionary(node_id)?;
            missing.retain(|&key| match node.get(key) {
                Ok(value) => {
                    inherited.push((key, value.clone()));
                    false
                }
                Err(_) => true,
            });

            next = node.get(b"Parent").and_then(Object::as_reference).ok();
            depth += 1;
        }

        if !inherited.is_empty() {
            let page = doc.get_dictionary_mut(page_id)?;
            for (key, value) in inherited {
                page.set(key, value);
            }
        }
    }

    Ok(())
}

/// Replace the page tree with a flat root listing `page_ids` in order.
///
/// Every page carries its own inheritable attributes afterwards, and the
/// root holds none, so pages joined from another document keep their look.
///
/// Nodes and pages no longer reachable stay in the object table until the
/// writer prunes them.
pub(crate) fn rebuild(doc: &mut Document, page_ids: &[ObjectId]) -> Result<()> {
    materialize_inherited(doc, page_ids)?;

    let root_id = root_pages_id(doc)?;

    for &page_id in page_ids {
        doc.get_dictionary_mut(page_id)?
            .set("Parent", Object::Reference(root_id));
    }

    let root = doc.get_dictionary_mut(root_id).map_err(|e| {
        PdfPagesError::malformed(format!("Pages object is not a dictionary: {e}"))
    })?;

    for key in INHERITABLE {
        root.remove(key);
    }

    let kids: Vec<Object> = page_ids.iter().map(|&id| Object::Reference(id)).collect();
    root.set("Kids", Object::Array(kids));
    root.set("Count", Object::Integer(page_ids.len() as i64));

    Ok(())
}
