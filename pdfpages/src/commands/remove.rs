//! `remove`: delete a set of pages.

use super::{CommandArgs, CommandContext, OutputDocument};
use crate::document::PdfDocument;
use crate::error::{PdfPagesError, Result};
use crate::pages::{PageIndexSet, parse_tokens};

pub(super) fn run(args: &CommandArgs, context: &mut CommandContext) -> Result<Vec<OutputDocument>> {
    let CommandArgs::Remove { src_pdf, pages } = args else {
        return Err(PdfPagesError::argument_mismatch("remove"));
    };

    let tokens = parse_tokens(pages)?;
    let mut doc = PdfDocument::open(src_pdf)?;
    let page_count = doc.page_count();

    // Ranges are bounded by the document before any index is collected.
    if let Some(token) = tokens.iter().find(|token| token.last_page() > page_count) {
        return Err(PdfPagesError::page_range_exceeded(
            src_pdf,
            token.last_page(),
            page_count,
        ));
    }

    doc.delete_pages(&PageIndexSet::from_tokens(&tokens))?;

    Ok(vec![context.write(doc, "")?])
}
