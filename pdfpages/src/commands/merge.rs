//! `merge`: concatenate documents in command-line order.

use super::{CommandArgs, CommandContext, OutputDocument};
use crate::document::PdfDocument;
use crate::error::{PdfPagesError, Result};

pub(super) fn run(args: &CommandArgs, context: &mut CommandContext) -> Result<Vec<OutputDocument>> {
    let CommandArgs::Merge { pdfs } = args else {
        return Err(PdfPagesError::argument_mismatch("merge"));
    };
    let Some((first, rest)) = pdfs.split_first() else {
        return Err(PdfPagesError::insufficient_arguments("merge", 2, 0));
    };

    let mut merged = PdfDocument::open(first)?;
    for path in rest {
        let next = PdfDocument::open(path)?;
        let at = merged.page_count();
        merged.insert_document(&next, at)?;
    }

    Ok(vec![context.write(merged, "")?])
}
