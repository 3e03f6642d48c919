//! `insert`: put every page of one document after a page of another.

use super::{CommandArgs, CommandContext, OutputDocument};
use crate::document::PdfDocument;
use crate::error::{PdfPagesError, Result};

pub(super) fn run(args: &CommandArgs, context: &mut CommandContext) -> Result<Vec<OutputDocument>> {
    let CommandArgs::Insert {
        src_pdf,
        ins_pdf,
        page,
    } = args
    else {
        return Err(PdfPagesError::argument_mismatch("insert"));
    };

    let mut target = PdfDocument::open(src_pdf)?;
    let inserted = PdfDocument::open(ins_pdf)?;

    // Inserting after page `n` means the first new page gets index `n`.
    target.insert_document(&inserted, *page)?;

    Ok(vec![context.write(target, "")?])
}
