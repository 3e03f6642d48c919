//! `split`: one output document per page token.

use super::{CommandArgs, CommandContext, OutputDocument};
use crate::document::PdfDocument;
use crate::error::{PdfPagesError, Result};
use crate::pages::parse_tokens;

pub(super) fn run(args: &CommandArgs, context: &mut CommandContext) -> Result<Vec<OutputDocument>> {
    let CommandArgs::Split { src_pdf, pages } = args else {
        return Err(PdfPagesError::argument_mismatch("split"));
    };

    let tokens = parse_tokens(pages)?;
    let source = PdfDocument::open(src_pdf)?;
    let page_count = source.page_count();

    // Every span is checked before the first document is written.
    if let Some(token) = tokens.iter().find(|token| !token.span().fits(page_count)) {
        return Err(PdfPagesError::page_range_exceeded(
            src_pdf,
            token.last_page(),
            page_count,
        ));
    }

    let mut outputs = Vec::with_capacity(tokens.len());
    for (token, raw) in tokens.iter().zip(pages) {
        let mut part = PdfDocument::empty();
        part.insert_pages(&source, 0, token.span())?;
        outputs.push(context.write(part, &format!("_page_{raw}"))?);
    }

    Ok(outputs)
}
