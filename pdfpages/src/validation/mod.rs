//! Argument validation for pdfpages.
//!
//! Every command argument is checked before a single document is opened:
//! - File existence and, when required, file extension
//! - Page token syntax
//! - Minimum argument counts declared by the command registry
//!
//! # Examples
//!
//! ```no_run
//! use pdfpages::validation::{check_filepath, check_page_format};
//! use std::path::Path;
//!
//! # fn example() -> pdfpages::Result<()> {
//! check_filepath(Path::new("report.pdf"), Some("pdf"))?;
//! check_page_format("3-7")?;
//! # Ok(())
//! # }
//! ```

use std::path::Path;

use crate::commands::registry::{ArgCheck, CommandSpec};
use crate::commands::{Arg, ArgValue, CommandArgs};
use crate::error::{PdfPagesError, Result};
use crate::pages::PageToken;

/// Check that `path` is an existing file of the required type.
///
/// `required_type` is an extension without the leading dot; it is compared
/// case-insensitively.
///
/// # Errors
///
/// - [`PdfPagesError::FileNotFound`] if `path` is not an existing regular file
/// - [`PdfPagesError::InvalidFileType`] if the extension does not match
pub fn check_filepath(path: &Path, required_type: Option<&str>) -> Result<()> {
    if !path.is_file() {
        return Err(PdfPagesError::file_not_found(path));
    }

    if let Some(required) = required_type {
        let matches = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case(required));

        if !matches {
            return Err(PdfPagesError::invalid_file_type(path, required));
        }
    }

    Ok(())
}

/// Check that `token` is a valid page number or page range.
///
/// # Errors
///
/// Returns [`PdfPagesError::InvalidPageInput`] carrying the token.
pub fn check_page_format(token: &str) -> Result<()> {
    PageToken::parse(token).map(|_| ())
}

impl ArgCheck {
    /// Apply the check to one argument element.
    pub fn apply(&self, arg: &Arg<'_>) -> Result<()> {
        match (self, arg) {
            (Self::Unchecked, _) => Ok(()),
            (Self::Filepath(required), Arg::Path(path)) => check_filepath(path, *required),
            (Self::Filepath(required), Arg::Text(text)) => {
                check_filepath(Path::new(text), *required)
            }
            (Self::PageFormat, Arg::Text(token)) => check_page_format(token),
            (check, arg) => Err(PdfPagesError::other(format!(
                "{check:?} cannot be applied to {arg:?}"
            ))),
        }
    }
}

/// Validate parsed arguments against the command's registry entry.
///
/// Checks the argument count first, then runs each declared check over the
/// argument of the same name, element-wise for multi-valued arguments. The
/// first failure is returned.
///
/// # Errors
///
/// - [`PdfPagesError::InsufficientArguments`] if too few arguments were given
/// - [`PdfPagesError::ArgumentMismatch`] if `args` belong to another command
/// - Any error raised by an individual check
pub fn validate_arguments(spec: &CommandSpec, args: &CommandArgs) -> Result<()> {
    if args.kind() != spec.kind {
        return Err(PdfPagesError::argument_mismatch(spec.name));
    }

    let supplied = args.supplied_count();
    if supplied < spec.min_args {
        return Err(PdfPagesError::insufficient_arguments(
            spec.name,
            spec.min_args,
            supplied,
        ));
    }

    for (name, check) in spec.arg_names.iter().zip(spec.checks.iter()) {
        let Some(value) = args.argument(name) else {
            return Err(PdfPagesError::argument_mismatch(spec.name));
        };

        match value {
            ArgValue::Single(arg) => check.apply(&arg)?,
            ArgValue::Multiple(items) => {
                for arg in &items {
                    check.apply(arg)?;
                }
            }
        }
    }

    log::debug!("validated {supplied} argument(s) for '{}'", spec.name);
    Ok(())
}
