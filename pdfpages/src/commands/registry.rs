//! The command table.
//!
//! Each command is described once by a [`CommandSpec`]: the names of its
//! arguments, the check applied to each, how many positional tokens it needs
//! at minimum and the function that runs it. Adding a command means adding
//! one entry to [`COMMANDS`].

use super::{CommandArgs, CommandContext, CommandKind, OutputDocument};
use super::{insert, merge, remove, split};
use crate::error::Result;

/// Check applied to every element of an argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgCheck {
    /// Existing file, optionally with a required extension.
    Filepath(Option<&'static str>),
    /// Valid page number or page range.
    PageFormat,
    /// Accepted as is.
    Unchecked,
}

/// Function that runs a command on validated arguments.
pub type Handler = fn(&CommandArgs, &mut CommandContext) -> Result<Vec<OutputDocument>>;

/// Declarative description of one command.
#[derive(Debug)]
pub struct CommandSpec {
    /// Which command this is.
    pub kind: CommandKind,
    /// Name used on the command line and in messages.
    pub name: &'static str,
    /// Argument names, in command-line order.
    pub arg_names: &'static [&'static str],
    /// One check per entry of `arg_names`.
    pub checks: &'static [ArgCheck],
    /// Minimum number of positional tokens.
    pub min_args: usize,
    /// Runs the command.
    pub handler: Handler,
}

/// Every command pdfpages knows.
pub static COMMANDS: [CommandSpec; 4] = [
    CommandSpec {
        kind: CommandKind::Merge,
        name: "merge",
        arg_names: &["pdfs"],
        checks: &[ArgCheck::Filepath(Some("pdf"))],
        min_args: 2,
        handler: merge::run,
    },
    CommandSpec {
        kind: CommandKind::Remove,
        name: "remove",
        arg_names: &["src_pdf", "pages"],
        checks: &[ArgCheck::Filepath(None), ArgCheck::PageFormat],
        min_args: 2,
        handler: remove::run,
    },
    CommandSpec {
        kind: CommandKind::Insert,
        name: "insert",
        arg_names: &["src_pdf", "ins_pdf", "page"],
        checks: &[
            ArgCheck::Filepath(None),
            ArgCheck::Filepath(None),
            ArgCheck::Unchecked,
        ],
        min_args: 3,
        handler: insert::run,
    },
    CommandSpec {
        kind: CommandKind::Split,
        name: "split",
        arg_names: &["src_pdf", "pages"],
        checks: &[ArgCheck::Filepath(None), ArgCheck::PageFormat],
        min_args: 2,
        handler: split::run,
    },
];

impl CommandSpec {
    /// Spec of `kind`.
    pub fn lookup(kind: CommandKind) -> &'static CommandSpec {
        match kind {
            CommandKind::Merge => &COMMANDS[0],
            CommandKind::Remove => &COMMANDS[1],
            CommandKind::Insert => &COMMANDS[2],
            CommandKind::Split => &COMMANDS[3],
        }
    }

    /// Spec named `name`, if any.
    pub fn find(name: &str) -> Option<&'static CommandSpec> {
        COMMANDS.iter().find(|spec| spec.name == name)
    }
}
