//! Output installation: move generated sources to their canonical names
//!
//! The generator names its outputs after the grammar (`mallexer.rs`,
//! `malparser.rs`); the downstream compiler imports `mal_lexer` and
//! `mal_parser` modules. The renames bridge the two naming schemes.

use std::fs;
use std::path::PathBuf;

use crate::error::RenameError;
use crate::workspace::{Workspace, CANONICAL_LEXER, CANONICAL_PARSER};

/// Move the two generated sources to the names the downstream compiler
/// imports. Existing canonical files are overwritten. A missing generated
/// file is fatal and the error names the file that was expected; there is
/// no rollback of a rename that already happened.
pub fn install_outputs(workspace: &Workspace) -> Result<(), RenameError> {
    rename_output(
        workspace.generated_lexer_path(),
        workspace.canonical_lexer_path(),
    )?;
    rename_output(
        workspace.generated_parser_path(),
        workspace.canonical_parser_path(),
    )?;
    log::info!("Installed {} and {}", CANONICAL_LEXER, CANONICAL_PARSER);
    Ok(())
}

fn rename_output(from: PathBuf, to: PathBuf) -> Result<(), RenameError> {
    if !from.is_file() {
        return Err(RenameError::MissingSource { expected: from });
    }
    log::debug!("Renaming {} -> {}", from.display(), to.display());
    fs::rename(&from, &to).map_err(|e| RenameError::Rename {
        from,
        to,
        source: e,
    })
}
