//! Fixed tool, grammar, and output identities plus workspace path resolution
//!
//! Every file the pipeline touches is named here. The archive, grammar,
//! and output names are fixed by contract with the generator and with the
//! downstream compiler; only the root directory varies.

use std::path::{Path, PathBuf};

/// Version of the pinned ANTLR tool build carrying the Rust target.
pub const TOOL_VERSION: &str = "4.8-2-SNAPSHOT";

/// File name of the cached tool archive, relative to the workspace root.
pub const TOOL_ARCHIVE: &str = "antlr4-4.8-2-SNAPSHOT-complete.jar";

/// Download URL for the pinned tool archive.
pub const TOOL_URL: &str = "https://github.com/rrevenantt/antlr4rust/releases/download/antlr4-4.8-2-Rust0.3.0-beta/antlr4-4.8-2-SNAPSHOT-complete.jar";

/// Grammar definition the generator consumes.
pub const GRAMMAR_FILE: &str = "mal.g4";

/// Output language selected via the generator's `-Dlanguage` option.
pub const TARGET_LANGUAGE: &str = "Rust";

/// Lexer source as the generator names it.
pub const GENERATED_LEXER: &str = "mallexer.rs";

/// Parser source as the generator names it.
pub const GENERATED_PARSER: &str = "malparser.rs";

/// Lexer module file name the downstream compiler imports.
pub const CANONICAL_LEXER: &str = "mal_lexer.rs";

/// Parser module file name the downstream compiler imports.
pub const CANONICAL_PARSER: &str = "mal_parser.rs";

/// Resolves the fixed file names against a root directory.
///
/// The binary always builds one on the process working directory, with the
/// pinned download URL and the `java` resolved from PATH. The URL and java
/// executable can be substituted (tests run against a local HTTP mock and
/// a stub generator); nothing else is configurable.
#[derive(Debug, Clone)]
pub struct Workspace {
    root: PathBuf,
    tool_url: String,
    java_bin: PathBuf,
}

impl Workspace {
    /// Create a workspace rooted at `root` with the pinned defaults.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Workspace {
            root: root.into(),
            tool_url: TOOL_URL.to_string(),
            java_bin: PathBuf::from("java"),
        }
    }

    /// Replace the archive download URL.
    pub fn with_tool_url(mut self, url: impl Into<String>) -> Self {
        self.tool_url = url.into();
        self
    }

    /// Replace the java executable used to run the generator.
    pub fn with_java_bin(mut self, java: impl Into<PathBuf>) -> Self {
        self.java_bin = java.into();
        self
    }

    /// Directory all fixed relative paths resolve against.
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn tool_url(&self) -> &str {
        &self.tool_url
    }

    pub fn java_bin(&self) -> &Path {
        &self.java_bin
    }

    /// Cache path of the tool archive.
    pub fn tool_archive_path(&self) -> PathBuf {
        self.root.join(TOOL_ARCHIVE)
    }

    /// Path of the grammar definition, expected to pre-exist.
    pub fn grammar_path(&self) -> PathBuf {
        self.root.join(GRAMMAR_FILE)
    }

    /// Lexer source where the generator writes it.
    pub fn generated_lexer_path(&self) -> PathBuf {
        self.root.join(GENERATED_LEXER)
    }

    /// Parser source where the generator writes it.
    pub fn generated_parser_path(&self) -> PathBuf {
        self.root.join(GENERATED_PARSER)
    }

    /// Lexer source under its canonical downstream name.
    pub fn canonical_lexer_path(&self) -> PathBuf {
        self.root.join(CANONICAL_LEXER)
    }

    /// Parser source under its canonical downstream name.
    pub fn canonical_parser_path(&self) -> PathBuf {
        self.root.join(CANONICAL_PARSER)
    }
}
