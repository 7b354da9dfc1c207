//! Generator invocation: run the tool jar against the grammar
//!
//! Command line, from the workspace root:
//! `java -jar <archive> -Dlanguage=Rust -visitor mal.g4`
//!
//! `-visitor` emits the traversal scaffolding the downstream compiler is
//! built on. The child inherits stdout/stderr, so the generator's own
//! diagnostics reach the terminal unmodified.

use tokio::process::Command;

use crate::error::GenerateError;
use crate::workspace::{Workspace, GRAMMAR_FILE, TARGET_LANGUAGE};

/// Run the generator against the workspace grammar.
///
/// The grammar is checked for existence first, so a missing input is
/// reported here and no child process is spawned. A launch failure or a
/// non-zero generator exit maps to a [`GenerateError`].
pub async fn run_generator(workspace: &Workspace) -> Result<(), GenerateError> {
    let grammar = workspace.grammar_path();
    if !grammar.is_file() {
        return Err(GenerateError::GrammarMissing { path: grammar });
    }

    let java = workspace.java_bin();
    log::info!(
        "Generating {} sources from {} with {}",
        TARGET_LANGUAGE,
        GRAMMAR_FILE,
        workspace.tool_archive_path().display()
    );

    let status = Command::new(java)
        .arg("-jar")
        .arg(workspace.tool_archive_path())
        .arg(format!("-Dlanguage={}", TARGET_LANGUAGE))
        .arg("-visitor")
        .arg(GRAMMAR_FILE)
        .current_dir(workspace.root())
        .status()
        .await
        .map_err(|e| GenerateError::Spawn {
            java: java.display().to_string(),
            source: e,
        })?;

    if status.success() {
        log::debug!("Generator completed successfully");
        Ok(())
    } else {
        let exit = match status.code() {
            Some(code) => format!("exit code {}", code),
            None => "terminated by signal".to_string(),
        };
        Err(GenerateError::ToolFailed { exit })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::os::unix::fs::PermissionsExt;
    use std::path::Path;

    fn write_executable(path: &Path, contents: &str) {
        fs::write(path, contents).expect("write stub");
        let mut perms = fs::metadata(path).expect("stub metadata").permissions();
        perms.set_mode(0o755);
        fs::set_permissions(path, perms).expect("mark stub executable");
    }

    fn seed_grammar(dir: &Path) {
        fs::write(dir.join(GRAMMAR_FILE), "grammar mal;").expect("seed grammar");
    }

    #[tokio::test]
    async fn test_missing_grammar_fails_before_spawn() {
        let dir = tempfile::tempdir().expect("tempdir");
        let stub = dir.path().join("stub-java");
        // The stub leaves a marker; it must never run without a grammar.
        write_executable(&stub, "#!/bin/sh\nprintf '' > spawned\n");

        let workspace = Workspace::new(dir.path()).with_java_bin(&stub);
        let result = run_generator(&workspace).await;

        assert!(matches!(result, Err(GenerateError::GrammarMissing { .. })));
        assert!(!dir.path().join("spawned").exists());
    }

    #[tokio::test]
    async fn test_generator_runs_in_workspace_root() {
        let dir = tempfile::tempdir().expect("tempdir");
        seed_grammar(dir.path());
        let stub = dir.path().join("stub-java");
        write_executable(&stub, "#!/bin/sh\nprintf '' > ran-here\n");

        let workspace = Workspace::new(dir.path()).with_java_bin(&stub);
        run_generator(&workspace)
            .await
            .expect("generator should succeed");

        assert!(dir.path().join("ran-here").exists());
    }

    #[tokio::test]
    async fn test_generator_receives_fixed_arguments() {
        let dir = tempfile::tempdir().expect("tempdir");
        seed_grammar(dir.path());
        let stub = dir.path().join("stub-java");
        write_executable(&stub, "#!/bin/sh\nprintf '%s\\n' \"$@\" > argv\n");

        let workspace = Workspace::new(dir.path()).with_java_bin(&stub);
        run_generator(&workspace)
            .await
            .expect("generator should succeed");

        let argv = fs::read_to_string(dir.path().join("argv")).expect("argv recorded");
        let args: Vec<&str> = argv.lines().collect();
        assert_eq!(args[0], "-jar");
        assert_eq!(std::path::PathBuf::from(args[1]), workspace.tool_archive_path());
        assert_eq!(args[2], "-Dlanguage=Rust");
        assert_eq!(args[3], "-visitor");
        assert_eq!(args[4], GRAMMAR_FILE);
        assert_eq!(args.len(), 5);
    }

    #[tokio::test]
    async fn test_generator_exit_code_maps_to_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        seed_grammar(dir.path());
        let stub = dir.path().join("stub-java");
        write_executable(&stub, "#!/bin/sh\nexit 3\n");

        let workspace = Workspace::new(dir.path()).with_java_bin(&stub);
        let result = run_generator(&workspace).await;

        match result {
            Err(GenerateError::ToolFailed { exit }) => assert_eq!(exit, "exit code 3"),
            other => panic!("expected ToolFailed, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_missing_java_maps_to_spawn_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        seed_grammar(dir.path());

        let workspace =
            Workspace::new(dir.path()).with_java_bin(dir.path().join("no-such-java"));
        let result = run_generator(&workspace).await;

        assert!(matches!(result, Err(GenerateError::Spawn { .. })));
    }
}
