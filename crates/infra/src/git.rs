// crates/infra/src/git.rs
use std::{
    ffi::OsString,
    io::ErrorKind,
    path::Path,
    process::Command,
};

use log::debug;
use version_stamp_ports::revision::RevisionControl;
use version_stamp_shared_kernel::{RevisionControlError, RevisionResult};

/// `RevisionControl` backed by the `git` command line.
#[derive(Debug, Clone)]
pub struct GitCli {
    program: OsString,
}

impl Default for GitCli {
    fn default() -> Self {
        Self { program: OsString::from("git") }
    }
}

impl GitCli {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different executable, e.g. an absolute path to git.
    pub fn with_program(program: impl Into<OsString>) -> Self {
        Self { program: program.into() }
    }

    fn query(&self, dir: &Path, args: &[&str]) -> RevisionResult<String> {
        let command = format!("git {}", args.join(" "));
        if !dir.is_dir() {
            return Err(RevisionControlError::NotARepository { dir: dir.to_path_buf() });
        }

        debug!("running `{command}` in {}", dir.display());
        let output = Command::new(&self.program)
            .args(args)
            .current_dir(dir)
            .output()
            .map_err(|source| match source.kind() {
                ErrorKind::NotFound => {
                    RevisionControlError::ToolNotFound { tool: self.program.to_string_lossy().into_owned() }
                }
                _ => RevisionControlError::Spawn { command: command.clone(), source },
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            if stderr.contains("not a git repository") {
                return Err(RevisionControlError::NotARepository { dir: dir.to_path_buf() });
            }
            return Err(RevisionControlError::CommandFailed { command, status: output.status.to_string(), stderr });
        }

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        if stdout.trim().is_empty() {
            return Err(RevisionControlError::EmptyOutput { command });
        }
        Ok(stdout)
    }
}

impl RevisionControl for GitCli {
    fn revision(&self, dir: &Path) -> RevisionResult<String> {
        self.query(dir, &["rev-parse", "HEAD"])
    }

    fn branch(&self, dir: &Path) -> RevisionResult<String> {
        self.query(dir, &["rev-parse", "--abbrev-ref", "HEAD"])
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn missing_tool_is_reported_as_not_found() {
        let dir = tempdir().expect("temp dir");
        let git = GitCli::with_program("definitely-not-a-vcs-binary-4711");

        let err = git.revision(dir.path()).unwrap_err();

        assert!(matches!(err, RevisionControlError::ToolNotFound { .. }));
    }

    #[test]
    fn missing_directory_is_not_a_repository() {
        let dir = tempdir().expect("temp dir");
        let err = GitCli::new().revision(&dir.path().join("absent")).unwrap_err();
        assert!(matches!(err, RevisionControlError::NotARepository { .. }));
    }

    #[test]
    fn plain_directory_fails_revision_query() {
        let dir = tempdir().expect("temp dir");
        // Whether git is installed or not, a fresh temp dir has no HEAD.
        assert!(GitCli::new().revision(dir.path()).is_err());
    }
}
