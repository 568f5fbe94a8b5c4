// crates/shared-kernel/src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum VersionStampError {
    /// Adds human context while preserving original error as the source.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<VersionStampError>,
    },

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Infrastructure error: {0}")]
    Infrastructure(#[from] InfrastructureError),

    #[error("Revision control error: {0}")]
    RevisionControl(#[from] RevisionControlError),
}

pub type Result<T> = std::result::Result<T, VersionStampError>;

/// Domain-layer specific errors.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invalid request: {reason}")]
    InvalidRequest { reason: String },

    #[error("Path is not valid UTF-8: {}", path.display())]
    NonUtf8Path { path: PathBuf },
}

pub type DomainResult<T> = std::result::Result<T, DomainError>;

/// Infrastructure-layer errors.
#[derive(Debug, Error)]
pub enum InfrastructureError {
    #[error("Failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file '{path}': {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("File system operation failed: {operation} on '{path}': {source}")]
    FileSystemOperation {
        operation: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type InfraResult<T> = std::result::Result<T, InfrastructureError>;

/// Failures of a revision-control query.
///
/// These never terminate a run: the use case maps every variant onto the
/// sentinel revision triple.
#[derive(Debug, Error)]
pub enum RevisionControlError {
    #[error("revision control tool '{tool}' not found")]
    ToolNotFound { tool: String },

    #[error("'{}' is not under revision control", dir.display())]
    NotARepository { dir: PathBuf },

    #[error("'{command}' exited with {status}: {stderr}")]
    CommandFailed { command: String, status: String, stderr: String },

    #[error("'{command}' produced no output")]
    EmptyOutput { command: String },

    #[error("failed to run '{command}': {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },
}

pub type RevisionResult<T> = std::result::Result<T, RevisionControlError>;

impl From<std::io::Error> for InfrastructureError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystemOperation { operation: "io".to_string(), path: PathBuf::new(), source: err }
    }
}

impl From<std::io::Error> for VersionStampError {
    fn from(err: std::io::Error) -> Self {
        InfrastructureError::from(err).into()
    }
}

/// Extension trait to add additional context to results.
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<VersionStampError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| VersionStampError::Context {
            context: context.into(),
            source: Box::new(e.into()),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| VersionStampError::Context {
            context: f(),
            source: Box::new(e.into()),
        })
    }
}
