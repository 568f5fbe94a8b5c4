// crates/infra/src/persistence/file_writer.rs
use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::Path,
};

use log::debug;
use version_stamp_ports::output::ArtifactWriter;
use version_stamp_shared_kernel::{InfrastructureError, Result};

/// Helper utilities for writing files.
pub struct FileWriter;

impl FileWriter {
    /// Atomically write `data` to `path` via a temp file and rename.
    /// Best-effort fsync is attempted where available to reduce corruption on crash.
    pub fn atomic_write<P: AsRef<Path>>(path: P, data: &[u8]) -> std::io::Result<()> {
        let path = path.as_ref();
        let parent = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            Some(_) => Path::new("."),
            None => return Err(std::io::Error::other("path has no parent")),
        };

        // Temp file lives next to the target so the rename stays on one filesystem.
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        let tmp = parent.join(format!(".{}.{}.tmp", std::process::id(), nanos));

        let result = (|| {
            let file = File::create(&tmp)?;
            let mut w = BufWriter::new(file);
            w.write_all(data)?;
            w.flush()?;
            let _ = w.get_ref().sync_all();
            fs::rename(&tmp, path)
        })();
        if result.is_err() {
            let _ = fs::remove_file(&tmp);
        }
        result?;

        // Attempt to sync parent directory to make the rename durable on Unix.
        #[cfg(unix)]
        {
            if let Ok(dir) = File::open(parent) {
                let _ = dir.sync_all();
            }
        }

        Ok(())
    }
}

/// [`ArtifactWriter`] that creates missing directories and replaces the
/// target atomically.
#[derive(Debug, Default, Clone, Copy)]
pub struct AtomicFileWriter;

impl AtomicFileWriter {
    pub fn new() -> Self {
        Self
    }
}

impl ArtifactWriter for AtomicFileWriter {
    fn write(&self, path: &Path, contents: &[u8]) -> Result<()> {
        if let Some(dir) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(|source| InfrastructureError::FileSystemOperation {
                operation: "create_dir_all".to_string(),
                path: dir.to_path_buf(),
                source,
            })?;
        }
        FileWriter::atomic_write(path, contents)
            .map_err(|source| InfrastructureError::FileWrite { path: path.to_path_buf(), source })?;
        debug!("wrote {} bytes to {}", contents.len(), path.display());
        Ok(())
    }
}
