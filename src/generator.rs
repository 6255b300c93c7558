use crate::constants::VALUE_SEQUENCE;
use crate::encoding::{ByteOrder, Encoding};
use anyhow::{Context, Result, anyhow};
use path_slash::PathExt;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// The output directory could not be created and is not already usable.
#[derive(Debug)]
pub struct OutputDirError {
    pub path: PathBuf,
    pub source: io::Error,
}

impl std::fmt::Display for OutputDirError {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        write!(
            f,
            "Error creating {} directory",
            self.path.to_slash_lossy()
        )
    }
}

impl std::error::Error for OutputDirError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirStatus {
    Created,
    Existing,
}

/// A fixture file that was fully written and synced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fixture {
    pub encoding: Encoding,
    pub path: PathBuf,
    pub len: u64,
}

/// Outcome of a full run over every encoding.
#[derive(Debug)]
pub struct Report {
    pub dir_status: DirStatus,
    pub written: Vec<Fixture>,
    pub failed: Vec<(Encoding, anyhow::Error)>,
}

impl Report {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

fn create_dir(dir: &Path) -> io::Result<()> {
    let mut builder = fs::DirBuilder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(0o755);
    }
    builder.create(dir)
}

/// Creates `dir`, or accepts it if it is already a directory.
///
/// Anything else (missing parent, no permission, a regular file in the way)
/// is an [`OutputDirError`].
pub fn ensure_output_dir(dir: &Path) -> Result<DirStatus> {
    match create_dir(dir) {
        Ok(()) => {
            debug!("created {}", dir.to_slash_lossy());
            Ok(DirStatus::Created)
        }
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists && dir.is_dir() => {
            debug!("reusing existing {}", dir.to_slash_lossy());
            Ok(DirStatus::Existing)
        }
        Err(e) => Err(anyhow!(OutputDirError {
            path: dir.to_path_buf(),
            source: e,
        })),
    }
}

/// Writes the value sequence under `encoding` to `dir`, replacing any
/// previous file of the same name.
pub fn write_fixture(
    dir: &Path,
    encoding: Encoding,
    order: ByteOrder,
) -> Result<Fixture> {
    let path = dir.join(encoding.file_name());
    let bytes = encoding.encode(&VALUE_SEQUENCE, order);

    let mut file = File::create(&path)
        .with_context(|| format!("Could not create {}", path.to_slash_lossy()))?;
    file.write_all(&bytes)
        .with_context(|| format!("Could not write {}", path.to_slash_lossy()))?;
    // Drop ignores close errors, so sync explicitly
    file.sync_all()
        .with_context(|| format!("Could not flush {}", path.to_slash_lossy()))?;

    Ok(Fixture {
        encoding,
        path,
        len: bytes.len() as u64,
    })
}

/// Ensures `dir` exists, then writes one fixture per encoding.
///
/// Only a directory failure aborts the run. A failing writer is recorded in
/// the report and the remaining encodings are still written.
pub fn generate(
    dir: &Path,
    order: ByteOrder,
) -> Result<Report> {
    let dir_status = ensure_output_dir(dir)?;
    let mut report = Report {
        dir_status,
        written: Vec::with_capacity(Encoding::ALL.len()),
        failed: Vec::new(),
    };

    for encoding in Encoding::ALL {
        match write_fixture(dir, encoding, order) {
            Ok(fixture) => {
                info!(
                    "wrote {} ({} bytes, {} byte order)",
                    fixture.path.to_slash_lossy(),
                    fixture.len,
                    order
                );
                report.written.push(fixture);
            }
            Err(e) => {
                warn!("{encoding} fixture not written: {e:#}");
                report.failed.push((encoding, e));
            }
        }
    }

    Ok(report)
}
