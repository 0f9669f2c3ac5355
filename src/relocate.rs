use crate::env::{Layout, OBJECT_EXT};
use crate::error::BuildError;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Where the two artifacts of one build end up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relocated {
    pub executable: PathBuf,
    pub object: PathBuf,
}

/// Move the executable and object file of a successful build into
/// `zig-out/bin/` and `zig-out/shared/`.
///
/// Both destination directories are created first. Existing artifacts at the
/// destination are replaced. If the object move fails the executable stays
/// where it was moved to.
pub fn relocate_artifacts(layout: &Layout, source: &Path) -> Result<Relocated, BuildError> {
    let stem = source
        .file_stem()
        .ok_or_else(|| BuildError::SourceNotFound {
            path: source.to_path_buf(),
        })?;
    let origin = layout.artifact_dir(source);
    let object_name = {
        let mut name = stem.to_os_string();
        name.push(".");
        name.push(OBJECT_EXT);
        name
    };

    let bin_dir = layout.bin_dir();
    let shared_dir = layout.shared_dir();
    create_dir(&bin_dir)?;
    create_dir(&shared_dir)?;

    let executable = bin_dir.join(stem);
    let object = shared_dir.join(&object_name);
    replace(&origin.join(stem), &executable)?;
    replace(&origin.join(&object_name), &object)?;
    Ok(Relocated { executable, object })
}

fn create_dir(dir: &Path) -> Result<(), BuildError> {
    fs::create_dir_all(dir).map_err(|source| BuildError::Io {
        path: dir.to_path_buf(),
        source,
    })
}

/// Rename `from` to `to`, overwriting `to` if it exists.
fn replace(from: &Path, to: &Path) -> Result<(), BuildError> {
    if !from.exists() {
        return Err(BuildError::ArtifactNotFound {
            path: from.to_path_buf(),
        });
    }
    if to.is_file() {
        // rename() already replaces files on Unix, Windows wants it gone first.
        fs::remove_file(to).map_err(|source| BuildError::Io {
            path: to.to_path_buf(),
            source,
        })?;
    }
    fs::rename(from, to).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => BuildError::ArtifactNotFound {
            path: from.to_path_buf(),
        },
        _ => BuildError::Io {
            path: from.to_path_buf(),
            source,
        },
    })?;
    debug!(from = %from.display(), to = %to.display(), "moved artifact");
    Ok(())
}
