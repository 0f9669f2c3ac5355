use crate::env::{Layout, SOURCE_EXT};
use crate::error::BuildError;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Reduce user input to a bare source file name.
///
/// Directory components are dropped so that lookups never leave the source
/// directory, and the source extension is appended unless already present.
/// Inputs without a final normal component (`..`, `/`) reduce to the bare
/// extension, which never names a real source file.
pub fn normalize_filename(input: &str) -> String {
    let mut name = Path::new(input)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default()
        .to_owned();
    let suffix = format!(".{SOURCE_EXT}");
    if !name.ends_with(&suffix) {
        name.push_str(&suffix);
    }
    name
}

/// Resolve user input to an existing source file under `<root>/src/`.
pub fn resolve_source(layout: &Layout, input: &str) -> Result<PathBuf, BuildError> {
    let path = layout.src_dir().join(normalize_filename(input));
    if !path.exists() {
        return Err(BuildError::SourceNotFound { path });
    }
    debug!(source = %path.display(), "resolved source file");
    Ok(path)
}
