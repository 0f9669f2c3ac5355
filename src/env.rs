use crate::error::BuildError;
use std::env as stdenv;
use std::path::{Path, PathBuf};

/// Project folder, relative to the user's home directory.
pub const PROJECT_DIR: &str = "Projects/personal-zig-notes-archive";
/// Extension every source file carries.
pub const SOURCE_EXT: &str = "zig";
/// Extension of the object file the compiler leaves next to the executable.
pub const OBJECT_EXT: &str = "o";

/// Where the compiler writes its artifacts, and where they are picked up from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputLocation {
    /// The compiler runs inside the project root.
    #[default]
    ProjectRoot,
    /// The compiler runs inside the directory holding the source file.
    SourceDir,
}

/// Fixed directory layout of the project the builds happen in.
///
/// ```text
/// <root>/src/            source files
/// <root>/zig-out/bin/    relocated executables
/// <root>/zig-out/shared/ relocated object files
/// ```
#[derive(Debug, Clone)]
pub struct Layout {
    root: PathBuf,
    output: OutputLocation,
}

impl Layout {
    /// Layout rooted at an arbitrary directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            output: OutputLocation::default(),
        }
    }

    /// The default layout, `$HOME/Projects/personal-zig-notes-archive`.
    pub fn from_home() -> Result<Self, BuildError> {
        let home = stdenv::var_os("HOME")
            .filter(|h| !h.is_empty())
            .ok_or(BuildError::HomeNotSet)?;
        Ok(Self::new(PathBuf::from(home).join(PROJECT_DIR)))
    }

    pub fn with_output(mut self, output: OutputLocation) -> Self {
        self.output = output;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn output(&self) -> OutputLocation {
        self.output
    }

    pub fn src_dir(&self) -> PathBuf {
        self.root.join("src")
    }

    pub fn bin_dir(&self) -> PathBuf {
        self.root.join("zig-out").join("bin")
    }

    pub fn shared_dir(&self) -> PathBuf {
        self.root.join("zig-out").join("shared")
    }

    /// Directory the compiler runs in for the given source file.
    ///
    /// Falls back to the project root if the source has no parent.
    pub fn artifact_dir(&self, source: &Path) -> PathBuf {
        match self.output {
            OutputLocation::ProjectRoot => self.root.clone(),
            OutputLocation::SourceDir => source
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| self.root.clone()),
        }
    }
}
