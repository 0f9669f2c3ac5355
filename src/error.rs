use std::io;
use std::path::PathBuf;

/// Failures that abort a build invocation.
///
/// A compiler that exits with a non-zero status is not an error: it is
/// reported through [`crate::command::BuildResult`] and propagated as the
/// process exit code.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("{} not found", path.display())]
    SourceNotFound { path: PathBuf },

    #[error("build artifact {} not found", path.display())]
    ArtifactNotFound { path: PathBuf },

    #[error("failed to spawn `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("HOME is not set, can't locate the project directory")]
    HomeNotSet,
}

impl BuildError {
    /// True for the not-found kinds, i.e. a missing source or missing artifact.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            BuildError::SourceNotFound { .. } | BuildError::ArtifactNotFound { .. }
        )
    }
}
