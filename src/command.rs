use crate::error::BuildError;
use std::path::Path;

/// Conventional process exit code type used by this crate.
///
/// A value of 0 indicates success; any non-zero value indicates failure.
pub type ExitCode = i32;

/// Outcome of one compiler invocation.
///
/// A non-zero `status` is an ordinary result, not an error. Callers stop and
/// propagate it instead of relocating artifacts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildResult {
    pub status: ExitCode,
    pub stdout: String,
    pub stderr: String,
}

impl BuildResult {
    /// Decode raw captured streams into a result.
    pub fn from_raw(status: ExitCode, stdout: &[u8], stderr: &[u8]) -> Self {
        Self {
            status,
            stdout: String::from_utf8_lossy(stdout).into_owned(),
            stderr: String::from_utf8_lossy(stderr).into_owned(),
        }
    }

    pub fn success(&self) -> bool {
        self.status == 0
    }

    /// The captured streams as they are shown to the user.
    ///
    /// Non-empty streams are joined with a newline, stdout first, and the
    /// whole is terminated by one newline. Returns `None` if both are empty.
    pub fn display_output(&self) -> Option<String> {
        let parts: Vec<&str> = [self.stdout.as_str(), self.stderr.as_str()]
            .into_iter()
            .filter(|s| !s.is_empty())
            .collect();
        if parts.is_empty() {
            None
        } else {
            Some(format!("{}\n", parts.join("\n")))
        }
    }
}

/// Something that turns a single source file into an executable.
///
/// Implementations must not treat a failed build as an error; only a failure
/// to run the compiler at all is reported through `Err`.
pub trait Compiler {
    /// Build `source`, running the compiler inside `work_dir` so that the
    /// artifacts land there.
    fn build_exe(&self, source: &Path, work_dir: &Path) -> Result<BuildResult, BuildError>;
}
