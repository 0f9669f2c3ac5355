use crate::command::{BuildResult, Compiler, ExitCode};
use crate::error::BuildError;
use std::ffi::OsString;
use std::path::Path;
use std::process::{Command, ExitStatus};
use tracing::{debug, info};

/// Compiler binary invoked by default.
pub const DEFAULT_PROGRAM: &str = "zig";
/// Subcommand that builds a single-file executable.
pub const BUILD_EXE: &str = "build-exe";

/// The compiler as an external program, run as `<program> build-exe <source>`.
///
/// The child gets its own working directory, the process-wide one is never
/// touched.
#[derive(Debug, Clone)]
pub struct ExternalCompiler {
    program: OsString,
}

impl ExternalCompiler {
    pub fn new(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for ExternalCompiler {
    fn default() -> Self {
        Self::new(DEFAULT_PROGRAM)
    }
}

impl Compiler for ExternalCompiler {
    fn build_exe(&self, source: &Path, work_dir: &Path) -> Result<BuildResult, BuildError> {
        debug!(
            program = %self.program.to_string_lossy(),
            source = %source.display(),
            work_dir = %work_dir.display(),
            "invoking compiler"
        );
        let output = Command::new(&self.program)
            .arg(BUILD_EXE)
            .arg(source)
            .current_dir(work_dir)
            .output()
            .map_err(|e| BuildError::Spawn {
                program: self.program.to_string_lossy().into_owned(),
                source: e,
            })?;
        let status = match output.status.code() {
            Some(x) => x,
            None => terminated_by_signal(output.status),
        };
        info!(status, "compiler finished");
        Ok(BuildResult::from_raw(status, &output.stdout, &output.stderr))
    }
}

#[cfg(unix)]
fn terminated_by_signal(exit_status: ExitStatus) -> ExitCode {
    use std::os::unix::process::ExitStatusExt;
    if let Some(signal) = ExitStatusExt::signal(&exit_status) {
        128 + signal
    } else if ExitStatusExt::core_dumped(&exit_status) {
        255
    } else {
        -1
    }
}

#[cfg(not(unix))]
fn terminated_by_signal(_exit_status: ExitStatus) -> ExitCode {
    -1
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    #[cfg(unix)]
    fn zero_exit_is_success() {
        let tmp = TempDir::new().unwrap();
        let result = ExternalCompiler::new("true")
            .build_exe(Path::new("foo.zig"), tmp.path())
            .unwrap();
        assert_eq!(result, BuildResult::from_raw(0, b"", b""));
    }

    #[test]
    #[cfg(unix)]
    fn non_zero_exit_is_a_result_not_an_error() {
        let tmp = TempDir::new().unwrap();
        let result = ExternalCompiler::new("false")
            .build_exe(Path::new("foo.zig"), tmp.path())
            .unwrap();
        assert_eq!(result.status, 1);
        assert!(!result.success());
    }

    #[test]
    #[cfg(unix)]
    fn passes_subcommand_and_source_and_captures_stdout() {
        let tmp = TempDir::new().unwrap();
        let result = ExternalCompiler::new("echo")
            .build_exe(Path::new("/proj/src/foo.zig"), tmp.path())
            .unwrap();
        assert_eq!(result.stdout, "build-exe /proj/src/foo.zig\n");
        assert_eq!(result.stderr, "");
    }

    #[test]
    #[cfg(unix)]
    fn runs_inside_work_dir() {
        let tmp = TempDir::new().unwrap();
        let cwd_before = std::env::current_dir().unwrap();
        // `pwd build-exe foo.zig` ignores its operands and prints the child's cwd.
        let result = ExternalCompiler::new("pwd")
            .build_exe(Path::new("foo.zig"), tmp.path())
            .unwrap();
        let reported = std::fs::canonicalize(result.stdout.trim_end()).unwrap();
        assert_eq!(reported, std::fs::canonicalize(tmp.path()).unwrap());
        assert_eq!(std::env::current_dir().unwrap(), cwd_before);
    }

    #[test]
    fn missing_binary_is_spawn_error() {
        let tmp = TempDir::new().unwrap();
        let err = ExternalCompiler::new("definitely-not-a-compiler-8c1f")
            .build_exe(Path::new("foo.zig"), tmp.path())
            .unwrap_err();
        assert!(matches!(err, BuildError::Spawn { .. }));
    }
}
