use crate::command::{Compiler, ExitCode};
use crate::env::Layout;
use crate::external::ExternalCompiler;
use crate::relocate::relocate_artifacts;
use crate::resolve::resolve_source;
use anyhow::Result;
use std::io::Write;
use tracing::info;

/// Builds one source file of the project and files away its artifacts.
///
/// Example
/// ```no_run
/// use zig_build::Invoker;
/// let invoker = Invoker::from_home().unwrap();
/// let code = invoker
///     .run("hello", &mut std::io::stdout(), &mut std::io::stderr())
///     .unwrap();
/// std::process::exit(code);
/// ```
pub struct Invoker {
    layout: Layout,
    compiler: Box<dyn Compiler>,
}

impl Invoker {
    pub fn new(layout: Layout, compiler: Box<dyn Compiler>) -> Self {
        Self { layout, compiler }
    }

    /// The fixed project under `$HOME`, built with `zig`.
    pub fn from_home() -> Result<Self> {
        Ok(Self::new(
            Layout::from_home()?,
            Box::new(ExternalCompiler::default()),
        ))
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Resolve `file`, compile it, print the captured output and relocate the
    /// artifacts.
    ///
    /// Returns 0 on success, the compiler's status if the build failed, or 1
    /// if `file` is empty. Missing sources or artifacts and spawn failures are
    /// returned as errors.
    pub fn run(
        &self,
        file: &str,
        stdout: &mut dyn Write,
        stderr: &mut dyn Write,
    ) -> Result<ExitCode> {
        if file.is_empty() {
            writeln!(stderr, "FILE cannot be empty")?;
            return Ok(1);
        }

        let source = resolve_source(&self.layout, file)?;
        let work_dir = self.layout.artifact_dir(&source);
        let result = self.compiler.build_exe(&source, &work_dir)?;
        if let Some(text) = result.display_output() {
            stdout.write_all(text.as_bytes())?;
        }

        if !result.success() {
            return Ok(result.status);
        }

        let moved = relocate_artifacts(&self.layout, &source)?;
        info!(
            executable = %moved.executable.display(),
            object = %moved.object.display(),
            "build finished"
        );
        Ok(0)
    }
}
