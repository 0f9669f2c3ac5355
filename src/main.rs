use argh::FromArgs;
use std::io::Write;
use zig_build::Invoker;

#[derive(FromArgs)]
/// Build Zig source code.
struct Args {
    #[argh(positional, arg_name = "FILE")]
    /// zig source code filename, with or without the .zig extension
    filename: String,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let args: Args = argh::from_env();
    let code = Invoker::from_home()?.run(
        &args.filename,
        &mut std::io::stdout(),
        &mut std::io::stderr(),
    )?;
    std::io::stdout().flush()?;
    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}
