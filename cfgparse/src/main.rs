use anyhow::Result;
use cfgparse::CliArgs;
use std::io::{stdout, Write};
use tracing::Level;

const GIT_VERSION: &str = git_version::git_version!(fallback = "unknown");

/// Errors surface through `main`'s `Result`: the message and its causes go
/// to stderr and the process exits with status 1.
fn main() -> Result<()> {
    let args: CliArgs = argh::from_env();

    if args.version {
        let stdout = stdout();
        let mut stdout = stdout.lock();
        writeln!(
            stdout,
            concat!(
                env!("CARGO_BIN_NAME"),
                " ",
                "{}",
            ),
            GIT_VERSION,
        )?;
        return Ok(())
    }

    // stdout carries the summary, so diagnostics go to stderr
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::WARN })
        .init();

    let stdout = stdout();
    let mut stdout = stdout.lock();
    cfgparse::run(&args, &mut stdout)
}
