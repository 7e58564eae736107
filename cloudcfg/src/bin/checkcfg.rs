//! `checkcfg myapp.json`
//!
//! Load and validate `myapp.json` without printing a summary or touching the
//! access log. No output and an exit code of 0 indicates success.

use anyhow::Result;
use argh::FromArgs;
use cloudcfg::{Configuration, Error};
use std::io::{stdout, Write};

const GIT_VERSION: &str = git_version::git_version!(fallback = "unknown");

#[derive(Debug, FromArgs, Clone)]
/// Check that a deployment configuration loads and has the required fields
pub struct CliArgs {
    /// print version information
    #[argh(switch, short = 'v')]
    pub version: bool,
    /// configuration file to check
    #[argh(positional)]
    pub input: Vec<String>,
}

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

    let path = match args.input.as_slice() {
        [path] => path,
        _ => return Err(Error::UsageError(String::from("Usage: checkcfg <config_file>")).into()),
    };
    let config = Configuration::load(path)?;
    config.validate()?;

    Ok(())
}
