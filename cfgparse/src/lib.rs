use argh::FromArgs;
use cloudcfg::{access_log, Configuration, Error, Result, Summary, DEFAULT_ACCESS_LOG};
use std::io::Write;
use std::path::PathBuf;
use tracing::{debug, info};

pub const USAGE: &str = "Usage: cfgparse <config_file>";

#[derive(Debug, FromArgs, Clone)]
/// Read a deployment configuration, print a summary of it, and record the access
pub struct CliArgs {
    /// print version information
    #[argh(switch, short = 'v')]
    pub version: bool,
    /// diagnostic output on stderr
    #[argh(switch)]
    pub verbose: bool,
    /// print the summary as JSON
    #[argh(switch)]
    pub json: bool,
    /// access log path
    #[argh(option, default = "PathBuf::from(DEFAULT_ACCESS_LOG)")]
    pub log: PathBuf,
    /// configuration file
    #[argh(positional)]
    pub input: Vec<String>,
}

impl CliArgs {
    /// The single configuration path, or a usage error for any other count
    pub fn config_path(&self) -> Result<PathBuf> {
        match self.input.as_slice() {
            [path] => Ok(PathBuf::from(path)),
            _ => Err(Error::UsageError(String::from(USAGE))),
        }
    }
}

/// Load, validate, summarize to `out`, then append to the access log.
///
/// Nothing touches the filesystem until the argument count has been checked,
/// and nothing is logged unless validation passed.
pub fn run<W: Write>(args: &CliArgs, out: &mut W) -> anyhow::Result<()> {
    let path = args.config_path()?;

    let config = Configuration::load(&path)?;
    let deployment = config.validate()?;
    let summary = Summary::from(&deployment);
    debug!(app_name = %summary.app_name, "summary ready");

    if args.json {
        serde_json::to_writer_pretty(&mut *out, &summary)?;
        writeln!(out)?;
    } else {
        writeln!(out, "{}", summary)?;
    }
    out.flush()?;

    access_log::append(&args.log, &deployment)?;
    info!(log = %args.log.display(), "configuration access recorded");
    Ok(())
}
