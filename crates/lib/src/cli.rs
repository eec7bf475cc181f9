//! CLI helpers.

pub(crate) mod error;
mod report;
mod stdout_logger;

use std::ffi::OsString;

use anyhow::{anyhow, bail, Result};

pub use self::error::{error_context, LineCol};
pub use self::report::Report;

static STDOUT_LOGGER: stdout_logger::StdoutLogger = stdout_logger::StdoutLogger;

/// Input options.
#[derive(Default)]
pub struct Opts {
    /// Run in verbose mode.
    pub verbose: bool,
    /// Output a JSON report.
    pub json: bool,
}

impl Opts {
    /// Parse CLI options and install the stdout logger.
    pub fn parse() -> Result<Self> {
        let opts = Self::parse_from(std::env::args_os().skip(1))?;

        if !opts.json {
            log::set_logger(&STDOUT_LOGGER)
                .map_err(|error| anyhow!("failed to set log: {error}"))?;

            log::set_max_level(if opts.verbose {
                log::LevelFilter::Debug
            } else {
                log::LevelFilter::Info
            });
        }

        Ok(opts)
    }

    fn parse_from<I>(it: I) -> Result<Self>
    where
        I: IntoIterator<Item = OsString>,
    {
        let mut opts = Self::default();

        for arg in it {
            let Some(arg) = arg.to_str() else {
                bail!("non-utf8 argument");
            };

            match arg {
                "--verbose" => {
                    opts.verbose = true;
                }
                "--json" => {
                    opts.json = true;
                }
                "--" => {
                    break;
                }
                other => {
                    bail!("unsupported argument: {other}");
                }
            }
        }

        Ok(opts)
    }
}
