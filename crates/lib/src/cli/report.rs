use core::fmt;
use std::io::{self, Write};
use std::time::Duration;

use serde::Serialize;

use crate::cli::Opts;

/// The answers to both parts of a puzzle, along with how long solving took.
#[derive(Serialize)]
pub struct Report<A, B> {
    part1: A,
    part2: B,
    elapsed: Duration,
}

impl<A, B> Report<A, B>
where
    A: fmt::Display + Serialize,
    B: fmt::Display + Serialize,
{
    /// Construct a new report.
    #[inline]
    pub fn new(part1: A, part2: B, elapsed: Duration) -> Self {
        Self {
            part1,
            part2,
            elapsed,
        }
    }

    /// Write the report to standard output.
    pub fn print(&self, opts: &Opts) -> anyhow::Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();

        if opts.json {
            serde_json::to_writer(&mut out, self)?;
            writeln!(out)?;
        } else {
            writeln!(out, "Part 1 Answer: {}", self.part1)?;
            writeln!(out, "Part 2 Answer: {}", self.part2)?;
            log::debug!("solved in {:?}", self.elapsed);
        }

        Ok(())
    }
}
