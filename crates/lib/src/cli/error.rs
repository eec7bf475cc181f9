use core::fmt;
use core::ops::Range;

use crate::input::{Input, InputError, NL};

/// Attach `path:line:col` context to an error raised while processing input.
pub fn error_context(path: &'static str, input: Input<'_>, error: anyhow::Error) -> anyhow::Error {
    let span = find_span(&error);
    let pos = pos_from(input.as_data(), span.start);
    error.context(ErrorContext { path, pos })
}

/// A line and column combination.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineCol {
    line: usize,
    column: usize,
}

impl LineCol {
    pub(crate) const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for LineCol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let line = self.line + 1;
        write!(f, "{line}:{}", self.column)
    }
}

/// Need to unwrap the error fully in case it's been threaded through multiple
/// layers of processing.
fn find_span(error: &anyhow::Error) -> Range<usize> {
    match error.downcast_ref::<InputError>() {
        Some(e) => e.span(),
        None => 0..0,
    }
}

/// Get the input position corresponding to the given byte offset.
pub(crate) fn pos_from(data: &[u8], at: usize) -> LineCol {
    let before = data.get(..at).unwrap_or(data);
    let line = before.iter().filter(|b| **b == NL).count();
    let start = memchr::memrchr(NL, before).map(|n| n + 1).unwrap_or_default();
    LineCol::new(line, at.min(data.len()) - start)
}

#[derive(Debug)]
struct ErrorContext {
    path: &'static str,
    pos: LineCol,
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{path}:{pos}", path = self.path, pos = self.pos)
    }
}

#[cfg(test)]
mod tests {
    use super::{pos_from, LineCol};

    #[test]
    fn position_mapping() {
        let data = b"3   4\n4   x\n";
        assert_eq!(pos_from(data, 0), LineCol::new(0, 0));
        assert_eq!(pos_from(data, 4), LineCol::new(0, 4));
        assert_eq!(pos_from(data, 10), LineCol::new(1, 4));
    }
}
