use core::ops::Range;

use bstr::BString;
use thiserror::Error;

/// The kind of an [`InputError`].
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ErrorKind {
    #[error("not an integer `{0}`")]
    NotInteger(Box<str>),
    #[error("not utf-8 `{0}`")]
    NotUtf8(BString),
    #[error("expected tuple of length {0}")]
    ExpectedTuple(usize),
    #[error("unexpected trailing input `{0}`")]
    TrailingInput(BString),
    #[error("unexpected end of input")]
    UnexpectedEof,
}

/// Error raised while processing input, carrying the byte span it occurred
/// at.
#[derive(Debug, Error)]
#[error("{kind} (at bytes {}..{})", .span.start, .span.end)]
pub struct InputError {
    span: Range<usize>,
    kind: ErrorKind,
}

impl InputError {
    /// Construct a new input error.
    #[inline]
    pub(crate) fn new(span: Range<usize>, kind: ErrorKind) -> Self {
        Self { span, kind }
    }

    /// The byte span the error occurred at.
    #[inline]
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    /// The kind of the error.
    #[inline]
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }
}
