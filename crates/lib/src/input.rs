//! Input parser.

mod error;
mod iter;

#[cfg(test)]
mod tests;

use core::mem;
use std::str::from_utf8;

use anyhow::Context;
use bstr::BStr;

pub use self::error::{ErrorKind, InputError};
pub use self::iter::Lines;

type Result<T> = std::result::Result<T, InputError>;

pub(crate) const NL: u8 = b'\n';

/// Read an input file into leaked storage so the data can be carried around
/// as a plain slice for the rest of the process.
///
/// `path` is the short display path attached to errors, `read_path` the
/// actual location on disk.
pub fn load(path: &'static str, read_path: &str) -> anyhow::Result<&'static [u8]> {
    let data = std::fs::read(read_path).with_context(|| path)?;
    Ok(Box::leak(data.into_boxed_slice()))
}

/// Helper to parse input.
#[derive(Debug, Clone, Copy)]
pub struct Input<'a> {
    /// The data being parsed.
    data: &'a [u8],
    /// Absolute byte offset of `data` into the original input.
    index: usize,
}

impl<'a> Input<'a> {
    /// Construct a new input processor.
    #[inline]
    pub fn new(data: &'a [u8], index: usize) -> Self {
        Self { data, index }
    }

    /// Absolute byte offset into the original input.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Get the data being processed.
    #[inline]
    pub fn as_data(&self) -> &'a [u8] {
        self.data
    }

    /// Get remaining input as a binary string.
    #[inline]
    pub fn as_bstr(&self) -> &'a BStr {
        BStr::new(self.data)
    }

    /// Test if the remaining input is empty or all whitespace.
    #[inline]
    pub fn is_blank(&self) -> bool {
        self.data.iter().all(u8::is_ascii_whitespace)
    }

    /// Construct an iterator over the lines of the input, each parsed as `T`.
    #[inline]
    pub fn lines<T>(&mut self) -> Lines<'_, 'a, T> {
        Lines::new(self)
    }

    /// Parse the next value as `T`.
    #[inline]
    #[allow(clippy::should_implement_trait)]
    pub fn next<T>(&mut self) -> Result<T>
    where
        T: FromInput,
    {
        T::from_input(self)
    }

    /// Try to parse the next value as `T`, returns `None` if there is no more
    /// non-whitespace data to process.
    #[inline]
    pub fn try_next<T>(&mut self) -> Result<Option<T>>
    where
        T: FromInput,
    {
        T::try_from_input(self)
    }

    /// Parse the next line as `T`, returns `None` once the input is
    /// exhausted.
    ///
    /// Strict over the line contents: anything left on the line after `T`
    /// has been parsed is an error, so a line of two columns parsed as
    /// `(i64, i64)` must contain exactly two words. Words are separated by
    /// any run of whitespace, not a literal three-space column separator.
    pub fn try_line<T>(&mut self) -> Result<Option<T>>
    where
        T: FromInput,
    {
        let Some(mut line) = self.split_once(NL) else {
            return Ok(None);
        };

        // Tolerate a trailing newline, but not a blank line followed by more
        // data.
        if line.is_blank() && self.is_blank() {
            return Ok(None);
        }

        let value = line.next::<T>()?;

        if let Some((at, word)) = line.next_word() {
            return Err(InputError::new(
                at..at + word.len(),
                ErrorKind::TrailingInput(word.to_vec().into()),
            ));
        }

        Ok(Some(value))
    }

    /// Split once at the given byte or at the end of input, returning the
    /// consumed prefix carrying its original offset.
    #[inline]
    fn split_once(&mut self, b: u8) -> Option<Input<'a>> {
        if self.data.is_empty() {
            return None;
        }

        let index = self.index;

        let Some(at) = memchr::memchr(b, self.data) else {
            let data = mem::take(&mut self.data);
            self.index += data.len();
            return Some(Input::new(data, index));
        };

        let data = &self.data[..at];
        self.advance(at + 1);
        Some(Input::new(data, index))
    }

    /// Skip leading whitespace and take the next word, returning its absolute
    /// offset and contents.
    fn next_word(&mut self) -> Option<(usize, &'a [u8])> {
        let s = self.find(0, |b| !b.is_ascii_whitespace());
        let n = self.find(s, u8::is_ascii_whitespace);

        if s == n {
            self.advance(s);
            return None;
        }

        let at = self.index + s;
        let word = &self.data[s..n];
        self.advance(n);
        Some((at, word))
    }

    /// Find by predicate, starting at `n`.
    fn find(&self, mut n: usize, p: impl Fn(&u8) -> bool) -> usize {
        while let Some(c) = self.data.get(n) {
            if p(c) {
                break;
            }

            n += 1;
        }

        n
    }

    #[inline]
    fn advance(&mut self, n: usize) {
        let n = n.min(self.data.len());
        self.data = &self.data[n..];
        self.index += n;
    }
}

/// A value that can be parsed from input.
pub trait FromInput: Sized {
    /// Error kind raised when a value is required but missing.
    #[inline]
    fn error_kind() -> ErrorKind {
        ErrorKind::UnexpectedEof
    }

    /// Try to parse a value, returning `None` at the end of input.
    fn try_from_input(p: &mut Input<'_>) -> Result<Option<Self>>;

    /// Parse a value from the given input.
    #[inline]
    fn from_input(p: &mut Input<'_>) -> Result<Self> {
        let index = p.index;

        let Some(value) = Self::try_from_input(p)? else {
            return Err(InputError::new(index..p.index, Self::error_kind()));
        };

        Ok(value)
    }
}

macro_rules! tuple {
    ($num:literal => $first:ident $first_id:ident $(, $rest:ident $rest_id:ident)* $(,)?) => {
        impl<$first, $($rest,)*> FromInput for ($first, $($rest,)*)
        where
            $first: FromInput,
            $($rest: FromInput,)*
        {
            #[inline]
            fn error_kind() -> ErrorKind {
                ErrorKind::ExpectedTuple($num)
            }

            #[inline]
            fn try_from_input(p: &mut Input<'_>) -> Result<Option<Self>> {
                let Some($first_id) = p.try_next()? else {
                    return Ok(None);
                };

                $(
                    let Some($rest_id) = p.try_next()? else {
                        return Ok(None);
                    };
                )*

                Ok(Some(($first_id, $($rest_id,)*)))
            }
        }
    }
}

#[rustfmt::skip]
macro_rules! integer {
    ($ty:ty) => {
        impl FromInput for $ty {
            #[inline]
            fn try_from_input(p: &mut Input<'_>) -> Result<Option<Self>> {
                let Some((at, word)) = p.next_word() else {
                    return Ok(None);
                };

                let span = at..at + word.len();

                let Ok(string) = from_utf8(word) else {
                    return Err(InputError::new(span, ErrorKind::NotUtf8(word.to_vec().into())));
                };

                let Ok(n) = str::parse(string) else {
                    return Err(InputError::new(span, ErrorKind::NotInteger(string.into())));
                };

                Ok(Some(n))
            }
        }
    };
}

tuple!(1 => A a);
tuple!(2 => A a, B b);
tuple!(3 => A a, B b, C c);
tuple!(4 => A a, B b, C c, D d);

integer!(usize);
integer!(isize);
integer!(u8);
integer!(u16);
integer!(u32);
integer!(u64);
integer!(u128);
integer!(i8);
integer!(i16);
integer!(i32);
integer!(i64);
integer!(i128);
