//! Support library for puzzle solvers reading column-oriented inputs.

pub mod cli;
pub mod input;

pub use self::input::{FromInput, Input, InputError};

pub mod prelude {
    //! Helper prelude with useful imports.
    pub use crate::input::Input;
    pub use anyhow::{anyhow, bail, Context, Result};
    pub type ArrayVec<T, const N: usize = 16> = arrayvec::ArrayVec<T, N>;
    pub use bstr::{BStr, ByteSlice};
}

/// Prepare an input processor over a file under `inputs/`.
///
/// Expands to `(Input, path)` where `path` is the display path attached to
/// errors. Must be used in a function returning [`anyhow::Result`].
#[macro_export]
macro_rules! input {
    ($path:literal) => {{
        let path = concat!("inputs/", $path);
        let read_path = concat!(env!("CARGO_MANIFEST_DIR"), "/inputs/", $path);
        (
            $crate::input::Input::new($crate::input::load(path, read_path)?, 0),
            path,
        )
    }};
}
