use std::marker::PhantomData;

use crate::input::{FromInput, Input, InputError};

/// Iterator over the lines of an [`Input`], each parsed as `T`.
pub struct Lines<'i, 'a, T> {
    input: &'i mut Input<'a>,
    _marker: PhantomData<T>,
}

impl<'i, 'a, T> Lines<'i, 'a, T> {
    pub(crate) fn new(input: &'i mut Input<'a>) -> Self {
        Self {
            input,
            _marker: PhantomData,
        }
    }
}

impl<'i, 'a, T> Iterator for Lines<'i, 'a, T>
where
    T: FromInput,
{
    type Item = Result<T, InputError>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.input.try_line().transpose()
    }
}
