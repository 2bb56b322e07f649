//! Plain values: everything that is neither a `Result` nor an `Option`.

use super::{Settle, Tagged, Truthy, Wrap, WrapErr};
use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::rc::Rc;
use std::sync::Arc;

/// Marks a value of any type as plain.
///
/// A plain value is untagged, always truthy, wraps as `Ok(value)` (or
/// `Err(value)` with `wrap_err`) and settles to itself. Use it for caller
/// types that the crate cannot know about.
///
/// # Examples
///
/// ```rust
/// use fundamentals::shape::{Plain, Settle};
///
/// #[derive(Debug, PartialEq)]
/// struct Point { x: i32, y: i32 }
///
/// let settled: Option<Result<Point, ()>> = Plain(Point { x: 1, y: 2 }).settle();
/// assert_eq!(settled, Some(Ok(Point { x: 1, y: 2 })));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Plain<T>(pub T);

impl<T> Plain<T> {
    /// Returns the wrapped value.
    #[inline]
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Tagged for Plain<T> {}

impl<T> Truthy for Plain<T> {
    #[inline]
    fn is_truthy(&self) -> bool {
        true
    }
}

impl<T, E> Wrap<E> for Plain<T> {
    type Value = T;

    #[inline]
    fn wrap(self) -> Result<T, E> {
        Ok(self.0)
    }
}

impl<T, E> WrapErr<T> for Plain<E> {
    type Error = E;

    #[inline]
    fn wrap_err(self) -> Result<T, E> {
        Err(self.0)
    }
}

impl<T, E> Settle<E> for Plain<T> {
    type Value = T;

    #[inline]
    fn settle(self) -> Option<Result<T, E>> {
        Some(Ok(self.0))
    }
}

impl Truthy for bool {
    #[inline]
    fn is_truthy(&self) -> bool {
        *self
    }
}

impl Tagged for bool {}

impl<E> Wrap<E> for bool {
    type Value = Self;

    #[inline]
    fn wrap(self) -> Result<Self, E> {
        Ok(self)
    }
}

impl<T> WrapErr<T> for bool {
    type Error = Self;

    #[inline]
    fn wrap_err(self) -> Result<T, Self> {
        Err(self)
    }
}

impl<E> Settle<E> for bool {
    type Value = Self;

    #[inline]
    fn settle(self) -> Option<Result<Self, E>> {
        Some(Ok(self))
    }
}

/// Implements every shape trait for a type that is a plain value.
///
/// The generic form takes the impl generics in brackets, e.g.
/// `plain!([T] Vec<T>)`.
macro_rules! plain {
    ($([$($generics:tt)*] $type:ty),* $(,)?) => {
        $(
            impl<$($generics)*> Tagged for $type {}

            impl<$($generics)*> Truthy for $type {
                #[inline]
                fn is_truthy(&self) -> bool {
                    true
                }
            }

            impl<$($generics)* __E> Wrap<__E> for $type {
                type Value = Self;

                #[inline]
                fn wrap(self) -> Result<Self, __E> {
                    Ok(self)
                }
            }

            impl<$($generics)* __T> WrapErr<__T> for $type {
                type Error = Self;

                #[inline]
                fn wrap_err(self) -> Result<__T, Self> {
                    Err(self)
                }
            }

            impl<$($generics)* __E> Settle<__E> for $type {
                type Value = Self;

                #[inline]
                fn settle(self) -> Option<Result<Self, __E>> {
                    Some(Ok(self))
                }
            }
        )*
    };
    ($($type:ty),* $(,)?) => {
        plain!($([] $type),*);
    };
}

plain!(
    (), char, String, u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64,
);

plain!(
    ['a,] &'a str,
    ['a,] Cow<'a, str>,
    [T,] Vec<T>,
    [T,] VecDeque<T>,
    [T,] Box<T>,
    [T,] Rc<T>,
    [T,] Arc<T>,
    [K, V,] HashMap<K, V>,
    [K, V,] BTreeMap<K, V>,
    [T,] HashSet<T>,
    [T,] BTreeSet<T>,
    [A, B,] (A, B),
    [A, B, C,] (A, B, C),
);
