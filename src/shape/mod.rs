//! Static dispatch on the shape of a value.
//!
//! Several combinators behave differently depending on whether they are handed
//! a `Result`, an `Option` or a plain value: `wrap` leaves a `Result` alone but
//! wraps anything else, `is_ok` answers `false` for non-`Result` inputs, `until`
//! stops on `false`, `None` or `Err`, and the generalized sequence unwraps `Ok`
//! elements while rejecting absent ones.
//!
//! Instead of inspecting values at runtime, each of these behaviors is a trait
//! implemented per concrete type:
//!
//! - [`Tagged`]: the `Ok`/`Err` tag of a value (always untagged for non-`Result`s)
//! - [`Truthy`]: whether a predicate outcome lets `until` continue
//! - [`Wrap`] / [`WrapErr`]: coercion into a `Result`
//! - [`Settle`]: resolution of a sequence element into a value, an absence or an error
//!
//! Scalars, strings, `()` and the common std containers are plain values out of
//! the box. Any other type takes part by going through [`Plain`].
//!
//! # Examples
//!
//! ```rust
//! use fundamentals::shape::{Plain, Tagged, Wrap};
//!
//! #[derive(Debug, PartialEq)]
//! struct Celsius(f64);
//!
//! let wrapped: Result<Celsius, String> = Plain(Celsius(21.5)).wrap();
//! assert_eq!(wrapped, Ok(Celsius(21.5)));
//!
//! assert!(!42_i32.is_ok());
//! assert!(Ok::<i32, ()>(42).is_ok());
//! ```

mod plain;

pub use plain::Plain;

/// The `Ok`/`Err` tag of a value.
///
/// Only `Result` carries a tag; every other implementor keeps the default
/// methods, which answer `false`.
pub trait Tagged {
    /// Returns `true` if the value is an `Ok`.
    #[inline]
    fn is_ok(&self) -> bool {
        false
    }

    /// Returns `true` if the value is an `Err`.
    #[inline]
    fn is_err(&self) -> bool {
        false
    }
}

/// Whether a predicate outcome counts as "keep going".
///
/// `false`, `None` and `Err` are falsy. `Some(v)` is as truthy as `v`, while
/// `Ok(_)` is truthy whatever its payload. Every other plain value is truthy.
///
/// # Examples
///
/// ```rust
/// use fundamentals::shape::Truthy;
///
/// assert!(true.is_truthy());
/// assert!(!Some(false).is_truthy());
/// assert!(!Err::<bool, &str>("stop").is_truthy());
/// assert!(Ok::<bool, &str>(false).is_truthy());
/// assert!(0_i32.is_truthy());
/// ```
pub trait Truthy {
    /// Returns `true` if the value lets an iteration continue.
    fn is_truthy(&self) -> bool;
}

/// Coercion of a value into the success side of a `Result`.
///
/// A `Result` is returned unchanged; a plain value becomes `Ok(value)`.
///
/// # Type Parameters
///
/// * `E` - The error type of the produced `Result`
pub trait Wrap<E>: Sized {
    /// The success type of the produced `Result`.
    type Value;

    /// Converts `self` into a `Result`.
    fn wrap(self) -> Result<Self::Value, E>;
}

/// Coercion of a value into the failure side of a `Result`.
///
/// A `Result` is returned unchanged; a plain value becomes `Err(value)`.
///
/// # Type Parameters
///
/// * `T` - The success type of the produced `Result`
pub trait WrapErr<T>: Sized {
    /// The error type of the produced `Result`.
    type Error;

    /// Converts `self` into a `Result`.
    fn wrap_err(self) -> Result<T, Self::Error>;
}

/// Resolution of a sequence element.
///
/// `None` means the element is absent, `Some(Err(e))` that it failed with `e`,
/// and `Some(Ok(v))` that it holds the value `v`. An `Option` element resolves
/// through its payload, so `Some(Err(e))` settles to the error `e`. A `Result`
/// element is unwrapped one level only: `Ok(None)` settles to the value `None`
/// and `Ok(Ok(1))` to the value `Ok(1)`.
///
/// # Type Parameters
///
/// * `E` - The error type carried by failing elements
pub trait Settle<E> {
    /// The type of a resolved element.
    type Value;

    /// Resolves the element.
    fn settle(self) -> Option<Result<Self::Value, E>>;
}

// =============================================================================
// Result
// =============================================================================

impl<T, E> Tagged for Result<T, E> {
    #[inline]
    fn is_ok(&self) -> bool {
        Result::is_ok(self)
    }

    #[inline]
    fn is_err(&self) -> bool {
        Result::is_err(self)
    }
}

impl<T, E> Truthy for Result<T, E> {
    #[inline]
    fn is_truthy(&self) -> bool {
        Result::is_ok(self)
    }
}

impl<T, E> Wrap<E> for Result<T, E> {
    type Value = T;

    #[inline]
    fn wrap(self) -> Self {
        self
    }
}

impl<T, E> WrapErr<T> for Result<T, E> {
    type Error = E;

    #[inline]
    fn wrap_err(self) -> Self {
        self
    }
}

impl<T, E> Settle<E> for Result<T, E> {
    type Value = T;

    #[inline]
    fn settle(self) -> Option<Self> {
        Some(self)
    }
}

// =============================================================================
// Option
// =============================================================================

impl<T> Tagged for Option<T> {}

impl<T: Truthy> Truthy for Option<T> {
    #[inline]
    fn is_truthy(&self) -> bool {
        self.as_ref().is_some_and(Truthy::is_truthy)
    }
}

impl<T, E> Wrap<E> for Option<T> {
    type Value = Self;

    #[inline]
    fn wrap(self) -> Result<Self, E> {
        Ok(self)
    }
}

impl<T, E> WrapErr<T> for Option<E> {
    type Error = Self;

    #[inline]
    fn wrap_err(self) -> Result<T, Self> {
        Err(self)
    }
}

impl<T: Settle<E>, E> Settle<E> for Option<T> {
    type Value = T::Value;

    #[inline]
    fn settle(self) -> Option<Result<Self::Value, E>> {
        self.and_then(Settle::settle)
    }
}
