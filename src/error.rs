//! Error types produced by the combinators.
//!
//! Most failures in this crate are ordinary values chosen by the caller: the
//! `Err` payload of a `Result` or the `None` of an `Option`. The types here
//! cover the few cases where the crate itself has to say why a computation
//! stopped:
//!
//! - [`Absent`]: a sequence contained an absent element
//! - [`SequenceError`]: a generalized sequence hit an absent element or an `Err`
//! - [`Fault`]: a supplied function panicked (or returned an error) inside `try_`
//!
//! # Examples
//!
//! ```rust
//! use fundamentals::error::{Absent, SequenceError};
//!
//! let error: SequenceError<String> = Absent { index: 2 }.into();
//! assert_eq!(error.to_string(), "absent element at index 2");
//! ```

use std::any::Any;
use std::convert::Infallible;

/// An absent element was found while sequencing a list of optional values.
///
/// `index` is the zero-based position of the first absent element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[error("absent element at index {index}")]
pub struct Absent {
    /// Position of the first absent element.
    pub index: usize,
}

/// Why a generalized sequence stopped before collecting every element.
///
/// # Type Parameters
///
/// * `E` - The error payload carried by `Err` elements
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SequenceError<E> {
    /// An absent element was found first.
    #[error(transparent)]
    Absent(#[from] Absent),
    /// An `Err` element was found first; its payload is kept unchanged.
    #[error("element failed: {0}")]
    Failed(E),
}

impl<E> SequenceError<E> {
    /// Returns the `Err` payload, or `None` if the sequence stopped on absence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fundamentals::error::SequenceError;
    ///
    /// let error: SequenceError<&str> = SequenceError::Failed("boom");
    /// assert_eq!(error.failure(), Some("boom"));
    /// ```
    #[inline]
    pub fn failure(self) -> Option<E> {
        match self {
            Self::Failed(error) => Some(error),
            Self::Absent(_) => None,
        }
    }

    /// Returns `true` if the sequence stopped on an absent element.
    #[inline]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent(_))
    }
}

/// A fault captured while running a supplied function under `try_`.
///
/// `Fault` (with the default `E = Infallible`) is what [`try_`] returns: the
/// only way the function can fail is by panicking. `try_fallible` also reports
/// errors the function returns, as [`Fault::Raised`].
///
/// [`try_`]: crate::result::try_
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Fault<E = Infallible> {
    /// The function panicked; `message` is the rendered panic payload.
    #[error("supplied function panicked: {message}")]
    Panicked {
        /// The panic message.
        message: String,
    },
    /// The function returned an error.
    #[error("supplied function failed: {0}")]
    Raised(E),
}

const OPAQUE_PAYLOAD: &str = "<non-string panic payload>";

impl<E> Fault<E> {
    /// Builds a `Panicked` fault from a payload returned by `catch_unwind`.
    ///
    /// `panic!` with a literal yields a `&'static str` payload and a formatted
    /// `panic!` yields a `String`; anything else is reported as opaque.
    pub fn from_panic(payload: &(dyn Any + Send)) -> Self {
        let message = payload
            .downcast_ref::<&str>()
            .map(|message| (*message).to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| OPAQUE_PAYLOAD.to_string());
        Self::Panicked { message }
    }

    /// Returns `true` if the function panicked.
    #[inline]
    pub const fn is_panic(&self) -> bool {
        matches!(self, Self::Panicked { .. })
    }

    /// Returns the panic message, if the function panicked.
    pub fn panic_message(&self) -> Option<&str> {
        match self {
            Self::Panicked { message } => Some(message),
            Self::Raised(_) => None,
        }
    }
}
