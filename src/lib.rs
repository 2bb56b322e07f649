//! # fundamentals
//!
//! Composable combinators over `Option`, `Result` and ordinary sequences.
//!
//! ## Overview
//!
//! Branching on presence/absence and success/failure tends to repeat itself.
//! This crate replaces that branching with a handful of small, pure
//! combinators, each of which obeys the functor and monad laws:
//!
//! - **Result**: `map`, `map_error`, `bind`, `join`, `sequence`, `either`,
//!   `or_else`, `cat_either`, `choose`, `try_`, ...
//! - **Maybe**: the `Option` counterparts, plus `required` to bridge into `Result`
//! - **Sequence**: `zip_with`, `until` and a generalized `sequence`
//! - **Compose**: `curry`, `uncurry`, `flip` and friends
//!
//! ## Feature Flags
//!
//! - `result`: Result combinators
//! - `maybe`: Option combinators
//! - `sequence`: Sequence combinators
//! - `compose`: Function helpers
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use fundamentals::prelude::*;
//!
//! let parsed = result::sequence(["1", "2", "3"].map(str::parse::<i32>));
//! assert_eq!(result::map(parsed, |values| values.iter().sum::<i32>()), Ok(6));
//!
//! let total = maybe::maybe(Some(4), |x| x * 2, 0);
//! assert_eq!(total, 8);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Brings the combinator modules into scope under their own names, so call
/// sites read as `result::map(..)` or `maybe::required(..)`, together with
/// the shape traits and error types.
///
/// # Usage
///
/// ```rust
/// use fundamentals::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::*;
    pub use crate::shape::*;

    #[cfg(feature = "result")]
    pub use crate::result;

    #[cfg(feature = "maybe")]
    pub use crate::maybe;

    #[cfg(feature = "sequence")]
    pub use crate::sequence;

    #[cfg(feature = "compose")]
    pub use crate::compose::*;
}

pub mod error;
pub mod shape;

#[cfg(feature = "result")]
pub mod result;

#[cfg(feature = "maybe")]
pub mod maybe;

#[cfg(feature = "sequence")]
pub mod sequence;

#[cfg(feature = "compose")]
pub mod compose;
