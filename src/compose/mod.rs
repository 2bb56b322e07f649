//! Function helpers for bridging tuples and argument orders.
//!
//! The combinators in this crate take unary or binary functions. These helpers
//! adapt a function of one shape to a call site of another:
//!
//! - [`curry`]: apply a binary function to the two halves of a pair
//! - [`uncurry`]: apply a pair-taking function to two separate arguments
//! - [`flip`]: swap the arguments of a binary function
//! - [`compose`]: right-to-left composition of two unary functions
//! - [`identity`], [`constant`]: the I and K combinators
//!
//! # Laws
//!
//! - **Curry/uncurry**: `curry((a, b), f) == f(a, b)` and
//!   `uncurry(a, b, g) == g((a, b))`
//! - **Double flip identity**: `flip(flip(f)) == f`
//! - **Flip definition**: `flip(f)(a, b) == f(b, a)`
//! - **Composition identity**: `compose(identity, f) == f == compose(f, identity)`
//!
//! # Examples
//!
//! ```
//! use fundamentals::compose::{curry, flip, uncurry};
//!
//! fn subtract(minuend: i32, subtrahend: i32) -> i32 {
//!     minuend - subtrahend
//! }
//!
//! assert_eq!(curry((10, 3), subtract), 7);
//! assert_eq!(uncurry(10, 3, |(a, b): (i32, i32)| a * b), 30);
//! assert_eq!(flip(subtract)(10, 3), -7);
//! ```

mod utils;

pub use utils::{compose, constant, curry, flip, identity, uncurry};
