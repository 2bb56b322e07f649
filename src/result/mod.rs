//! Combinators over `Result<T, E>`.
//!
//! Every function here takes its `Result` by value and returns a new one;
//! nothing is unwrapped unsafely and nothing panics on its own.
//!
//! # Overview
//!
//! - Transform: [`map`], [`map_error`], [`either`]
//! - Chain: [`bind`] (alias [`flat_map`]), [`join`], [`or_else`], [`choose`]
//! - Coerce and inspect: [`wrap`], [`wrap_err`], [`unwrap`], [`unwrap_or`],
//!   [`is_ok`], [`is_error`]
//! - Collections: [`sequence`], [`cat_either`]
//! - Faults: [`try_`], [`try_fallible`]
//!
//! # Laws
//!
//! ## Functor
//!
//! ```text
//! map(r, |x| x) == r
//! map(map(r, f), g) == map(r, |x| g(f(x)))
//! ```
//!
//! ## Monad
//!
//! ```text
//! bind(Ok(x), f) == f(x)                                  // left identity
//! bind(m, Ok) == m                                        // right identity
//! bind(bind(m, f), g) == bind(m, |x| bind(f(x), g))       // associativity
//! ```
//!
//! # Examples
//!
//! ```rust
//! use fundamentals::result;
//!
//! fn parse(input: &str) -> Result<i32, String> {
//!     input.parse().map_err(|_| format!("not a number: {input}"))
//! }
//!
//! fn half(value: i32) -> Result<i32, String> {
//!     if value % 2 == 0 { Ok(value / 2) } else { Err(format!("odd: {value}")) }
//! }
//!
//! assert_eq!(result::bind(parse("42"), half), Ok(21));
//! assert_eq!(result::bind(parse("7"), half), Err("odd: 7".to_string()));
//! assert_eq!(
//!     result::sequence(["1", "x", "y"].map(parse)),
//!     Err("not a number: x".to_string())
//! );
//! ```

mod fault;

pub use fault::{try_, try_fallible};

use crate::shape::{Tagged, Wrap, WrapErr};

/// Applies `function` to the `Ok` payload; an `Err` is passed through and
/// `function` is not evaluated.
///
/// # Examples
///
/// ```rust
/// use fundamentals::result;
///
/// assert_eq!(result::map(Ok::<i32, &str>(2), |x| x * 10), Ok(20));
/// assert_eq!(result::map(Err::<i32, &str>("e"), |x| x * 10), Err("e"));
/// ```
#[inline]
pub fn map<T, E, U, F>(result: Result<T, E>, function: F) -> Result<U, E>
where
    F: FnOnce(T) -> U,
{
    match result {
        Ok(value) => Ok(function(value)),
        Err(error) => Err(error),
    }
}

/// Applies `function` to the `Err` payload; an `Ok` is passed through.
///
/// The dual of [`map`].
///
/// # Examples
///
/// ```rust
/// use fundamentals::result;
///
/// let failure: Result<i32, &str> = Err("timeout");
/// assert_eq!(result::map_error(failure, str::len), Err(7));
/// ```
#[inline]
pub fn map_error<T, E, F, G>(result: Result<T, E>, function: G) -> Result<T, F>
where
    G: FnOnce(E) -> F,
{
    match result {
        Ok(value) => Ok(value),
        Err(error) => Err(function(error)),
    }
}

/// Chains a computation that may itself fail.
///
/// `Ok(v)` becomes `function(v)`, returned as-is rather than re-wrapped.
/// An `Err` is passed through.
///
/// # Examples
///
/// ```rust
/// use fundamentals::result;
///
/// let checked_inverse = |x: f64| if x == 0.0 { Err("zero") } else { Ok(1.0 / x) };
/// assert_eq!(result::bind(Ok(4.0), checked_inverse), Ok(0.25));
/// assert_eq!(result::bind(Ok(0.0), checked_inverse), Err("zero"));
/// ```
#[inline]
pub fn bind<T, E, U, F>(result: Result<T, E>, function: F) -> Result<U, E>
where
    F: FnOnce(T) -> Result<U, E>,
{
    match result {
        Ok(value) => function(value),
        Err(error) => Err(error),
    }
}

/// Alias of [`bind`].
#[inline]
pub fn flat_map<T, E, U, F>(result: Result<T, E>, function: F) -> Result<U, E>
where
    F: FnOnce(T) -> Result<U, E>,
{
    bind(result, function)
}

/// Flattens one level of nesting.
///
/// | input         | output   |
/// |---------------|----------|
/// | `Ok(Ok(v))`   | `Ok(v)`  |
/// | `Ok(Err(e))`  | `Err(e)` |
/// | `Err(e)`      | `Err(e)` |
///
/// # Examples
///
/// ```rust
/// use fundamentals::result;
///
/// let nested: Result<Result<i32, &str>, &str> = Ok(Err("inner"));
/// assert_eq!(result::join(nested), Err("inner"));
/// ```
///
/// A success payload that is not itself a `Result` is rejected at compile time:
///
/// ```compile_fail
/// use fundamentals::result;
///
/// let flat: Result<i32, &str> = Ok(1);
/// let _ = result::join(flat);
/// ```
#[inline]
pub fn join<T, E>(result: Result<Result<T, E>, E>) -> Result<T, E> {
    bind(result, |inner| inner)
}

/// Coerces a value into a `Result`, leaving an existing `Result` unchanged.
///
/// Plain values become `Ok(value)`; see [`Wrap`] for the implementors.
///
/// # Examples
///
/// ```rust
/// use fundamentals::result;
///
/// let plain: Result<i32, String> = result::wrap(5);
/// assert_eq!(plain, Ok(5));
///
/// let already: Result<i32, String> = result::wrap(Err::<i32, String>("no".into()));
/// assert_eq!(already, Err("no".to_string()));
/// ```
#[inline]
pub fn wrap<V, E>(value: V) -> Result<V::Value, E>
where
    V: Wrap<E>,
{
    value.wrap()
}

/// Coerces a value into a `Result`, leaving an existing `Result` unchanged.
///
/// Plain values become `Err(value)`; see [`WrapErr`] for the implementors.
///
/// # Examples
///
/// ```rust
/// use fundamentals::result;
///
/// let failure: Result<(), &str> = result::wrap_err("denied");
/// assert_eq!(failure, Err("denied"));
/// ```
#[inline]
pub fn wrap_err<V, T>(value: V) -> Result<T, V::Error>
where
    V: WrapErr<T>,
{
    value.wrap_err()
}

/// Extracts the `Ok` payload, or `None` for an `Err`.
///
/// # Examples
///
/// ```rust
/// use fundamentals::result;
///
/// assert_eq!(result::unwrap(Ok::<i32, ()>(1)), Some(1));
/// assert_eq!(result::unwrap(Err::<i32, ()>(())), None);
/// ```
#[inline]
pub fn unwrap<T, E>(result: Result<T, E>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(_) => None,
    }
}

/// Extracts the `Ok` payload, or `default` for an `Err`.
///
/// # Examples
///
/// ```rust
/// use fundamentals::result;
///
/// assert_eq!(result::unwrap_or(Err::<i32, &str>("gone"), -1), -1);
/// ```
#[inline]
pub fn unwrap_or<T, E>(result: Result<T, E>, default: T) -> T {
    match result {
        Ok(value) => value,
        Err(_) => default,
    }
}

/// Returns `true` if `value` is an `Ok`; `false` for an `Err` or any non-`Result`.
///
/// # Examples
///
/// ```rust
/// use fundamentals::result;
///
/// assert!(result::is_ok(&Ok::<&str, ()>("fine")));
/// assert!(!result::is_ok(&"fine"));
/// ```
#[inline]
pub fn is_ok<V: Tagged + ?Sized>(value: &V) -> bool {
    value.is_ok()
}

/// Returns `true` if `value` is an `Err`; `false` for an `Ok` or any non-`Result`.
///
/// # Examples
///
/// ```rust
/// use fundamentals::result;
///
/// assert!(result::is_error(&Err::<(), u8>(1)));
/// assert!(!result::is_error(&Some(1_u8)));
/// ```
#[inline]
pub fn is_error<V: Tagged + ?Sized>(value: &V) -> bool {
    value.is_err()
}

/// Turns a list of results into a result of a list.
///
/// Returns `Ok` of every payload, in order, if all elements are `Ok`;
/// otherwise the first `Err` found scanning left to right. Elements after the
/// first `Err` are not consumed.
///
/// # Examples
///
/// ```rust
/// use fundamentals::result;
///
/// assert_eq!(result::sequence([Ok::<i32, i32>(1), Ok(2)]), Ok(vec![1, 2]));
/// assert_eq!(result::sequence([Ok(1), Err(2), Ok(3)]), Err(2));
/// assert_eq!(result::sequence([Err::<i32, i32>(1), Err(2)]), Err(1));
/// ```
pub fn sequence<I, T, E>(results: I) -> Result<Vec<T>, E>
where
    I: IntoIterator<Item = Result<T, E>>,
{
    let iterator = results.into_iter();
    let mut values = Vec::with_capacity(iterator.size_hint().0);
    for (index, result) in iterator.enumerate() {
        match result {
            Ok(value) => values.push(value),
            Err(error) => {
                tracing::trace!(index, reason = "error", "sequence short-circuited");
                return Err(error);
            }
        }
    }
    Ok(values)
}

/// Applies `on_ok` to an `Ok` payload or `on_err` to an `Err` payload,
/// keeping the variant.
///
/// # Examples
///
/// ```rust
/// use fundamentals::result;
///
/// let success: Result<i32, &str> = Ok(3);
/// assert_eq!(result::either(success, |x| x + 1, str::len), Ok(4));
///
/// let failure: Result<i32, &str> = Err("abc");
/// assert_eq!(result::either(failure, |x| x + 1, str::len), Err(3));
/// ```
#[inline]
pub fn either<T, E, U, F, OnOk, OnErr>(
    result: Result<T, E>,
    on_ok: OnOk,
    on_err: OnErr,
) -> Result<U, F>
where
    OnOk: FnOnce(T) -> U,
    OnErr: FnOnce(E) -> F,
{
    match result {
        Ok(value) => Ok(on_ok(value)),
        Err(error) => Err(on_err(error)),
    }
}

/// Recovers from an `Err` with a computation that may itself fail.
///
/// `Ok` is passed through; `Err(e)` becomes `function(e)`.
///
/// # Examples
///
/// ```rust
/// use fundamentals::result;
///
/// let fallback = |error: &str| if error == "missing" { Ok(0) } else { Err(error.len()) };
/// assert_eq!(result::or_else(Err("missing"), fallback), Ok(0));
/// assert_eq!(result::or_else(Err("broken"), fallback), Err(6));
/// assert_eq!(result::or_else(Ok(9), fallback), Ok(9));
/// ```
#[inline]
pub fn or_else<T, E, F, G>(result: Result<T, E>, function: G) -> Result<T, F>
where
    G: FnOnce(E) -> Result<T, F>,
{
    match result {
        Ok(value) => Ok(value),
        Err(error) => function(error),
    }
}

/// Maps the `Ok` payloads of a list and drops every `Err`, keeping order.
///
/// # Examples
///
/// ```rust
/// use fundamentals::result;
///
/// let mixed = [Ok(1), Err(2), Ok(3)];
/// assert_eq!(result::cat_either(mixed, |x| x + 1), vec![2, 4]);
/// ```
pub fn cat_either<I, T, E, U, F>(results: I, function: F) -> Vec<U>
where
    I: IntoIterator<Item = Result<T, E>>,
    F: FnMut(T) -> U,
{
    results.into_iter().flatten().map(function).collect()
}

/// Tries `first` on `seed`, falling back to `second` on the same seed.
///
/// `second` receives the original `seed`, never the error produced by `first`.
///
/// # Examples
///
/// ```rust
/// use fundamentals::result;
///
/// let from_decimal = |s: &str| s.parse::<u32>().map_err(|_| ());
/// let from_hex = |s: &str| u32::from_str_radix(s.trim_start_matches("0x"), 16);
///
/// assert_eq!(result::choose("17", from_decimal, from_hex).ok(), Some(17));
/// assert_eq!(result::choose("0xff", from_decimal, from_hex).ok(), Some(255));
/// ```
pub fn choose<S, T, E, F, First, Second>(seed: S, first: First, second: Second) -> Result<T, F>
where
    S: Clone,
    First: FnOnce(S) -> Result<T, E>,
    Second: FnOnce(S) -> Result<T, F>,
{
    match first(seed.clone()) {
        Ok(value) => Ok(value),
        Err(_) => second(seed),
    }
}
