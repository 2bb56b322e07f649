//! Combinators over `Option<T>`.
//!
//! These mirror the [`result`](crate::result) combinators for presence and
//! absence. `None` plays the part of the absent value; there is no separate
//! wrapper type.
//!
//! [`map`] re-wraps the function's result in `Some`, so a present input always
//! stays present. When the function itself may produce an absent value, use
//! [`bind`], which returns the function's `Option` as-is.
//!
//! # Laws
//!
//! ```text
//! map(v, |x| x) == v
//! map(map(v, f), g) == map(v, |x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use fundamentals::maybe;
//!
//! let port = maybe::map(Some("8080"), |raw| raw.len());
//! assert_eq!(port, Some(4));
//!
//! let config: Option<u16> = None;
//! assert_eq!(maybe::required(config, "port is required"), Err("port is required"));
//! ```

use crate::error::Absent;

/// Applies `function` to a present value; `None` stays `None`.
///
/// # Examples
///
/// ```rust
/// use fundamentals::maybe;
///
/// assert_eq!(maybe::map(Some(2), |x| x + 1), Some(3));
/// assert_eq!(maybe::map(None::<i32>, |x| x + 1), None);
/// ```
#[inline]
pub fn map<T, U, F>(value: Option<T>, function: F) -> Option<U>
where
    F: FnOnce(T) -> U,
{
    match value {
        Some(value) => Some(function(value)),
        None => None,
    }
}

/// Chains a computation that may itself be absent.
///
/// `Some(v)` becomes `function(v)`, returned as-is.
///
/// # Examples
///
/// ```rust
/// use fundamentals::maybe;
///
/// let first_char = |s: &str| s.chars().next();
/// assert_eq!(maybe::bind(Some("abc"), first_char), Some('a'));
/// assert_eq!(maybe::bind(Some(""), first_char), None);
/// ```
#[inline]
pub fn bind<T, U, F>(value: Option<T>, function: F) -> Option<U>
where
    F: FnOnce(T) -> Option<U>,
{
    match value {
        Some(value) => function(value),
        None => None,
    }
}

/// Bridges an optional value into a `Result`.
///
/// `Some(v)` becomes `Ok(v)`; `None` becomes `Err(default)`.
///
/// # Examples
///
/// ```rust
/// use fundamentals::maybe;
///
/// assert_eq!(maybe::required(Some(1), "d"), Ok(1));
/// assert_eq!(maybe::required(None::<i32>, "d"), Err("d"));
/// ```
#[inline]
pub fn required<T, E>(value: Option<T>, default: E) -> Result<T, E> {
    match value {
        Some(value) => Ok(value),
        None => Err(default),
    }
}

/// Applies `function` to a present value, or returns `default` when absent.
///
/// # Examples
///
/// ```rust
/// use fundamentals::maybe;
///
/// assert_eq!(maybe::maybe(Some(3), |x| x * 3, 0), 9);
/// assert_eq!(maybe::maybe(None, |x: i32| x * 3, 0), 0);
/// ```
#[inline]
pub fn maybe<T, U, F>(value: Option<T>, function: F, default: U) -> U
where
    F: FnOnce(T) -> U,
{
    match value {
        Some(value) => function(value),
        None => default,
    }
}

/// Turns a list of optional values into a list of values.
///
/// Returns every value, in order, if none is absent; otherwise the position of
/// the first absent element. Elements after it are not consumed.
///
/// # Examples
///
/// ```rust
/// use fundamentals::error::Absent;
/// use fundamentals::maybe;
///
/// assert_eq!(maybe::sequence([Some(1), Some(2)]), Ok(vec![1, 2]));
/// assert_eq!(maybe::sequence([Some(1), None, None]), Err(Absent { index: 1 }));
/// ```
pub fn sequence<I, T>(values: I) -> Result<Vec<T>, Absent>
where
    I: IntoIterator<Item = Option<T>>,
{
    let iterator = values.into_iter();
    let mut collected = Vec::with_capacity(iterator.size_hint().0);
    for (index, value) in iterator.enumerate() {
        let Some(value) = value else {
            tracing::trace!(index, reason = "absent", "sequence short-circuited");
            return Err(Absent { index });
        };
        collected.push(value);
    }
    Ok(collected)
}

/// Maps the present values of a list and drops the absent ones, keeping order.
///
/// # Examples
///
/// ```rust
/// use fundamentals::maybe;
///
/// let names = [Some("ada"), None, Some("grace")];
/// assert_eq!(maybe::cat_maybe(names, str::to_uppercase), vec!["ADA", "GRACE"]);
/// ```
pub fn cat_maybe<I, T, U, F>(values: I, function: F) -> Vec<U>
where
    I: IntoIterator<Item = Option<T>>,
    F: FnMut(T) -> U,
{
    values.into_iter().flatten().map(function).collect()
}

/// Tries `first` on `seed`, falling back to `second` on the same seed.
///
/// # Examples
///
/// ```rust
/// use fundamentals::maybe;
///
/// let env = |key: &str| (key == "HOME").then(|| "/home/user".to_string());
/// let fallback = |key: &str| Some(format!("<{key} unset>"));
///
/// assert_eq!(maybe::choose("HOME", env, fallback), Some("/home/user".to_string()));
/// assert_eq!(maybe::choose("SHELL", env, fallback), Some("<SHELL unset>".to_string()));
/// ```
pub fn choose<S, T, First, Second>(seed: S, first: First, second: Second) -> Option<T>
where
    S: Clone,
    First: FnOnce(S) -> Option<T>,
    Second: FnOnce(S) -> Option<T>,
{
    match first(seed.clone()) {
        Some(value) => Some(value),
        None => second(seed),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_empty_is_ok() {
        assert_eq!(sequence(Vec::<Option<u8>>::new()), Ok(vec![]));
    }

    #[test]
    fn test_sequence_reports_first_absent_index() {
        assert_eq!(sequence([None, Some(1), None]), Err(Absent { index: 0 }));
    }

    #[test]
    fn test_cat_maybe_all_absent() {
        let values: [Option<i32>; 2] = [None, None];
        assert!(cat_maybe(values, |x| x).is_empty());
    }

    #[test]
    fn test_maybe_does_not_evaluate_on_absent() {
        let result = maybe(None, |_: i32| -> i32 { unreachable!("function must not run") }, 5);
        assert_eq!(result, 5);
    }
}
