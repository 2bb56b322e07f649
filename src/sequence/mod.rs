//! Sequence combinators that interact with `Option` and `Result`.
//!
//! - [`zip_with`]: combine two sequences position by position
//! - [`until`] / [`until_iter`]: unfold a sequence from a seed while a predicate holds
//! - [`sequence`]: collect a list whose elements may be absent, failed or plain
//!
//! # Examples
//!
//! ```rust
//! use fundamentals::sequence;
//!
//! assert_eq!(sequence::zip_with([1, 2, 3], [4, 5, 6], |a, b| a + b), vec![5, 7, 9]);
//! assert_eq!(sequence::until(|x: &i32| *x < 4, |x| x + 1, 0), vec![0, 1, 2, 3]);
//! ```

mod unfold;

pub use unfold::{Until, until, until_iter};

use crate::error::{Absent, SequenceError};
use crate::shape::Settle;

/// Combines two sequences position by position with a binary function.
///
/// The result is as long as the shorter input; surplus elements of the longer
/// one are ignored.
///
/// # Examples
///
/// ```rust
/// use fundamentals::sequence;
///
/// let labels = ["x", "y", "z"];
/// let values = [1.5, 2.5];
/// assert_eq!(
///     sequence::zip_with(labels, values, |label, value| format!("{label}={value}")),
///     vec!["x=1.5", "y=2.5"]
/// );
/// ```
pub fn zip_with<A, B, C, F>(first: A, second: B, mut function: F) -> Vec<C>
where
    A: IntoIterator,
    B: IntoIterator,
    F: FnMut(A::Item, B::Item) -> C,
{
    first
        .into_iter()
        .zip(second)
        .map(|(left, right)| function(left, right))
        .collect()
}

/// Collects a list whose elements may be absent, failed or plain values.
///
/// Each element is resolved through [`Settle`]: one `Ok` layer is removed,
/// `Some` resolves through its payload and plain values are taken as they are.
/// `Ok(None)` is therefore a present element holding `None`. Scanning left to right, the
/// first absent element stops the scan with [`SequenceError::Absent`] and the
/// first `Err` stops it with [`SequenceError::Failed`] carrying that exact
/// error. Elements after the stopping one are not consumed.
///
/// # Examples
///
/// ```rust
/// use fundamentals::error::{Absent, SequenceError};
/// use fundamentals::sequence;
///
/// let all_present: Vec<Option<Result<i32, &str>>> = vec![Some(Ok(1)), Some(Ok(2))];
/// assert_eq!(sequence::sequence(all_present), Ok(vec![1, 2]));
///
/// let absent_first: Vec<Option<Result<i32, &str>>> = vec![Some(Ok(1)), None, Some(Err("e"))];
/// assert_eq!(
///     sequence::sequence(absent_first),
///     Err(SequenceError::Absent(Absent { index: 1 }))
/// );
///
/// let failed_first: Vec<Option<Result<i32, &str>>> = vec![Some(Err("e")), None];
/// assert_eq!(sequence::sequence(failed_first), Err(SequenceError::Failed("e")));
/// ```
pub fn sequence<I, E>(
    elements: I,
) -> Result<Vec<<I::Item as Settle<E>>::Value>, SequenceError<E>>
where
    I: IntoIterator,
    I::Item: Settle<E>,
{
    let iterator = elements.into_iter();
    let mut values = Vec::with_capacity(iterator.size_hint().0);
    for (index, element) in iterator.enumerate() {
        match element.settle() {
            Some(Ok(value)) => values.push(value),
            Some(Err(error)) => {
                tracing::trace!(index, reason = "error", "sequence short-circuited");
                return Err(SequenceError::Failed(error));
            }
            None => {
                tracing::trace!(index, reason = "absent", "sequence short-circuited");
                return Err(Absent { index }.into());
            }
        }
    }
    Ok(values)
}
