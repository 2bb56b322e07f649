//! Unfolding a sequence from a seed.

use std::fmt;
use std::iter::FusedIterator;
use std::marker::PhantomData;

use crate::shape::Truthy;

/// A lazy sequence produced by repeatedly stepping a seed while a predicate holds.
///
/// Created by [`until_iter`]. Each call to `next` checks the predicate against
/// the current value; if the outcome is truthy (see [`Truthy`]) the current
/// value is yielded and `step` computes the next one, otherwise the iterator
/// is exhausted for good.
///
/// # Examples
///
/// ```rust
/// use fundamentals::sequence::until_iter;
///
/// let powers: Vec<u32> = until_iter(|x: &u32| *x < 100, |x| x * 3, 1).collect();
/// assert_eq!(powers, vec![1, 3, 9, 27, 81]);
/// ```
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Until<T, P, F, O> {
    current: Option<T>,
    predicate: P,
    step: F,
    outcome: PhantomData<fn() -> O>,
}

impl<T, P, F, O> Iterator for Until<T, P, F, O>
where
    P: FnMut(&T) -> O,
    O: Truthy,
    F: FnMut(&T) -> T,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let current = self.current.take()?;
        if !(self.predicate)(&current).is_truthy() {
            return None;
        }
        self.current = Some((self.step)(&current));
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.current.is_some() {
            (0, None)
        } else {
            (0, Some(0))
        }
    }
}

impl<T, P, F, O> FusedIterator for Until<T, P, F, O>
where
    P: FnMut(&T) -> O,
    O: Truthy,
    F: FnMut(&T) -> T,
{
}

impl<T: fmt::Debug, P, F, O> fmt::Debug for Until<T, P, F, O> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Until")
            .field("current", &self.current)
            .finish_non_exhaustive()
    }
}

/// Returns the lazy form of [`until`].
///
/// Nothing is evaluated until the iterator is polled; the predicate and the
/// step function run once per yielded element (plus one final predicate call
/// that ends the sequence).
pub fn until_iter<T, P, F, O>(predicate: P, step: F, seed: T) -> Until<T, P, F, O>
where
    P: FnMut(&T) -> O,
    O: Truthy,
    F: FnMut(&T) -> T,
{
    Until {
        current: Some(seed),
        predicate,
        step,
        outcome: PhantomData,
    }
}

/// Unfolds a sequence from `seed` while `predicate` holds.
///
/// Starting at `seed`, the current value is appended and replaced by
/// `step(&current)` for as long as `predicate(&current)` yields a truthy
/// value. A `false`, `None` or `Err` outcome ends the sequence; the value that
/// triggered the stop is not included. If the predicate never fails this
/// never returns.
///
/// # Examples
///
/// ```rust
/// use fundamentals::sequence;
///
/// assert_eq!(
///     sequence::until(|x: &i32| *x < 10, |x| x + 1, 0),
///     (0..10).collect::<Vec<_>>()
/// );
///
/// // The predicate may answer with an Option or a Result as well.
/// let countdown = sequence::until(|x: &u8| x.checked_sub(1), |x| x - 1, 3);
/// assert_eq!(countdown, vec![3, 2, 1]);
/// ```
pub fn until<T, P, F, O>(predicate: P, step: F, seed: T) -> Vec<T>
where
    P: FnMut(&T) -> O,
    O: Truthy,
    F: FnMut(&T) -> T,
{
    until_iter(predicate, step, seed).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_until_excludes_seed_when_predicate_fails_immediately() {
        assert!(until(|x: &i32| *x > 0, |x| x + 1, 0).is_empty());
    }

    #[test]
    fn test_until_stops_on_err_outcome() {
        let outcome = until(
            |x: &i32| if *x < 3 { Ok(true) } else { Err("limit") },
            |x| x + 1,
            0,
        );
        assert_eq!(outcome, vec![0, 1, 2]);
    }

    #[test]
    fn test_until_iter_is_fused() {
        let mut iterator = until_iter(|x: &i32| *x < 1, |x| x + 1, 0);
        assert_eq!(iterator.next(), Some(0));
        assert_eq!(iterator.next(), None);
        assert_eq!(iterator.next(), None);
    }

    #[test]
    fn test_until_iter_is_lazy() {
        let mut steps = 0;
        let first_two: Vec<u64> = until_iter(
            |_: &u64| true,
            |x| {
                steps += 1;
                x * 2
            },
            1,
        )
        .take(2)
        .collect();
        assert_eq!(first_two, vec![1, 2]);
        assert_eq!(steps, 2);
    }

    #[test]
    fn test_until_handles_long_runs_without_recursion() {
        assert_eq!(until(|x: &u32| *x < 1_000_000, |x| x + 1, 0).len(), 1_000_000);
    }
}
