//! Capturing faults raised by supplied functions.

use std::panic::{AssertUnwindSafe, catch_unwind};

use crate::error::Fault;

/// Runs `function` on `value`, capturing a panic as an `Err`.
///
/// Returns `Ok(function(value))` when the function returns normally. If it
/// panics, the unwind is stopped at this call and the panic message becomes
/// `Err(Fault::Panicked { message })`. Only the invocation of `function` is
/// guarded.
///
/// The process-wide panic hook still runs, so the panic message is printed as
/// usual unless the caller has installed a quieter hook. Panics are not caught
/// under `panic = "abort"`.
///
/// # Examples
///
/// ```rust
/// use fundamentals::error::Fault;
/// use fundamentals::result;
///
/// let parse = |input: &str| input.parse::<i32>().unwrap();
///
/// assert_eq!(result::try_("42", parse), Ok(42));
/// assert!(matches!(result::try_("nan", parse), Err(Fault::Panicked { .. })));
/// ```
pub fn try_<T, U, F>(value: T, function: F) -> Result<U, Fault>
where
    F: FnOnce(T) -> U,
{
    catch_unwind(AssertUnwindSafe(move || function(value))).map_err(|payload| {
        let fault = Fault::from_panic(payload.as_ref());
        tracing::debug!(
            panic_message = fault.panic_message(),
            "captured panic from supplied function"
        );
        fault
    })
}

/// Runs a fallible `function` on `value`, capturing both failure modes.
///
/// An `Err(e)` returned by the function becomes `Err(Fault::Raised(e))`; a
/// panic becomes `Err(Fault::Panicked { .. })` exactly as in [`try_`].
///
/// # Examples
///
/// ```rust
/// use fundamentals::error::Fault;
/// use fundamentals::result;
///
/// let parse = |input: &str| input.parse::<i32>();
///
/// assert_eq!(result::try_fallible("42", parse), Ok(42));
/// assert!(matches!(result::try_fallible("nan", parse), Err(Fault::Raised(_))));
/// ```
pub fn try_fallible<T, U, E, F>(value: T, function: F) -> Result<U, Fault<E>>
where
    F: FnOnce(T) -> Result<U, E>,
{
    match try_(value, function) {
        Ok(Ok(output)) => Ok(output),
        Ok(Err(error)) => Err(Fault::Raised(error)),
        Err(Fault::Panicked { message }) => Err(Fault::Panicked { message }),
        Err(Fault::Raised(never)) => match never {},
    }
}
