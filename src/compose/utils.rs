/// Returns the value unchanged.
///
/// Handy as the "do nothing" argument of a combinator, e.g. when stating the
/// functor identity law: `result::map(r, identity) == r`.
///
/// # Examples
///
/// ```
/// use fundamentals::compose::identity;
/// use fundamentals::result;
///
/// let value: Result<i32, &str> = Ok(3);
/// assert_eq!(result::map(value, identity), value);
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// Creates a function that ignores its input and returns a clone of `value`.
///
/// # Examples
///
/// ```
/// use fundamentals::compose::constant;
/// use fundamentals::result;
///
/// let failure: Result<i32, String> = Err("detailed message".to_string());
/// assert_eq!(result::map_error(failure, constant("failed")), Err("failed"));
/// ```
#[inline]
pub fn constant<T: Clone, U>(value: T) -> impl Fn(U) -> T {
    move |_| value.clone()
}

/// Swaps the arguments of a binary function.
///
/// `flip(f)(b, a) == f(a, b)`.
///
/// # Examples
///
/// ```
/// use fundamentals::compose::flip;
/// use fundamentals::sequence;
///
/// let divide = |numerator: f64, denominator: f64| numerator / denominator;
/// let inverted = sequence::zip_with([1.0, 2.0], [4.0, 8.0], flip(divide));
/// assert_eq!(inverted, vec![4.0, 4.0]);
/// ```
#[inline]
pub fn flip<A, B, C, F>(function: F) -> impl Fn(B, A) -> C
where
    F: Fn(A, B) -> C,
{
    move |second_argument, first_argument| function(first_argument, second_argument)
}

/// Destructures `pair` and applies its components to a binary function.
///
/// # Examples
///
/// ```
/// use fundamentals::compose::curry;
///
/// let pairs = vec![(1, 2), (3, 4)];
/// let sums: Vec<i32> = pairs.into_iter().map(|pair| curry(pair, |a, b| a + b)).collect();
/// assert_eq!(sums, vec![3, 7]);
/// ```
#[inline]
pub fn curry<A, B, C, F>(pair: (A, B), function: F) -> C
where
    F: FnOnce(A, B) -> C,
{
    let (first, second) = pair;
    function(first, second)
}

/// Applies a pair-taking function to two separate arguments.
///
/// # Examples
///
/// ```
/// use fundamentals::compose::uncurry;
///
/// let describe = |(name, age): (&str, u32)| format!("{name} ({age})");
/// assert_eq!(uncurry("ada", 36, describe), "ada (36)");
/// ```
#[inline]
pub fn uncurry<A, B, C, F>(first: A, second: B, function: F) -> C
where
    F: FnOnce((A, B)) -> C,
{
    function((first, second))
}

/// Composes two functions right to left: `compose(f, g)(x) == f(g(x))`.
///
/// # Examples
///
/// ```
/// use fundamentals::compose::compose;
///
/// let add_one = |x: i32| x + 1;
/// let double = |x: i32| x * 2;
/// assert_eq!(compose(add_one, double)(5), 11);
/// ```
#[inline]
pub fn compose<A, B, C, F, G>(outer: F, inner: G) -> impl Fn(A) -> C
where
    F: Fn(B) -> C,
    G: Fn(A) -> B,
{
    move |value| outer(inner(value))
}
