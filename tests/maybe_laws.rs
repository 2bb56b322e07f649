//! Property-based tests for the Functor laws of the Option combinators.
//!
//! - **Identity Law**: `map(v, identity) == v`
//! - **Composition Law**: `map(map(v, f), g) == map(v, |x| g(f(x)))`

#![cfg(all(feature = "maybe", feature = "compose"))]

use fundamentals::compose::{compose, identity};
use fundamentals::maybe;
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_map_identity_law(value in any::<Option<i32>>()) {
        prop_assert_eq!(maybe::map(value, identity), value);
    }

    #[test]
    fn prop_map_string_identity_law(value in any::<Option<String>>()) {
        prop_assert_eq!(maybe::map(value.clone(), identity), value);
    }

    #[test]
    fn prop_map_composition_law(value in any::<Option<i32>>()) {
        let function1 = |n: i32| n.wrapping_add(1);
        let function2 = |n: i32| n.wrapping_mul(2);

        let left = maybe::map(maybe::map(value, function1), function2);
        let right = maybe::map(value, compose(function2, function1));

        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_map_string_composition_law(value in any::<Option<String>>()) {
        let function1 = |s: String| s.len();
        let function2 = |n: usize| n.wrapping_mul(2);

        let left = maybe::map(maybe::map(value.clone(), function1), function2);
        let right = maybe::map(value, |x| function2(function1(x)));

        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_required_agrees_with_presence(value in any::<Option<i32>>()) {
        let bridged = maybe::required(value, "absent");
        prop_assert_eq!(bridged.is_ok(), value.is_some());
        prop_assert_eq!(bridged.ok(), value);
    }

    #[test]
    fn prop_cat_maybe_drops_exactly_the_absent(values in prop::collection::vec(any::<Option<u8>>(), 0..64)) {
        let present = values.iter().filter(|value| value.is_some()).count();
        prop_assert_eq!(maybe::cat_maybe(values, identity).len(), present);
    }

    #[test]
    fn prop_sequence_points_at_first_absent(values in prop::collection::vec(any::<Option<u8>>(), 0..64)) {
        let first_absent = values.iter().position(Option::is_none);
        prop_assert_eq!(maybe::sequence(values).err().map(|absent| absent.index), first_absent);
    }
}
