#![cfg(feature = "control")]
//! Integration tests for the Maybe container.

use monadic::control::{Either, Lift, Maybe, Nothing};
use rstest::rstest;
use std::cell::Cell;
use std::collections::HashMap;
use std::hash::{DefaultHasher, Hash, Hasher};

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

mod construction {
    use super::*;

    #[rstest]
    fn lift_wraps_a_bare_value() {
        assert_eq!(42.just(), Maybe::Just(42));
    }

    #[rstest]
    fn just_when_keeps_the_value_iff_the_predicate_holds() {
        assert_eq!("abc".just_when(|s| s.len() == 3), Maybe::Just("abc"));
        assert_eq!("abc".just_when(|s| s.len() == 4), Maybe::Nothing);
    }

    #[rstest]
    fn native_absence_resolves_to_nothing_never_just() {
        let absent: Maybe<String> = None.into();
        assert!(absent.is_nothing());

        let present: Maybe<String> = Some("x".to_string()).into();
        assert_eq!(present, Maybe::Just("x".to_string()));
    }

    #[rstest]
    fn default_is_nothing() {
        assert_eq!(Maybe::<i32>::default(), Maybe::Nothing);
    }
}

mod transformation {
    use super::*;

    #[rstest]
    fn map_transforms_a_present_payload() {
        assert_eq!(Maybe::Just(21).map(|x| x * 2), Maybe::Just(42));
    }

    #[rstest]
    fn map_never_invokes_the_mapping_for_nothing() {
        let invocations = Cell::new(0);
        let result = Maybe::<i32>::Nothing.map(|x| {
            invocations.set(invocations.get() + 1);
            x * 2
        });
        assert_eq!(result, Maybe::Nothing);
        assert_eq!(invocations.get(), 0);
    }

    #[rstest]
    fn bind_flattens_a_dependent_container() {
        let result = Maybe::Just(4).bind(|x| Maybe::Just(x + 1));
        assert_eq!(result, Maybe::Just(5));
    }

    #[rstest]
    fn bind_never_invokes_the_mapping_for_nothing() {
        let invocations = Cell::new(0);
        let result = Maybe::<i32>::Nothing.bind(|x| {
            invocations.set(invocations.get() + 1);
            Maybe::Just(x)
        });
        assert_eq!(result, Maybe::Nothing);
        assert_eq!(invocations.get(), 0);
    }

    #[rstest]
    fn fold_runs_exactly_one_branch() {
        let just_branch = Cell::new(0);
        let nothing_branch = Cell::new(0);

        Maybe::Just(1).fold(
            |_| just_branch.set(just_branch.get() + 1),
            || nothing_branch.set(nothing_branch.get() + 1),
        );
        assert_eq!((just_branch.get(), nothing_branch.get()), (1, 0));

        Maybe::<i32>::Nothing.fold(
            |_| just_branch.set(just_branch.get() + 1),
            || nothing_branch.set(nothing_branch.get() + 1),
        );
        assert_eq!((just_branch.get(), nothing_branch.get()), (1, 1));
    }

    #[rstest]
    fn or_else_is_lazy_and_short_circuits() {
        let invocations = Cell::new(0);
        let alternative = || {
            invocations.set(invocations.get() + 1);
            Maybe::Just(0)
        };

        assert_eq!(Maybe::Just(1).or_else(alternative), Maybe::Just(1));
        assert_eq!(invocations.get(), 0);

        assert_eq!(Maybe::Nothing.or_else(alternative), Maybe::Just(0));
        assert_eq!(invocations.get(), 1);
    }
}

mod conversion {
    use super::*;

    #[rstest]
    fn to_either_fills_the_absent_case() {
        let right: Either<&str, i32> = Maybe::Just(42).to_either("filler");
        assert_eq!(right, Either::Right(42));

        let left: Either<&str, i32> = Maybe::Nothing.to_either("filler");
        assert_eq!(left, Either::Left("filler"));
    }

    #[rstest]
    fn either_roundtrip_preserves_the_maybe() {
        assert_eq!(
            Maybe::Just(42).to_either("filler").to_maybe(),
            Maybe::Just(42)
        );
        assert_eq!(
            Maybe::<i32>::Nothing.to_either("filler").to_maybe(),
            Maybe::Nothing
        );
    }

    #[rstest]
    fn option_roundtrip_preserves_the_maybe() {
        let maybe: Maybe<i32> = Some(42).into();
        assert_eq!(maybe.into_option(), Some(42));

        let absent: Maybe<i32> = None.into();
        assert_eq!(absent.into_option(), None);
    }
}

mod equality_and_hashing {
    use super::*;

    #[rstest]
    fn nothing_singleton_equals_nothing_of_any_parameter() {
        assert_eq!(Nothing, Maybe::<i32>::Nothing);
        assert_eq!(Nothing, Maybe::<String>::Nothing);
        assert_eq!(Nothing, Maybe::<Vec<u8>>::Nothing);
    }

    #[rstest]
    fn nothing_singleton_does_not_equal_any_just() {
        assert_ne!(Nothing, Maybe::Just(42));
        assert_ne!(Maybe::Just("x"), Nothing);
    }

    #[rstest]
    fn just_equality_follows_the_payload() {
        assert_eq!(Maybe::Just(42), Maybe::Just(42));
        assert_ne!(Maybe::Just(42), Maybe::Just(43));
        assert_ne!(Maybe::Just(42), Maybe::Nothing);
    }

    #[rstest]
    fn nothing_hashes_to_one_constant_across_parameters() {
        assert_eq!(hash_of(&Maybe::<i32>::Nothing), hash_of(&Nothing));
        assert_eq!(
            hash_of(&Maybe::<String>::Nothing),
            hash_of(&Maybe::<Vec<u8>>::Nothing)
        );
    }

    #[rstest]
    fn maybe_works_as_a_map_key() {
        let mut map = HashMap::new();
        map.insert(Maybe::Just(1), "one");
        map.insert(Maybe::Nothing, "none");

        assert_eq!(map.get(&Maybe::Just(1)), Some(&"one"));
        assert_eq!(map.get(&Maybe::Nothing), Some(&"none"));
    }
}
