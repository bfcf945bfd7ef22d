#![cfg(feature = "control")]
//! Integration tests for the Outcome container and selective guarding.

use monadic::control::{ErrorCategory, ErrorCondition, Outcome};
use rstest::rstest;
use std::cell::Cell;

fn divide(dividend: i32, divisor: i32) -> Result<i32, ErrorCondition> {
    if divisor == 0 {
        Err(ErrorCondition::new(
            ErrorCategory::DivideByZero,
            "divisor is zero",
        ))
    } else {
        Ok(dividend / divisor)
    }
}

mod guarding {
    use super::*;

    #[rstest]
    fn normal_completion_wraps_as_success() {
        let outcome = Outcome::guard(&[ErrorCategory::DivideByZero], || divide(84, 2));
        assert_eq!(outcome, Ok(Outcome::Success(42)));
    }

    #[rstest]
    fn allowed_category_is_captured_as_failure() {
        let outcome = Outcome::guard(&[ErrorCategory::DivideByZero], || divide(1, 0))
            .expect("an allowed category must be captured, not propagated");

        assert!(outcome.is_failure());
        outcome.fold(
            |_| panic!("captured failure must not fold as success"),
            |condition| assert_eq!(condition.category, ErrorCategory::DivideByZero),
        );
    }

    #[rstest]
    fn unlisted_category_propagates_unchanged() {
        let propagated = Outcome::guard(&[ErrorCategory::InvalidArgument], || divide(1, 0));
        assert_eq!(
            propagated,
            Err(ErrorCondition::new(
                ErrorCategory::DivideByZero,
                "divisor is zero"
            ))
        );
    }

    #[rstest]
    fn empty_allowed_set_is_a_transparent_wrapper() {
        assert_eq!(Outcome::guard(&[], || divide(84, 2)), Ok(Outcome::Success(42)));
        assert!(Outcome::guard(&[], || divide(1, 0)).is_err());
    }

    #[rstest]
    fn computation_runs_exactly_once() {
        let invocations = Cell::new(0);
        let _ = Outcome::guard(&[], || {
            invocations.set(invocations.get() + 1);
            divide(84, 2)
        });
        assert_eq!(invocations.get(), 1);
    }
}

mod elimination {
    use super::*;

    #[rstest]
    fn fold_runs_exactly_one_branch() {
        let success_branch = Cell::new(0);
        let failure_branch = Cell::new(0);

        Outcome::Success(1).fold(
            |_| success_branch.set(success_branch.get() + 1),
            |_| failure_branch.set(failure_branch.get() + 1),
        );
        assert_eq!((success_branch.get(), failure_branch.get()), (1, 0));

        Outcome::<i32>::Failure(ErrorCondition::new(ErrorCategory::Other, "boom")).fold(
            |_| success_branch.set(success_branch.get() + 1),
            |_| failure_branch.set(failure_branch.get() + 1),
        );
        assert_eq!((success_branch.get(), failure_branch.get()), (1, 1));
    }

    #[rstest]
    fn into_result_bridges_to_question_mark_chaining() {
        fn chained() -> Result<i32, ErrorCondition> {
            let first = Outcome::guard(&[ErrorCategory::DivideByZero], || divide(84, 2))?;
            let halved = first.into_result()?;
            Ok(halved)
        }

        assert_eq!(chained(), Ok(42));
    }

    #[rstest]
    fn debug_output_discloses_the_outcome() {
        assert_eq!(format!("{:?}", Outcome::Success(42)), "Success(42)");
        let failure = Outcome::<i32>::Failure(ErrorCondition::new(ErrorCategory::Parse, "bad"));
        let rendered = format!("{failure:?}");
        assert!(rendered.starts_with("Failure("));
        assert!(rendered.contains("Parse"));
    }
}

mod conditions {
    use super::*;

    #[rstest]
    #[case(ErrorCategory::InvalidArgument, "invalid argument")]
    #[case(ErrorCategory::DivideByZero, "divide by zero")]
    #[case(ErrorCategory::NotFound, "not found")]
    fn category_display_names(#[case] category: ErrorCategory, #[case] expected: &str) {
        assert_eq!(format!("{category}"), expected);
    }

    #[rstest]
    fn condition_is_a_std_error() {
        let condition = ErrorCondition::new(ErrorCategory::Io, "connection reset");
        let boxed: Box<dyn std::error::Error> = Box::new(condition);
        assert_eq!(boxed.to_string(), "io: connection reset");
    }
}
