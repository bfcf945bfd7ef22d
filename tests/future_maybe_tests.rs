#![cfg(feature = "async")]
//! Integration tests for the async Maybe combinators.

use monadic::control::{Either, Maybe};
use monadic::future::MaybeFutureExt;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

mod immediate_container_async_mapping {
    use super::*;

    #[tokio::test]
    async fn map_async_transforms_a_present_payload() {
        let result = Maybe::Just(21).map_async(|x| async move { x * 2 }).await;
        assert_eq!(result, Maybe::Just(42));
    }

    #[tokio::test]
    async fn map_async_never_invokes_the_mapping_for_nothing() {
        let invocations = Arc::new(AtomicUsize::new(0));
        let counter = invocations.clone();

        let result = Maybe::<i32>::Nothing
            .map_async(move |x| {
                counter.fetch_add(1, Ordering::SeqCst);
                async move { x * 2 }
            })
            .await;

        assert_eq!(result, Maybe::Nothing);
        assert_eq!(invocations.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn bind_async_flattens_a_dependent_container() {
        let result = Maybe::Just(4)
            .bind_async(|x| async move {
                if x % 2 == 0 {
                    Maybe::Just(x / 2)
                } else {
                    Maybe::Nothing
                }
            })
            .await;
        assert_eq!(result, Maybe::Just(2));
    }
}

mod deferred_container_sync_mapping {
    use super::*;

    #[tokio::test]
    async fn then_map_awaits_then_transforms() {
        let result = async { Maybe::Just(21) }.then_map(|x| x * 2).await;
        assert_eq!(result, Maybe::Just(42));
    }

    #[tokio::test]
    async fn then_bind_awaits_then_flattens() {
        let result = async { Maybe::Just(4) }
            .then_bind(|x| Maybe::Just(x + 1))
            .await;
        assert_eq!(result, Maybe::Just(5));
    }

    #[tokio::test]
    async fn then_map_propagates_a_deferred_nothing() {
        let result = async { Maybe::<i32>::Nothing }.then_map(|x| x * 2).await;
        assert_eq!(result, Maybe::Nothing);
    }
}

mod deferred_container_async_mapping {
    use super::*;

    #[tokio::test]
    async fn then_map_async_awaits_both_stages() {
        let result = async { Maybe::Just(21) }
            .then_map_async(|x| async move { x * 2 })
            .await;
        assert_eq!(result, Maybe::Just(42));
    }

    #[tokio::test]
    async fn then_bind_async_awaits_both_stages() {
        let result = async { Maybe::Just(4) }
            .then_bind_async(|x| async move { Maybe::Just(x * 10) })
            .await;
        assert_eq!(result, Maybe::Just(40));
    }
}

mod ordering {
    use super::*;

    #[tokio::test]
    async fn chained_binds_match_their_synchronous_equivalent() {
        let first = |x: i32| Maybe::Just(x + 1);
        let second = |x: i32| Maybe::Just(x * 2);

        let deferred = async { Maybe::Just(20) }
            .then_bind(first)
            .then_bind(second)
            .await;
        let synchronous = Maybe::Just(20).bind(first).bind(second);

        assert_eq!(deferred, synchronous);
        assert_eq!(deferred, Maybe::Just(42));
    }

    #[tokio::test]
    async fn stages_run_left_to_right() {
        let order = Arc::new(std::sync::Mutex::new(Vec::new()));

        let container_log = order.clone();
        let first_log = order.clone();
        let second_log = order.clone();

        let result = async move {
            container_log.lock().unwrap().push("container");
            Maybe::Just(1)
        }
        .then_bind_async(move |x| {
            first_log.lock().unwrap().push("first");
            async move { Maybe::Just(x + 1) }
        })
        .then_bind(move |x| {
            second_log.lock().unwrap().push("second");
            Maybe::Just(x * 2)
        })
        .await;

        assert_eq!(result, Maybe::Just(4));
        assert_eq!(*order.lock().unwrap(), vec!["container", "first", "second"]);
    }
}

mod conversion {
    use super::*;

    #[tokio::test]
    async fn then_to_either_fills_the_absent_case() {
        let right: Either<&str, i32> = async { Maybe::Just(42) }.then_to_either("filler").await;
        assert_eq!(right, Either::Right(42));

        let left: Either<&str, i32> = async { Maybe::Nothing }.then_to_either("filler").await;
        assert_eq!(left, Either::Left("filler"));
    }
}
