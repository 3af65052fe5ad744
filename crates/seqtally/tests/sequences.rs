use proptest::prelude::*;
use seqtally::error::TransformError;
use seqtally::{even_numbers, squared_multiples};

#[test]
fn test_even_numbers_reference_values() {
    assert_eq!(even_numbers(1).unwrap(), Vec::<i32>::new());
    assert_eq!(even_numbers(10).unwrap(), vec![2, 4, 6, 8]);
}

#[test]
fn test_even_numbers_invalid_limit() {
    for limit in [0, -1, i32::MIN] {
        assert!(
            matches!(
                even_numbers(limit),
                Err(TransformError::InvalidArgument { .. })
            ),
            "limit {} should be rejected",
            limit
        );
    }
}

#[test]
fn test_squared_multiples_reference_values() {
    assert_eq!(squared_multiples(15).unwrap(), vec![196, 49]);
}

#[test]
fn test_squared_multiples_below_one_is_empty_not_error() {
    // Validation policy differs from even_numbers on purpose
    for limit in [0, -1, i32::MIN] {
        assert_eq!(squared_multiples(limit).unwrap(), Vec::<i32>::new());
    }
}

#[test]
fn test_squared_multiples_overflow_is_explicit() {
    let result = squared_multiples(50_000);
    assert!(matches!(
        result,
        Err(TransformError::ArithmeticOverflow { .. })
    ));
}

#[test]
fn test_idempotence() {
    assert_eq!(even_numbers(1000), even_numbers(1000));
    assert_eq!(squared_multiples(1000), squared_multiples(1000));
}

proptest! {
    #[test]
    fn prop_even_numbers_elements_in_range(limit in 1i32..5_000) {
        let evens = even_numbers(limit).unwrap();
        for n in &evens {
            prop_assert!(n % 2 == 0);
            prop_assert!(*n >= 1);
            prop_assert!(*n < limit);
        }
    }

    #[test]
    fn prop_even_numbers_strictly_ascending(limit in 1i32..5_000) {
        let evens = even_numbers(limit).unwrap();
        for pair in evens.windows(2) {
            prop_assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn prop_even_numbers_complete(limit in 1i32..5_000) {
        // Exactly floor((limit - 1) / 2) even values exist below the limit
        let evens = even_numbers(limit).unwrap();
        prop_assert_eq!(evens.len(), ((limit - 1) / 2) as usize);
    }

    #[test]
    fn prop_squared_multiples_sources_are_multiples(limit in -100i32..10_000) {
        let squares = squared_multiples(limit).unwrap();
        for sq in &squares {
            // Squares of positive values preserve order, so the integer
            // square root recovers the source value
            let root = (*sq as f64).sqrt().round() as i32;
            prop_assert_eq!(root * root, *sq);
            prop_assert!(root % 7 == 0);
            prop_assert!(root >= 7);
            prop_assert!(root < limit);
        }
    }

    #[test]
    fn prop_squared_multiples_descending(limit in -100i32..10_000) {
        let squares = squared_multiples(limit).unwrap();
        for pair in squares.windows(2) {
            prop_assert!(pair[0] > pair[1]);
        }
    }

    #[test]
    fn prop_squared_multiples_count(limit in 1i32..10_000) {
        let squares = squared_multiples(limit).unwrap();
        prop_assert_eq!(squares.len(), ((limit - 1) / 7) as usize);
    }
}
