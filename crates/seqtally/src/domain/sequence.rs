//! Integer sequence generation
//!
//! This module provides the two range-based transforms: even number
//! enumeration and descending squared multiples of 7. Both operate on a
//! half-open range `[1, exclusive_upper_limit)` over `i32`.

use crate::error::TransformError;

/// Divisor selecting the values retained by [`squared_multiples`]
pub const SQUARE_MULTIPLE_DIVISOR: i32 = 7;

/// Generate all even integers in `[1, exclusive_upper_limit)`, ascending
///
/// An `exclusive_upper_limit` below 1 is caller misuse and fails with
/// [`TransformError::InvalidArgument`]. A limit of exactly 1 denotes an
/// empty range and yields an empty vector.
///
/// # Examples
/// ```
/// use seqtally::even_numbers;
///
/// assert_eq!(even_numbers(10).unwrap(), vec![2, 4, 6, 8]);
/// assert_eq!(even_numbers(1).unwrap(), Vec::<i32>::new());
/// ```
pub fn even_numbers(exclusive_upper_limit: i32) -> Result<Vec<i32>, TransformError> {
    if exclusive_upper_limit < 1 {
        return Err(TransformError::invalid_argument(format!(
            "exclusive upper limit must be >= 1, got {}",
            exclusive_upper_limit
        )));
    }

    Ok((1..exclusive_upper_limit).filter(|n| n % 2 == 0).collect())
}

/// Generate the squares of the multiples of 7 in `[1, exclusive_upper_limit)`
///
/// Results are ordered by **descending** pre-square value. A limit below 1
/// yields an empty vector rather than an error; unlike [`even_numbers`],
/// an out-of-range limit here simply means "no values to retain". The
/// asymmetry between the two functions is intentional contract, not an
/// oversight.
///
/// Squaring is checked: a retained value whose square exceeds `i32::MAX`
/// fails with [`TransformError::ArithmeticOverflow`] instead of wrapping.
///
/// # Examples
/// ```
/// use seqtally::squared_multiples;
///
/// // 14^2 = 196, 7^2 = 49, descending by source value
/// assert_eq!(squared_multiples(15).unwrap(), vec![196, 49]);
/// assert_eq!(squared_multiples(0).unwrap(), Vec::<i32>::new());
/// ```
pub fn squared_multiples(exclusive_upper_limit: i32) -> Result<Vec<i32>, TransformError> {
    (1..exclusive_upper_limit)
        .filter(|n| n % SQUARE_MULTIPLE_DIVISOR == 0)
        .rev()
        .map(checked_square)
        .collect()
}

/// Square a value, reporting overflow instead of wrapping
fn checked_square(base: i32) -> Result<i32, TransformError> {
    base.checked_mul(base)
        .ok_or(TransformError::ArithmeticOverflow { base })
}
