//! seqtally - Pure sequence, aggregation and frequency transforms
//!
//! This crate provides four independent, stateless transform functions:
//! - Enumerate even integers below an exclusive upper limit
//! - Square the multiples of 7 below a limit, in descending source order
//! - Aggregate family records into per-family summaries with exact mean ages
//! - Count case-folded Latin letter occurrences in text
//!
//! Each function is a leaf with no shared state; calls are independent and
//! trivially reentrant. The crate performs no I/O and holds no
//! configuration; callers supply inputs and consume returned values.

pub mod domain;
pub mod error;

// Re-export commonly used types
pub use domain::family::{AverageAge, Family, FamilySummary, Person, family_statistics};
pub use domain::letters::{LetterCount, letter_frequency};
pub use domain::sequence::{even_numbers, squared_multiples};
pub use error::TransformError;
