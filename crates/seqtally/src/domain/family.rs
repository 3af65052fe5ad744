//! Family record aggregation
//!
//! This module aggregates caller-supplied family records into per-family
//! summaries. Average ages are kept as exact reduced rationals so the
//! results are deterministic and reproducible across platforms; binary
//! floating point is never involved.

use std::fmt;

/// A single family member
///
/// Externally supplied and immutable; the library only reads it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Person {
    /// Age in whole years
    pub age: u32,
}

impl Person {
    /// Create a new person record
    pub fn new(age: u32) -> Self {
        Self { age }
    }
}

/// A family record: an identifier and an ordered list of members
///
/// The identifier is copied into summaries verbatim; uniqueness is not
/// enforced here.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Family {
    /// Caller-assigned identifier
    pub id: i64,
    /// Ordered members, possibly empty
    pub persons: Vec<Person>,
}

impl Family {
    /// Create a new family record
    pub fn new(id: i64, persons: Vec<Person>) -> Self {
        Self { id, persons }
    }
}

/// Per-family aggregation result
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FamilySummary {
    /// Identifier copied from the source family
    pub family_id: i64,
    /// Count of persons in the source family
    pub number_of_family_members: usize,
    /// Exact mean age; zero for a family with no members
    pub average_age: AverageAge,
}

/// Exact average age as a rational in lowest terms
///
/// Stored as numerator/denominator with the denominator always >= 1 and
/// the fraction always reduced, so derived structural equality is value
/// equality. The zero value is represented as 0/1.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AverageAge {
    numerator: u64,
    denominator: u64,
}

impl AverageAge {
    /// The zero average, used for families with no members
    pub const ZERO: Self = Self {
        numerator: 0,
        denominator: 1,
    };

    /// Build an average from a total and a count, reduced to lowest terms
    ///
    /// A count of zero yields [`AverageAge::ZERO`] rather than dividing.
    pub fn from_total(total: u64, count: u64) -> Self {
        if count == 0 {
            return Self::ZERO;
        }
        let divisor = gcd(total, count);
        Self {
            numerator: total / divisor,
            denominator: count / divisor,
        }
    }

    /// An exact whole-number average
    pub fn whole(value: u64) -> Self {
        Self {
            numerator: value,
            denominator: 1,
        }
    }

    /// Numerator of the reduced fraction
    pub fn numerator(&self) -> u64 {
        self.numerator
    }

    /// Denominator of the reduced fraction (always >= 1)
    pub fn denominator(&self) -> u64 {
        self.denominator
    }

    /// Whether the average is a whole number
    pub fn is_whole(&self) -> bool {
        self.denominator == 1
    }

    /// Approximate the average as `f64` for display-oriented callers
    ///
    /// The stored value stays exact; only this conversion rounds.
    pub fn to_f64(&self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }
}

impl fmt::Display for AverageAge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.denominator == 1 {
            write!(f, "{}", self.numerator)
        } else {
            write!(f, "{}/{}", self.numerator, self.denominator)
        }
    }
}

/// Greatest common divisor by Euclid's algorithm
fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Summarize each family: member count and exact mean age
///
/// Produces exactly one [`FamilySummary`] per input family, preserving
/// input order. An empty slice yields an empty vector. Families with no
/// members get an average age of exactly zero.
///
/// # Examples
/// ```
/// use seqtally::{AverageAge, Family, Person, family_statistics};
///
/// let families = [Family::new(2, vec![Person::new(10), Person::new(20)])];
/// let summaries = family_statistics(&families);
/// assert_eq!(summaries[0].number_of_family_members, 2);
/// assert_eq!(summaries[0].average_age, AverageAge::whole(15));
/// ```
pub fn family_statistics(families: &[Family]) -> Vec<FamilySummary> {
    families.iter().map(summarize_family).collect()
}

/// Build the summary for a single family
fn summarize_family(family: &Family) -> FamilySummary {
    let total_age: u64 = family.persons.iter().map(|p| u64::from(p.age)).sum();

    FamilySummary {
        family_id: family.id,
        number_of_family_members: family.persons.len(),
        average_age: AverageAge::from_total(total_age, family.persons.len() as u64),
    }
}
