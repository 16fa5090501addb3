//! Exact median value representation

use std::fmt;

/// A running median of distinct-word counts.
///
/// The median of an even number of records is the average of the two middle
/// values and may end in one half. The value is stored doubled so that
/// half-integers stay exact; no floating point is involved until the caller
/// asks for one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Median {
    twice: u64,
}

impl Median {
    /// Median equal to a single histogram bucket value.
    pub fn whole(value: usize) -> Self {
        Self {
            twice: value as u64 * 2,
        }
    }

    /// Median halfway between two bucket values.
    pub fn average(low: usize, high: usize) -> Self {
        Self {
            twice: (low + high) as u64,
        }
    }

    /// The median as a float.
    pub fn value(&self) -> f64 {
        self.twice as f64 / 2.0
    }

    /// True when the median falls between two bucket values.
    pub fn is_half(&self) -> bool {
        self.twice % 2 == 1
    }
}

/// Renders with exactly two decimal digits: whole values as `"7.00"`,
/// half-integer averages as `"2.50"`.
impl fmt::Display for Median {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.twice % 2 == 0 {
            write!(f, "{}.00", self.twice / 2)
        } else {
            write!(f, "{}.50", self.twice / 2)
        }
    }
}
