//! Streaming median over a bounded integer domain
//!
//! A heap-based running median costs O(log n) per insertion and O(n)
//! memory. Because records are short (at most 140 characters, hence at
//! most 70 distinct whitespace-delimited tokens), the sorted multiset of
//! per-record counts can instead be kept as a fixed-size histogram, with
//! the tracker remembering which inclusive range of sorted-order positions
//! currently holds the median value. Insertion and median retrieval are
//! then O(1) amortized, with an O(domain) scan only when the median window
//! has to slide past empty buckets.

use crate::{
    error::{CoreError, Result},
    median::Median,
};

/// Default histogram size: a 140-character record cannot contain more than
/// 70 whitespace-delimited tokens.
pub const DEFAULT_MAX_DISTINCT: usize = 70;

/// Order-statistic tracker for distinct-word counts.
///
/// Feed each record's distinct-word count to [`observe`](Self::observe) in
/// corpus order; the state is order-dependent, so the tracker is strictly
/// sequential and single-owner.
#[derive(Debug, Clone)]
pub struct MedianTracker {
    /// Bucket `v` counts the records seen with exactly `v` distinct words.
    histogram: Vec<u64>,
    /// The bucket value the median window currently points at.
    current: usize,
    /// Inclusive range of sorted-order positions holding `current`.
    lower: i64,
    upper: i64,
    /// Records observed so far.
    records: u64,
}

impl MedianTracker {
    /// Tracker over the default 70-bucket domain.
    pub fn new() -> Self {
        Self::with_domain(DEFAULT_MAX_DISTINCT)
    }

    /// Tracker over a custom domain of `max_distinct` buckets, accepting
    /// counts in `[0, max_distinct)`.
    pub fn with_domain(max_distinct: usize) -> Self {
        Self {
            histogram: vec![0; max_distinct],
            current: 0,
            lower: 0,
            upper: 0,
            records: 0,
        }
    }

    /// Number of records observed so far.
    pub fn records(&self) -> u64 {
        self.records
    }

    /// Distribution snapshot: how many records carried each distinct-word
    /// count. The sum over all buckets equals [`records`](Self::records).
    pub fn histogram(&self) -> &[u64] {
        &self.histogram
    }

    /// Observe the next record's distinct-word count and return the median
    /// over everything observed so far.
    ///
    /// The median position is `(records - 1) / 2` zero-indexed, a
    /// half-integer whenever the record count is even. Positions are kept
    /// doubled internally so the half survives integer arithmetic: a
    /// position landing between two bucket windows means the median is the
    /// average of those two bucket values.
    ///
    /// Counts at or beyond the configured domain are a contract violation
    /// and fail with [`CoreError::DomainExceeded`].
    pub fn observe(&mut self, count: usize) -> Result<Median> {
        if count >= self.histogram.len() {
            return Err(CoreError::DomainExceeded {
                count,
                max: self.histogram.len(),
            });
        }

        self.histogram[count] += 1;
        self.records += 1;

        // First record seeds the window at sorted position zero.
        if self.records == 1 {
            self.current = count;
            self.lower = 0;
            self.upper = 0;
            return Ok(Median::whole(count));
        }

        // Twice the median position; odd means the true position ends in .5
        // and the median is an average of two bucket values.
        let pos2 = (self.records - 1) as i64;

        if count < self.current {
            // Inserted below the window: every tracked position shifts up.
            self.lower += 1;
            self.upper += 1;

            if pos2 >= 2 * self.lower {
                Ok(Median::whole(self.current))
            } else if pos2 == 2 * (self.lower - 1) {
                // Window slides down to the next occupied bucket.
                loop {
                    self.current -= 1;
                    if self.histogram[self.current] > 0 {
                        break;
                    }
                }
                self.upper = self.lower - 1;
                self.lower -= self.histogram[self.current] as i64;
                Ok(Median::whole(self.current))
            } else {
                // Median position sits between this window and the next
                // occupied bucket below; average without moving the window.
                let mut below = self.current;
                loop {
                    below -= 1;
                    if self.histogram[below] > 0 {
                        break;
                    }
                }
                Ok(Median::average(below, self.current))
            }
        } else if count > self.current {
            // Inserted above the window: tracked positions are unaffected.
            if pos2 <= 2 * self.upper {
                Ok(Median::whole(self.current))
            } else if pos2 == 2 * (self.upper + 1) {
                // Window slides up to the next occupied bucket.
                loop {
                    self.current += 1;
                    if self.histogram[self.current] > 0 {
                        break;
                    }
                }
                self.lower = self.upper + 1;
                self.upper += self.histogram[self.current] as i64;
                Ok(Median::whole(self.current))
            } else {
                let mut above = self.current;
                loop {
                    above += 1;
                    if self.histogram[above] > 0 {
                        break;
                    }
                }
                Ok(Median::average(self.current, above))
            }
        } else {
            self.upper += 1;
            Ok(Median::whole(self.current))
        }
    }
}

impl Default for MedianTracker {
    fn default() -> Self {
        Self::new()
    }
}
