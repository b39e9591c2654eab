use std::fmt;

use crate::error::AlignError;

/// One contiguous equal run: `keys[key..key+len]` equals `text[text..text+len]`
/// element-wise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Range {
    pub len: usize,
    /// Start offset in the key sequence (axis A).
    pub key: usize,
    /// Start offset in the text sequence (axis B).
    pub text: usize,
}

impl Range {
    pub fn new(len: usize, key: usize, text: usize) -> Self {
        debug_assert!(len >= 1);
        Self { len, key, text }
    }
}

/// A candidate aligned block: one or more equal runs in increasing,
/// non-overlapping order on both axes, possibly with gaps between them.
///
/// Matches are immutable values; [`Match::merge`] produces a new Match rather
/// than mutating either operand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    ranges: Vec<Range>,
    start_key: usize,
    end_key: usize,
    start_text: usize,
    end_text: usize,
    total: usize,
}

impl Match {
    /// Build from a non-empty range list already ordered on both axes.
    pub fn new(ranges: Vec<Range>) -> Self {
        assert!(!ranges.is_empty(), "a Match needs at least one range");
        let first = ranges[0];
        let last = ranges[ranges.len() - 1];
        let m = Self {
            start_key: first.key,
            start_text: first.text,
            end_key: last.key + last.len,
            end_text: last.text + last.len,
            total: ranges.iter().map(|r| r.len).sum(),
            ranges,
        };
        debug_assert!(m.start_key < m.end_key);
        debug_assert!(m.start_text < m.end_text);
        m
    }

    pub fn from_range(range: Range) -> Self {
        Self::new(vec![range])
    }

    pub fn ranges(&self) -> &[Range] {
        &self.ranges
    }

    pub fn start_key(&self) -> usize {
        self.start_key
    }

    pub fn end_key(&self) -> usize {
        self.end_key
    }

    pub fn start_text(&self) -> usize {
        self.start_text
    }

    pub fn end_text(&self) -> usize {
        self.end_text
    }

    /// Sum of all range lengths (number of aligned character pairs).
    pub fn total(&self) -> usize {
        self.total
    }

    /// True when `self` ends at or before `other` begins on both axes.
    pub fn precedes(&self, other: &Match) -> bool {
        self.end_key <= other.start_key && self.end_text <= other.start_text
    }

    /// Combined two-axis gap between two non-crossing, non-overlapping
    /// matches. `None` when the pair crosses or overlaps on either axis,
    /// which makes it unmergeable.
    pub fn distance(&self, other: &Match) -> Option<usize> {
        if self.precedes(other) {
            Some((other.start_key - self.end_key) + (other.start_text - self.end_text))
        } else if other.precedes(self) {
            Some((self.start_key - other.end_key) + (self.start_text - other.end_text))
        } else {
            None
        }
    }

    /// Concatenate the earlier match's ranges with the later's, in axis order.
    ///
    /// A crossing or overlapping pair violates the clusterer's internal
    /// invariant; that is a logic defect, reported as `InvalidGeometry` and
    /// never silently recovered.
    pub fn merge(&self, other: &Match) -> Result<Match, AlignError> {
        let (earlier, later) = if self.precedes(other) {
            (self, other)
        } else if other.precedes(self) {
            (other, self)
        } else {
            return Err(AlignError::geometry(format!(
                "cannot merge crossing or overlapping matches {self} and {other}"
            )));
        };
        let mut ranges = Vec::with_capacity(earlier.ranges.len() + later.ranges.len());
        ranges.extend_from_slice(&earlier.ranges);
        ranges.extend_from_slice(&later.ranges);
        Ok(Match::new(ranges))
    }

    /// Every individual `(key_index, text_index)` pair implied by the ranges.
    pub fn pairs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.ranges
            .iter()
            .flat_map(|r| (0..r.len).map(move |i| (r.key + i, r.text + i)))
    }
}

impl fmt::Display for Match {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Match(keys {}-{}, text {}-{})",
            self.start_key, self.end_key, self.start_text, self.end_text
        )
    }
}
