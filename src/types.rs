use std::collections::BTreeMap;

use serde::Serialize;

// Fast hash sets using AHash instead of the default SipHash; the consumed-pair
// set in the finder and the claimed-index sets in the fixator are the hot
// paths. Import with `use crate::types::HashSet`.
pub(crate) type HashSet<K> = ahash::HashSet<K>;

/// One retained key press: when it happened and which character it produced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeyEvent {
    pub timestamp: f64,
    pub ch: char,
}

#[derive(Debug, Clone, Default)]
pub struct AlignmentInput {
    /// Filtered key-event log, in original order (sequence A).
    pub events: Vec<KeyEvent>,
    /// Concatenated transcript characters, unfiltered (sequence B).
    pub text: Vec<char>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AlignmentOutput {
    pub mapping: Mapping,
}

/// Partial, injective map from text indices (sequence B) to key indices
/// (sequence A).
///
/// Monotonic within each contiguous run by construction; NOT guaranteed to be
/// globally monotonic across unrelated aligned blocks, and callers must not
/// assume it is.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Mapping {
    entries: BTreeMap<usize, usize>,
}

impl Mapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Key index mapped from the given text index, if any.
    pub fn get(&self, text_index: usize) -> Option<usize> {
        self.entries.get(&text_index).copied()
    }

    pub(crate) fn insert(&mut self, text_index: usize, key_index: usize) {
        self.entries.insert(text_index, key_index);
    }

    /// Mapped `(text_index, key_index)` pairs in increasing text index order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.entries.iter().map(|(&t, &k)| (t, k))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// One rendered output row: a mapped text position joined with its key event.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MappedChar {
    pub text_index: usize,
    pub text_char: char,
    pub key_index: usize,
    pub timestamp: f64,
    pub key_char: char,
}
