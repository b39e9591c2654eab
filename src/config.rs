#[derive(Debug, Clone)]
pub struct AlignConfig {
    /// Minimum equal-run length recorded by the match finder. Runs shorter
    /// than this are discarded as too ambiguous to anchor an alignment.
    pub min_run: usize,
    /// Largest combined two-axis gap the clusterer will bridge when merging
    /// adjacent matches. `None` means unbounded.
    pub max_gap: Option<usize>,
}

impl AlignConfig {
    pub const DEFAULT_MIN_RUN: usize = 2;

    /// Gap bound handed to the clusterer; `None` becomes effectively infinite.
    pub(crate) fn gap_bound(&self) -> usize {
        self.max_gap.unwrap_or(usize::MAX)
    }
}

impl Default for AlignConfig {
    fn default() -> Self {
        Self {
            min_run: Self::DEFAULT_MIN_RUN,
            max_gap: None,
        }
    }
}
