use crate::align::matches::Match;
use crate::error::AlignError;
use crate::types::Mapping;

pub trait MatchFinder: Send + Sync {
    fn find(&self, keys: &[char], text: &[char], min_run: usize) -> Vec<Match>;
}

pub trait Clusterer: Send + Sync {
    /// One agglomeration pass. The runtime owns the fixed-point loop.
    fn cluster(&self, matches: Vec<Match>, max_gap: usize) -> Result<Vec<Match>, AlignError>;
}

pub trait Fixator: Send + Sync {
    fn fixate(&self, matches: Vec<Match>) -> Mapping;
}
