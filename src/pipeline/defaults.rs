use crate::align;
use crate::align::matches::Match;
use crate::error::AlignError;
use crate::pipeline::traits::{Clusterer, Fixator, MatchFinder};
use crate::types::Mapping;

/// Exhaustive maximal-run discovery over all position pairs.
pub struct ExhaustiveFinder;

impl MatchFinder for ExhaustiveFinder {
    fn find(&self, keys: &[char], text: &[char], min_run: usize) -> Vec<Match> {
        align::find_matches(keys, text, min_run)
    }
}

/// Greedy nearest-neighbor agglomeration, one pass per call.
pub struct NearestNeighborClusterer;

impl Clusterer for NearestNeighborClusterer {
    fn cluster(&self, matches: Vec<Match>, max_gap: usize) -> Result<Vec<Match>, AlignError> {
        align::cluster_pass(matches, max_gap)
    }
}

/// Priority-ordered all-or-nothing claiming.
pub struct GreedyFixator;

impl Fixator for GreedyFixator {
    fn fixate(&self, matches: Vec<Match>) -> Mapping {
        align::fixate(matches)
    }
}
