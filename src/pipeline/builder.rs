use crate::config::AlignConfig;
use crate::pipeline::defaults::{ExhaustiveFinder, GreedyFixator, NearestNeighborClusterer};
use crate::pipeline::runtime::{Aligner, AlignerParts};
use crate::pipeline::traits::{Clusterer, Fixator, MatchFinder};

pub struct AlignerBuilder {
    config: AlignConfig,
    finder: Option<Box<dyn MatchFinder>>,
    clusterer: Option<Box<dyn Clusterer>>,
    fixator: Option<Box<dyn Fixator>>,
}

impl AlignerBuilder {
    pub fn new(config: AlignConfig) -> Self {
        Self {
            config,
            finder: None,
            clusterer: None,
            fixator: None,
        }
    }

    pub fn with_finder(mut self, finder: Box<dyn MatchFinder>) -> Self {
        self.finder = Some(finder);
        self
    }

    pub fn with_clusterer(mut self, clusterer: Box<dyn Clusterer>) -> Self {
        self.clusterer = Some(clusterer);
        self
    }

    pub fn with_fixator(mut self, fixator: Box<dyn Fixator>) -> Self {
        self.fixator = Some(fixator);
        self
    }

    pub fn build(self) -> Aligner {
        Aligner::from_parts(AlignerParts {
            config: self.config,
            finder: self.finder.unwrap_or_else(|| Box::new(ExhaustiveFinder)),
            clusterer: self
                .clusterer
                .unwrap_or_else(|| Box::new(NearestNeighborClusterer)),
            fixator: self.fixator.unwrap_or_else(|| Box::new(GreedyFixator)),
        })
    }
}
