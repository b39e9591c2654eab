use crate::config::AlignConfig;
use crate::error::AlignError;
use crate::pipeline::traits::{Clusterer, Fixator, MatchFinder};
use crate::types::{AlignmentInput, AlignmentOutput};

pub struct Aligner {
    config: AlignConfig,
    finder: Box<dyn MatchFinder>,
    clusterer: Box<dyn Clusterer>,
    fixator: Box<dyn Fixator>,
}

pub(crate) struct AlignerParts {
    pub config: AlignConfig,
    pub finder: Box<dyn MatchFinder>,
    pub clusterer: Box<dyn Clusterer>,
    pub fixator: Box<dyn Fixator>,
}

impl Aligner {
    pub(crate) fn from_parts(parts: AlignerParts) -> Self {
        Self {
            config: parts.config,
            finder: parts.finder,
            clusterer: parts.clusterer,
            fixator: parts.fixator,
        }
    }

    /// Run the whole alignment: run discovery, clustering to a fixed point,
    /// then conflict resolution.
    pub fn align(&self, input: &AlignmentInput) -> Result<AlignmentOutput, AlignError> {
        if input.events.is_empty() || input.text.is_empty() {
            return Ok(AlignmentOutput::default());
        }

        let keys: Vec<char> = input.events.iter().map(|e| e.ch).collect();
        let mut matches = self.finder.find(&keys, &input.text, self.config.min_run);
        tracing::info!(
            keys = keys.len(),
            text = input.text.len(),
            matches = matches.len(),
            "match discovery complete"
        );

        // Repeat passes until the match count stops shrinking. Each pass
        // never grows the list, so this terminates.
        let max_gap = self.config.gap_bound();
        let mut previous = usize::MAX;
        let mut passes = 0usize;
        while matches.len() < previous {
            previous = matches.len();
            matches = self.clusterer.cluster(matches, max_gap)?;
            passes += 1;
        }
        tracing::info!(passes, matches = matches.len(), "clustering reached fixed point");

        let mapping = self.fixator.fixate(matches);
        tracing::info!(mapped = mapping.len(), "fixation complete");
        Ok(AlignmentOutput { mapping })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::builder::AlignerBuilder;
    use crate::types::KeyEvent;

    fn input(keys: &str, text: &str) -> AlignmentInput {
        AlignmentInput {
            events: keys
                .chars()
                .enumerate()
                .map(|(i, ch)| KeyEvent { timestamp: i as f64, ch })
                .collect(),
            text: text.chars().collect(),
        }
    }

    fn align(keys: &str, text: &str) -> AlignmentOutput {
        AlignerBuilder::new(AlignConfig::default())
            .build()
            .align(&input(keys, text))
            .expect("alignment should succeed")
    }

    #[test]
    fn gap_in_keys_is_bridged() {
        let out = align("abcXdef", "abcdef");
        assert_eq!(out.mapping.len(), 6);
        for t in 0..3 {
            assert_eq!(out.mapping.get(t), Some(t));
        }
        for t in 3..6 {
            assert_eq!(out.mapping.get(t), Some(t + 1));
        }
    }

    #[test]
    fn disjoint_sequences_map_nothing() {
        let out = align("hello", "world");
        assert!(out.mapping.is_empty());
    }

    #[test]
    fn empty_inputs_short_circuit() {
        assert!(align("", "abc").mapping.is_empty());
        assert!(align("abc", "").mapping.is_empty());
    }

    #[test]
    fn every_mapped_pair_has_equal_characters() {
        let keys = "the quick brown fx jumped";
        let text = "the quick brown fox jumps";
        let out = align(keys, text);
        let key_chars: Vec<char> = keys.chars().collect();
        let text_chars: Vec<char> = text.chars().collect();
        assert!(!out.mapping.is_empty());
        for (t, k) in out.mapping.iter() {
            assert_eq!(key_chars[k], text_chars[t]);
        }
    }

    #[test]
    fn typo_corrections_still_align_the_tail() {
        // The typist wrote "teh", backed up and retyped; the log keeps both.
        let out = align("tehthe cat", "the cat");
        let key_chars: Vec<char> = "tehthe cat".chars().collect();
        for (t, k) in out.mapping.iter() {
            assert_eq!(key_chars[k], "the cat".chars().nth(t).unwrap());
        }
        // The final text must be fully covered by the retyped run.
        assert_eq!(out.mapping.len(), 7);
        assert_eq!(out.mapping.get(0), Some(3));
    }

    #[test]
    fn max_gap_bounds_merging_but_not_mapping() {
        let cfg = AlignConfig {
            min_run: 2,
            max_gap: Some(1),
        };
        let out = AlignerBuilder::new(cfg)
            .build()
            .align(&input("abXXXXcd", "abcd"))
            .unwrap();
        // The two runs stay separate clusters but both survive fixation.
        assert_eq!(out.mapping.len(), 4);
        assert_eq!(out.mapping.get(2), Some(6));
    }
}
