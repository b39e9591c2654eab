use crate::align::matches::Match;
use crate::types::{HashSet, Mapping};

/// Outcome of a transactional claim attempt: either every pair of a match was
/// committed, or nothing was.
#[derive(Debug, PartialEq, Eq)]
pub enum ClaimOutcome {
    Claimed,
    Conflict,
}

/// Already-claimed indices on both axes, threaded explicitly through the
/// fixation pass.
#[derive(Debug, Default)]
pub struct ClaimedPositions {
    keys: HashSet<usize>,
    text: HashSet<usize>,
}

impl ClaimedPositions {
    /// Claim every `(key, text)` pair of `m`, all or nothing.
    ///
    /// The check runs to completion before any mutation, so a conflicting
    /// match leaves the claim sets untouched.
    pub fn try_claim(&mut self, m: &Match) -> ClaimOutcome {
        if m.pairs()
            .any(|(k, t)| self.keys.contains(&k) || self.text.contains(&t))
        {
            return ClaimOutcome::Conflict;
        }
        for (k, t) in m.pairs() {
            self.keys.insert(k);
            self.text.insert(t);
        }
        ClaimOutcome::Claimed
    }
}

/// Resolve the clustered candidate set into the final conflict-free mapping.
///
/// Priority order is (total length descending, key-axis end descending):
/// longer, later-ending matches win. Each match is claimed all-or-nothing; a
/// match conflicting with an already-committed one on any single index is
/// dropped wholesale.
pub fn fixate(mut matches: Vec<Match>) -> Mapping {
    matches.sort_by(|a, b| {
        (b.total(), b.end_key()).cmp(&(a.total(), a.end_key()))
    });

    let mut claimed = ClaimedPositions::default();
    let mut mapping = Mapping::new();
    for m in &matches {
        match claimed.try_claim(m) {
            ClaimOutcome::Claimed => {
                for (k, t) in m.pairs() {
                    mapping.insert(t, k);
                }
            }
            ClaimOutcome::Conflict => {
                tracing::debug!(%m, "dropping conflicting match");
            }
        }
    }
    mapping
}
