use crate::align::matches::{Match, Range};
use crate::types::HashSet;

/// Discover every maximal equal-character run between the two sequences.
///
/// Exhaustive scan: for each start position in `keys`, walk through `text`;
/// whenever an unconsumed equal pair is found, extend the run forward and
/// mark every visited `(key, text)` pair consumed so no pair participates in
/// more than one run. Runs shorter than `min_run` are discarded as too
/// ambiguous to anchor an alignment.
///
/// Deliberately O(n1·n2) in the worst case; inputs are log-sized text, and
/// completeness matters more here than asymptotics.
pub fn find_matches(keys: &[char], text: &[char], min_run: usize) -> Vec<Match> {
    let n1 = keys.len();
    let n2 = text.len();
    tracing::debug!(n1, n2, "finding matches");

    let mut consumed: HashSet<(usize, usize)> = HashSet::default();
    let mut matches = Vec::new();
    for i1 in 0..n1 {
        let mut i2 = 0;
        while i2 < n2 {
            if keys[i1] == text[i2] && !consumed.contains(&(i1, i2)) {
                let mut ka = i1;
                let mut tb = i2;
                let mut n = 0;
                while ka < n1 && tb < n2 && keys[ka] == text[tb] {
                    consumed.insert((ka, tb));
                    ka += 1;
                    tb += 1;
                    n += 1;
                }
                if n >= min_run {
                    matches.push(Match::from_range(Range::new(n, i1, i2)));
                }
                // Resume past the consumed region.
                i2 = tb;
            } else {
                i2 += 1;
            }
        }
    }
    tracing::debug!(count = matches.len(), "matches found");
    matches
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn finds_runs_split_by_a_one_sided_gap() {
        let keys = chars("abcXdef");
        let text = chars("abcdef");
        let found = find_matches(&keys, &text, 2);
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].ranges(), &[Range::new(3, 0, 0)]);
        assert_eq!(found[1].ranges(), &[Range::new(3, 4, 3)]);
    }

    #[test]
    fn no_common_run_of_min_length_yields_nothing() {
        let keys = chars("hello");
        let text = chars("world");
        assert!(find_matches(&keys, &text, 2).is_empty());
    }

    #[test]
    fn single_character_runs_are_discarded() {
        // 'a' matches in isolation but never two in a row.
        let keys = chars("aXbYc");
        let text = chars("aZbWc");
        assert!(find_matches(&keys, &text, 2).is_empty());
    }

    #[test]
    fn identical_sequences_yield_one_full_run() {
        let keys = chars("abcdef");
        let found = find_matches(&keys, &keys, 2);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].ranges(), &[Range::new(6, 0, 0)]);
    }

    #[test]
    fn no_pair_participates_in_two_runs() {
        // "abab" against "abab" — the maximal (0,0) run consumes everything on
        // the diagonal; shifted runs reuse no consumed pairs.
        let keys = chars("abab");
        let found = find_matches(&keys, &keys, 2);
        let mut seen = std::collections::HashSet::new();
        for m in &found {
            for pair in m.pairs() {
                assert!(seen.insert(pair), "pair {pair:?} reused across runs");
            }
        }
    }

    #[test]
    fn empty_inputs_yield_nothing() {
        assert!(find_matches(&[], &chars("abc"), 2).is_empty());
        assert!(find_matches(&chars("abc"), &[], 2).is_empty());
        assert!(find_matches(&[], &[], 2).is_empty());
    }

    #[test]
    fn min_run_is_honored() {
        let keys = chars("ab");
        let text = chars("ab");
        assert!(find_matches(&keys, &text, 3).is_empty());
        assert_eq!(find_matches(&keys, &text, 2).len(), 1);
    }

    #[test]
    fn repeated_content_yields_off_diagonal_runs() {
        let keys = chars("abab");
        let text = chars("ab");
        let found = find_matches(&keys, &text, 2);
        // Both occurrences of "ab" in the keys align against the text.
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].ranges(), &[Range::new(2, 0, 0)]);
        assert_eq!(found[1].ranges(), &[Range::new(2, 2, 0)]);
    }
}
