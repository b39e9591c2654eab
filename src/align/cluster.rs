use crate::align::matches::Match;
use crate::error::AlignError;

/// One greedy agglomeration pass: merge each candidate with its nearest
/// compatible neighbor.
///
/// Matches are sorted by descending total length (longer matches are more
/// reliable anchors) and processed from the end of the list backward. For
/// each candidate the not-yet-processed earlier matches are scanned for the
/// partner at minimal finite distance strictly below `max_gap` (ties resolved
/// by earliest found); the pair is replaced by its merge, appended to the
/// output and not reconsidered within this pass. Candidates with no
/// finite-distance partner are kept as-is.
///
/// Each original element is processed exactly once, so the pass never grows
/// the list. The caller repeats passes until the count stops shrinking; the
/// fixed-point loop is not owned here.
///
/// The partner search is an explicit O(k²) two-level scan. That is the
/// intended complexity — adjacent short matches separated by small gaps
/// (typos, log jitter) are the common case, and greedy nearest-neighbor
/// agglomeration collapses them without needing a global optimum. Very large
/// match counts will feel it; that is a scalability limit, not a defect.
pub fn cluster_pass(mut matches: Vec<Match>, max_gap: usize) -> Result<Vec<Match>, AlignError> {
    tracing::debug!(count = matches.len(), "cluster pass");
    matches.sort_by(|a, b| b.total().cmp(&a.total()));

    let mut slots: Vec<Option<Match>> = matches.into_iter().map(Some).collect();
    let mut merged = Vec::new();
    for i in (0..slots.len()).rev() {
        let Some(m0) = slots[i].take() else {
            // Already consumed as an earlier candidate's partner.
            continue;
        };

        let mut best: Option<usize> = None;
        let mut bound = max_gap;
        for (j, slot) in slots.iter().enumerate().take(i) {
            let Some(mj) = slot.as_ref() else { continue };
            if let Some(d) = mj.distance(&m0) {
                if d < bound {
                    bound = d;
                    best = Some(j);
                }
            }
        }

        match best {
            Some(j) => match slots[j].take() {
                Some(mj) => merged.push(m0.merge(&mj)?),
                // The selected slot is occupied by construction; keep the
                // candidate rather than losing it if that ever breaks.
                None => slots[i] = Some(m0),
            },
            None => slots[i] = Some(m0),
        }
    }

    let mut out: Vec<Match> = slots.into_iter().flatten().collect();
    out.extend(merged);
    Ok(out)
}
