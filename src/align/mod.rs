//! The alignment core: exhaustive run discovery, gap-tolerant clustering and
//! greedy conflict resolution.

pub mod cluster;
pub mod finder;
pub mod fixate;
pub mod matches;

pub use cluster::cluster_pass;
pub use finder::find_matches;
pub use fixate::{fixate, ClaimOutcome, ClaimedPositions};
pub use matches::{Match, Range};
