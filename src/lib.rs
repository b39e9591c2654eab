pub mod align;
pub mod config;
pub mod error;
pub mod loader;
pub mod pipeline;
pub mod report;
pub mod types;

pub use align::{Match, Range};
pub use config::AlignConfig;
pub use error::AlignError;
pub use loader::{read_key_log, read_transcripts};
pub use pipeline::builder::AlignerBuilder;
pub use pipeline::runtime::Aligner;
pub use pipeline::traits::{Clusterer, Fixator, MatchFinder};
pub use types::{AlignmentInput, AlignmentOutput, KeyEvent, MappedChar, Mapping};
