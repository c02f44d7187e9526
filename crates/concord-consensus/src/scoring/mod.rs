//! Consensus scoring and representative selection.

pub mod consensus;
pub mod representative;

pub use consensus::consensus_percentage;
pub use representative::{mean_similarities, select_representative};
