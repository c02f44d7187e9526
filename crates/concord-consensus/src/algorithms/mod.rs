//! Numeric building blocks for the consensus engine.

pub mod similarity;
