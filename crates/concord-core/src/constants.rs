/// Concord system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Pairwise cosine similarity at or above which two statements agree.
pub const SIMILARITY_THRESHOLD: f64 = 0.75;

/// Consensus percentage at or above which a module's understanding is accepted.
pub const ACCEPTED_THRESHOLD: f64 = 70.0;

/// Consensus percentage at or above which a module's understanding is proposed.
pub const PROPOSED_THRESHOLD: f64 = 50.0;

/// Fewest valid statements for which a consensus figure is meaningful.
pub const MIN_STATEMENTS_FOR_CONSENSUS: usize = 2;

/// Bounds of the self-reported confidence scale.
pub const MIN_SELF_CONFIDENCE: u8 = 1;
pub const MAX_SELF_CONFIDENCE: u8 = 5;
