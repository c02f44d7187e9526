mod cluster;
mod consensus;
mod project;
mod report;
mod statement;

pub use cluster::{Cluster, ExcludedStatement, ExclusionReason};
pub use consensus::{ConsensusStatus, ModuleConsensus, ProjectConsensus};
pub use project::{ModuleRecord, Project};
pub use report::{Report, ReportKind};
pub use statement::{SelfConfidence, Statement};
