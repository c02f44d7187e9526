mod embedding;
mod generator;
mod storage;

pub use embedding::IEmbeddingProvider;
pub use generator::ITextGenerator;
pub use storage::{IProjectStore, IReportStore, IStatementStore};
