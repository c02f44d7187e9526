/// Document store errors.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("duplicate {kind} id: {id}")]
    Duplicate { kind: String, id: String },

    #[error("backend failure: {message}")]
    Backend { message: String },
}
