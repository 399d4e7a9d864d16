use thiserror::Error as ThisError;

pub type VcxCoreResult<T> = Result<T, VcxCoreError>;

#[derive(Debug, ThisError)]
pub enum VcxCoreError {
    #[error("Record not found: {category}/{id}")]
    RecordNotFound { category: String, id: String },
    #[error("Record already exists: {0}")]
    DuplicateRecord(String),
    #[error("Record {id} was modified concurrently: expected version {expected}, found {found}")]
    RecordVersionConflict { id: String, expected: u64, found: u64 },
    #[error("Ledger item not found: {0}")]
    LedgerItemNotFound(String),
    #[error("Ledger unavailable: {0}")]
    LedgerUnavailable(String),
    #[error("Invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Crypto failure: {0}")]
    CryptoFailure(String),
}
