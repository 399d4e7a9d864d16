use std::{fmt::Debug, path::PathBuf};

use async_trait::async_trait;

use crate::errors::error::VcxCoreResult;

/// A tails file materialized on local storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TailsFile {
    pub rev_reg_id: String,
    pub location: PathBuf,
}

/// Random access handle onto an opened tails file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TailsReader {
    pub file: TailsFile,
    pub handle: i32,
}

/// Shared tails-file cache keyed by registry id. Concurrent requests for the same registry are
/// expected to converge on a single download.
#[async_trait]
pub trait TailsProvider: Debug + Send + Sync {
    async fn ensure_tails_exists(&self, rev_reg_id: &str) -> VcxCoreResult<TailsFile>;

    async fn open_tails(&self, file: &TailsFile) -> VcxCoreResult<TailsReader>;
}
