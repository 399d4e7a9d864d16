use std::path::PathBuf;

use aries_proof_core::{
    errors::error::VcxCoreResult,
    tails::{TailsFile, TailsProvider, TailsReader},
};
use async_trait::async_trait;

use super::CallCounter;

#[derive(Debug, Default)]
pub struct MockTailsProvider {
    ensured: CallCounter,
    opened: CallCounter,
}

impl MockTailsProvider {
    pub fn ensure_count(&self, rev_reg_id: &str) -> usize {
        self.ensured.count(rev_reg_id)
    }

    pub fn open_count(&self, rev_reg_id: &str) -> usize {
        self.opened.count(rev_reg_id)
    }
}

#[async_trait]
impl TailsProvider for MockTailsProvider {
    async fn ensure_tails_exists(&self, rev_reg_id: &str) -> VcxCoreResult<TailsFile> {
        self.ensured.hit(rev_reg_id);
        Ok(TailsFile {
            rev_reg_id: rev_reg_id.to_owned(),
            location: PathBuf::from("/tmp/tails").join(rev_reg_id),
        })
    }

    async fn open_tails(&self, file: &TailsFile) -> VcxCoreResult<TailsReader> {
        self.opened.hit(&file.rev_reg_id);
        Ok(TailsReader {
            file: file.clone(),
            handle: 1,
        })
    }
}
