use aries_proof_core::errors::error::VcxCoreError;

use super::error::{AriesProofError, AriesProofErrorKind};

impl From<VcxCoreError> for AriesProofError {
    fn from(value: VcxCoreError) -> Self {
        let kind = match value {
            VcxCoreError::RecordNotFound { .. } | VcxCoreError::LedgerItemNotFound(_) => {
                AriesProofErrorKind::NotFound
            }
            VcxCoreError::DuplicateRecord(_) | VcxCoreError::InvalidInput(_) => {
                AriesProofErrorKind::InvalidInput
            }
            VcxCoreError::RecordVersionConflict { .. } => {
                AriesProofErrorKind::RecordVersionConflict
            }
            VcxCoreError::LedgerUnavailable(_) => AriesProofErrorKind::LedgerUnavailable,
            VcxCoreError::InvalidJson(_) => AriesProofErrorKind::InvalidJson,
            VcxCoreError::CryptoFailure(_) => AriesProofErrorKind::CryptoFailure,
        };
        Self::from_msg(kind, value.to_string())
    }
}
