use std::{future::Future, time::Duration};

use aries_proof_core::errors::error::VcxCoreResult;

use crate::errors::error::{AriesProofError, AriesProofErrorKind, ProofResult};

/// Awaits a collaborator call for at most `limit`. Expiry fails with `on_timeout`; collaborator
/// errors are converted and extended with `what`.
pub async fn with_timeout<T, F>(
    limit: Duration,
    on_timeout: AriesProofErrorKind,
    what: &str,
    fut: F,
) -> ProofResult<T>
where
    F: Future<Output = VcxCoreResult<T>>,
{
    match tokio::time::timeout(limit, fut).await {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(err)) => Err(AriesProofError::from(err).extend(format!("Failed to {what}"))),
        Err(_) => Err(AriesProofError::from_msg(
            on_timeout,
            format!("Timed out after {limit:?} trying to {what}"),
        )),
    }
}
