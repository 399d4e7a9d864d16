use std::{
    collections::{HashMap, HashSet},
    fmt,
    time::Duration,
};

use aries_proof_core::ledger::base_ledger::AnoncredsLedgerRead;
use futures::{stream, StreamExt, TryStreamExt};
use serde_json::Value;

use crate::{
    errors::error::{AriesProofError, AriesProofErrorKind, ProofResult},
    global::settings::ProofServiceConfig,
    utils::timeout::with_timeout,
};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LedgerObjectKind {
    Schema,
    CredentialDefinition,
    RevocationRegistryDefinition,
}

impl fmt::Display for LedgerObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Schema => "schema",
            Self::CredentialDefinition => "credential definition",
            Self::RevocationRegistryDefinition => "revocation registry definition",
        };
        f.write_str(name)
    }
}

/// A revocation registry delta fetched from genesis up to a requested timestamp.
#[derive(Clone, Debug, PartialEq)]
pub struct FetchedDelta {
    pub delta: Value,
    /// Ledger time the delta was accumulated up to, as reported by the ledger.
    pub timestamp: u64,
}

/// Fetches sets of ledger objects, each distinct identifier exactly once.
///
/// Lookups run concurrently up to the configured bound. The first failed lookup aborts the
/// aggregation and drops the lookups still in flight, so callers either get the complete map or
/// an error.
#[derive(Clone, Copy)]
pub struct LedgerObjectAggregator<'a> {
    ledger: &'a dyn AnoncredsLedgerRead,
    concurrency: usize,
    timeout: Duration,
}

impl<'a> LedgerObjectAggregator<'a> {
    pub fn new(ledger: &'a dyn AnoncredsLedgerRead, config: &ProofServiceConfig) -> Self {
        Self {
            ledger,
            concurrency: config.ledger_concurrency(),
            timeout: config.ledger_timeout(),
        }
    }

    pub fn concurrency(&self) -> usize {
        self.concurrency
    }

    /// Returns an identifier to object map with one entry per distinct identifier in `ids`.
    pub async fn aggregate<I, S>(
        &self,
        kind: LedgerObjectKind,
        ids: I,
    ) -> ProofResult<HashMap<String, Value>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let ids = distinct(ids.into_iter().map(|id| id.as_ref().to_owned()));
        trace!("LedgerObjectAggregator::aggregate >>> kind: {}, ids: {:?}", kind, ids);

        let objects: Vec<(String, Value)> = stream::iter(ids)
            .map(move |id| async move {
                let object = self.fetch(kind, &id).await?;
                Ok::<_, AriesProofError>((id, object))
            })
            .buffer_unordered(self.concurrency)
            .try_collect()
            .await?;

        Ok(objects.into_iter().collect())
    }

    /// Fetches the delta of each distinct `(registry id, timestamp)` pair, from genesis to the
    /// timestamp.
    pub async fn aggregate_deltas<I>(
        &self,
        pairs: I,
    ) -> ProofResult<HashMap<(String, u64), FetchedDelta>>
    where
        I: IntoIterator<Item = (String, u64)>,
    {
        let pairs = distinct(pairs);
        trace!("LedgerObjectAggregator::aggregate_deltas >>> pairs: {:?}", pairs);

        let deltas: Vec<((String, u64), FetchedDelta)> = stream::iter(pairs)
            .map(move |(rev_reg_id, to)| async move {
                let (delta, timestamp) = with_timeout(
                    self.timeout,
                    AriesProofErrorKind::LedgerUnavailable,
                    &format!("fetch revocation registry delta {rev_reg_id} up to {to}"),
                    self.ledger.get_rev_reg_delta_json(&rev_reg_id, None, to),
                )
                .await?;
                Ok::<_, AriesProofError>(((rev_reg_id, to), FetchedDelta { delta, timestamp }))
            })
            .buffer_unordered(self.concurrency)
            .try_collect()
            .await?;

        Ok(deltas.into_iter().collect())
    }

    async fn fetch(&self, kind: LedgerObjectKind, id: &str) -> ProofResult<Value> {
        let what = format!("fetch {kind} {id}");
        let on_timeout = AriesProofErrorKind::LedgerUnavailable;
        match kind {
            LedgerObjectKind::Schema => {
                with_timeout(self.timeout, on_timeout, &what, self.ledger.get_schema(id)).await
            }
            LedgerObjectKind::CredentialDefinition => {
                with_timeout(self.timeout, on_timeout, &what, self.ledger.get_cred_def(id)).await
            }
            LedgerObjectKind::RevocationRegistryDefinition => {
                with_timeout(
                    self.timeout,
                    on_timeout,
                    &what,
                    self.ledger.get_rev_reg_def_json(id),
                )
                .await
            }
        }
    }
}

fn distinct<T, I>(items: I) -> Vec<T>
where
    T: Clone + Eq + std::hash::Hash + fmt::Debug,
    I: IntoIterator<Item = T>,
{
    let mut seen = HashSet::new();
    let mut unique = Vec::new();
    for item in items {
        if seen.insert(item.clone()) {
            unique.push(item);
        } else {
            debug!("Collapsed duplicate ledger identifier {:?}", item);
        }
    }
    unique
}
