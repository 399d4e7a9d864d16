use std::{
    collections::{HashMap, HashSet},
    time::Duration,
};

use aries_proof_core::{
    anoncreds::base_anoncreds::BaseAnonCreds,
    data_types::{
        credential::CredentialInfo,
        ledger::{CredentialDefinitionsMap, RevocationStatesMap, SchemasMap},
        presentation::RequestedCredentials,
    },
    tails::TailsProvider,
};
use futures::{future::try_join_all, stream, StreamExt, TryStreamExt};
use serde_json::Value;

use crate::{
    common::proofs::ledger_objects::{LedgerObjectAggregator, LedgerObjectKind},
    errors::error::prelude::*,
    utils::timeout::with_timeout,
};

/// A chosen credential joined with the holder-side metadata of that credential.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredInfoProver {
    pub referent: String,
    pub cred_id: String,
    pub schema_id: String,
    pub cred_def_id: String,
    pub rev_reg_id: Option<String>,
    pub cred_rev_id: Option<String>,
    pub timestamp: Option<u64>,
}

impl CredInfoProver {
    fn new(referent: &str, timestamp: Option<u64>, info: &CredentialInfo) -> Self {
        Self {
            referent: referent.to_owned(),
            cred_id: info.referent.clone(),
            schema_id: info.schema_id.clone(),
            cred_def_id: info.cred_def_id.clone(),
            rev_reg_id: info.rev_reg_id.clone(),
            cred_rev_id: info.cred_rev_id.clone(),
            timestamp,
        }
    }
}

/// Resolves the stored credential behind every chosen referent. Each distinct credential is
/// looked up once.
pub async fn credential_identifiers(
    anoncreds: &dyn BaseAnonCreds,
    requested: &RequestedCredentials,
    crypto_timeout: Duration,
) -> ProofResult<Vec<CredInfoProver>> {
    trace!(
        "credential_identifiers >>> requested_credentials: {:?}",
        requested
    );
    let cred_ids = requested.credential_identifiers();
    let infos = try_join_all(cred_ids.iter().map(move |cred_id| async move {
        let info = with_timeout(
            crypto_timeout,
            AriesProofErrorKind::CryptoFailure,
            &format!("get credential {cred_id}"),
            anoncreds.prover_get_credential(cred_id),
        )
        .await?;
        Ok::<_, AriesProofError>((cred_id.as_str(), info))
    }))
    .await?;
    let infos: HashMap<&str, CredentialInfo> = infos.into_iter().collect();

    requested
        .choices()
        .map(|choice| {
            infos
                .get(choice.cred_id)
                .map(|info| CredInfoProver::new(choice.referent, choice.timestamp, info))
                .ok_or_else(|| {
                    AriesProofError::from_msg(
                        AriesProofErrorKind::NotFound,
                        format!("Credential {} was not resolved", choice.cred_id),
                    )
                })
        })
        .collect()
}

pub async fn build_schemas_json_prover(
    aggregator: &LedgerObjectAggregator<'_>,
    credentials_identifiers: &[CredInfoProver],
) -> ProofResult<SchemasMap> {
    trace!(
        "build_schemas_json_prover >>> credentials_identifiers: {:?}",
        credentials_identifiers
    );
    aggregator
        .aggregate(
            LedgerObjectKind::Schema,
            credentials_identifiers.iter().map(|c| c.schema_id.as_str()),
        )
        .await
}

pub async fn build_cred_defs_json_prover(
    aggregator: &LedgerObjectAggregator<'_>,
    credentials_identifiers: &[CredInfoProver],
) -> ProofResult<CredentialDefinitionsMap> {
    trace!(
        "build_cred_defs_json_prover >>> credentials_identifiers: {:?}",
        credentials_identifiers
    );
    aggregator
        .aggregate(
            LedgerObjectKind::CredentialDefinition,
            credentials_identifiers.iter().map(|c| c.cred_def_id.as_str()),
        )
        .await
}

#[derive(Debug)]
struct RevStateJob<'c> {
    rev_reg_id: &'c str,
    timestamp: u64,
    cred_rev_id: &'c str,
}

fn rev_state_jobs(credentials_identifiers: &[CredInfoProver]) -> ProofResult<Vec<RevStateJob<'_>>> {
    let mut seen = HashSet::new();
    let mut jobs = Vec::new();

    for cred_info in credentials_identifiers {
        let Some(rev_reg_id) = cred_info.rev_reg_id.as_deref() else {
            continue;
        };
        let timestamp = cred_info.timestamp.ok_or_else(|| {
            AriesProofError::from_msg(
                AriesProofErrorKind::MalformedMessage,
                format!(
                    "Timestamp required for revocable credential {} (referent {})",
                    cred_info.cred_id, cred_info.referent
                ),
            )
        })?;
        let cred_rev_id = cred_info.cred_rev_id.as_deref().ok_or_else(|| {
            AriesProofError::from_msg(
                AriesProofErrorKind::MalformedMessage,
                format!(
                    "Revocable credential {} has no credential revocation id",
                    cred_info.cred_id
                ),
            )
        })?;

        if seen.insert((rev_reg_id, timestamp)) {
            jobs.push(RevStateJob {
                rev_reg_id,
                timestamp,
                cred_rev_id,
            });
        } else {
            debug!(
                "Reusing revocation state of {} at {} for referent {}",
                rev_reg_id, timestamp, cred_info.referent
            );
        }
    }
    Ok(jobs)
}

/// Computes one revocation state per distinct `(registry, timestamp)` among the revocable
/// credentials, keyed `registry id -> timestamp -> state`.
///
/// Each state covers the single requested point in time; the delta is taken from genesis.
pub async fn build_rev_states_json(
    aggregator: &LedgerObjectAggregator<'_>,
    anoncreds: &dyn BaseAnonCreds,
    tails: &dyn TailsProvider,
    crypto_timeout: Duration,
    credentials_identifiers: &[CredInfoProver],
) -> ProofResult<RevocationStatesMap> {
    trace!(
        "build_rev_states_json >> credentials_identifiers: {:?}",
        credentials_identifiers
    );
    let jobs = rev_state_jobs(credentials_identifiers)?;
    let mut rtn: RevocationStatesMap = HashMap::new();
    if jobs.is_empty() {
        return Ok(rtn);
    }

    let rev_reg_defs = aggregator
        .aggregate(
            LedgerObjectKind::RevocationRegistryDefinition,
            jobs.iter().map(|job| job.rev_reg_id),
        )
        .await?;
    let deltas = aggregator
        .aggregate_deltas(
            jobs.iter()
                .map(|job| (job.rev_reg_id.to_owned(), job.timestamp)),
        )
        .await?;

    let rev_reg_defs = &rev_reg_defs;
    let deltas = &deltas;
    let states: Vec<(&str, u64, Value)> = stream::iter(jobs)
        .map(move |job| async move {
            let rev_reg_def = rev_reg_defs.get(job.rev_reg_id).ok_or_else(|| {
                AriesProofError::from_msg(
                    AriesProofErrorKind::NotFound,
                    format!("Revocation registry definition {} missing", job.rev_reg_id),
                )
            })?;
            let delta = deltas
                .get(&(job.rev_reg_id.to_owned(), job.timestamp))
                .ok_or_else(|| {
                    AriesProofError::from_msg(
                        AriesProofErrorKind::NotFound,
                        format!(
                            "Revocation registry delta {} at {} missing",
                            job.rev_reg_id, job.timestamp
                        ),
                    )
                })?;

            let tails_file = tails.ensure_tails_exists(job.rev_reg_id).await?;
            let tails_reader = tails.open_tails(&tails_file).await?;

            let state = with_timeout(
                crypto_timeout,
                AriesProofErrorKind::CryptoFailure,
                &format!(
                    "create revocation state for {} at {}",
                    job.rev_reg_id, job.timestamp
                ),
                anoncreds.create_revocation_state(
                    &tails_reader,
                    rev_reg_def,
                    &delta.delta,
                    delta.timestamp,
                    job.cred_rev_id,
                ),
            )
            .await?;
            Ok::<_, AriesProofError>((job.rev_reg_id, job.timestamp, state))
        })
        .buffer_unordered(aggregator.concurrency())
        .try_collect()
        .await?;

    for (rev_reg_id, timestamp, state) in states {
        rtn.entry(rev_reg_id.to_owned())
            .or_default()
            .insert(timestamp.to_string(), state);
    }
    Ok(rtn)
}
