use std::collections::HashMap;

use aries_proof_core::data_types::{
    ledger::{
        CredentialDefinitionsMap, RevocationRegistryDefinitionsMap, RevocationRegistryDeltasMap,
        SchemasMap,
    },
    proof::{PartialProof, ProofIdentifier},
};

use crate::{
    common::proofs::ledger_objects::{LedgerObjectAggregator, LedgerObjectKind},
    errors::error::prelude::*,
};

/// Extracts the per-credential ledger references from a proof. An identifier naming a
/// revocation registry must also carry the timestamp the non-revocation proof was made for.
pub fn get_credential_info(proof: &str) -> ProofResult<Vec<ProofIdentifier>> {
    let partial: PartialProof = serde_json::from_str(proof).map_err(|err| {
        AriesProofError::from_msg(
            AriesProofErrorKind::InvalidJson,
            format!("Cannot deserialize proof identifiers: {}", err),
        )
    })?;

    for identifier in partial.identifiers.iter() {
        if let (Some(rev_reg_id), None) = (&identifier.rev_reg_id, identifier.timestamp) {
            return Err(AriesProofError::from_msg(
                AriesProofErrorKind::MalformedMessage,
                format!(
                    "Proof identifier for credential definition {} references revocation \
                     registry {} without a timestamp",
                    identifier.cred_def_id, rev_reg_id
                ),
            ));
        }
    }

    Ok(partial.identifiers)
}

pub async fn build_schemas_json_verifier(
    aggregator: &LedgerObjectAggregator<'_>,
    credential_data: &[ProofIdentifier],
) -> ProofResult<SchemasMap> {
    trace!("build_schemas_json_verifier >>");
    aggregator
        .aggregate(
            LedgerObjectKind::Schema,
            credential_data.iter().map(|c| c.schema_id.as_str()),
        )
        .await
}

pub async fn build_cred_defs_json_verifier(
    aggregator: &LedgerObjectAggregator<'_>,
    credential_data: &[ProofIdentifier],
) -> ProofResult<CredentialDefinitionsMap> {
    trace!("build_cred_defs_json_verifier >>");
    aggregator
        .aggregate(
            LedgerObjectKind::CredentialDefinition,
            credential_data.iter().map(|c| c.cred_def_id.as_str()),
        )
        .await
}

pub async fn build_rev_reg_defs_json(
    aggregator: &LedgerObjectAggregator<'_>,
    credential_data: &[ProofIdentifier],
) -> ProofResult<RevocationRegistryDefinitionsMap> {
    trace!("build_rev_reg_defs_json >>");
    aggregator
        .aggregate(
            LedgerObjectKind::RevocationRegistryDefinition,
            credential_data
                .iter()
                .filter_map(|c| c.rev_reg_id.as_deref()),
        )
        .await
}

/// Deltas keyed `registry id -> timestamp -> delta`, one ledger lookup per distinct pair.
pub async fn build_rev_reg_deltas_json(
    aggregator: &LedgerObjectAggregator<'_>,
    credential_data: &[ProofIdentifier],
) -> ProofResult<RevocationRegistryDeltasMap> {
    trace!("build_rev_reg_deltas_json >>");
    let pairs = credential_data.iter().filter_map(|c| match (&c.rev_reg_id, c.timestamp) {
        (Some(rev_reg_id), Some(timestamp)) => Some((rev_reg_id.clone(), timestamp)),
        _ => None,
    });

    let mut rtn: RevocationRegistryDeltasMap = HashMap::new();
    for ((rev_reg_id, timestamp), fetched) in aggregator.aggregate_deltas(pairs).await? {
        rtn.entry(rev_reg_id)
            .or_default()
            .insert(timestamp.to_string(), fetched.delta);
    }
    Ok(rtn)
}
