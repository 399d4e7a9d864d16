use std::sync::Arc;

use aries_proof_core::{
    context::AgentContext,
    data_types::{
        credential::RetrievedCredential, pres_request::ProofRequest,
        presentation::RequestedCredentials,
    },
    events::{EventBus, ServiceMessageProcessingEvent},
    tails::TailsProvider,
    transport::MessageTransport,
    wallet::search::TagQuery,
};
use base64::Engine;
use messages::{
    msg_fields::protocols::present_proof::v1::{
        present::PresentationV1, request::RequestPresentationV1,
    },
    msg_types::present_proof::PresentProofTypeV1_0,
    PresentProof,
};
use uuid::Uuid;

use crate::{
    common::proofs::{
        ledger_objects::LedgerObjectAggregator,
        prover::prover_internal::{
            build_cred_defs_json_prover, build_rev_states_json, build_schemas_json_prover,
            credential_identifiers,
        },
        verifier::verifier_internal::{
            build_cred_defs_json_verifier, build_rev_reg_defs_json, build_rev_reg_deltas_json,
            build_schemas_json_verifier, get_credential_info,
        },
    },
    errors::error::prelude::*,
    global::settings::ProofServiceConfig,
    protocols::proof_presentation::{
        messages::{
            build_presentation_msg, build_request_presentation_msg, get_presentation_thread_id,
            get_proof_json, get_request_json, get_request_thread_id,
        },
        record::{ProofRecord, PROOF_RECORD_CATEGORY, TAG_LAST_THREAD_ID, TAG_REQUEST_DATA},
        state::{ensure_state, transition, ProofState, ProofTrigger},
    },
    utils::{base64::URL_SAFE_LENIENT, timeout::with_timeout},
};

fn failed(operation: &'static str, err: AriesProofError) -> AriesProofError {
    let err = err.in_operation(operation);
    warn!("ProofService::{} failed: {}", operation, err);
    err
}

/// Present-proof 1.0 engine for both the verifier (requestor) and the holder role.
///
/// Every operation takes the [`AgentContext`] of the agent it acts for. Records are only written
/// once the artifact a state change depends on has been produced, so a failed operation leaves
/// its record as it was.
#[derive(Debug, Clone)]
pub struct ProofService {
    tails: Arc<dyn TailsProvider>,
    transport: Arc<dyn MessageTransport>,
    events: Arc<dyn EventBus>,
    config: ProofServiceConfig,
}

impl ProofService {
    pub fn new(
        tails: Arc<dyn TailsProvider>,
        transport: Arc<dyn MessageTransport>,
        events: Arc<dyn EventBus>,
        config: ProofServiceConfig,
    ) -> Self {
        Self {
            tails,
            transport,
            events,
            config,
        }
    }

    pub fn config(&self) -> &ProofServiceConfig {
        &self.config
    }

    /// Starts an exchange as verifier. When `connection_id` is given the connection must be
    /// established.
    pub async fn create_request(
        &self,
        ctx: &AgentContext,
        proof_request: &ProofRequest,
        connection_id: Option<&str>,
    ) -> ProofResult<(RequestPresentationV1, ProofRecord)> {
        info!(
            "ProofService::create_request >>> connection_id: {:?}",
            connection_id
        );
        let request_json = serde_json::to_string(proof_request)
            .map_err(|err| failed("create_request", err.into()))?;
        self.create_request_json(ctx, &request_json, connection_id)
            .await
    }

    /// Same as [`Self::create_request`] for a request already serialized to JSON.
    pub async fn create_request_json(
        &self,
        ctx: &AgentContext,
        request_json: &str,
        connection_id: Option<&str>,
    ) -> ProofResult<(RequestPresentationV1, ProofRecord)> {
        trace!(
            "ProofService::create_request_json >>> request_json: {}, connection_id: {:?}",
            request_json,
            connection_id
        );
        async {
            if request_json.trim().is_empty() {
                return Err(AriesProofError::from_msg(
                    AriesProofErrorKind::InvalidInput,
                    "Proof request json must not be empty",
                ));
            }
            if let Some(connection_id) = connection_id {
                let connection = ctx.connections.get_connection(connection_id).await?;
                if !connection.is_connected() {
                    return Err(AriesProofError::from_msg(
                        AriesProofErrorKind::InvalidState,
                        format!(
                            "Connection {} is not usable: expected Connected, found {}",
                            connection_id, connection.state
                        ),
                    ));
                }
            }

            let thread_id = Uuid::new_v4().to_string();
            let record = ProofRecord::new_requestor(
                Uuid::new_v4().to_string(),
                connection_id.map(ToOwned::to_owned),
                request_json.to_owned(),
                &thread_id,
            );
            let message = build_request_presentation_msg(&thread_id, request_json, None);

            let record = self.add(ctx, record).await?;
            Ok::<_, AriesProofError>((message, record))
        }
        .await
        .map_err(|err| failed("create_request", err))
    }

    /// Starts an exchange as verifier without a connection. The message carries this agent's
    /// `~service` decorator and a copy of it is kept on the record under the `RequestData` tag.
    pub async fn create_connectionless_request(
        &self,
        ctx: &AgentContext,
        proof_request: &ProofRequest,
    ) -> ProofResult<(RequestPresentationV1, ProofRecord)> {
        info!("ProofService::create_connectionless_request >>>");
        async {
            let request_json = serde_json::to_string(proof_request)?;
            let provisioning = ctx.provisioning.get_provisioning().await?;

            let thread_id = Uuid::new_v4().to_string();
            let message = build_request_presentation_msg(
                &thread_id,
                &request_json,
                Some(provisioning.to_service_decorator()),
            );
            let wire = serde_json::to_string(&PresentProof::from(message.clone()))?;

            let mut record = ProofRecord::new_requestor(
                Uuid::new_v4().to_string(),
                None,
                request_json,
                &thread_id,
            );
            record.set_tag(TAG_REQUEST_DATA, URL_SAFE_LENIENT.encode(wire));

            let record = self.add(ctx, record).await?;
            Ok::<_, AriesProofError>((message, record))
        }
        .await
        .map_err(|err| failed("create_connectionless_request", err))
    }

    /// Records an incoming request as holder, in state `Requested`.
    pub async fn process_request(
        &self,
        ctx: &AgentContext,
        request: &RequestPresentationV1,
        connection_id: Option<&str>,
    ) -> ProofResult<ProofRecord> {
        async {
            let request_json = get_request_json(request)?;
            let thread_id = get_request_thread_id(request)?;

            let record = ProofRecord::new_holder(
                Uuid::new_v4().to_string(),
                connection_id.map(ToOwned::to_owned),
                request_json,
                thread_id,
            );
            info!(
                "ProofService::process_request >>> record_id: {}, thread_id: {}",
                record.id(),
                thread_id
            );
            let record = self.add(ctx, record).await?;

            self.publish(
                &record,
                PresentProofTypeV1_0::RequestPresentation,
                thread_id,
            );
            Ok::<_, AriesProofError>(record)
        }
        .await
        .map_err(|err| failed("process_request", err))
    }

    /// Builds the presentation for a `Requested` record and accepts it.
    pub async fn create_presentation(
        &self,
        ctx: &AgentContext,
        record_id: &str,
        requested_credentials: &RequestedCredentials,
    ) -> ProofResult<(PresentationV1, ProofRecord)> {
        let record = self
            .fetch(ctx, record_id)
            .await
            .map_err(|err| failed("create_presentation", err))?;
        self.create_presentation_for_record(ctx, record, requested_credentials)
            .await
    }

    pub async fn create_presentation_for_record(
        &self,
        ctx: &AgentContext,
        mut record: ProofRecord,
        requested_credentials: &RequestedCredentials,
    ) -> ProofResult<(PresentationV1, ProofRecord)> {
        info!(
            "ProofService::create_presentation >>> record_id: {}",
            record.id()
        );
        async {
            let new_state = transition(record.effective_state(), ProofTrigger::Accept)?;
            let thread_id = record
                .thread_id()
                .ok_or_else(|| {
                    AriesProofError::from_msg(
                        AriesProofErrorKind::InvalidState,
                        format!("Proof record {} has no thread id", record.id()),
                    )
                })?
                .to_owned();
            let request_json = stored_json(record.request_json(), "request", record.id())?;

            let proof_json = self
                .build_proof(ctx, &request_json, requested_credentials)
                .await?;
            let message = build_presentation_msg(&thread_id, &proof_json);

            record.accept_with_proof(new_state, proof_json);
            let record = self.update(ctx, record).await?;
            Ok::<_, AriesProofError>((message, record))
        }
        .await
        .map_err(|err| failed("create_presentation", err))
    }

    /// Answers a connectionless request: records it, builds the presentation and sends it to the
    /// first recipient key of the request's `~service` decorator.
    pub async fn create_presentation_from_request(
        &self,
        ctx: &AgentContext,
        request: &RequestPresentationV1,
        requested_credentials: &RequestedCredentials,
    ) -> ProofResult<ProofRecord> {
        info!(
            "ProofService::create_presentation_from_request >>> request_id: {}",
            request.id
        );
        let service = request.decorators.service.as_ref().ok_or_else(|| {
            failed(
                "create_presentation_from_request",
                AriesProofError::from_msg(
                    AriesProofErrorKind::MalformedMessage,
                    "Connectionless request has no ~service decorator",
                ),
            )
        })?;
        let recipient_key = service.recipient_keys.first().ok_or_else(|| {
            failed(
                "create_presentation_from_request",
                AriesProofError::from_msg(
                    AriesProofErrorKind::MalformedMessage,
                    "~service decorator has no recipient keys",
                ),
            )
        })?;

        let record = self
            .process_request(ctx, request, None)
            .await
            .map_err(|err| failed("create_presentation_from_request", err))?;
        let (message, record) = self
            .create_presentation_for_record(ctx, record, requested_credentials)
            .await
            .map_err(|err| failed("create_presentation_from_request", err))?;

        self.transport
            .send(
                &PresentProof::from(message),
                recipient_key,
                &service.service_endpoint,
                &service.routing_keys,
            )
            .await
            .map_err(|err| failed("create_presentation_from_request", err.into()))?;
        Ok(record)
    }

    /// Stateless proof creation: resolves the chosen credentials, gathers their ledger objects
    /// and revocation states and asks the crypto provider for the proof.
    pub async fn create_proof(
        &self,
        ctx: &AgentContext,
        request_json: &str,
        requested_credentials: &RequestedCredentials,
    ) -> ProofResult<String> {
        self.build_proof(ctx, request_json, requested_credentials)
            .await
            .map_err(|err| failed("create_proof", err))
    }

    async fn build_proof(
        &self,
        ctx: &AgentContext,
        request_json: &str,
        requested_credentials: &RequestedCredentials,
    ) -> ProofResult<String> {
        trace!(
            "ProofService::build_proof >>> request_json: {}, requested_credentials: {:?}",
            request_json,
            requested_credentials
        );
        let crypto_timeout = self.config.crypto_timeout();
        let aggregator = LedgerObjectAggregator::new(ctx.ledger.as_ref(), &self.config);

        let credentials_identifiers =
            credential_identifiers(ctx.anoncreds.as_ref(), requested_credentials, crypto_timeout)
                .await?;
        let schemas = build_schemas_json_prover(&aggregator, &credentials_identifiers).await?;
        let cred_defs = build_cred_defs_json_prover(&aggregator, &credentials_identifiers).await?;
        let revoc_states = build_rev_states_json(
            &aggregator,
            ctx.anoncreds.as_ref(),
            self.tails.as_ref(),
            crypto_timeout,
            &credentials_identifiers,
        )
        .await?;

        let provisioning = ctx.provisioning.get_provisioning().await?;
        let requested_credentials_json = serde_json::to_string(requested_credentials)?;

        with_timeout(
            crypto_timeout,
            AriesProofErrorKind::CryptoFailure,
            "create proof",
            ctx.anoncreds.prover_create_proof(
                request_json,
                &requested_credentials_json,
                &provisioning.master_secret_id,
                &schemas,
                &cred_defs,
                &revoc_states,
            ),
        )
        .await
    }

    /// Accepts the presentation answering one of this agent's requests, matched by thread id.
    pub async fn process_presentation(
        &self,
        ctx: &AgentContext,
        presentation: &PresentationV1,
    ) -> ProofResult<ProofRecord> {
        let thread_id = get_presentation_thread_id(presentation);
        async {
            let mut record = self.find_by_thread_id(ctx, thread_id).await?;
            info!(
                "ProofService::process_presentation >>> record_id: {}, thread_id: {}",
                record.id(),
                thread_id
            );
            let new_state = transition(record.effective_state(), ProofTrigger::Accept)?;
            let proof_json = get_proof_json(presentation)?;

            record.accept_with_proof(new_state, proof_json);
            let record = self.update(ctx, record).await?;

            self.publish(&record, PresentProofTypeV1_0::Presentation, thread_id);
            Ok::<_, AriesProofError>(record)
        }
        .await
        .map_err(|err| failed("process_presentation", err))
    }

    pub async fn reject_request(&self, ctx: &AgentContext, record_id: &str) -> ProofResult<()> {
        info!(
            "ProofService::reject_request >>> record_id: {}",
            record_id
        );
        async {
            let mut record = self.fetch(ctx, record_id).await?;
            let new_state = transition(record.effective_state(), ProofTrigger::Reject)?;
            record.set_state(new_state);
            self.update(ctx, record).await?;
            Ok::<_, AriesProofError>(())
        }
        .await
        .map_err(|err| failed("reject_request", err))
    }

    /// Verifies the proof stored on an `Accepted` record.
    pub async fn verify_proof(&self, ctx: &AgentContext, record_id: &str) -> ProofResult<bool> {
        info!("ProofService::verify_proof >>> record_id: {}", record_id);
        async {
            let record = self.fetch(ctx, record_id).await?;
            ensure_state(record.effective_state(), ProofState::Accepted)?;
            let request_json = stored_json(record.request_json(), "request", record.id())?;
            let proof_json = stored_json(record.proof_json(), "proof", record.id())?;

            self.verify(ctx, &request_json, &proof_json).await
        }
        .await
        .map_err(|err| failed("verify_proof", err))
    }

    /// Verifies a request/proof pair without touching any record.
    pub async fn verify_proof_json(
        &self,
        ctx: &AgentContext,
        request_json: &str,
        proof_json: &str,
    ) -> ProofResult<bool> {
        info!("ProofService::verify_proof_json >>>");
        self.verify(ctx, request_json, proof_json)
            .await
            .map_err(|err| failed("verify_proof", err))
    }

    async fn verify(
        &self,
        ctx: &AgentContext,
        request_json: &str,
        proof_json: &str,
    ) -> ProofResult<bool> {
        let credential_data = get_credential_info(proof_json)?;
        let aggregator = LedgerObjectAggregator::new(ctx.ledger.as_ref(), &self.config);

        let schemas = build_schemas_json_verifier(&aggregator, &credential_data).await?;
        let cred_defs = build_cred_defs_json_verifier(&aggregator, &credential_data).await?;
        let rev_reg_defs = build_rev_reg_defs_json(&aggregator, &credential_data).await?;
        let rev_reg_deltas = build_rev_reg_deltas_json(&aggregator, &credential_data).await?;

        let valid = with_timeout(
            self.config.crypto_timeout(),
            AriesProofErrorKind::CryptoFailure,
            "verify proof",
            ctx.anoncreds.verifier_verify_proof(
                request_json,
                proof_json,
                &schemas,
                &cred_defs,
                &rev_reg_defs,
                &rev_reg_deltas,
            ),
        )
        .await?;
        debug!("ProofService::verify <<< valid: {}", valid);
        Ok(valid)
    }

    pub async fn get(&self, ctx: &AgentContext, record_id: &str) -> ProofResult<ProofRecord> {
        info!("ProofService::get >>> record_id: {}", record_id);
        self.fetch(ctx, record_id)
            .await
            .map_err(|err| failed("get", err))
    }

    /// The record whose `lastThreadId` tag is `thread_id`. More than one match is an error.
    pub async fn get_by_thread_id(
        &self,
        ctx: &AgentContext,
        thread_id: &str,
    ) -> ProofResult<ProofRecord> {
        info!("ProofService::get_by_thread_id >>> thread_id: {}", thread_id);
        self.find_by_thread_id(ctx, thread_id)
            .await
            .map_err(|err| failed("get_by_thread_id", err))
    }

    /// Records matching `query` (all when `None`), at most `count` or the configured search
    /// limit.
    pub async fn list(
        &self,
        ctx: &AgentContext,
        query: Option<&TagQuery>,
        count: Option<usize>,
    ) -> ProofResult<Vec<ProofRecord>> {
        trace!("ProofService::list >>> query: {:?}, count: {:?}", query, count);
        async {
            let everything = TagQuery::new();
            let records = ctx
                .record_store
                .search_records(
                    PROOF_RECORD_CATEGORY,
                    query.unwrap_or(&everything),
                    Some(count.unwrap_or(self.config.search_limit)),
                )
                .await?;
            records
                .into_iter()
                .map(ProofRecord::from_record)
                .collect::<ProofResult<Vec<_>>>()
        }
        .await
        .map_err(|err| failed("list", err))
    }

    /// Credentials of the holder's wallet that can satisfy `referent` of the proof request.
    pub async fn list_credentials_for_proof_request(
        &self,
        ctx: &AgentContext,
        proof_request: &ProofRequest,
        referent: &str,
    ) -> ProofResult<Vec<RetrievedCredential>> {
        trace!(
            "ProofService::list_credentials_for_proof_request >>> referent: {}",
            referent
        );
        async {
            if !proof_request.has_referent(referent) {
                return Err(AriesProofError::from_msg(
                    AriesProofErrorKind::InvalidInput,
                    format!("Proof request has no referent {referent}"),
                ));
            }
            let request_json = serde_json::to_string(proof_request)?;
            with_timeout(
                self.config.crypto_timeout(),
                AriesProofErrorKind::CryptoFailure,
                "search credentials",
                ctx.anoncreds.prover_search_credentials_for_proof_req(
                    &request_json,
                    referent,
                    self.config.search_limit,
                ),
            )
            .await
        }
        .await
        .map_err(|err| failed("list_credentials_for_proof_request", err))
    }

    async fn fetch(&self, ctx: &AgentContext, record_id: &str) -> ProofResult<ProofRecord> {
        let record = ctx
            .record_store
            .get_record(PROOF_RECORD_CATEGORY, record_id)
            .await?
            .ok_or_else(|| {
                AriesProofError::from_msg(
                    AriesProofErrorKind::NotFound,
                    format!("Proof record not found for id: {record_id}"),
                )
            })?;
        ProofRecord::from_record(record)
    }

    async fn find_by_thread_id(
        &self,
        ctx: &AgentContext,
        thread_id: &str,
    ) -> ProofResult<ProofRecord> {
        let query = TagQuery::new().eq(TAG_LAST_THREAD_ID, thread_id);
        let mut records = ctx
            .record_store
            .search_records(PROOF_RECORD_CATEGORY, &query, Some(2))
            .await?;

        match (records.pop(), records.is_empty()) {
            (None, _) => Err(AriesProofError::from_msg(
                AriesProofErrorKind::NotFound,
                format!("Proof record not found for thread id: {thread_id}"),
            )),
            (Some(record), true) => ProofRecord::from_record(record),
            (Some(_), false) => Err(AriesProofError::from_msg(
                AriesProofErrorKind::InvalidState,
                format!("More than one proof record found for thread id: {thread_id}"),
            )),
        }
    }

    async fn add(&self, ctx: &AgentContext, record: ProofRecord) -> ProofResult<ProofRecord> {
        ctx.record_store.add_record(record.to_record()?).await?;
        Ok(record)
    }

    async fn update(&self, ctx: &AgentContext, mut record: ProofRecord) -> ProofResult<ProofRecord> {
        let version = ctx.record_store.update_record(record.to_record()?).await?;
        record.set_version(version);
        Ok(record)
    }

    // Parsing folds the legacy type prefix into the canonical one, so events carry the latter.
    fn publish(&self, record: &ProofRecord, message_type: PresentProofTypeV1_0, thread_id: &str) {
        self.events.publish(ServiceMessageProcessingEvent {
            record_id: record.id().to_owned(),
            message_type: message_type.msg_type(),
            thread_id: thread_id.to_owned(),
        });
    }
}

fn stored_json(value: Option<&str>, what: &str, record_id: &str) -> ProofResult<String> {
    value.map(ToOwned::to_owned).ok_or_else(|| {
        AriesProofError::from_msg(
            AriesProofErrorKind::InvalidState,
            format!("Proof record {record_id} has no {what} json"),
        )
    })
}
