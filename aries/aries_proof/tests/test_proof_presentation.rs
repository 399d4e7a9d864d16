pub mod utils;

use aries_proof::{
    errors::error::{AriesProofErrorKind, ErrorCategory},
    global::settings::ProofServiceConfig,
    handlers::util::AttachmentId,
    protocols::proof_presentation::{
        messages::{build_presentation_msg, get_request_json},
        record::{ProofRole, TAG_REQUEST_DATA},
        state::ProofState,
    },
};
use aries_proof_core::{
    data_types::presentation::RequestedCredentials,
    wallet::{record_store::RecordStore, search::TagQuery},
};
use base64::Engine;
use messages::{decorators::attachment::AttachmentType, PresentProof};
use test_utils::{
    constants::*,
    devsetup::SetupMocks,
    mockdata::{mock_anoncreds::MockAnoncreds, mock_ledger::MockLedger},
};

use crate::utils::{proof_service, proof_service_with_config, requested_credentials};

fn holder_anoncreds() -> MockAnoncreds {
    MockAnoncreds::default()
        .with_credential(revocable_credential_info(CRED_ID))
        .with_credential(credential_info(CRED_ID_2))
}

#[tokio::test]
async fn test_create_request_without_connection() {
    let setup = SetupMocks::init();
    let service = proof_service(&setup);
    let ctx = setup.context();

    let (message, record) = service
        .create_request(&ctx, &proof_request(), None)
        .await
        .unwrap();

    let attach = &message.content.request_presentations_attach[0];
    assert_eq!(attach.id.as_deref(), Some("libindy-request-presentation-0"));
    assert_eq!(record.state(), None);
    assert_eq!(record.role(), Some(ProofRole::Requestor));
    assert_eq!(record.connection_id(), None);
    assert_eq!(
        message.decorators.thread.as_ref().map(|t| t.thid.as_str()),
        record.thread_id()
    );
    assert_eq!(message.id, record.thread_id().unwrap());
    assert!(message.decorators.service.is_none());

    let stored = service.get(&ctx, record.id()).await.unwrap();
    assert_eq!(stored, record);
    assert_eq!(
        get_request_json(&message).unwrap(),
        serde_json::to_string(&proof_request()).unwrap()
    );
}

#[tokio::test]
async fn test_create_request_requires_established_connection() {
    let setup = SetupMocks::init();
    let service = proof_service(&setup);
    let ctx = setup.context();

    let (_, record) = service
        .create_request(&ctx, &proof_request(), Some(CONNECTION_ID))
        .await
        .unwrap();
    assert_eq!(record.connection_id(), Some(CONNECTION_ID));

    let err = service
        .create_request(&ctx, &proof_request(), Some(CONNECTION_ID_PENDING))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), AriesProofErrorKind::InvalidState);
    assert_eq!(err.operation(), Some("create_request"));

    let err = service
        .create_request(&ctx, &proof_request(), Some("unknown-connection"))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), AriesProofErrorKind::NotFound);
    assert_eq!(setup.record_store.len(), 1);
}

#[tokio::test]
async fn test_create_request_json_rejects_empty_request() {
    let setup = SetupMocks::init();
    let service = proof_service(&setup);

    let err = service
        .create_request_json(&setup.context(), "  ", None)
        .await
        .unwrap_err();

    assert_eq!(err.kind(), AriesProofErrorKind::InvalidInput);
    assert!(setup.record_store.is_empty());
}

#[tokio::test]
async fn test_connectionless_request_carries_service_and_request_data() {
    let setup = SetupMocks::init();
    let service = proof_service(&setup);
    let ctx = setup.context();

    let (message, record) = service
        .create_connectionless_request(&ctx, &proof_request())
        .await
        .unwrap();

    let decorator = message.decorators.service.as_ref().unwrap();
    assert_eq!(decorator.recipient_keys, vec![VERKEY.to_owned()]);
    assert_eq!(decorator.routing_keys, vec![ROUTING_KEY.to_owned()]);
    assert_eq!(decorator.service_endpoint.as_str(), ENDPOINT);

    let stored = service.get(&ctx, record.id()).await.unwrap();
    let request_data = stored.get_tag(TAG_REQUEST_DATA).unwrap();
    let wire = aries_proof::utils::base64::URL_SAFE_LENIENT
        .decode(request_data)
        .unwrap();
    let redelivered: PresentProof = serde_json::from_slice(&wire).unwrap();
    assert_eq!(redelivered, PresentProof::from(message));
    assert_eq!(stored.version(), 0);
}

#[tokio::test]
async fn test_process_request_creates_holder_record() {
    let verifier = SetupMocks::init();
    let holder = SetupMocks::init();
    let (request, _) = proof_service(&verifier)
        .create_request(&verifier.context(), &proof_request(), None)
        .await
        .unwrap();
    let thread_id = request.decorators.thread.as_ref().unwrap().thid.clone();

    let record = proof_service(&holder)
        .process_request(&holder.context(), &request, Some(CONNECTION_ID))
        .await
        .unwrap();

    assert_eq!(record.state(), Some(ProofState::Requested));
    assert_eq!(record.role(), Some(ProofRole::Holder));
    assert_eq!(record.thread_id(), Some(thread_id.as_str()));
    assert_eq!(record.connection_id(), Some(CONNECTION_ID));

    let events = holder.events.events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].record_id, record.id());
    assert_eq!(events[0].thread_id, thread_id);
    assert_eq!(
        events[0].message_type,
        "https://didcomm.org/present-proof/1.0/request-presentation"
    );
}

#[tokio::test]
async fn test_process_request_with_legacy_type_reports_canonical_type() {
    let verifier = SetupMocks::init();
    let holder = SetupMocks::init();
    let (request, _) = proof_service(&verifier)
        .create_request(&verifier.context(), &proof_request(), None)
        .await
        .unwrap();
    let mut value = serde_json::to_value(PresentProof::from(request)).unwrap();
    value["@type"] = serde_json::Value::String(
        "did:sov:BzCbsNYhMrjHiqZDTUASHg;spec/present-proof/1.0/request-presentation".to_owned(),
    );
    let PresentProof::RequestPresentation(received) = serde_json::from_value(value).unwrap() else {
        panic!("expected a presentation request");
    };

    let record = proof_service(&holder)
        .process_request(&holder.context(), &received, None)
        .await
        .unwrap();

    let events = holder.events.events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].record_id, record.id());
    assert_eq!(
        events[0].message_type,
        "https://didcomm.org/present-proof/1.0/request-presentation"
    );
}

#[tokio::test]
async fn test_process_request_without_attachment_is_malformed() {
    let verifier = SetupMocks::init();
    let holder = SetupMocks::init();
    let (mut request, _) = proof_service(&verifier)
        .create_request(&verifier.context(), &proof_request(), None)
        .await
        .unwrap();
    request.content.request_presentations_attach[0].id = Some("something-else".to_owned());

    let err = proof_service(&holder)
        .process_request(&holder.context(), &request, None)
        .await
        .unwrap_err();

    assert_eq!(err.kind(), AriesProofErrorKind::MalformedMessage);
    assert_eq!(err.category(), ErrorCategory::FixRequest);
    assert!(holder.record_store.is_empty());
    assert!(holder.events.events().is_empty());
}

#[tokio::test]
async fn test_create_presentation_with_revocable_credential() {
    let verifier = SetupMocks::init();
    let holder = SetupMocks::init().with_anoncreds(holder_anoncreds());
    let holder_service = proof_service(&holder);
    let (request, _) = proof_service(&verifier)
        .create_request(&verifier.context(), &proof_request(), None)
        .await
        .unwrap();
    let record = holder_service
        .process_request(&holder.context(), &request, None)
        .await
        .unwrap();

    let (presentation, record) = holder_service
        .create_presentation(
            &holder.context(),
            record.id(),
            &requested_credentials((CRED_ID, Some(TIMESTAMP)), (CRED_ID_2, None)),
        )
        .await
        .unwrap();

    assert_eq!(record.state(), Some(ProofState::Accepted));
    assert!(record.proof_json().is_some());
    assert_eq!(
        presentation.content.presentations_attach[0].id.as_deref(),
        Some(AttachmentId::Presentation.as_ref())
    );
    assert_eq!(
        Some(presentation.decorators.thread.thid.as_str()),
        record.thread_id()
    );

    assert_eq!(holder.ledger.schema_fetch_count(SCHEMA_ID), 1);
    assert_eq!(holder.ledger.cred_def_fetch_count(CRED_DEF_ID), 1);
    assert_eq!(holder.anoncreds.revocation_state_count(), 1);

    let inputs = holder.anoncreds.last_proof_inputs().unwrap();
    assert_eq!(inputs.master_secret_id, MASTER_SECRET_ID);
    assert_eq!(inputs.schemas.len(), 1);
    assert_eq!(inputs.credential_defs.len(), 1);
    assert!(inputs.revoc_states[REV_REG_ID].contains_key("1700000000"));

    let stored = holder_service
        .get(&holder.context(), record.id())
        .await
        .unwrap();
    assert_eq!(stored.state(), Some(ProofState::Accepted));
    assert_eq!(stored.version(), 1);
}

#[tokio::test]
async fn test_create_presentation_shares_revocation_state() {
    let holder = SetupMocks::init().with_anoncreds(
        MockAnoncreds::default()
            .with_credential(revocable_credential_info(CRED_ID))
            .with_credential(revocable_credential_info(CRED_ID_2)),
    );
    let service = proof_service(&holder);
    let ctx = holder.context();
    let (request, _) = service
        .create_request(&ctx, &proof_request(), None)
        .await
        .unwrap();
    let record = service.process_request(&ctx, &request, None).await.unwrap();

    service
        .create_presentation(
            &ctx,
            record.id(),
            &requested_credentials((CRED_ID, Some(TIMESTAMP)), (CRED_ID_2, Some(TIMESTAMP))),
        )
        .await
        .unwrap();

    assert_eq!(holder.anoncreds.revocation_state_count(), 1);
    assert_eq!(holder.ledger.rev_reg_def_fetch_count(REV_REG_ID), 1);
    assert_eq!(holder.ledger.delta_fetch_count(REV_REG_ID), 1);
    assert_eq!(holder.tails.ensure_count(REV_REG_ID), 1);
    assert_eq!(holder.tails.open_count(REV_REG_ID), 1);
}

#[tokio::test]
async fn test_create_presentation_missing_timestamp_leaves_record_untouched() {
    let holder = SetupMocks::init().with_anoncreds(holder_anoncreds());
    let service = proof_service(&holder);
    let ctx = holder.context();
    let (request, _) = service
        .create_request(&ctx, &proof_request(), None)
        .await
        .unwrap();
    let record = service.process_request(&ctx, &request, None).await.unwrap();

    let err = service
        .create_presentation(
            &ctx,
            record.id(),
            &requested_credentials((CRED_ID, None), (CRED_ID_2, None)),
        )
        .await
        .unwrap_err();

    assert_eq!(err.kind(), AriesProofErrorKind::MalformedMessage);
    assert_eq!(err.operation(), Some("create_presentation"));
    let stored = service.get(&ctx, record.id()).await.unwrap();
    assert_eq!(stored, record);
    assert_eq!(holder.anoncreds.last_proof_inputs(), None);
}

#[tokio::test]
async fn test_create_presentation_crypto_failure_leaves_record_untouched() {
    let holder =
        SetupMocks::init().with_anoncreds(holder_anoncreds().with_failing_proof_creation());
    let service = proof_service(&holder);
    let ctx = holder.context();
    let (request, _) = service
        .create_request(&ctx, &proof_request(), None)
        .await
        .unwrap();
    let record = service.process_request(&ctx, &request, None).await.unwrap();

    let err = service
        .create_presentation(
            &ctx,
            record.id(),
            &requested_credentials((CRED_ID, Some(TIMESTAMP)), (CRED_ID_2, None)),
        )
        .await
        .unwrap_err();

    assert_eq!(err.kind(), AriesProofErrorKind::CryptoFailure);
    assert_eq!(err.category(), ErrorCategory::ContactSupport);
    let stored = service.get(&ctx, record.id()).await.unwrap();
    assert_eq!(stored.state(), Some(ProofState::Requested));
    assert_eq!(stored.proof_json(), None);
}

#[tokio::test]
async fn test_create_presentation_ledger_unavailable() {
    let holder = SetupMocks::init()
        .with_anoncreds(holder_anoncreds())
        .with_ledger(MockLedger::unavailable());
    let service = proof_service(&holder);
    let ctx = holder.context();
    let (request, _) = service
        .create_request(&ctx, &proof_request(), None)
        .await
        .unwrap();
    let record = service.process_request(&ctx, &request, None).await.unwrap();

    let err = service
        .create_presentation(
            &ctx,
            record.id(),
            &requested_credentials((CRED_ID, Some(TIMESTAMP)), (CRED_ID_2, None)),
        )
        .await
        .unwrap_err();

    assert_eq!(err.kind(), AriesProofErrorKind::LedgerUnavailable);
    assert_eq!(err.category(), ErrorCategory::RetryLater);
    let stored = service.get(&ctx, record.id()).await.unwrap();
    assert_eq!(stored.state(), Some(ProofState::Requested));
}

#[tokio::test]
async fn test_create_presentation_twice_is_invalid_state() {
    let holder = SetupMocks::init().with_anoncreds(holder_anoncreds());
    let service = proof_service(&holder);
    let ctx = holder.context();
    let (request, _) = service
        .create_request(&ctx, &proof_request(), None)
        .await
        .unwrap();
    let record = service.process_request(&ctx, &request, None).await.unwrap();
    let creds = requested_credentials((CRED_ID, Some(TIMESTAMP)), (CRED_ID_2, None));
    service
        .create_presentation(&ctx, record.id(), &creds)
        .await
        .unwrap();

    let err = service
        .create_presentation(&ctx, record.id(), &creds)
        .await
        .unwrap_err();

    assert_eq!(err.kind(), AriesProofErrorKind::InvalidState);
    assert_eq!(err.msg(), "expected Requested, found Accepted");
}

#[tokio::test]
async fn test_full_exchange_and_verification() {
    let verifier = SetupMocks::init();
    let holder = SetupMocks::init().with_anoncreds(holder_anoncreds());
    let verifier_service = proof_service(&verifier);
    let holder_service = proof_service(&holder);

    let (request, verifier_record) = verifier_service
        .create_request(&verifier.context(), &proof_request(), Some(CONNECTION_ID))
        .await
        .unwrap();
    let holder_record = holder_service
        .process_request(&holder.context(), &request, Some(CONNECTION_ID))
        .await
        .unwrap();
    let (presentation, _) = holder_service
        .create_presentation(
            &holder.context(),
            holder_record.id(),
            &requested_credentials((CRED_ID, Some(TIMESTAMP)), (CRED_ID_2, None)),
        )
        .await
        .unwrap();

    let accepted = verifier_service
        .process_presentation(&verifier.context(), &presentation)
        .await
        .unwrap();
    assert_eq!(accepted.id(), verifier_record.id());
    assert_eq!(accepted.state(), Some(ProofState::Accepted));
    assert!(accepted.proof_json().is_some());

    let events = verifier.events.events();
    assert_eq!(events.len(), 1);
    assert_eq!(
        events[0].message_type,
        "https://didcomm.org/present-proof/1.0/presentation"
    );
    assert_eq!(events[0].record_id, verifier_record.id());

    let valid = verifier_service
        .verify_proof(&verifier.context(), verifier_record.id())
        .await
        .unwrap();
    assert!(valid);

    let inputs = verifier.anoncreds.last_verify_inputs().unwrap();
    assert_eq!(inputs.schemas.len(), 1);
    assert_eq!(inputs.credential_defs.len(), 1);
    assert_eq!(inputs.rev_reg_defs.len(), 1);
    assert!(inputs.rev_reg_deltas[REV_REG_ID].contains_key("1700000000"));
    assert_eq!(verifier.ledger.schema_fetch_count(SCHEMA_ID), 1);
}

#[tokio::test]
async fn test_process_presentation_on_accepted_record_fails() {
    let verifier = SetupMocks::init();
    let service = proof_service(&verifier);
    let ctx = verifier.context();
    let (request, record) = service
        .create_request(&ctx, &proof_request(), None)
        .await
        .unwrap();
    let thread_id = request.decorators.thread.unwrap().thid;
    let presentation = build_presentation_msg(&thread_id, "{\"identifiers\":[]}");
    service.process_presentation(&ctx, &presentation).await.unwrap();

    let err = service
        .process_presentation(&ctx, &presentation)
        .await
        .unwrap_err();

    assert_eq!(err.kind(), AriesProofErrorKind::InvalidState);
    assert_eq!(err.msg(), "expected Requested, found Accepted");
    let stored = service.get(&ctx, record.id()).await.unwrap();
    assert_eq!(stored.version(), 1);
    assert_eq!(verifier.events.events().len(), 1);
}

#[tokio::test]
async fn test_process_presentation_unknown_thread_is_not_found() {
    let verifier = SetupMocks::init();
    let service = proof_service(&verifier);

    let presentation = build_presentation_msg("no-such-thread", "{}");
    let err = service
        .process_presentation(&verifier.context(), &presentation)
        .await
        .unwrap_err();

    assert_eq!(err.kind(), AriesProofErrorKind::NotFound);
    assert_eq!(err.operation(), Some("process_presentation"));
}

#[tokio::test]
async fn test_process_presentation_without_attachment_is_malformed() {
    let verifier = SetupMocks::init();
    let service = proof_service(&verifier);
    let ctx = verifier.context();
    let (request, record) = service
        .create_request(&ctx, &proof_request(), None)
        .await
        .unwrap();
    let mut presentation =
        build_presentation_msg(&request.decorators.thread.unwrap().thid, "{}");
    presentation.content.presentations_attach[0].data.content =
        AttachmentType::Json(serde_json::json!({}));

    let err = service
        .process_presentation(&ctx, &presentation)
        .await
        .unwrap_err();

    assert_eq!(err.kind(), AriesProofErrorKind::MalformedMessage);
    let stored = service.get(&ctx, record.id()).await.unwrap();
    assert_eq!(stored.state(), None);
}

#[tokio::test]
async fn test_reject_request() {
    let holder = SetupMocks::init();
    let service = proof_service(&holder);
    let ctx = holder.context();
    let (request, _) = service
        .create_request(&ctx, &proof_request(), None)
        .await
        .unwrap();
    let record = service.process_request(&ctx, &request, None).await.unwrap();

    service.reject_request(&ctx, record.id()).await.unwrap();
    let stored = service.get(&ctx, record.id()).await.unwrap();
    assert_eq!(stored.state(), Some(ProofState::Rejected));

    let err = service.reject_request(&ctx, record.id()).await.unwrap_err();
    assert_eq!(err.kind(), AriesProofErrorKind::InvalidState);
    assert_eq!(err.msg(), "expected Requested, found Rejected");
    let unchanged = service.get(&ctx, record.id()).await.unwrap();
    assert_eq!(unchanged, stored);
}

#[tokio::test]
async fn test_verify_proof_requires_accepted_record() {
    let verifier = SetupMocks::init();
    let service = proof_service(&verifier);
    let ctx = verifier.context();
    let (_, record) = service
        .create_request(&ctx, &proof_request(), None)
        .await
        .unwrap();

    let err = service.verify_proof(&ctx, record.id()).await.unwrap_err();

    assert_eq!(err.kind(), AriesProofErrorKind::InvalidState);
    assert_eq!(err.msg(), "expected Accepted, found Requested");
    assert!(verifier.anoncreds.last_verify_inputs().is_none());
}

#[tokio::test]
async fn test_stateless_verification_fetches_shared_schema_once() {
    let verifier = SetupMocks::init()
        .with_anoncreds(MockAnoncreds::default().with_verify_result(false));
    let service = proof_service(&verifier);
    let proof = serde_json::json!({
        "proof": {},
        "requested_proof": {},
        "identifiers": [
            { "schema_id": SCHEMA_ID, "cred_def_id": CRED_DEF_ID, "rev_reg_id": null, "timestamp": null },
            { "schema_id": SCHEMA_ID, "cred_def_id": CRED_DEF_ID_2, "rev_reg_id": null, "timestamp": null }
        ]
    })
    .to_string();
    let request_json = serde_json::to_string(&proof_request()).unwrap();

    let valid = service
        .verify_proof_json(&verifier.context(), &request_json, &proof)
        .await
        .unwrap();

    assert!(!valid);
    assert_eq!(verifier.ledger.schema_fetch_count(SCHEMA_ID), 1);
    assert_eq!(verifier.ledger.cred_def_fetch_count(CRED_DEF_ID), 1);
    assert_eq!(verifier.ledger.cred_def_fetch_count(CRED_DEF_ID_2), 1);
    let inputs = verifier.anoncreds.last_verify_inputs().unwrap();
    assert_eq!(inputs.schemas.len(), 1);
    assert!(inputs.rev_reg_defs.is_empty());
    assert!(inputs.rev_reg_deltas.is_empty());
    assert!(verifier.record_store.is_empty());
}

#[tokio::test]
async fn test_connectionless_presentation_is_sent_to_service() {
    let verifier = SetupMocks::init();
    let holder = SetupMocks::init().with_anoncreds(holder_anoncreds());
    let (request, _) = proof_service(&verifier)
        .create_connectionless_request(&verifier.context(), &proof_request())
        .await
        .unwrap();

    let record = proof_service(&holder)
        .create_presentation_from_request(
            &holder.context(),
            &request,
            &requested_credentials((CRED_ID, Some(TIMESTAMP)), (CRED_ID_2, None)),
        )
        .await
        .unwrap();

    assert_eq!(record.state(), Some(ProofState::Accepted));
    let sent = holder.transport.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].recipient_key, VERKEY);
    assert_eq!(sent[0].endpoint.as_str(), ENDPOINT);
    assert_eq!(sent[0].routing_keys, vec![ROUTING_KEY.to_owned()]);
    let PresentProof::Presentation(presentation) = &sent[0].message else {
        panic!("expected a presentation to be sent");
    };
    assert_eq!(
        Some(presentation.decorators.thread.thid.as_str()),
        record.thread_id()
    );
}

#[tokio::test]
async fn test_connectionless_presentation_requires_service_decorator() {
    let verifier = SetupMocks::init();
    let holder = SetupMocks::init().with_anoncreds(holder_anoncreds());
    let (request, _) = proof_service(&verifier)
        .create_request(&verifier.context(), &proof_request(), None)
        .await
        .unwrap();

    let err = proof_service(&holder)
        .create_presentation_from_request(
            &holder.context(),
            &request,
            &requested_credentials((CRED_ID, Some(TIMESTAMP)), (CRED_ID_2, None)),
        )
        .await
        .unwrap_err();

    assert_eq!(err.kind(), AriesProofErrorKind::MalformedMessage);
    assert!(holder.record_store.is_empty());
    assert!(holder.transport.sent().is_empty());
}

#[tokio::test]
async fn test_connectionless_presentation_failure_is_tagged_with_invoked_operation() {
    let verifier = SetupMocks::init();
    let holder =
        SetupMocks::init().with_anoncreds(holder_anoncreds().with_failing_proof_creation());
    let (request, _) = proof_service(&verifier)
        .create_connectionless_request(&verifier.context(), &proof_request())
        .await
        .unwrap();

    let err = proof_service(&holder)
        .create_presentation_from_request(
            &holder.context(),
            &request,
            &requested_credentials((CRED_ID, Some(TIMESTAMP)), (CRED_ID_2, None)),
        )
        .await
        .unwrap_err();

    assert_eq!(err.kind(), AriesProofErrorKind::CryptoFailure);
    assert_eq!(err.operation(), Some("create_presentation_from_request"));
    assert!(holder.transport.sent().is_empty());
}

#[tokio::test]
async fn test_get_missing_record_is_not_found() {
    let setup = SetupMocks::init();
    let err = proof_service(&setup)
        .get(&setup.context(), "missing")
        .await
        .unwrap_err();

    assert_eq!(err.kind(), AriesProofErrorKind::NotFound);
    assert_eq!(err.operation(), Some("get"));
}

#[tokio::test]
async fn test_get_by_thread_id() {
    let setup = SetupMocks::init();
    let service = proof_service(&setup);
    let ctx = setup.context();
    let (request, record) = service
        .create_request(&ctx, &proof_request(), None)
        .await
        .unwrap();
    let thread_id = request.decorators.thread.clone().unwrap().thid;

    let found = service.get_by_thread_id(&ctx, &thread_id).await.unwrap();
    assert_eq!(found.id(), record.id());

    // the holder side of the same exchange, stored in the same wallet
    service.process_request(&ctx, &request, None).await.unwrap();
    let err = service
        .get_by_thread_id(&ctx, &thread_id)
        .await
        .unwrap_err();
    assert_eq!(err.kind(), AriesProofErrorKind::InvalidState);
}

#[tokio::test]
async fn test_list_with_query_and_count() {
    let setup = SetupMocks::init();
    let service = proof_service_with_config(
        &setup,
        ProofServiceConfig::builder().search_limit(2).build(),
    );
    let ctx = setup.context();
    for _ in 0..3 {
        let (request, _) = service
            .create_request(&ctx, &proof_request(), None)
            .await
            .unwrap();
        service.process_request(&ctx, &request, None).await.unwrap();
    }

    assert_eq!(service.list(&ctx, None, None).await.unwrap().len(), 2);
    assert_eq!(service.list(&ctx, None, Some(10)).await.unwrap().len(), 6);

    let holders = TagQuery::new().eq("role", "holder");
    let records = service.list(&ctx, Some(&holders), Some(10)).await.unwrap();
    assert_eq!(records.len(), 3);
    assert!(records
        .iter()
        .all(|record| record.role() == Some(ProofRole::Holder)));
}

#[tokio::test]
async fn test_list_credentials_for_proof_request() {
    let holder = SetupMocks::init().with_anoncreds(holder_anoncreds());
    let service = proof_service(&holder);
    let ctx = holder.context();

    let credentials = service
        .list_credentials_for_proof_request(&ctx, &proof_request(), "name_1")
        .await
        .unwrap();
    assert_eq!(credentials.len(), 2);
    assert_eq!(holder.anoncreds.search_limits(), vec![100]);

    let err = service
        .list_credentials_for_proof_request(&ctx, &proof_request(), "height_9")
        .await
        .unwrap_err();
    assert_eq!(err.kind(), AriesProofErrorKind::InvalidInput);
    assert!(holder.record_store.is_empty());
}

#[tokio::test]
async fn test_concurrent_update_is_rejected() {
    let holder = SetupMocks::init();
    let service = proof_service(&holder);
    let ctx = holder.context();
    let (request, _) = service
        .create_request(&ctx, &proof_request(), None)
        .await
        .unwrap();
    let record = service.process_request(&ctx, &request, None).await.unwrap();

    // a competing writer commits first
    let competing = holder
        .record_store
        .snapshot("ProofRecord", record.id())
        .unwrap();
    holder.record_store.update_record(competing).await.unwrap();

    let err = service
        .create_presentation_for_record(&ctx, record.clone(), &RequestedCredentials::default())
        .await
        .unwrap_err();

    assert_eq!(err.kind(), AriesProofErrorKind::RecordVersionConflict);
    let stored = service.get(&ctx, record.id()).await.unwrap();
    assert_eq!(stored.state(), Some(ProofState::Requested));
    assert_eq!(stored.version(), 1);
}
