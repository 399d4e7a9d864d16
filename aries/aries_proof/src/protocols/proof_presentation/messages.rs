use chrono::Utc;
use messages::{
    decorators::{service::Service, thread::Thread, timing::Timing},
    msg_fields::protocols::present_proof::v1::{
        present::{PresentationV1, PresentationV1Content, PresentationV1Decorators},
        request::{
            RequestPresentationV1, RequestPresentationV1Content, RequestPresentationV1Decorators,
        },
    },
    msg_parts::MsgParts,
};

use crate::{errors::error::prelude::*, handlers::util::AttachmentId};

/// Request message with id and `~thread` both set to `thread_id`. The `~service` decorator is
/// only present on connectionless requests.
pub fn build_request_presentation_msg(
    thread_id: &str,
    request_json: &str,
    service: Option<Service>,
) -> RequestPresentationV1 {
    trace!(
        "build_request_presentation_msg >>> thread_id: {}, service: {:?}",
        thread_id,
        service
    );
    let content = RequestPresentationV1Content::builder()
        .request_presentations_attach(vec![make_attach_from_str!(
            request_json,
            AttachmentId::RequestPresentation
        )])
        .build();
    let decorators = RequestPresentationV1Decorators {
        thread: Some(Thread::new(thread_id.to_owned())),
        service,
        timing: Some(Timing::builder().out_time(Utc::now()).build()),
    };

    MsgParts::with_decorators(thread_id.to_owned(), content, decorators)
}

/// Presentation message answering the request of `thread_id`.
pub fn build_presentation_msg(thread_id: &str, proof_json: &str) -> PresentationV1 {
    trace!("build_presentation_msg >>> thread_id: {}", thread_id);
    let content = PresentationV1Content::builder()
        .presentations_attach(vec![make_attach_from_str!(
            proof_json,
            AttachmentId::Presentation
        )])
        .build();
    let decorators = PresentationV1Decorators::builder()
        .thread(Thread::new(thread_id.to_owned()))
        .timing(Timing::builder().out_time(Utc::now()).build())
        .build();

    MsgParts::with_decorators(thread_id.to_owned(), content, decorators)
}

pub fn get_request_json(msg: &RequestPresentationV1) -> ProofResult<String> {
    Ok(get_attach_as_string!(
        &msg.content.request_presentations_attach,
        AttachmentId::RequestPresentation
    ))
}

pub fn get_proof_json(msg: &PresentationV1) -> ProofResult<String> {
    Ok(get_attach_as_string!(
        &msg.content.presentations_attach,
        AttachmentId::Presentation
    ))
}

/// Thread id of a request, taken from its `~thread` decorator only.
pub fn get_request_thread_id(msg: &RequestPresentationV1) -> ProofResult<&str> {
    msg.decorators
        .thread
        .as_ref()
        .map(|thread| thread.thid.as_str())
        .ok_or_else(|| {
            AriesProofError::from_msg(
                AriesProofErrorKind::MalformedMessage,
                format!("Request presentation {} has no ~thread decorator", msg.id),
            )
        })
}

pub fn get_presentation_thread_id(msg: &PresentationV1) -> &str {
    &msg.decorators.thread.thid
}
