use derive_more::From;
use serde::{Deserialize, Serialize};

use self::v1::{present::PresentationV1, request::RequestPresentationV1};
use crate::msg_types::present_proof::PresentProofTypeV1_0;

pub mod v1;

/// The present-proof 1.0 messages handled by this crate, discriminated by their `@type`.
#[derive(Clone, Debug, From, Deserialize, Serialize, PartialEq)]
#[serde(tag = "@type")]
pub enum PresentProof {
    #[serde(rename = "https://didcomm.org/present-proof/1.0/request-presentation")]
    #[serde(alias = "did:sov:BzCbsNYhMrjHiqZDTUASHg;spec/present-proof/1.0/request-presentation")]
    RequestPresentation(RequestPresentationV1),
    #[serde(rename = "https://didcomm.org/present-proof/1.0/presentation")]
    #[serde(alias = "did:sov:BzCbsNYhMrjHiqZDTUASHg;spec/present-proof/1.0/presentation")]
    Presentation(PresentationV1),
}

impl PresentProof {
    pub fn kind(&self) -> PresentProofTypeV1_0 {
        match self {
            Self::RequestPresentation(_) => PresentProofTypeV1_0::RequestPresentation,
            Self::Presentation(_) => PresentProofTypeV1_0::Presentation,
        }
    }

    pub fn msg_type(&self) -> String {
        self.kind().msg_type()
    }

    pub fn id(&self) -> &str {
        match self {
            Self::RequestPresentation(msg) => &msg.id,
            Self::Presentation(msg) => &msg.id,
        }
    }
}
