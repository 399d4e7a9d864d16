use strum_macros::{AsRefStr, EnumString};

use super::DIDCOMM_PREFIX;

pub const PROTOCOL_NAME: &str = "present-proof";
pub const PROTOCOL_VERSION: &str = "1.0";

#[derive(Copy, Clone, Debug, AsRefStr, EnumString, PartialEq, Eq)]
#[strum(serialize_all = "kebab-case")]
pub enum PresentProofTypeV1_0 {
    RequestPresentation,
    Presentation,
}

impl PresentProofTypeV1_0 {
    /// Full `@type` URI of the message kind.
    pub fn msg_type(&self) -> String {
        format!(
            "{DIDCOMM_PREFIX}{PROTOCOL_NAME}/{PROTOCOL_VERSION}/{}",
            self.as_ref()
        )
    }
}
