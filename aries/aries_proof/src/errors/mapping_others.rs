use std::string::FromUtf8Error;

use super::error::{AriesProofError, AriesProofErrorKind};

impl From<serde_json::Error> for AriesProofError {
    fn from(err: serde_json::Error) -> Self {
        AriesProofError::from_msg(AriesProofErrorKind::InvalidJson, err.to_string())
    }
}

impl From<base64::DecodeError> for AriesProofError {
    fn from(err: base64::DecodeError) -> Self {
        AriesProofError::from_msg(
            AriesProofErrorKind::MalformedMessage,
            format!("Attachment is not valid base64: {err}"),
        )
    }
}

impl From<FromUtf8Error> for AriesProofError {
    fn from(err: FromUtf8Error) -> Self {
        AriesProofError::from_msg(
            AriesProofErrorKind::MalformedMessage,
            format!("Attachment is not valid UTF-8: {err}"),
        )
    }
}
