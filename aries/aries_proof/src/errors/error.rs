use std::fmt;

pub mod prelude {
    pub use super::{err_msg, AriesProofError, AriesProofErrorKind, ErrorCategory, ProofResult};
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, thiserror::Error)]
pub enum AriesProofErrorKind {
    #[error("Object is in invalid state for requested operation")]
    InvalidState,
    #[error("Requested object was not found")]
    NotFound,
    #[error("Message is missing required content")]
    MalformedMessage,
    #[error("Ledger is unavailable")]
    LedgerUnavailable,
    #[error("Credential crypto operation failed")]
    CryptoFailure,
    #[error("Invalid JSON string")]
    InvalidJson,
    #[error("Invalid input parameter")]
    InvalidInput,
    #[error("Record was modified concurrently")]
    RecordVersionConflict,
    #[error("Unable to serialize")]
    SerializationError,
}

/// Who can act on a failure: the caller by fixing the request, the caller by retrying later, or
/// an operator.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum ErrorCategory {
    FixRequest,
    RetryLater,
    ContactSupport,
    Internal,
}

impl AriesProofErrorKind {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidState
            | Self::NotFound
            | Self::MalformedMessage
            | Self::InvalidJson
            | Self::InvalidInput => ErrorCategory::FixRequest,
            Self::LedgerUnavailable | Self::RecordVersionConflict => ErrorCategory::RetryLater,
            Self::CryptoFailure => ErrorCategory::ContactSupport,
            Self::SerializationError => ErrorCategory::Internal,
        }
    }
}

#[derive(thiserror::Error)]
pub struct AriesProofError {
    msg: String,
    kind: AriesProofErrorKind,
    operation: Option<&'static str>,
}

fn format_error(err: &AriesProofError, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match err.operation {
        Some(operation) => write!(f, "{} ({}): {}", err.kind, operation, err.msg),
        None => write!(f, "{}: {}", err.kind, err.msg),
    }
}

impl fmt::Display for AriesProofError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        format_error(self, f)
    }
}

impl fmt::Debug for AriesProofError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        format_error(self, f)
    }
}

impl AriesProofError {
    fn new(kind: AriesProofErrorKind, msg: String) -> Self {
        AriesProofError {
            msg,
            kind,
            operation: None,
        }
    }

    pub fn from_msg<D>(kind: AriesProofErrorKind, msg: D) -> AriesProofError
    where
        D: fmt::Display + fmt::Debug + Send + Sync + 'static,
    {
        Self::new(kind, msg.to_string())
    }

    pub fn kind(&self) -> AriesProofErrorKind {
        self.kind
    }

    pub fn msg(&self) -> &str {
        &self.msg
    }

    /// Name of the engine operation the error surfaced from, if it has been tagged.
    pub fn operation(&self) -> Option<&'static str> {
        self.operation
    }

    pub fn category(&self) -> ErrorCategory {
        self.kind.category()
    }

    /// Tags the error with the engine operation it surfaced from. Operations composed of other
    /// operations tag last, so the operation the caller invoked wins.
    pub fn in_operation(mut self, operation: &'static str) -> AriesProofError {
        self.operation = Some(operation);
        self
    }

    pub fn extend<D>(self, msg: D) -> AriesProofError
    where
        D: fmt::Display + fmt::Debug + Send + Sync + 'static,
    {
        AriesProofError {
            msg: format!("{}\n{}", self.msg, msg),
            ..self
        }
    }
}

pub fn err_msg<D>(kind: AriesProofErrorKind, msg: D) -> AriesProofError
where
    D: fmt::Display + fmt::Debug + Send + Sync + 'static,
{
    AriesProofError::from_msg(kind, msg)
}

pub type ProofResult<T> = Result<T, AriesProofError>;
