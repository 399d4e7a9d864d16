use std::fmt;

use crate::errors::error::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProofState {
    Requested,
    Accepted,
    Rejected,
}

impl ProofState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Accepted | Self::Rejected)
    }
}

impl fmt::Display for ProofState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Requested => "Requested",
            Self::Accepted => "Accepted",
            Self::Rejected => "Rejected",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProofTrigger {
    Accept,
    Reject,
}

impl ProofTrigger {
    pub fn source_state(&self) -> ProofState {
        ProofState::Requested
    }

    pub fn target_state(&self) -> ProofState {
        match self {
            Self::Accept => ProofState::Accepted,
            Self::Reject => ProofState::Rejected,
        }
    }
}

/// Fails with `InvalidState` unless `current` is `expected`.
pub fn ensure_state(current: ProofState, expected: ProofState) -> ProofResult<()> {
    if current == expected {
        Ok(())
    } else {
        Err(AriesProofError::from_msg(
            AriesProofErrorKind::InvalidState,
            format!("expected {expected}, found {current}"),
        ))
    }
}

/// The whole transition table: `Requested --Accept--> Accepted`, `Requested --Reject--> Rejected`.
pub fn transition(current: ProofState, trigger: ProofTrigger) -> ProofResult<ProofState> {
    ensure_state(current, trigger.source_state())?;
    Ok(trigger.target_state())
}
