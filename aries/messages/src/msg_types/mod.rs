pub mod present_proof;

/// Prefix of message types using the current DIDComm type URI scheme.
pub const DIDCOMM_PREFIX: &str = "https://didcomm.org/";
/// Prefix still sent by older agents; accepted on input only.
pub const LEGACY_DIDCOMM_PREFIX: &str = "did:sov:BzCbsNYhMrjHiqZDTUASHg;spec/";
