use serde::{Deserialize, Serialize};

/// MIME type of an attachment payload. Unknown values are preserved verbatim.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(from = "String", into = "String")]
pub enum MimeType {
    Json,
    JsonLd,
    Plain,
    Other(String),
}

impl MimeType {
    const JSON: &'static str = "application/json";
    const JSON_LD: &'static str = "application/ld+json";
    const PLAIN: &'static str = "text/plain";
}

impl AsRef<str> for MimeType {
    fn as_ref(&self) -> &str {
        match self {
            Self::Json => Self::JSON,
            Self::JsonLd => Self::JSON_LD,
            Self::Plain => Self::PLAIN,
            Self::Other(s) => s.as_ref(),
        }
    }
}

impl From<String> for MimeType {
    fn from(s: String) -> Self {
        match s.as_str() {
            Self::JSON => Self::Json,
            Self::JSON_LD => Self::JsonLd,
            Self::PLAIN => Self::Plain,
            _ => Self::Other(s),
        }
    }
}

impl From<MimeType> for String {
    fn from(value: MimeType) -> Self {
        value.as_ref().to_owned()
    }
}
