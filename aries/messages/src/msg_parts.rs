use serde::{Deserialize, Serialize};

/// A message split into its `@id`, its protocol fields and its decorators. The `@type` tag is
/// added by the enclosing protocol enum.
///
/// `~attach` is kept in the content: present-proof carries its payload there.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct MsgParts<C, D> {
    #[serde(rename = "@id")]
    pub id: String,
    #[serde(flatten)]
    pub content: C,
    #[serde(flatten)]
    pub decorators: D,
}

impl<C, D> MsgParts<C, D> {
    pub fn new(id: String, content: C) -> Self
    where
        D: Default,
    {
        Self::with_decorators(id, content, D::default())
    }

    pub fn with_decorators(id: String, content: C, decorators: D) -> Self {
        Self {
            id,
            content,
            decorators,
        }
    }
}
