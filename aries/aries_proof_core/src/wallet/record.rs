use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

use super::record_tags::RecordTags;

/// A stored item: JSON value plus tags, addressed by `(category, id)`.
///
/// `version` is assigned by the store and bumped on every successful update.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize, TypedBuilder)]
pub struct Record {
    #[builder(setter(into))]
    category: String,
    #[builder(setter(into))]
    id: String,
    #[builder(setter(into))]
    value: String,
    #[builder(default)]
    tags: RecordTags,
    #[builder(default)]
    #[serde(default)]
    version: u64,
}

impl Record {
    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn tags(&self) -> &RecordTags {
        &self.tags
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn set_version(&mut self, version: u64) {
        self.version = version;
    }
}
