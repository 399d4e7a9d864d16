use super::record_tags::RecordTags;

/// Conjunction of tag equality predicates. The empty query matches every record.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TagQuery {
    predicates: Vec<(String, String)>,
}

impl TagQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn eq(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.predicates.push((name.into(), value.into()));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    pub fn matches(&self, tags: &RecordTags) -> bool {
        self.predicates
            .iter()
            .all(|(name, value)| tags.get(name) == Some(value.as_str()))
    }
}
