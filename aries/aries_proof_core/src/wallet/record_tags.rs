use std::fmt;

use serde::{de::Visitor, ser::SerializeMap, Deserialize, Serialize};

pub type RecordTag = (String, String);

/// Unencrypted, queryable name/value pairs attached to a stored record.
///
/// Names are unique; setting an existing name replaces its value. Entries are kept sorted by name
/// so equality and serialization do not depend on insertion order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RecordTags {
    inner: Vec<RecordTag>,
}

impl RecordTags {
    pub fn new(inner: Vec<RecordTag>) -> Self {
        inner.into_iter().collect()
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.inner.binary_search_by(|(n, _)| n.as_str().cmp(&name)) {
            Ok(pos) => self.inner[pos].1 = value,
            Err(pos) => self.inner.insert(pos, (name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.inner
            .binary_search_by(|(n, _)| n.as_str().cmp(name))
            .ok()
            .map(|pos| self.inner[pos].1.as_str())
    }

    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.inner
            .binary_search_by(|(n, _)| n.as_str().cmp(name))
            .ok()
            .map(|pos| self.inner.remove(pos).1)
    }

    pub fn merge(&mut self, other: RecordTags) {
        for (name, value) in other {
            self.set(name, value);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.inner.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }
}

impl Serialize for RecordTags {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.inner.len()))?;
        for (name, value) in self.inner.iter() {
            map.serialize_entry(name, value)?
        }
        map.end()
    }
}

struct RecordTagsVisitor;

impl<'de> Visitor<'de> for RecordTagsVisitor {
    type Value = RecordTags;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "a map of tag names to string values")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::MapAccess<'de>,
    {
        let mut tags = RecordTags::default();
        while let Some((name, value)) = map.next_entry::<String, String>()? {
            tags.set(name, value);
        }
        Ok(tags)
    }
}

impl<'de> Deserialize<'de> for RecordTags {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_map(RecordTagsVisitor)
    }
}

impl IntoIterator for RecordTags {
    type Item = RecordTag;

    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

impl FromIterator<RecordTag> for RecordTags {
    fn from_iter<T: IntoIterator<Item = RecordTag>>(iter: T) -> Self {
        let mut tags = Self::default();
        for (name, value) in iter {
            tags.set(name, value);
        }
        tags
    }
}

impl From<Vec<RecordTag>> for RecordTags {
    fn from(value: Vec<RecordTag>) -> Self {
        value.into_iter().collect()
    }
}
