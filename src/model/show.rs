use serde::de::{self, Unexpected};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Shows.
///
/// Serialized as a bare integer, so a record reads `{"id": 1, ...}` on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShowId(pub u32);

impl From<u32> for ShowId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for ShowId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A TV show being tracked.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](crate::framework::ActorEntity) trait,
/// allowing it to be stored by a [`ResourceActor`](crate::framework::ResourceActor).
///
/// See [`impl ActorEntity for Show`](#impl-ActorEntity-for-Show) for details on:
/// - Creation parameters ([`ShowCreate`])
/// - Update parameters ([`ShowUpdate`])
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Show {
    pub id: ShowId,
    pub name: String,
    /// Signed: a create with a non-empty name is accepted even when the count is negative.
    pub episodes_seen: i64,
}

impl Show {
    /// Creates a new Show instance.
    pub fn new(id: ShowId, name: impl Into<String>, episodes_seen: i64) -> Self {
        Self {
            id,
            name: name.into(),
            episodes_seen,
        }
    }
}

/// Payload for creating a new show. Both keys must be present in the JSON body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShowCreate {
    pub name: String,
    pub episodes_seen: i64,
}

impl ShowCreate {
    /// A create is accepted when the name is non-empty **or** the count is non-negative.
    ///
    /// Only a payload failing both checks is rejected, so `{"name": "", "episodes_seen": 3}`
    /// and `{"name": "Dark", "episodes_seen": -1}` are both stored.
    pub fn is_acceptable(&self) -> bool {
        !self.name.is_empty() || self.episodes_seen >= 0
    }
}

/// Payload for updating an existing show.
///
/// Both keys must be present. An empty string in either field means "keep the stored
/// value" and deserializes to `None`; anything else replaces the stored value.
/// `episodes_seen` accepts an integer or `""`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ShowUpdate {
    #[serde(deserialize_with = "blank_as_none")]
    pub name: Option<String>,
    #[serde(deserialize_with = "count_or_blank")]
    pub episodes_seen: Option<i64>,
}

fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    Ok((!value.is_empty()).then_some(value))
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CountOrText {
    Count(i64),
    Text(String),
}

fn count_or_blank<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    match CountOrText::deserialize(deserializer)? {
        CountOrText::Count(count) => Ok(Some(count)),
        CountOrText::Text(text) if text.is_empty() => Ok(None),
        CountOrText::Text(text) => Err(de::Error::invalid_value(
            Unexpected::Str(&text),
            &"an integer or an empty string",
        )),
    }
}
