//! Identifier newtypes for externally owned entities.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An identifier assigned by the external store (team, league, sport, ...).
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(String);

impl EntityId {
    /// Create a new EntityId.
    pub fn new(id: String) -> Self {
        Self(id)
    }

    /// Get the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EntityId({})", self.0)
    }
}

impl From<String> for EntityId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for EntityId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Type alias for team IDs
pub type TeamId = EntityId;

/// Type alias for sport IDs
pub type SportId = EntityId;

/// Type alias for league IDs
pub type LeagueId = EntityId;

/// Type alias for division IDs
pub type DivisionId = EntityId;

/// Type alias for sport event IDs
pub type EventId = EntityId;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_id_serialization_is_transparent() {
        let id = EntityId::from("team-42");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"team-42\"");

        let deserialized: EntityId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }

    #[test]
    fn test_entity_id_display() {
        let id = EntityId::new("abc123".to_string());
        assert_eq!(format!("{}", id), "abc123");
    }

    #[test]
    fn test_entity_id_debug() {
        let id = EntityId::new("debug-test".to_string());
        let debug_str = format!("{:?}", id);
        assert!(debug_str.contains("debug-test"));
    }

    #[test]
    fn test_entity_id_equality() {
        let id1 = EntityId::from("same");
        let id2 = EntityId::from("same".to_string());
        let id3 = EntityId::from("different");
        assert_eq!(id1, id2);
        assert_ne!(id1, id3);
    }
}
