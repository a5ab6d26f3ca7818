use std::fmt;

use serde::Serialize;
use uuid::Uuid;

// New Type Pattern -- https://doc.rust-lang.org/rust-by-example/generics/new_types.html
#[derive(Serialize, Clone, Debug, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct EntityId(pub String);

impl EntityId {
    /// Generates a new random (v4) id, ids are never reused
    pub fn new() -> EntityId {
        EntityId(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for EntityId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for EntityId {
    fn from(value: String) -> Self {
        EntityId(value)
    }
}

impl From<&str> for EntityId {
    fn from(value: &str) -> Self {
        EntityId(value.to_string())
    }
}

// Values
pub const SEED_PERSON_ID: &str = "1";
pub const SEED_PERSON_NAME: &str = "Sam";
pub const SEED_PERSON_AGE: u64 = 26;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_are_unique() {
        let first = EntityId::new();
        let second = EntityId::new();

        assert_ne!(first, second);
        assert!(!first.as_str().is_empty());
    }

    #[test]
    fn serializes_as_a_plain_string() {
        let id = EntityId::from("abc");

        assert_eq!(serde_json::to_string(&id).unwrap(), "\"abc\"");
    }
}
