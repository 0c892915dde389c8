use serde::{Deserialize, Serialize};

use crate::consts::consts::EntityId;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Person {
    pub id: EntityId,
    pub name: String,
    pub age: i64,
    pub hobbies: Vec<String>,
}

impl Person {
    pub fn new(name: String, age: i64, hobbies: Vec<String>) -> Self {
        Person {
            id: EntityId::new(),
            name,
            age,
            hobbies,
        }
    }

    /// Builds the record to persist from a payload that has already passed validation
    pub fn from_payload(id: EntityId, payload: PersonPayload) -> Self {
        Person {
            id,
            name: payload.name,
            age: payload.age,
            hobbies: payload.hobbies.unwrap_or_default(),
        }
    }

    pub fn new_test() -> Self {
        Person {
            id: EntityId("1".to_string()),
            name: "Full Name".to_string(),
            age: 30,
            hobbies: vec!["Reading".to_string()],
        }
    }
}

/// Body of a create or update request.
///
/// Missing fields fall back to their empty value so that the validator, not the decoder, rejects
/// them. `hobbies` stays an `Option` because `null` / absent is invalid while `[]` is not.
/// Any `id` sent by the client is ignored.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct PersonPayload {
    pub name: String,
    pub age: i64,
    pub hobbies: Option<Vec<String>>,
}
