use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// New Type Pattern -- https://doc.rust-lang.org/rust-by-example/generics/new_types.html
//  Serialises as a bare string, e.g. `"id": "6f1c..."`
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
pub struct EntityId(pub String);

impl EntityId {
    /// Random v4 uuid, only ever assigned when a person is created
    pub fn new() -> EntityId {
        EntityId(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for EntityId {
    fn default() -> Self {
        EntityId::new()
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

// Values
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_HTTP_WORKERS: usize = 2;

// Response bodies
pub const NO_PERSONS_FOUND: &str = "No persons found";
pub const ROUTE_NOT_FOUND: &str = "404 Not Found";
pub const CREATE_VALIDATION_MESSAGE: &str =
    "name, age, and hobbies are required fields; hobbies should be an array of strings";
pub const UPDATE_VALIDATION_MESSAGE: &str =
    "name, age, and hobbies are required fields; hobbies should be an array of strings or empty array";
