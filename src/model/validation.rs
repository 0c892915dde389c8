use thiserror::Error;

use super::person::PersonPayload;

#[derive(Error, Debug, PartialEq)]
pub enum ValidationError {
    #[error("name must not be empty")]
    EmptyName,

    #[error("age must be greater than 0, got {0}")]
    NonPositiveAge(i64),

    #[error("hobbies is required, use an empty array for no hobbies")]
    MissingHobbies,

    #[error("hobbies must not contain empty values, found one at index {0}")]
    EmptyHobby(usize),
}

/// Checks the payload of a create / update before it reaches the store. Does not look at the
/// store, so existence of the target record is checked afterwards.
pub fn validate(payload: &PersonPayload) -> Result<(), ValidationError> {
    if payload.name.is_empty() {
        return Err(ValidationError::EmptyName);
    }

    if payload.age <= 0 {
        return Err(ValidationError::NonPositiveAge(payload.age));
    }

    let hobbies = payload
        .hobbies
        .as_ref()
        .ok_or(ValidationError::MissingHobbies)?;

    if let Some(index) = hobbies.iter().position(|hobby| hobby.is_empty()) {
        return Err(ValidationError::EmptyHobby(index));
    }

    Ok(())
}

pub fn is_valid(payload: &PersonPayload) -> bool {
    validate(payload).is_ok()
}
