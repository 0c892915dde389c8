use actix_web::{
    delete, get,
    http::{header::ContentType, StatusCode},
    post, put, web, HttpResponse, ResponseError,
};
use thiserror::Error;

use crate::{
    consts::consts::{
        EntityId, CREATE_VALIDATION_MESSAGE, NO_PERSONS_FOUND, ROUTE_NOT_FOUND,
        UPDATE_VALIDATION_MESSAGE,
    },
    database::store::{PersonStore, StoreError},
    model::{
        person::{Person, PersonPayload},
        validation::{validate, ValidationError},
    },
};

#[derive(Error, Debug)]
pub enum PersonApiError {
    /// Body is not a JSON object of the person shape
    #[error("{0}")]
    MalformedBody(#[from] serde_json::Error),

    /// Body decoded but failed validation, `message` is what the caller sees
    #[error("{message}")]
    Invalid {
        message: &'static str,
        #[source]
        reason: ValidationError,
    },

    #[error(transparent)]
    NotFound(#[from] StoreError),
}

impl ResponseError for PersonApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            PersonApiError::MalformedBody(_) | PersonApiError::Invalid { .. } => {
                StatusCode::BAD_REQUEST
            }
            PersonApiError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    fn error_response(&self) -> HttpResponse {
        plain_text(self.status_code(), &self.to_string())
    }
}

/// Plain text body terminated by a newline, used for every non JSON response
pub fn plain_text(status: StatusCode, message: &str) -> HttpResponse {
    HttpResponse::build(status)
        .content_type(ContentType::plaintext())
        .body(format!("{}\n", message))
}

/// Decodes then validates, the caller checks existence afterwards so an invalid body always wins
/// over a missing id
fn decode_payload(
    body: &web::Bytes,
    invalid_message: &'static str,
) -> Result<PersonPayload, PersonApiError> {
    let payload: PersonPayload = serde_json::from_slice(body)?;

    validate(&payload).map_err(|reason| {
        log::debug!("Rejected person payload: {}", reason);

        PersonApiError::Invalid {
            message: invalid_message,
            reason,
        }
    })?;

    Ok(payload)
}

#[post("/person")]
pub async fn create_person(
    store: web::Data<PersonStore>,
    body: web::Bytes,
) -> Result<HttpResponse, PersonApiError> {
    let payload = decode_payload(&body, CREATE_VALIDATION_MESSAGE)?;

    let person = Person::from_payload(EntityId::new(), payload);

    store.add(person.clone());

    log::info!("✅ Created person [id: {}]", person.id);

    Ok(HttpResponse::Ok().json(person))
}

#[get("/person/{id}")]
pub async fn get_person(
    store: web::Data<PersonStore>,
    path: web::Path<String>,
) -> Result<HttpResponse, PersonApiError> {
    let id = EntityId(path.into_inner());

    log::debug!("Get person [id: {}]", id);

    let person = store.get(&id)?;

    Ok(HttpResponse::Ok().json(person))
}

/// An empty store answers with a plain text message rather than `[]`
#[get("/person")]
pub async fn get_all_persons(store: web::Data<PersonStore>) -> HttpResponse {
    let persons = store.get_all();

    log::debug!("List persons [count: {}]", persons.len());

    if persons.is_empty() {
        return plain_text(StatusCode::OK, NO_PERSONS_FOUND);
    }

    HttpResponse::Ok().json(persons)
}

#[put("/person/{id}")]
pub async fn update_person(
    store: web::Data<PersonStore>,
    path: web::Path<String>,
    body: web::Bytes,
) -> Result<HttpResponse, PersonApiError> {
    let payload = decode_payload(&body, UPDATE_VALIDATION_MESSAGE)?;

    // Path id always wins over anything in the body
    let person = Person::from_payload(EntityId(path.into_inner()), payload);

    let updated = store.update(person)?;

    log::info!("✅ Updated person [id: {}]", updated.id);

    Ok(HttpResponse::Ok().json(updated))
}

#[delete("/person/{id}")]
pub async fn delete_person(
    store: web::Data<PersonStore>,
    path: web::Path<String>,
) -> Result<HttpResponse, PersonApiError> {
    let id = EntityId(path.into_inner());

    store.delete(&id)?;

    log::info!("✅ Deleted person [id: {}]", id);

    Ok(HttpResponse::NoContent().finish())
}

/// Fallback for every unmatched path or method
pub async fn not_found() -> HttpResponse {
    plain_text(StatusCode::NOT_FOUND, ROUTE_NOT_FOUND)
}
