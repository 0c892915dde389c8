use actix_cors::Cors;
use actix_web::{http::header, web};

use super::handlers::{
    create_person, delete_person, get_all_persons, get_person, not_found, update_person,
};

/// Registers the person endpoints plus the not found fallback
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(create_person)
        .service(get_all_persons)
        .service(get_person)
        .service(update_person)
        .service(delete_person)
        .default_service(web::route().to(not_found));
}

/// Static policy applied to every route: any origin, the four CRUD methods and `Content-Type`
pub fn cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .send_wildcard()
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE"])
        .allowed_header(header::CONTENT_TYPE)
}
