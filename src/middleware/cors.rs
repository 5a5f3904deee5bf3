use actix_cors::Cors;
use actix_web::http::header;
use actix_web::middleware::Condition;

/// CORS for the configured origins. With no origins configured the layer is
/// disabled entirely, so same-origin callers such as the bundled Swagger UI
/// are never rejected over their `Origin` header.
pub fn cors(allowed_origins: &[String]) -> Condition<Cors> {
    let cors = allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allowed_methods(vec!["GET", "POST", "DELETE", "OPTIONS"])
        .allowed_headers(vec![header::CONTENT_TYPE, header::ACCEPT])
        .max_age(3600);

    Condition::new(!allowed_origins.is_empty(), cors)
}
