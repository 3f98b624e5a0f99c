use actix_cors::Cors;
use actix_web::middleware::DefaultHeaders;
use actix_web::{HttpResponse, Route, web};
use chrono::{DateTime, Utc};
use serde::Serialize;

pub fn build_cors(origins: &[String]) -> Cors {
    let mut cors = Cors::default()
        .allowed_methods(vec!["GET", "POST", "PATCH", "DELETE"])
        .allowed_headers(vec![actix_web::http::header::CONTENT_TYPE])
        .expose_headers(vec!["x-request-id"])
        .max_age(3600);

    for origin in origins {
        cors = cors.allowed_origin(origin);
    }

    cors
}

pub fn security_headers() -> DefaultHeaders {
    DefaultHeaders::new()
        .add(("X-Content-Type-Options", "nosniff"))
        .add(("Referrer-Policy", "no-referrer"))
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub timestamp: DateTime<Utc>,
}

/// `GET /health` route reporting the given service name.
pub fn health(service: &'static str) -> Route {
    web::get().to(move || async move {
        HttpResponse::Ok().json(HealthResponse {
            status: "ok",
            service,
            timestamp: Utc::now(),
        })
    })
}
