use actix_web::{http::header::ContentType, HttpResponse};

const LANDING_PAGE: &str = include_str!("../../../web/index.html");

/// Static landing page served at `/`.
pub async fn index() -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(LANDING_PAGE)
}
