//! Request middleware: mock bearer auth, CORS, JSON error rendering.

use actix_cors::Cors;
use actix_web::{
    body::{EitherBody, MessageBody},
    dev::{ServiceRequest, ServiceResponse},
    http::{header, StatusCode},
    middleware::{ErrorHandlerResponse, ErrorHandlers, Next},
    web, Error, HttpResponse, ResponseError,
};
use tracing::warn;

use crate::config::AuthConfig;
use crate::error::{ApiError, ErrorBody};

/// Rejects requests without `Authorization: Bearer <token>` when mock auth
/// is enabled. Without an `AuthConfig` in app data every request passes.
pub async fn require_bearer_token<B: MessageBody>(
    req: ServiceRequest,
    next: Next<B>,
) -> Result<ServiceResponse<EitherBody<B>>, Error> {
    let denied = match req.app_data::<web::Data<AuthConfig>>() {
        Some(auth) if auth.enabled => {
            let presented = req
                .headers()
                .get(header::AUTHORIZATION)
                .and_then(|value| value.to_str().ok())
                .and_then(|value| value.strip_prefix("Bearer "));
            presented != Some(auth.token.as_str())
        }
        _ => false,
    };

    if denied {
        warn!(path = %req.path(), "rejected request without valid bearer token");
        let response = ApiError::Unauthorized.error_response();
        return Ok(req.into_response(response).map_into_right_body());
    }

    next.call(req).await.map(ServiceResponse::map_into_left_body)
}

/// Permissive CORS unless specific origins are configured.
pub fn cors(allowed_origins: &[String]) -> Cors {
    if allowed_origins.is_empty() {
        return Cors::permissive();
    }
    allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allow_any_method()
        .allow_any_header()
        .max_age(3600)
}

/// Catch-all rendering any 500 as `{"error": message}`.
pub fn error_handlers<B: MessageBody + 'static>() -> ErrorHandlers<B> {
    ErrorHandlers::new().handler(StatusCode::INTERNAL_SERVER_ERROR, render_internal_error)
}

fn render_internal_error<B>(res: ServiceResponse<B>) -> actix_web::Result<ErrorHandlerResponse<B>> {
    let message = res
        .response()
        .error()
        .map(|e| e.to_string())
        .unwrap_or_else(|| "Internal server error".to_string());
    tracing::error!(%message, path = %res.request().path(), "request failed");

    let (req, _) = res.into_parts();
    let response = HttpResponse::InternalServerError().json(ErrorBody { error: message });
    let res = ServiceResponse::new(req, response).map_into_right_body();
    Ok(ErrorHandlerResponse::Response(res))
}

/// Fallback for unknown routes.
pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorBody {
        error: "Route not found".to_string(),
    })
}

/// Maps body parse failures onto the `400 {"errors": [...]}` contract.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| ApiError::from(err).into())
}
