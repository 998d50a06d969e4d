use actix_web::{web, HttpResponse};

use crate::db::Database;
use crate::models::Summary;

/// Get healthcare system statistics
///
/// Recomputed from the current records on every request.
#[utoipa::path(
    get,
    path = "/summary",
    tag = "summary",
    responses(
        (status = 200, description = "System statistics and summary data", body = Summary)
    )
)]
pub async fn get_summary(db: web::Data<Database>) -> HttpResponse {
    HttpResponse::Ok().json(db.summary().await)
}
