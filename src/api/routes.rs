//! Route table.

use actix_web::{middleware::from_fn, web};

use super::docs;
use super::handlers::{appointments, doctors, pages, patients, prescriptions, summary};
use super::middleware::{json_config, not_found, require_bearer_token};

/// Registers every route of the service.
///
/// Expects `web::Data<Database>` (and optionally `web::Data<AuthConfig>`)
/// to be registered on the `App`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .route("/", web::get().to(pages::index))
        .route("/api-docs", web::get().to(docs::api_docs))
        .route("/swagger.json", web::get().to(docs::swagger_json))
        .service(
            web::scope("/patients")
                .wrap(from_fn(require_bearer_token))
                .service(
                    web::resource("")
                        .route(web::get().to(patients::list_patients))
                        .route(web::post().to(patients::create_patient)),
                )
                .service(
                    web::resource("/{id}")
                        .route(web::get().to(patients::get_patient))
                        .route(web::put().to(patients::update_patient))
                        .route(web::patch().to(patients::patch_patient))
                        .route(web::delete().to(patients::delete_patient)),
                ),
        )
        .service(
            web::scope("/doctors")
                .wrap(from_fn(require_bearer_token))
                .service(
                    web::resource("")
                        .route(web::get().to(doctors::list_doctors))
                        .route(web::post().to(doctors::create_doctor)),
                )
                .service(
                    web::resource("/{id}")
                        .route(web::get().to(doctors::get_doctor))
                        .route(web::put().to(doctors::update_doctor))
                        .route(web::patch().to(doctors::patch_doctor))
                        .route(web::delete().to(doctors::delete_doctor)),
                ),
        )
        .service(
            web::scope("/appointments")
                .wrap(from_fn(require_bearer_token))
                .service(
                    web::resource("")
                        .route(web::get().to(appointments::list_appointments))
                        .route(web::post().to(appointments::create_appointment)),
                )
                .service(
                    web::resource("/{id}")
                        .route(web::get().to(appointments::get_appointment))
                        .route(web::put().to(appointments::update_appointment))
                        .route(web::patch().to(appointments::patch_appointment))
                        .route(web::delete().to(appointments::delete_appointment)),
                ),
        )
        .service(
            web::scope("/prescriptions")
                .wrap(from_fn(require_bearer_token))
                .service(
                    web::resource("")
                        .route(web::get().to(prescriptions::list_prescriptions))
                        .route(web::post().to(prescriptions::create_prescription)),
                )
                .service(
                    web::resource("/{id}")
                        .route(web::get().to(prescriptions::get_prescription))
                        .route(web::put().to(prescriptions::update_prescription))
                        .route(web::patch().to(prescriptions::patch_prescription))
                        .route(web::delete().to(prescriptions::delete_prescription)),
                ),
        )
        .service(
            web::resource("/summary")
                .wrap(from_fn(require_bearer_token))
                .route(web::get().to(summary::get_summary)),
        )
        .default_service(web::to(not_found));
}
