use actix_web::{
    http::{header, StatusCode},
    test, web, App, HttpResponse,
};
use fake::faker::internet::en::SafeEmail;
use fake::faker::name::en::Name;
use fake::Fake;
use serde_json::{json, Value};
use test_case::test_case;

use healthcare_demo::api::{self, middleware::error_handlers};
use healthcare_demo::config::AuthConfig;
use healthcare_demo::db::Database;

macro_rules! app {
    ($db:expr, $auth:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($db))
                .app_data(web::Data::new($auth))
                .wrap(error_handlers())
                .configure(api::configure),
        )
        .await
    };
    ($db:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($db))
                .wrap(error_handlers())
                .configure(api::configure),
        )
        .await
    };
}

fn patient_body() -> Value {
    json!({
        "name": Name().fake::<String>(),
        "age": (0i64..=100).fake::<i64>(),
        "gender": "female",
        "medicalHistory": "None",
        "contactInfo": SafeEmail().fake::<String>(),
    })
}

fn paths(body: &Value) -> Vec<&str> {
    body["errors"]
        .as_array()
        .expect("errors array")
        .iter()
        .filter_map(|e| e["path"].as_str())
        .collect()
}

#[test_case("/patients", 15 ; "patients")]
#[test_case("/doctors", 10 ; "doctors")]
#[test_case("/appointments", 20 ; "appointments")]
#[test_case("/prescriptions", 20 ; "prescriptions")]
#[actix_web::test]
async fn lists_seeded_records_in_id_order(path: &str, expected: usize) {
    let app = app!(Database::seeded());

    let req = test::TestRequest::get().uri(path).to_request();
    let records: Vec<Value> = test::call_and_read_body_json(&app, req).await;

    assert_eq!(records.len(), expected);
    let ids: Vec<u64> = records.iter().map(|r| r["id"].as_u64().unwrap()).collect();
    assert_eq!(ids, (1..=expected as u64).collect::<Vec<_>>());
}

#[test_case("/patients/1", "John Doe" ; "patient")]
#[test_case("/doctors/3", "Dr. Carol Martinez" ; "doctor")]
#[actix_web::test]
async fn fetches_single_record(path: &str, name: &str) {
    let app = app!(Database::seeded());

    let req = test::TestRequest::get().uri(path).to_request();
    let record: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(record["name"], name);
}

#[test_case("/patients/999", "Patient not found" ; "missing patient")]
#[test_case("/doctors/abc", "Doctor not found" ; "non numeric doctor id")]
#[test_case("/appointments/0", "Appointment not found" ; "zero appointment id")]
#[test_case("/prescriptions/-4", "Prescription not found" ; "negative prescription id")]
#[actix_web::test]
async fn unknown_ids_are_not_found(path: &str, message: &str) {
    let app = app!(Database::seeded());

    let req = test::TestRequest::get().uri(path).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "error": message }));
}

fn doctor_body() -> Value {
    json!({
        "name": format!("Dr. {}", Name().fake::<String>()),
        "specialty": "Radiology",
        "contactInfo": SafeEmail().fake::<String>(),
    })
}

fn appointment_body() -> Value {
    json!({
        "patientId": 2,
        "doctorId": 5,
        "date": "2025-10-10",
        "time": "09:00",
        "reason": "Follow-up",
        "status": "in-progress",
    })
}

fn prescription_body() -> Value {
    json!({
        "patientId": 9,
        "doctorId": 3,
        "medication": "Amoxicillin",
        "dosage": "250mg",
        "instructions": "Three times daily for 7 days",
        "dateIssued": "2025-10-01",
    })
}

#[test_case("/patients", patient_body(), 16 ; "patients")]
#[test_case("/doctors", doctor_body(), 11 ; "doctors")]
#[test_case("/appointments", appointment_body(), 21 ; "appointments")]
#[test_case("/prescriptions", prescription_body(), 21 ; "prescriptions")]
#[actix_web::test]
async fn created_record_is_returned_by_get(path: &str, body: Value, new_id: u32) {
    let app = app!(Database::seeded());

    let req = test::TestRequest::post().uri(path).set_json(&body).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Value = test::read_body_json(resp).await;

    let mut expected = body;
    expected["id"] = json!(new_id);
    assert_eq!(created, expected);

    let req = test::TestRequest::get()
        .uri(&format!("{path}/{new_id}"))
        .to_request();
    let fetched: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(fetched, expected);
}

#[test_case("/patients" ; "patients")]
#[test_case("/doctors" ; "doctors")]
#[test_case("/appointments" ; "appointments")]
#[test_case("/prescriptions" ; "prescriptions")]
#[actix_web::test]
async fn deleting_missing_record_keeps_collection(path: &str) {
    let app = app!(Database::seeded());

    let req = test::TestRequest::get().uri(path).to_request();
    let before: Vec<Value> = test::call_and_read_body_json(&app, req).await;

    let req = test::TestRequest::delete()
        .uri(&format!("{path}/9999"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::get().uri(path).to_request();
    let after: Vec<Value> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(after.len(), before.len());
}

#[actix_web::test]
async fn patient_age_has_no_upper_bound() {
    let app = app!(Database::empty());
    let mut body = patient_body();
    body["age"] = json!(151);

    let req = test::TestRequest::post()
        .uri("/patients")
        .set_json(&body)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let created: Value = test::read_body_json(resp).await;
    assert_eq!(created["age"], 151);
}

#[actix_web::test]
async fn client_supplied_id_is_ignored() {
    let app = app!(Database::empty());
    let mut body = patient_body();
    body["id"] = json!(77);

    let req = test::TestRequest::post()
        .uri("/patients")
        .set_json(&body)
        .to_request();
    let created: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(created["id"], 1);
}

#[actix_web::test]
async fn create_appointment_checks_references() {
    let app = app!(Database::seeded());

    let req = test::TestRequest::post()
        .uri("/appointments")
        .set_json(json!({
            "patientId": 2,
            "doctorId": 42,
            "date": "2025-10-10",
            "time": "09:00",
            "reason": "Follow-up",
            "status": "scheduled"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(paths(&body), vec!["doctorId"]);

    let req = test::TestRequest::get().uri("/appointments").to_request();
    let all: Vec<Value> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(all.len(), 20);
}

#[test_case(json!({"name": "A", "age": -1, "gender": "m", "medicalHistory": "x", "contactInfo": "y"}), "age" ; "negative age")]
#[test_case(json!({"name": "", "age": 20, "gender": "m", "medicalHistory": "x", "contactInfo": "y"}), "name" ; "empty name")]
#[test_case(json!({"name": "A", "age": 20, "gender": "m", "medicalHistory": "x"}), "contactInfo" ; "missing contact")]
#[actix_web::test]
async fn invalid_patient_is_rejected(body: Value, path: &str) {
    let app = app!(Database::seeded());

    let req = test::TestRequest::post()
        .uri("/patients")
        .set_json(&body)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(paths(&body), vec![path]);
    assert_eq!(body["errors"][0]["type"], "field");
    assert_eq!(body["errors"][0]["location"], "body");
}

#[test_case(r#"{"name": "Dr. X", "specialty": "#; "truncated json")]
#[test_case(r#"{"name": 5, "specialty": "ENT", "contactInfo": "x"}"#; "wrong type")]
#[actix_web::test]
async fn unparseable_body_is_bad_request(raw: &'static str) {
    let app = app!(Database::seeded());

    let req = test::TestRequest::post()
        .uri("/doctors")
        .insert_header(header::ContentType::json())
        .set_payload(raw)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["errors"][0]["type"], "body");
}

#[actix_web::test]
async fn put_replaces_whole_record() {
    let app = app!(Database::seeded());

    let req = test::TestRequest::put()
        .uri("/doctors/2")
        .set_json(json!({
            "name": "Dr. Bob Brown",
            "specialty": "Allergy",
            "contactInfo": "bob@clinic.org",
            "id": 9
        }))
        .to_request();
    let updated: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(
        updated,
        json!({"id": 2, "name": "Dr. Bob Brown", "specialty": "Allergy", "contactInfo": "bob@clinic.org"})
    );

    let req = test::TestRequest::put()
        .uri("/doctors/2")
        .set_json(json!({ "name": "Dr. Bob Brown" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn put_on_missing_record_is_not_found() {
    let app = app!(Database::seeded());

    let req = test::TestRequest::put()
        .uri("/prescriptions/300")
        .set_json(json!({}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn patch_updates_only_status() {
    let app = app!(Database::seeded());

    let req = test::TestRequest::get().uri("/appointments/5").to_request();
    let before: Value = test::call_and_read_body_json(&app, req).await;

    let req = test::TestRequest::patch()
        .uri("/appointments/5")
        .set_json(json!({ "status": "completed" }))
        .to_request();
    let after: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(after["status"], "completed");
    for field in ["id", "patientId", "doctorId", "date", "time", "reason"] {
        assert_eq!(after[field], before[field], "{field} changed");
    }
}

#[actix_web::test]
async fn patch_rejects_unknown_status() {
    let app = app!(Database::seeded());

    let req = test::TestRequest::patch()
        .uri("/appointments/5")
        .set_json(json!({ "status": "postponed" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(paths(&body), vec!["status"]);
    assert_eq!(body["errors"][0]["value"], "postponed");
}

#[actix_web::test]
async fn delete_returns_record_and_shrinks_collection() {
    let app = app!(Database::seeded());

    let req = test::TestRequest::delete().uri("/prescriptions/20").to_request();
    let removed: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(removed["medication"], "Montelukast");

    let req = test::TestRequest::delete().uri("/prescriptions/20").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::get().uri("/prescriptions").to_request();
    let all: Vec<Value> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(all.len(), 19);
}

#[actix_web::test]
async fn deleting_patient_keeps_their_appointments() {
    let app = app!(Database::seeded());

    let req = test::TestRequest::delete().uri("/patients/1").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::get().uri("/appointments/1").to_request();
    let appointment: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(appointment["patientId"], 1);
}

#[actix_web::test]
async fn summary_reflects_seed() {
    let app = app!(Database::seeded());

    let req = test::TestRequest::get().uri("/summary").to_request();
    let summary: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(summary["totalPatients"], 15);
    assert_eq!(summary["totalDoctors"], 10);
    assert_eq!(summary["totalAppointments"], 20);
    assert_eq!(summary["totalPrescriptions"], 20);
    assert_eq!(summary["averagePatientAge"], 41);
    assert_eq!(
        summary["appointmentsByStatus"],
        json!({"cancelled": 2, "completed": 5, "scheduled": 13})
    );
    assert_eq!(summary["doctorsBySpecialty"]["Cardiology"], 1);
    assert_eq!(summary["systemStatus"], "operational");

    let timestamp = summary["timestamp"].as_str().unwrap();
    assert!(timestamp.ends_with('Z'));
    assert!(chrono::DateTime::parse_from_rfc3339(timestamp).is_ok());
}

#[actix_web::test]
async fn summary_of_empty_store() {
    let app = app!(Database::empty());

    let req = test::TestRequest::get().uri("/summary").to_request();
    let summary: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(summary["totalPatients"], 0);
    assert_eq!(summary["averagePatientAge"], 0);
    assert_eq!(summary["appointmentsByStatus"], json!({}));
}

#[actix_web::test]
async fn concurrent_creates_get_distinct_ids() {
    let app = app!(Database::empty());

    let requests = (0..25).map(|_| {
        let req = test::TestRequest::post()
            .uri("/patients")
            .set_json(patient_body())
            .to_request();
        test::call_and_read_body_json::<_, _, Value>(&app, req)
    });
    let created = futures::future::join_all(requests).await;

    let mut ids: Vec<u64> = created.iter().map(|p| p["id"].as_u64().unwrap()).collect();
    ids.sort_unstable();
    assert_eq!(ids, (1..=25).collect::<Vec<_>>());
}

#[actix_web::test]
async fn bearer_token_guards_record_routes_when_enabled() {
    let auth = AuthConfig {
        enabled: true,
        token: "s3cret".into(),
    };
    let app = app!(Database::seeded(), auth);

    let req = test::TestRequest::get().uri("/patients").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].is_string());

    let req = test::TestRequest::get()
        .uri("/summary")
        .insert_header((header::AUTHORIZATION, "Bearer wrong"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let req = test::TestRequest::get()
        .uri("/patients")
        .insert_header((header::AUTHORIZATION, "Bearer s3cret"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::get().uri("/swagger.json").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn serves_docs_and_landing_page() {
    let app = app!(Database::seeded());

    let req = test::TestRequest::get().uri("/swagger.json").to_request();
    let doc: Value = test::call_and_read_body_json(&app, req).await;
    assert!(doc["openapi"].as_str().unwrap().starts_with("3."));
    assert!(doc["paths"]["/summary"]["get"].is_object());

    for uri in ["/", "/api-docs"] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let content_type = resp.headers().get(header::CONTENT_TYPE).unwrap();
        assert!(content_type.to_str().unwrap().starts_with("text/html"));
    }
}

#[actix_web::test]
async fn unknown_route_is_json_404() {
    let app = app!(Database::seeded());

    let req = test::TestRequest::get().uri("/nurses").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "error": "Route not found" }));
}

#[actix_web::test]
async fn internal_errors_render_as_json() {
    let app = test::init_service(
        App::new()
            .wrap(error_handlers())
            .route(
                "/boom",
                web::get().to(|| async {
                    Err::<HttpResponse, _>(actix_web::error::ErrorInternalServerError("disk on fire"))
                }),
            ),
    )
    .await;

    let req = test::TestRequest::get().uri("/boom").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "error": "disk on fire" }));
}
