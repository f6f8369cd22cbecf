use actix_web::{App, test, web};
use serde_json::{Value, json};

use customer_api::configure_api;
use customer_api::domain::customer::NewCustomer;
use customer_api::repository::CustomerWriter;
use customer_api::repository::customer::DieselCustomerRepository;

mod common;

fn seed(test_db: &common::TestDb) {
    let repo = DieselCustomerRepository::new(test_db.pool());
    repo.create(&NewCustomer::new(
        "Alice Smith".to_string(),
        "alice@x.com".to_string(),
        Some("+12025550100".to_string()),
        Some("1 Main St".to_string()),
        Some("ACTIVE".to_string()),
    ))
    .unwrap();
    repo.create(&NewCustomer::new(
        "Bob Jones".to_string(),
        "bob@x.com".to_string(),
        None,
        None,
        Some("INACTIVE".to_string()),
    ))
    .unwrap();
}

macro_rules! init_app {
    ($test_db:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($test_db.pool().clone()))
                .configure(configure_api),
        )
        .await
    };
}

#[actix_web::test]
async fn test_v1_create_then_get_round_trips() {
    let test_db = common::TestDb::new("test_v1_create_get.db");
    let app = init_app!(&test_db);

    let req = test::TestRequest::post()
        .uri("/api/customers")
        .set_json(json!({
            "fullName": "Alice Smith",
            "email": "alice@x.com",
            "phone": "+12025550100",
            "address": "1 Main St"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 201);

    let created: Value = test::read_body_json(resp).await;
    assert_eq!(created["fullName"], "Alice Smith");
    assert_eq!(created["email"], "alice@x.com");
    assert_eq!(created["status"], "ACTIVE");
    let id = created["id"].as_i64().unwrap();

    let req = test::TestRequest::get()
        .uri(&format!("/api/customers/{id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let fetched: Value = test::read_body_json(resp).await;
    assert_eq!(fetched["fullName"], created["fullName"]);
    assert_eq!(fetched["email"], created["email"]);
    assert_eq!(fetched["phone"], created["phone"]);
    assert_eq!(fetched["address"], created["address"]);
}

#[actix_web::test]
async fn test_v1_create_rejects_invalid_fields() {
    let test_db = common::TestDb::new("test_v1_create_invalid.db");
    let app = init_app!(&test_db);

    let req = test::TestRequest::post()
        .uri("/api/customers")
        .set_json(json!({
            "fullName": "A",
            "email": "not-an-email",
            "phone": "123"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Validation failed");
    assert!(body["fields"].get("full_name").is_some());
    assert!(body["fields"].get("email").is_some());
    assert!(body["fields"].get("phone").is_some());
}

#[actix_web::test]
async fn test_v1_create_duplicate_email_conflicts() {
    let test_db = common::TestDb::new("test_v1_create_conflict.db");
    seed(&test_db);
    let app = init_app!(&test_db);

    let req = test::TestRequest::post()
        .uri("/api/customers")
        .set_json(json!({
            "fullName": "Alice Clone",
            "email": "alice@x.com"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 409);
}

#[actix_web::test]
async fn test_v1_get_unknown_id_is_404() {
    let test_db = common::TestDb::new("test_v1_get_unknown.db");
    let app = init_app!(&test_db);

    let req = test::TestRequest::get()
        .uri("/api/customers/99")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Customer not found");
}

#[actix_web::test]
async fn test_v1_put_replaces_every_field() {
    let test_db = common::TestDb::new("test_v1_put.db");
    seed(&test_db);
    let app = init_app!(&test_db);

    let req = test::TestRequest::put()
        .uri("/api/customers/1")
        .set_json(json!({
            "fullName": "Alice Jones",
            "email": "alice.jones@x.com",
            "status": "INACTIVE"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["fullName"], "Alice Jones");
    assert_eq!(body["email"], "alice.jones@x.com");
    assert_eq!(body["status"], "INACTIVE");
    // Optionals absent from a full update are cleared.
    assert_eq!(body["phone"], Value::Null);
    assert_eq!(body["address"], Value::Null);
}

#[actix_web::test]
async fn test_v1_patch_merges_sparse_fields() {
    let test_db = common::TestDb::new("test_v1_patch.db");
    seed(&test_db);
    let app = init_app!(&test_db);

    let req = test::TestRequest::patch()
        .uri("/api/customers/1")
        .set_json(json!({"status": "VIP"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "VIP");
    // Untouched fields keep their values.
    assert_eq!(body["fullName"], "Alice Smith");
    assert_eq!(body["email"], "alice@x.com");
    assert_eq!(body["phone"], "+12025550100");
    assert_eq!(body["address"], "1 Main St");
}

#[actix_web::test]
async fn test_v1_patch_with_empty_body_is_a_no_op() {
    let test_db = common::TestDb::new("test_v1_patch_noop.db");
    seed(&test_db);
    let app = init_app!(&test_db);

    let req = test::TestRequest::patch()
        .uri("/api/customers/1")
        .set_json(json!({}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["fullName"], "Alice Smith");
    assert_eq!(body["email"], "alice@x.com");
    assert_eq!(body["status"], "ACTIVE");
}

#[actix_web::test]
async fn test_v1_patch_validates_present_fields() {
    let test_db = common::TestDb::new("test_v1_patch_invalid.db");
    seed(&test_db);
    let app = init_app!(&test_db);

    let req = test::TestRequest::patch()
        .uri("/api/customers/1")
        .set_json(json!({"email": "broken"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}

#[actix_web::test]
async fn test_v1_delete_twice_fails_the_second_time() {
    let test_db = common::TestDb::new("test_v1_delete.db");
    seed(&test_db);
    let app = init_app!(&test_db);

    let req = test::TestRequest::delete()
        .uri("/api/customers/1")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Customer deleted successfully");

    let req = test::TestRequest::delete()
        .uri("/api/customers/1")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
}

#[actix_web::test]
async fn test_v1_list_paginates() {
    let test_db = common::TestDb::new("test_v1_list.db");
    seed(&test_db);
    let app = init_app!(&test_db);

    let req = test::TestRequest::get()
        .uri("/api/customers?page=0&size=1")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["customers"].as_array().unwrap().len(), 1);
    assert_eq!(body["currentPage"], 0);
    assert_eq!(body["totalItems"], 2);
    assert_eq!(body["totalPages"], 2);
}

#[actix_web::test]
async fn test_v1_list_sorts_and_rejects_unknown_fields() {
    let test_db = common::TestDb::new("test_v1_list_sort.db");
    seed(&test_db);
    let app = init_app!(&test_db);

    let req = test::TestRequest::get()
        .uri("/api/customers?page=0&size=10&sortBy=fullName&sortDir=desc")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["customers"][0]["fullName"], "Bob Jones");

    let req = test::TestRequest::get()
        .uri("/api/customers?sortBy=shoeSize")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Invalid sort field: shoeSize");
}

#[actix_web::test]
async fn test_v1_sorted_endpoint_orders_the_full_list() {
    let test_db = common::TestDb::new("test_v1_sorted.db");
    seed(&test_db);
    let app = init_app!(&test_db);

    let req = test::TestRequest::get()
        .uri("/api/customers/sorted?sortBy=fullName&sortDir=desc")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: Value = test::read_body_json(resp).await;
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["fullName"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Bob Jones", "Alice Smith"]);
}

#[actix_web::test]
async fn test_v1_search_and_filters() {
    let test_db = common::TestDb::new("test_v1_search.db");
    seed(&test_db);
    let app = init_app!(&test_db);

    let req = test::TestRequest::get()
        .uri("/api/customers/search?keyword=bob")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["fullName"], "Bob Jones");

    let req = test::TestRequest::get()
        .uri("/api/customers/status/nonexistent")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let body: Value = test::read_body_json(resp).await;
    assert!(body.as_array().unwrap().is_empty());

    let req = test::TestRequest::get()
        .uri("/api/customers/advanced-search?name=a&status=ACTIVE")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["fullName"], "Alice Smith");
}

#[actix_web::test]
async fn test_v2_list_envelope_carries_page_metadata() {
    let test_db = common::TestDb::new("test_v2_list.db");
    seed(&test_db);
    let app = init_app!(&test_db);

    let req = test::TestRequest::get()
        .uri("/api/v2/customers?page=0&size=1")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["apiVersion"], "v2");
    assert_eq!(body["customers"].as_array().unwrap().len(), 1);
    assert_eq!(body["pageSize"], 1);
    assert_eq!(body["totalItems"], 2);
    assert_eq!(body["hasNext"], true);
    assert_eq!(body["hasPrevious"], false);
}

#[actix_web::test]
async fn test_v2_mutations_carry_messages_and_links() {
    let test_db = common::TestDb::new("test_v2_mutations.db");
    let app = init_app!(&test_db);

    let req = test::TestRequest::post()
        .uri("/api/v2/customers")
        .set_json(json!({
            "fullName": "Alice Smith",
            "email": "alice@x.com"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 201);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["apiVersion"], "v2");
    assert_eq!(body["message"], "Customer created successfully");
    let id = body["data"]["id"].as_i64().unwrap();
    assert_eq!(body["links"]["self"], format!("/api/v2/customers/{id}"));
    assert_eq!(body["links"]["collection"], "/api/v2/customers");

    let req = test::TestRequest::patch()
        .uri(&format!("/api/v2/customers/{id}"))
        .set_json(json!({"status": "VIP"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Customer partially updated successfully");
    assert_eq!(body["data"]["status"], "VIP");
    assert_eq!(body["data"]["fullName"], "Alice Smith");

    let req = test::TestRequest::get()
        .uri(&format!("/api/v2/customers/{id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body: Value = test::read_body_json(resp).await;
    assert!(body.get("message").is_none());
    assert_eq!(body["data"]["status"], "VIP");

    let req = test::TestRequest::delete()
        .uri(&format!("/api/v2/customers/{id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Customer deleted successfully");
    assert_eq!(body["deletedId"], id);
}

#[actix_web::test]
async fn test_v2_search_envelopes_echo_their_criteria() {
    let test_db = common::TestDb::new("test_v2_search.db");
    seed(&test_db);
    let app = init_app!(&test_db);

    let req = test::TestRequest::get()
        .uri("/api/v2/customers/search?keyword=alice")
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["apiVersion"], "v2");
    assert_eq!(body["keyword"], "alice");
    assert_eq!(body["count"], 1);
    assert_eq!(body["data"][0]["fullName"], "Alice Smith");

    let req = test::TestRequest::get()
        .uri("/api/v2/customers/status/ACTIVE")
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "ACTIVE");
    assert_eq!(body["count"], 1);

    let req = test::TestRequest::get()
        .uri("/api/v2/customers/advanced-search?name=s&status=ACTIVE")
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["filters"]["name"], "s");
    assert_eq!(body["filters"]["email"], "");
    assert_eq!(body["filters"]["status"], "ACTIVE");
    assert_eq!(body["count"], 1);
    assert_eq!(body["data"][0]["fullName"], "Alice Smith");
}
