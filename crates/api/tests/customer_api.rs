//! Integration tests for the `/api/v1/customers` endpoints.
//!
//! Every response is also checked for the absence of the access code.

mod common;

use axum::http::StatusCode;
use common::{create_customer, delete, get, get_with_code, post_json, put_json};
use serde_json::{json, Value};

fn assert_no_code(json: &Value) {
    assert!(
        !json.to_string().contains("access_code"),
        "access code leaked in response: {json}"
    );
}

fn edit_body(name: &str, plan: &str) -> Value {
    json!({ "full_name": name, "primary_address": "Av. Paulista, 1000", "plan": plan })
}

// ---------------------------------------------------------------------------
// Create and read
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_customer_returns_201_without_code() {
    let app = common::build_test_app();
    let (status, json) = post_json(
        &app,
        "/api/v1/customers",
        json!({
            "full_name": "Maria Souza",
            "primary_address": "Rua A, 1",
            "plan": "PREMIUM",
            "access_code": "654321",
        }),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(json["full_name"], "Maria Souza");
    assert_eq!(json["plan"], "PREMIUM");
    assert_no_code(&json);
}

#[tokio::test]
async fn malformed_or_missing_code_returns_400() {
    let app = common::build_test_app();
    for body in [
        json!({ "full_name": "A", "plan": "NORMAL", "access_code": "12345" }),
        json!({ "full_name": "A", "plan": "NORMAL", "access_code": "12a456" }),
        json!({ "full_name": "A", "plan": "NORMAL", "access_code": "1234567" }),
        json!({ "full_name": "A", "plan": "NORMAL" }),
    ] {
        let (status, json) = post_json(&app, "/api/v1/customers", body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["code"], "INVALID_ACCESS_CODE");
    }

    let (_, list) = get(&app, "/api/v1/customers").await;
    assert!(list.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn list_and_get_never_expose_code() {
    let app = common::build_test_app();
    let id = create_customer(&app, "João Silva", "NORMAL", "123456").await;
    create_customer(&app, "Ana Lima", "PREMIUM", "222222").await;

    let (status, list) = get(&app, "/api/v1/customers").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list.as_array().unwrap().len(), 2);
    assert_no_code(&list);

    let (status, one) = get(&app, &format!("/api/v1/customers/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(one["full_name"], "João Silva");
    assert_no_code(&one);
}

#[tokio::test]
async fn get_missing_customer_returns_404() {
    let app = common::build_test_app();
    let (status, json) = get(&app, "/api/v1/customers/77").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "Customer with id 77 not found");
}

// ---------------------------------------------------------------------------
// Edit
// ---------------------------------------------------------------------------

#[tokio::test]
async fn edit_with_correct_code_updates_record() {
    let app = common::build_test_app();
    let id = create_customer(&app, "João Silva", "NORMAL", "123456").await;

    let (status, json) = put_json(
        &app,
        &format!("/api/v1/customers/{id}?access_code=123456"),
        edit_body("João S. Silva", "PREMIUM"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["full_name"], "João S. Silva");
    assert_eq!(json["plan"], "PREMIUM");
    assert_no_code(&json);
}

#[tokio::test]
async fn edit_with_wrong_or_missing_code_returns_401() {
    let app = common::build_test_app();
    let id = create_customer(&app, "João Silva", "NORMAL", "123456").await;

    let (status, json) = put_json(
        &app,
        &format!("/api/v1/customers/{id}?access_code=000000"),
        edit_body("Mallory", "PREMIUM"),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["code"], "UNAUTHORIZED");

    let (status, _) = put_json(
        &app,
        &format!("/api/v1/customers/{id}"),
        edit_body("Mallory", "PREMIUM"),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (_, json) = get(&app, &format!("/api/v1/customers/{id}")).await;
    assert_eq!(json["full_name"], "João Silva");
}

#[tokio::test]
async fn edit_missing_customer_reports_404_before_code_check() {
    let app = common::build_test_app();
    let (status, _) = put_json(
        &app,
        "/api/v1/customers/99?access_code=000000",
        edit_body("Nobody", "NORMAL"),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn edit_can_rotate_code() {
    let app = common::build_test_app();
    let id = create_customer(&app, "João Silva", "NORMAL", "123456").await;

    let mut body = edit_body("João Silva", "NORMAL");
    body["access_code"] = json!("999999");
    let (status, json) = put_json(
        &app,
        &format!("/api/v1/customers/{id}?access_code=123456"),
        body,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_no_code(&json);

    let (status, _) = get(&app, "/api/v1/customers/validate-access?access_code=123456").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, json) = get(&app, "/api/v1/customers/validate-access?access_code=999999").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json[0]["id"], id);
}

#[tokio::test]
async fn edit_rejects_malformed_new_code() {
    let app = common::build_test_app();
    let id = create_customer(&app, "João Silva", "NORMAL", "123456").await;

    let mut body = edit_body("João Silva", "NORMAL");
    body["access_code"] = json!("abc");
    let (status, json) = put_json(
        &app,
        &format!("/api/v1/customers/{id}?access_code=123456"),
        body,
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "INVALID_ACCESS_CODE");
}

#[tokio::test]
async fn code_can_be_sent_in_header() {
    let app = common::build_test_app();
    create_customer(&app, "João Silva", "NORMAL", "123456").await;

    let (status, json) =
        get_with_code(&app, "/api/v1/customers/validate-access", "123456").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json[0]["full_name"], "João Silva");
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[tokio::test]
async fn delete_requires_matching_code() {
    let app = common::build_test_app();
    let id = create_customer(&app, "João Silva", "NORMAL", "123456").await;

    let (status, _) = delete(&app, &format!("/api/v1/customers/{id}?access_code=111111")).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = delete(&app, &format!("/api/v1/customers/{id}?access_code=123456")).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = delete(&app, &format!("/api/v1/customers/{id}?access_code=123456")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Validate access
// ---------------------------------------------------------------------------

#[tokio::test]
async fn validate_access_returns_single_element_list() {
    let app = common::build_test_app();
    let id = create_customer(&app, "João Silva", "PREMIUM", "123456").await;

    let (status, json) = get(&app, "/api/v1/customers/validate-access?access_code=123456").await;

    assert_eq!(status, StatusCode::OK);
    let list = json.as_array().unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["id"], id);
    assert_eq!(list[0]["plan"], "PREMIUM");
    assert_no_code(&json);
}

#[tokio::test]
async fn validate_access_with_unknown_or_missing_code_returns_401() {
    let app = common::build_test_app();
    create_customer(&app, "João Silva", "NORMAL", "123456").await;

    for uri in [
        "/api/v1/customers/validate-access?access_code=000000",
        "/api/v1/customers/validate-access?access_code=12",
        "/api/v1/customers/validate-access",
    ] {
        let (status, json) = get(&app, uri).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "{uri}");
        assert_eq!(json["code"], "UNAUTHORIZED");
    }
}

#[tokio::test]
async fn shared_code_does_not_resolve_to_another_customer() {
    let app = common::build_test_app();
    create_customer(&app, "Alice Premium", "PREMIUM", "123456").await;
    create_customer(&app, "Bob Normal", "NORMAL", "123456").await;

    let (status, json) = get(&app, "/api/v1/customers/validate-access?access_code=123456").await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert!(!json.to_string().contains("Alice"));
}

// ---------------------------------------------------------------------------
// Edit: body problems never overtake the id and code checks
// ---------------------------------------------------------------------------

#[tokio::test]
async fn edit_with_wrong_code_and_incomplete_body_returns_401() {
    let app = common::build_test_app();
    let id = create_customer(&app, "João Silva", "NORMAL", "123456").await;

    let (status, json) = put_json(
        &app,
        &format!("/api/v1/customers/{id}?access_code=000000"),
        json!({ "full_name": "X" }),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn edit_missing_customer_with_unknown_plan_returns_404() {
    let app = common::build_test_app();

    let (status, json) = put_json(
        &app,
        "/api/v1/customers/999?access_code=000000",
        json!({ "full_name": "X", "plan": "GOLD" }),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
}

#[tokio::test]
async fn edit_with_correct_code_and_bad_body_returns_json_400() {
    let app = common::build_test_app();
    let id = create_customer(&app, "João Silva", "NORMAL", "123456").await;

    let (status, json) = put_json(
        &app,
        &format!("/api/v1/customers/{id}?access_code=123456"),
        json!({ "full_name": "X", "plan": "GOLD" }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "BAD_REQUEST");

    let (_, stored) = get(&app, &format!("/api/v1/customers/{id}")).await;
    assert_eq!(stored["full_name"], "João Silva");
}
