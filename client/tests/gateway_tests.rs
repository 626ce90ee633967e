//! Collection gateway tests
//!
//! CRUD calls against a mock server: bearer token propagation, not-found
//! handling, and server error message extraction.

use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use dashboard_client::{ClientError, Gateway};

#[tokio::test]
async fn list_carries_bearer_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/vendors"))
        .and(header("authorization", "Bearer t0k3n"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": "v1", "name": "Acme Beans" },
            { "id": "v2", "name": "Blue Harbor", "email": "sales@blueharbor.example" }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let gateway = Gateway::with_base_url(server.uri()).with_token("t0k3n");
    let vendors = gateway.vendors().list().await.unwrap();

    assert_eq!(vendors.len(), 2);
    assert_eq!(vendors[1].email.as_deref(), Some("sales@blueharbor.example"));
}

#[tokio::test]
async fn get_missing_record_is_none() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/purchases/nope"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let gateway = Gateway::with_base_url(server.uri());
    let purchase = gateway.purchases().get("nope").await.unwrap();
    assert!(purchase.is_none());
}

#[tokio::test]
async fn create_posts_payload_and_returns_record() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/customers"))
        .and(body_json(json!({ "name": "Nora", "phone": "5558675309" })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "c9", "name": "Nora", "phone": "5558675309"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let gateway = Gateway::with_base_url(server.uri());
    let created = gateway
        .customers()
        .create(&json!({ "name": "Nora", "phone": "5558675309" }))
        .await
        .unwrap();

    assert_eq!(created.id, "c9");
}

#[tokio::test]
async fn rejection_carries_server_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/purchases"))
        .respond_with(ResponseTemplate::new(409).set_body_json(json!({
            "error": { "message": "mr_id already exists" }
        })))
        .mount(&server)
        .await;

    let gateway = Gateway::with_base_url(server.uri());
    let err = gateway
        .purchases()
        .create(&json!({ "mr_id": "MR-1" }))
        .await
        .unwrap_err();

    match err {
        ClientError::Api { status, message } => {
            assert_eq!(status, 409);
            assert_eq!(message, "mr_id already exists");
        }
        other => panic!("expected Api error, got {:?}", other),
    }
}

#[tokio::test]
async fn unauthorized_is_its_own_variant() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/sales"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "message": "token expired"
        })))
        .mount(&server)
        .await;

    let gateway = Gateway::with_base_url(server.uri());
    let err = gateway.sales().list().await.unwrap_err();
    assert!(matches!(err, ClientError::Unauthorized(m) if m == "token expired"));
}

#[tokio::test]
async fn delete_succeeds_on_2xx() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/vehicles/veh1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(true)))
        .expect(1)
        .mount(&server)
        .await;

    let gateway = Gateway::with_base_url(server.uri());
    assert!(gateway.vehicles().delete("veh1").await.unwrap());
}
