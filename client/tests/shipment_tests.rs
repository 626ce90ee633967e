//! Shipment session tests

use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use dashboard_client::{ClientError, Gateway, ShipmentSession};
use shared::models::ShipmentStatus;

#[tokio::test]
async fn orders_attach_once_and_detach() {
    let server = MockServer::start().await;
    let gateway = Gateway::with_base_url(server.uri());

    let mut session = ShipmentSession::create(&gateway);
    session.add_order("sale-1");
    session.add_order("sale-2");
    session.add_order("sale-1");
    assert_eq!(session.form.orders, vec!["sale-1", "sale-2"]);

    session.remove_order("sale-1");
    assert_eq!(session.form.orders, vec!["sale-2"]);
}

#[tokio::test]
async fn malformed_vin_fails_before_any_request() {
    let server = MockServer::start().await;
    let gateway = Gateway::with_base_url(server.uri());

    let mut session = ShipmentSession::create(&gateway);
    session.form.shipment_id = "SHP-1".into();
    session.form.captain_id = "emp-7".into();
    session.form.vehicle_vin = "TOO-SHORT".into();

    let err = session.submit().await.unwrap_err();
    assert!(matches!(err, ClientError::Validation { ref field, .. } if field == "vehicle_vin"));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn submit_sends_status_and_orders() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/shipments"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "s1",
            "shipment_id": "SHP-9",
            "captain_id": "emp-7",
            "vehicle_vin": "1HGBH41JXMN109186",
            "status": "in_transit",
            "orders": ["sale-1"]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let gateway = Gateway::with_base_url(server.uri());
    let mut session = ShipmentSession::create(&gateway);
    session.form.shipment_id = "SHP-9".into();
    session.form.captain_id = "emp-7".into();
    session.form.vehicle_vin = "1HGBH41JXMN109186".into();
    session.form.status = ShipmentStatus::InTransit;
    session.add_order("sale-1");

    let created = session.submit().await.unwrap();
    assert_eq!(created.status, ShipmentStatus::InTransit);

    let requests = server.received_requests().await.unwrap();
    let body: Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(body["status"], "in_transit");
    assert_eq!(body["orders"], json!(["sale-1"]));
}

#[tokio::test]
async fn editing_a_missing_shipment_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/shipments/ghost"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let gateway = Gateway::with_base_url(server.uri());
    let err = ShipmentSession::edit(&gateway, "ghost").await.unwrap_err();
    assert!(matches!(err, ClientError::NotFound { .. }));
}
