use axum::body::{self, Body};
use axum::http::{Request, StatusCode, header};
use chrono::{DateTime, TimeZone, Utc};
use std::sync::Arc;
use tower::util::ServiceExt;
use vietqr::domain::ports::Clock;
use vietqr::error::{PaymentError, Result};
use vietqr::infrastructure::clock::FixedClock;
use vietqr::interfaces::http::{AppState, GENERATE_QR_PATH, app_router};

mod common;

struct UnavailableClock;

impl Clock for UnavailableClock {
    fn now(&self) -> Result<DateTime<Utc>> {
        Err(PaymentError::InternalFault("clock source unavailable".to_string()))
    }
}

fn test_app() -> axum::Router {
    let instant = Utc.with_ymd_and_hms(2026, 10, 19, 8, 30, 0).unwrap();
    app_router(AppState::new(Arc::new(FixedClock::new(instant))))
}

#[tokio::test]
async fn generate_qr_with_message() {
    let response = test_app()
        .oneshot(common::post_json(
            GENERATE_QR_PATH,
            r#"{"bankBinCode":"970436","bankAccount":"1234567890","amount":"100000","message":"Payment for services"}"#,
        ))
        .await
        .expect("generate response");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = common::body_json(response).await;
    assert_eq!(payload["success"], true);
    assert_eq!(
        payload["qrCodeString"],
        "970436|1234567890|100000|Payment for services"
    );
    assert_eq!(payload["message"], "QR code generated successfully");

    let data = &payload["data"];
    assert_eq!(data["version"], "1.0");
    assert_eq!(data["bankBin"], "970436");
    assert_eq!(data["accountNumber"], "1234567890");
    assert_eq!(data["amount"].as_f64(), Some(100000.0));
    assert_eq!(data["message"], "Payment for services");
    assert_eq!(data["timestamp"], "2026-10-19T08:30:00.000Z");
    assert_eq!(data["qrString"], payload["qrCodeString"]);
}

#[tokio::test]
async fn generate_qr_without_message() {
    let response = test_app()
        .oneshot(common::post_json(
            GENERATE_QR_PATH,
            r#"{"bankBinCode":"970436","bankAccount":"1234567890","amount":"100000"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let payload = common::body_json(response).await;
    assert_eq!(payload["qrCodeString"], "970436|1234567890|100000");
    assert_eq!(payload["data"]["message"], "");
}

#[tokio::test]
async fn generate_qr_accepts_numeric_amount() {
    let response = test_app()
        .oneshot(common::post_json(
            GENERATE_QR_PATH,
            r#"{"bankBinCode":"970436","bankAccount":"1234567890","amount":150000.5}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let payload = common::body_json(response).await;
    assert_eq!(payload["qrCodeString"], "970436|1234567890|150000.5");
}

#[tokio::test]
async fn generate_qr_rejects_missing_bank_bin() {
    let response = test_app()
        .oneshot(common::post_json(
            GENERATE_QR_PATH,
            r#"{"bankAccount":"1234567890","amount":"100000"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let payload = common::body_json(response).await;
    assert_eq!(payload["success"], false);
    assert_eq!(payload["error"], "Missing required fields: bankBinCode");
    assert!(payload.get("data").is_none());
}

#[tokio::test]
async fn generate_qr_rejects_unrepresentable_amounts_verbatim() {
    for amount in ["1_000", "1e30", "0.00000000000000000000000000001"] {
        let body = serde_json::json!({
            "bankBinCode": "970436",
            "bankAccount": "1234567890",
            "amount": amount,
        });
        let response = test_app()
            .oneshot(common::post_json(GENERATE_QR_PATH, &body.to_string()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "amount {amount}");
        let payload = common::body_json(response).await;
        assert_eq!(
            payload["error"],
            format!("Amount must be a positive number, got '{amount}'")
        );
    }
}

#[tokio::test]
async fn generate_qr_treats_numeric_zero_as_missing() {
    let response = test_app()
        .oneshot(common::post_json(
            GENERATE_QR_PATH,
            r#"{"bankBinCode":"970436","bankAccount":"1234567890","amount":0}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let payload = common::body_json(response).await;
    assert_eq!(payload["success"], false);
    assert_eq!(payload["error"], "Missing required fields: amount");
}

#[tokio::test]
async fn generate_qr_rejects_negative_amount() {
    let response = test_app()
        .oneshot(common::post_json(
            GENERATE_QR_PATH,
            r#"{"bankBinCode":"970436","bankAccount":"1234567890","amount":"-50"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let payload = common::body_json(response).await;
    assert!(
        payload["error"]
            .as_str()
            .unwrap()
            .starts_with("Amount must be a positive number")
    );
}

#[tokio::test]
async fn generate_qr_truncates_long_message() {
    let message = "Pay|ment||for you ".repeat(10);
    let body = serde_json::json!({
        "bankBinCode": "970436",
        "bankAccount": "1234567890",
        "amount": "100000",
        "message": &message,
    });

    let response = test_app()
        .oneshot(common::post_json(GENERATE_QR_PATH, &body.to_string()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let payload = common::body_json(response).await;
    let qr_string = payload["qrCodeString"].as_str().unwrap();
    let embedded = qr_string
        .strip_prefix("970436|1234567890|100000|")
        .unwrap();
    assert_eq!(embedded.chars().count(), 100);
    assert!(!embedded.contains('|'));
    // The record echoes the raw message.
    assert_eq!(payload["data"]["message"], message.as_str());
}

#[tokio::test]
async fn generate_qr_rejects_malformed_json() {
    let response = test_app()
        .oneshot(common::post_json(GENERATE_QR_PATH, "{not json"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let payload = common::body_json(response).await;
    assert_eq!(payload["error"], "Invalid JSON in request body");
}

#[tokio::test]
async fn generate_qr_accepts_body_without_content_type() {
    let request = Request::builder()
        .method("POST")
        .uri(GENERATE_QR_PATH)
        .body(Body::from(
            r#"{"bankBinCode":"970436","bankAccount":"1","amount":"5"}"#,
        ))
        .unwrap();

    let response = test_app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn generate_qr_reports_internal_fault() {
    let app = app_router(AppState::new(Arc::new(UnavailableClock)));
    let response = app
        .oneshot(common::post_json(
            GENERATE_QR_PATH,
            r#"{"bankBinCode":"970436","bankAccount":"1234567890","amount":"100000"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let payload = common::body_json(response).await;
    assert_eq!(payload["success"], false);
    assert_eq!(
        payload["error"],
        "Internal server error while generating QR code"
    );
    assert!(
        payload["details"]
            .as_str()
            .unwrap()
            .contains("clock source unavailable")
    );
}

#[tokio::test]
async fn get_is_method_not_allowed() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri(GENERATE_QR_PATH)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    let payload = common::body_json(response).await;
    assert_eq!(payload["error"], "Method not allowed");
}

#[tokio::test]
async fn options_preflight_has_no_body() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .method("OPTIONS")
                .uri(GENERATE_QR_PATH)
                .header(header::ORIGIN, "https://example.com")
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let headers = response.headers();
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    let methods = headers[header::ACCESS_CONTROL_ALLOW_METHODS].to_str().unwrap();
    assert!(methods.contains("POST"));
    assert!(methods.contains("OPTIONS"));

    let bytes = body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert!(bytes.is_empty());
}

#[tokio::test]
async fn cors_headers_on_errors() {
    let mut request = common::post_json(GENERATE_QR_PATH, "{}");
    request
        .headers_mut()
        .insert(header::ORIGIN, "https://example.com".parse().unwrap());

    let response = test_app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let headers = response.headers();
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    assert_eq!(
        headers[header::ACCESS_CONTROL_ALLOW_METHODS],
        "GET, POST, OPTIONS"
    );
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_HEADERS], "Content-Type");
}

#[tokio::test]
async fn cors_headers_on_success_and_405() {
    let response = test_app()
        .oneshot(common::post_json(
            GENERATE_QR_PATH,
            r#"{"bankBinCode":"970436","bankAccount":"1234567890","amount":"100000"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let headers = response.headers();
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    assert_eq!(
        headers[header::ACCESS_CONTROL_ALLOW_METHODS],
        "GET, POST, OPTIONS"
    );
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_HEADERS], "Content-Type");

    let request = Request::builder()
        .method("GET")
        .uri(GENERATE_QR_PATH)
        .body(Body::empty())
        .unwrap();
    let response = test_app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_METHODS],
        "GET, POST, OPTIONS"
    );
}
