//! HTTP-layer tests against a mock backend.
//!
//! Verifies bearer auth, query shapes, JSON parsing, error-body
//! normalization, and the per-request timeout.

#![allow(clippy::unwrap_used, clippy::expect_used)] // Test code

use encore_api::types::{
    AuthToken, ConcertId, LoginRequest, ReservationId, ReservationStatus, TransactionScope, UserId,
};
use encore_api::{ApiClient, ApiConfig, ApiError};
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> ApiClient {
    ApiClient::new(ApiConfig::new(server.uri()))
}

fn token() -> AuthToken {
    AuthToken::new("tok-123")
}

#[tokio::test]
async fn list_concerts_sends_bearer_and_parses_page() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/concerts/list"))
        .and(query_param("page", "2"))
        .and(query_param("limit", "5"))
        .and(query_param("userId", "u1"))
        .and(header("Authorization", "Bearer tok-123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [
                {
                    "_id": "c1",
                    "name": "Summer Festival",
                    "description": "Open air",
                    "maxSeats": 2,
                    "reservationId": "r1",
                    "reservationStatus": "CONFIRMED"
                },
                {"_id": "c2", "name": "Acoustic Night", "maxSeats": 0}
            ],
            "meta": {"total": 12, "page": 2, "limit": 5, "pages": 3}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let page = client_for(&server)
        .list_concerts(2, 5, Some(&UserId::new("u1")), &token())
        .await
        .unwrap();

    assert_eq!(page.meta.pages, 3);
    assert_eq!(page.data.len(), 2);
    assert_eq!(page.data[0].reservation_id, Some(ReservationId::new("r1")));
    assert_eq!(
        page.data[0].reservation_status,
        Some(ReservationStatus::Confirmed)
    );
    assert_eq!(page.data[1].reservation_id, None);
}

#[tokio::test]
async fn reserve_returns_created_reservation_id() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/reserve/u1/c1"))
        .and(header("Authorization", "Bearer tok-123"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "_id": "r9",
            "userId": "u1",
            "concertId": "c1",
            "status": "CONFIRMED"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let created = client_for(&server)
        .reserve(&UserId::new("u1"), &ConcertId::new("c1"), &token())
        .await
        .unwrap();

    assert_eq!(created.id, ReservationId::new("r9"));
}

#[tokio::test]
async fn reserve_failure_surfaces_server_message() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/reserve/u1/c1"))
        .respond_with(
            ResponseTemplate::new(409).set_body_json(json!({"message": "Concert is full"})),
        )
        .mount(&server)
        .await;

    let err = client_for(&server)
        .reserve(&UserId::new("u1"), &ConcertId::new("c1"), &token())
        .await
        .unwrap_err();

    assert_eq!(
        err,
        ApiError::Api {
            status: 409,
            message: "Concert is full".to_string()
        }
    );
    assert_eq!(err.user_message(), "Concert is full");
}

#[tokio::test]
async fn missing_error_body_falls_back_to_generic_message() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/reserve/u1/c1"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .reserve(&UserId::new("u1"), &ConcertId::new("c1"), &token())
        .await
        .unwrap_err();

    assert_eq!(
        err,
        ApiError::Api {
            status: 500,
            message: "Failed to reserve".to_string()
        }
    );
}

#[tokio::test]
async fn cancel_reservation_accepts_empty_success_body() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/reserve/u1/c1"))
        .and(header("Authorization", "Bearer tok-123"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server)
        .cancel_reservation(&UserId::new("u1"), &ConcertId::new("c1"), &token())
        .await
        .unwrap();
}

#[tokio::test]
async fn login_401_carries_invalid_credentials_verbatim() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/user/auth/login"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"message": "Invalid credentials"})),
        )
        .mount(&server)
        .await;

    let err = client_for(&server)
        .login(&LoginRequest {
            email: "fan@example.com".to_string(),
            password: "wrong".to_string(),
        })
        .await
        .unwrap_err();

    assert!(err.is_unauthorized());
    assert_eq!(err.user_message(), "Invalid credentials");
}

#[tokio::test]
async fn admin_transactions_use_admin_query() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/transactions/list"))
        .and(query_param("admin", "true"))
        .and(query_param("page", "1"))
        .and(query_param("limit", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{
                "_id": "t1",
                "reservationId": "r1",
                "username": "fan",
                "concertName": "Summer Festival",
                "action": "CONFIRMED",
                "createdAt": "2025-06-01T12:00:00Z",
                "updatedAt": "2025-06-01T12:00:00Z"
            }],
            "meta": {"total": 1, "page": 1, "limit": 5, "pages": 1}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let page = client_for(&server)
        .list_transactions(&TransactionScope::Admin, 1, 5, &token())
        .await
        .unwrap();

    assert_eq!(page.data.len(), 1);
    assert_eq!(page.data[0].action, ReservationStatus::Confirmed);
}

#[tokio::test]
async fn dashboard_stats_parse_camel_case_fields() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/reserve/dashboard"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "totalSeats": 500,
            "reservedCount": 120,
            "cancelledCount": 7
        })))
        .mount(&server)
        .await;

    let stats = client_for(&server).dashboard_stats(&token()).await.unwrap();
    assert_eq!(stats.total_seats, 500);
    assert_eq!(stats.reserved_count, 120);
    assert_eq!(stats.cancelled_count, 7);
}

#[tokio::test]
async fn stalled_request_settles_as_timeout() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/reserve/dashboard"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(5)))
        .mount(&server)
        .await;

    let client = ApiClient::new(
        ApiConfig::new(server.uri()).with_timeout(Duration::from_millis(50)),
    );

    let err = client.dashboard_stats(&token()).await.unwrap_err();
    assert_eq!(err, ApiError::Timeout);
}
