//! API Integration Tests
//!
//! Each test spawns its own server on an ephemeral port with a fresh
//! seeded store, so tests are fully isolated and need no external services.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{assert_json, assert_status, fixtures::*, TestServer};
use reqwest::StatusCode;
use serde_json::json;

// ============================================================================
// Health and Sitemap
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    let health: HealthBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(health.status, "ok");
}

#[tokio::test]
async fn test_sitemap_lists_endpoints() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/").await.expect("Request failed");

    assert_eq!(response.status(), StatusCode::OK);
    let body = response.text().await.unwrap();
    assert!(body.contains("/members"));
    assert!(body.contains("/health"));
}

// ============================================================================
// Seed state
// ============================================================================

#[tokio::test]
async fn test_list_seed_members() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/members").await.unwrap();
    let members: Vec<MemberRecord> = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(members.len(), 3);
    assert_eq!(
        members.iter().map(|m| m.id).collect::<Vec<_>>(),
        vec![1, 2, 3]
    );
    assert_eq!(members[0].first_name, "John");
    assert_eq!(members[1].first_name, "Jane");
    assert_eq!(members[2].first_name, "Jimmy");
    assert!(members.iter().all(|m| m.last_name == "Jackson"));
}

#[tokio::test]
async fn test_get_seed_member() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/members/2").await.unwrap();
    let jane: MemberRecord = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(jane.first_name, "Jane");
    assert_eq!(jane.age, 35);
    assert_eq!(jane.lucky_numbers, vec![10, 14, 3]);
}

#[tokio::test]
async fn test_get_member_not_found() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/members/99").await.unwrap();
    let body: NotFoundBody = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();

    assert_eq!(body.error, "Member not found");
}

// ============================================================================
// Add member
// ============================================================================

#[tokio::test]
async fn test_add_member() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .post("/members", &CreateMemberRequest::margaret())
        .await
        .unwrap();
    let created: MemberRecord = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(created.id, 4);
    assert_eq!(created.first_name, "Margaret");
    assert_eq!(created.last_name, "Jackson");
    assert_eq!(created.age, 60);
    assert_eq!(created.lucky_numbers, vec![4]);
}

#[tokio::test]
async fn test_add_member_round_trip() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .post("/members", &CreateMemberRequest::margaret())
        .await
        .unwrap();
    let created: MemberRecord = assert_json(response, StatusCode::OK).await.unwrap();

    let response = server.get(&format!("/members/{}", created.id)).await.unwrap();
    let fetched: MemberRecord = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_add_member_explicit_id() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .post("/members", &CreateMemberRequest::margaret().with_id(40))
        .await
        .unwrap();
    let created: MemberRecord = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(created.id, 40);

    // The id counter advances past the explicit id
    let response = server
        .post("/members", &CreateMemberRequest::margaret())
        .await
        .unwrap();
    let next: MemberRecord = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(next.id, 41);
}

#[tokio::test]
async fn test_add_member_duplicate_id_conflict() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .post("/members", &CreateMemberRequest::margaret().with_id(2))
        .await
        .unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();

    // The store is untouched
    let response = server.get("/members").await.unwrap();
    let members: Vec<MemberRecord> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(members.len(), 3);
}

// ============================================================================
// Validation
// ============================================================================

#[tokio::test]
async fn test_add_member_rejections() {
    let server = TestServer::start().await.expect("Failed to start server");

    let invalid_bodies = [
        // Missing first_name
        json!({"age": 60, "lucky_numbers": [4]}),
        // Missing age
        json!({"first_name": "Margaret", "lucky_numbers": [4]}),
        // Missing lucky_numbers
        json!({"first_name": "Margaret", "age": 60}),
        // Zero age
        json!({"first_name": "Margaret", "age": 0, "lucky_numbers": [4]}),
        // Negative age
        json!({"first_name": "Margaret", "age": -5, "lucky_numbers": [4]}),
        // Age as a string
        json!({"first_name": "Margaret", "age": "33", "lucky_numbers": [4]}),
        // Lucky numbers as a string
        json!({"first_name": "Margaret", "age": 60, "lucky_numbers": "7,13"}),
        // Non-integer element in lucky numbers
        json!({"first_name": "Margaret", "age": 60, "lucky_numbers": [1, "2"]}),
        // Non-integer id
        json!({"first_name": "Margaret", "age": 60, "lucky_numbers": [4], "id": "four"}),
    ];

    for body in &invalid_bodies {
        let response = server.post("/members", body).await.unwrap();
        assert_eq!(
            response.status(),
            StatusCode::BAD_REQUEST,
            "body should be rejected: {body}"
        );
    }

    // None of the rejected requests mutated the store
    let response = server.get("/members").await.unwrap();
    let members: Vec<MemberRecord> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(members.len(), 3);
}

#[tokio::test]
async fn test_validation_error_has_message() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .post("/members", &json!({"first_name": "M", "age": 0, "lucky_numbers": []}))
        .await
        .unwrap();
    let body: MessageBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert!(!body.message.is_empty());
}

// ============================================================================
// Delete member
// ============================================================================

#[tokio::test]
async fn test_delete_member_then_get() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.delete("/members/1").await.unwrap();
    let confirmation: DeleteConfirmation = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(confirmation.done);

    let response = server.get("/members/1").await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_delete_member_twice() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.delete("/members/1").await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server.delete("/members/1").await.unwrap();
    let body: MessageBody = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(body.message, "Member not found");
}

#[tokio::test]
async fn test_deleted_id_not_reused() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.delete("/members/3").await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server
        .post("/members", &CreateMemberRequest::margaret())
        .await
        .unwrap();
    let created: MemberRecord = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(created.id, 4);
}
