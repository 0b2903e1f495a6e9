//! HTTP client behavior against a mock roster service.

mod common;

use std::time::Duration;

use common::mock_api::{MockApi, MockResponse};
use common::{sample_students, student};
use roster::api::{ApiClient, ApiError, NewStudent};

fn client_for(mock: &MockApi) -> ApiClient {
    ApiClient::new(
        &mock.base_url(),
        Duration::from_secs(2),
        Duration::from_secs(5),
    )
    .expect("client builds")
}

#[tokio::test]
async fn list_students_hits_the_collection_path() {
    let mock = MockApi::start().await;
    mock.enqueue(MockResponse::students(&sample_students())).await;

    let students = client_for(&mock).list_students().await.expect("list ok");

    assert_eq!(students, sample_students());
    let requests = mock.captured_requests().await;
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "GET");
    assert_eq!(requests[0].path, "/api/v1/students");
}

#[tokio::test]
async fn list_preserves_server_order() {
    let mock = MockApi::start().await;
    let unordered = vec![student(30, "Zoe Quinn"), student(4, "Ann Yates")];
    mock.enqueue(MockResponse::students(&unordered)).await;

    let students = client_for(&mock).list_students().await.expect("list ok");

    assert_eq!(students, unordered);
}

#[tokio::test]
async fn create_posts_the_payload_to_the_collection_path() {
    let mock = MockApi::start().await;
    mock.enqueue(MockResponse::ok()).await;

    let new_student = NewStudent {
        name: "Jamila Ahmed".to_string(),
        email: "jamila@example.com".to_string(),
        gender: "FEMALE".to_string(),
    };
    client_for(&mock)
        .create_student(&new_student)
        .await
        .expect("create ok");

    let requests = mock.captured_requests().await;
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "POST");
    assert_eq!(requests[0].path, "/api/v1/students");

    let sent: NewStudent = serde_json::from_slice(&requests[0].body).expect("json body");
    assert_eq!(sent, new_student);
}

#[tokio::test]
async fn delete_targets_the_id_path() {
    let mock = MockApi::start().await;
    mock.enqueue(MockResponse::ok()).await;

    client_for(&mock).delete_student(7).await.expect("delete ok");

    let requests = mock.captured_requests().await;
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "DELETE");
    assert_eq!(requests[0].path, "/api/v1/students/7");
}

#[tokio::test]
async fn service_rejection_becomes_a_structured_error() {
    let mock = MockApi::start().await;
    mock.enqueue(MockResponse::spring_error(
        400,
        "Bad Request",
        "Email jamila@example.com taken",
    ))
    .await;

    let error = client_for(&mock)
        .create_student(&NewStudent {
            name: "Jamila Ahmed".to_string(),
            email: "jamila@example.com".to_string(),
            gender: "FEMALE".to_string(),
        })
        .await
        .expect_err("create rejected");

    match &error {
        ApiError::Application {
            message,
            status,
            error,
        } => {
            assert_eq!(message, "Email jamila@example.com taken");
            assert_eq!(*status, 400);
            assert_eq!(error, "Bad Request");
        }
        other => panic!("expected Application, got {other:?}"),
    }
    assert_eq!(
        error.to_string(),
        "Email jamila@example.com taken [400] [Bad Request]"
    );
}

#[tokio::test]
async fn missing_delete_target_reports_not_found() {
    let mock = MockApi::start().await;
    mock.enqueue(MockResponse::spring_error(
        404,
        "Not Found",
        "Student with the id of 99 does not exist",
    ))
    .await;

    let error = client_for(&mock)
        .delete_student(99)
        .await
        .expect_err("delete rejected");

    assert_eq!(
        error.to_string(),
        "Student with the id of 99 does not exist [404] [Not Found]"
    );
}

#[tokio::test]
async fn non_json_error_body_degrades_to_malformed() {
    let mock = MockApi::start().await;
    mock.enqueue(MockResponse::malformed(502)).await;

    let error = client_for(&mock)
        .list_students()
        .await
        .expect_err("list rejected");

    match error {
        ApiError::MalformedBody { status } => assert_eq!(status, 502),
        other => panic!("expected MalformedBody, got {other:?}"),
    }
}

#[tokio::test]
async fn unreachable_service_is_a_transport_error() {
    // Nothing listens on this port; bind and drop to find a free one.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
    let base_url = format!("http://{}", listener.local_addr().expect("addr"));
    drop(listener);

    let client = ApiClient::new(&base_url, Duration::from_millis(500), Duration::from_secs(1))
        .expect("client builds");
    let error = client.list_students().await.expect_err("connect fails");

    assert!(matches!(error, ApiError::Transport(_)));
}
