//! Execution tests for the write operations: create, update, delete.
//!
//! Uses wiremock to mock the objects API and test actual execution flow.

use objectsapi::{
    create_payload, update_payload, Create, Delete, ObjectRecord, ObjectRequest, ObjectsClient,
    Update,
};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_create_sends_name_and_data() {
    let mock_server = MockServer::start().await;

    let expected_body = serde_json::json!({
        "name": "Apple MacBook Pro 16",
        "data": {
            "year": 2019,
            "price": 1849.99,
            "CPU model": "Intel Core i9",
            "Hard disk size": "1 TB"
        }
    });

    let mut created = expected_body.clone();
    created["id"] = "abc123".into();
    created["createdAt"] = "2024-01-01T00:00:00Z".into();

    Mock::given(method("POST"))
        .and(path("/objects"))
        .and(body_json(&expected_body))
        .respond_with(ResponseTemplate::new(200).set_body_json(&created))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = ObjectsClient::new(&mock_server.uri()).unwrap();
    let object = ObjectRecord::create(&client, &create_payload())
        .await
        .unwrap();

    assert_eq!(object.id, "abc123");
    assert_eq!(object.data, Some(create_payload().data));
    assert_eq!(
        object.created_at.unwrap().to_rfc3339(),
        "2024-01-01T00:00:00+00:00"
    );
}

#[tokio::test]
async fn test_update_puts_to_item_and_returns_updated_entity() {
    let mock_server = MockServer::start().await;

    let request = update_payload();
    let mut updated = serde_json::to_value(&request).unwrap();
    updated["id"] = "abc123".into();
    updated["updatedAt"] = "2024-01-02T08:30:00.500Z".into();

    Mock::given(method("PUT"))
        .and(path("/objects/abc123"))
        .and(body_json(&request))
        .respond_with(ResponseTemplate::new(200).set_body_json(&updated))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = ObjectsClient::new(&mock_server.uri()).unwrap();
    let object = ObjectRecord::update(&client, "abc123".to_string(), &request)
        .await
        .unwrap();

    assert_eq!(object.id, "abc123");
    assert_eq!(object.data.as_ref(), Some(&request.data));
    assert!(object.updated_at.is_some());
    assert!(object.created_at.is_none());
}

#[tokio::test]
async fn test_update_rejected_by_server() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/objects/7"))
        .respond_with(ResponseTemplate::new(405).set_body_json(serde_json::json!({
            "error": "7 is a reserved id and the data object of it cannot be overwritten."
        })))
        .mount(&mock_server)
        .await;

    let client = ObjectsClient::new(&mock_server.uri()).unwrap();
    let err = ObjectRecord::update(&client, "7".to_string(), &ObjectRequest::new("x"))
        .await
        .unwrap_err();

    assert_eq!(err.status_code(), Some(405));
    assert!(err.to_string().contains("reserved id"));
}

#[tokio::test]
async fn test_delete_returns_raw_body() {
    let mock_server = MockServer::start().await;

    let body = r#"{"message":"Object with id = abc123 has been deleted."}"#;

    Mock::given(method("DELETE"))
        .and(path("/objects/abc123"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = ObjectsClient::new(&mock_server.uri()).unwrap();
    let response = ObjectRecord::delete(&client, "abc123".to_string())
        .await
        .unwrap();

    assert_eq!(response, body);
}
