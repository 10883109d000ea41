//! Execution tests for the list operation.
//!
//! Uses wiremock to mock the objects API and test actual execution flow.

use objectsapi::{List, ObjectListQuery, ObjectRecord, ObjectsClient};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_list_objects_returns_all() {
    let mock_server = MockServer::start().await;

    let response = serde_json::json!([
        {
            "id": "1",
            "name": "Google Pixel 6 Pro",
            "data": {"color": "Cloudy White", "capacity": "128 GB"}
        },
        {
            "id": "2",
            "name": "Apple iPhone 12 Mini, 256GB, Blue",
            "data": null
        }
    ]);

    Mock::given(method("GET"))
        .and(path("/objects"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&response))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = ObjectsClient::new(&mock_server.uri()).unwrap();
    let objects = ObjectRecord::list(&client, &Default::default())
        .await
        .unwrap();

    assert_eq!(objects.len(), 2);
    assert_eq!(objects[0].name, "Google Pixel 6 Pro");
    assert_eq!(objects[0].attribute_count(), 2);
    assert!(objects[1].data.is_none());
}

#[tokio::test]
async fn test_list_objects_empty() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/objects"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&mock_server)
        .await;

    let client = ObjectsClient::new(&mock_server.uri()).unwrap();
    let objects = ObjectRecord::list(&client, &Default::default())
        .await
        .unwrap();

    assert!(objects.is_empty());
}

#[tokio::test]
async fn test_list_objects_by_ids_sends_query() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/objects"))
        .and(query_param("id", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"id": "3", "name": "Apple iPhone 12 Pro Max", "data": {"capacity GB": 512}}
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = ObjectsClient::new(&mock_server.uri()).unwrap();
    let objects = ObjectRecord::list(&client, &ObjectListQuery::ids(["3"]))
        .await
        .unwrap();

    assert_eq!(objects.len(), 1);
    assert_eq!(objects[0].id, "3");
}

#[tokio::test]
async fn test_list_objects_server_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/objects"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    let client = ObjectsClient::new(&mock_server.uri()).unwrap();
    let err = ObjectRecord::list(&client, &Default::default())
        .await
        .unwrap_err();

    assert_eq!(err.status_code(), Some(503));
    assert!(err.to_string().contains("503"));
}
