//! Endpoint routing against the mock controller: base paths, headers, auth,
//! query defaults and payload serialization.

use crate::integration::mock_server::MockServerFixture;
use mockito::Matcher;
use restconf_client::{ContentFilter, QueryParams};
use serde_json::json;

#[tokio::test]
async fn test_get_root() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .mock_restconf("GET", "/restconf/", 200, r#"{"ietf-restconf:restconf":{}}"#)
        .await;

    let resp = fixture.client().get_root().await.unwrap();
    assert_eq!(resp.status(), 200);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_get_defaults_content_config() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .server
        .mock("GET", "/restconf/data/tailf-ncs:devices")
        .match_query(Matcher::UrlEncoded("content".into(), "config".into()))
        .with_status(200)
        .with_body("{}")
        .create_async()
        .await;

    let resp = fixture.client().get("/tailf-ncs:devices").await.unwrap();
    assert_eq!(resp.status(), 200);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_get_explicit_content_wins() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .server
        .mock("GET", "/restconf/data/tailf-ncs:devices")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("content".into(), "nonconfig".into()),
            Matcher::UrlEncoded("depth".into(), "2".into()),
        ]))
        .with_status(200)
        .create_async()
        .await;

    let mut params = QueryParams::new();
    params.insert("content".into(), "nonconfig".into());
    params.insert("depth".into(), "2".into());
    fixture
        .client()
        .get_with("tailf-ncs:devices", Some(ContentFilter::Config), Some(params))
        .await
        .unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn test_leading_slash_is_optional() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .server
        .mock("DELETE", "/restconf/data/a:b/c=1")
        .with_status(204)
        .expect(2)
        .create_async()
        .await;

    let client = fixture.client();
    client.delete("/a:b/c=1", None).await.unwrap();
    client.delete("a:b/c=1", None).await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn test_data_verbs_send_body() {
    let mut fixture = MockServerFixture::new().await;
    let body = r#"{"a:b":{"c":1}}"#;
    let mut mocks = Vec::new();
    for method in ["PUT", "POST", "PATCH"] {
        mocks.push(
            fixture
                .server
                .mock(method, "/restconf/data/a:b")
                .match_header("content-type", "application/yang-data+json")
                .match_body(body)
                .with_status(204)
                .create_async()
                .await,
        );
    }

    let client = fixture.client();
    assert_eq!(client.put(body, "/a:b", None).await.unwrap().status(), 204);
    assert_eq!(client.post(body, "/a:b", None).await.unwrap().status(), 204);
    assert_eq!(client.patch(body, "/a:b", None).await.unwrap().status(), 204);
    for mock in mocks {
        mock.assert_async().await;
    }
}

#[tokio::test]
async fn test_action_uses_operations_path() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .server
        .mock("POST", "/restconf/operations/tailf-ncs:devices/sync-from")
        .match_query(Matcher::UrlEncoded("dry-run".into(), "true".into()))
        .with_status(200)
        .with_body(r#"{"tailf-ncs:output":{}}"#)
        .create_async()
        .await;

    let mut params = QueryParams::new();
    params.insert("dry-run".into(), "true".into());
    fixture
        .client()
        .action("{}", "/tailf-ncs:devices/sync-from", Some(params))
        .await
        .unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn test_query_serializes_structured_payload() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .server
        .mock("POST", "/restconf/tailf/query/")
        .match_body(Matcher::Json(json!({
            "immediate-query": {"foreach": "/devices/device", "select": [{"expression": "name"}]}
        })))
        .with_status(200)
        .create_async()
        .await;

    fixture
        .client()
        .query(
            json!({"immediate-query": {"foreach": "/devices/device", "select": [{"expression": "name"}]}}),
            None,
        )
        .await
        .unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn test_basic_auth_attached_when_both_credentials_set() {
    let mut fixture = MockServerFixture::new().await;
    // admin:admin
    let mock = fixture
        .server
        .mock("GET", "/restconf/")
        .match_header("authorization", "Basic YWRtaW46YWRtaW4=")
        .with_status(200)
        .create_async()
        .await;

    let client = restconf_client::RestconfClient::new(
        fixture.config().credentials("admin", "admin").build(),
    )
    .unwrap();
    client.get_root().await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn test_no_auth_without_password() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .server
        .mock("GET", "/restconf/")
        .match_header("authorization", Matcher::Missing)
        .with_status(200)
        .create_async()
        .await;

    let mut config = fixture.config().build();
    config.username = Some("admin".into());
    let client = restconf_client::RestconfClient::new(config).unwrap();
    client.get_root().await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn test_error_status_is_returned_unclassified() {
    let mut fixture = MockServerFixture::new().await;
    let _mock = fixture
        .mock_error_response("GET", "/restconf/data/missing:node", 404, "")
        .await;

    let resp = fixture.client().get("missing:node").await.unwrap();
    assert_eq!(resp.status(), 404);
}
