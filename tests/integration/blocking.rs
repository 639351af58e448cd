//! Blocking client against the mock controller. Plain `#[test]`: the blocking
//! transport runs its own runtime and must not be nested in tokio.

use crate::integration::mock_server::{MockServerFixture, ACCEPT, CONTENT_TYPE};
use mockito::Matcher;
use restconf_client::{BlockingClassifyExt, BlockingRestconfClient};
use serde_json::json;

#[test]
fn test_blocking_get_with_default_content() {
    let mut fixture = MockServerFixture::new_blocking();
    let mock = fixture
        .server
        .mock("GET", "/restconf/data/tailf-ncs:devices/device=ce0")
        .match_header("accept", ACCEPT)
        .match_header("content-type", CONTENT_TYPE)
        .match_query(Matcher::UrlEncoded("content".into(), "config".into()))
        .with_status(200)
        .with_body(r#"{"tailf-ncs:device":[{"name":"ce0"}]}"#)
        .create();

    let resp = fixture
        .blocking_client()
        .get("/tailf-ncs:devices/device=ce0")
        .unwrap();
    assert_eq!(resp.status(), 200);
    assert!(resp.text().unwrap().contains("ce0"));
    mock.assert();
}

#[test]
fn test_blocking_query_and_root() {
    let mut fixture = MockServerFixture::new_blocking();
    let root = fixture.server.mock("GET", "/restconf/").with_status(200).create();
    let query = fixture
        .server
        .mock("POST", "/restconf/tailf/query/")
        .match_body(Matcher::Json(json!({"start-query": {}})))
        .with_status(200)
        .create();

    let client = fixture.blocking_client();
    client.get_root().unwrap();
    client.query(json!({"start-query": {}}), None).unwrap();
    root.assert();
    query.assert();
}

#[test]
fn test_blocking_classification() {
    let mut fixture = MockServerFixture::new_blocking();
    let _mock = fixture
        .server
        .mock("POST", "/restconf/data/a:b")
        .with_status(409)
        .with_body(r#"{"ietf-restconf:errors":{"error":[{"error-type":"application","error-tag":"data-exists"}]}}"#)
        .create();

    let resp = fixture.blocking_client().post("{}", "a:b", None).unwrap();
    let err = BlockingRestconfClient::parse_error(resp, false).unwrap();
    assert_eq!(err.error_tag(), Some("data-exists"));
    assert_eq!(err.error_type(), Some("application"));
}

#[test]
fn test_blocking_check_status() {
    let mut fixture = MockServerFixture::new_blocking();
    let _mock = fixture
        .server
        .mock("DELETE", "/restconf/data/a:b")
        .with_status(500)
        .with_body("internal")
        .create();

    let err = fixture
        .blocking_client()
        .delete("/a:b", None)
        .unwrap()
        .check_status(false)
        .unwrap_err();
    let restconf = err.as_restconf().expect("classified error");
    assert_eq!(restconf.error_message(), Some("internal"));
}
