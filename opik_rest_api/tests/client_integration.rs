use opik_rest_api::types::{DatasetItemSource, Provider};
use opik_rest_api::{ApiErrorKind, Client, Error};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

#[tokio::test]
async fn get_dataset_item_success() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("dataset_item.json");

    Mock::given(method("GET"))
        .and(path("/v1/private/datasets/items/item-1"))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let item = client.get_dataset_item("item-1").await.unwrap();
    assert_eq!(item.source, DatasetItemSource::Trace);
    assert_eq!(item.experiment_items.value().map(Vec::len), Some(2));
    assert_eq!(item.extra()["workspace_name"], "default");
}

#[tokio::test]
async fn get_dataset_item_conflict() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/private/datasets/items/item-1"))
        .respond_with(
            ResponseTemplate::new(409).set_body_string(load_fixture("error_conflict.json")),
        )
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    match client.get_dataset_item("item-1").await {
        Err(Error::Api(err)) => {
            assert_eq!(err.kind, ApiErrorKind::Conflict);
            assert_eq!(err.status, 409);
            assert_eq!(err.message(), Some("already exists"));
        }
        other => panic!("expected conflict, got {:?}", other.map(|_| ())),
    }
}

#[tokio::test]
async fn get_dataset_item_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/private/datasets/items/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_string(
            r#"{"code": 404, "message": "Dataset item not found"}"#,
        ))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let err = client.get_dataset_item("missing").await.unwrap_err();
    assert!(matches!(err, Error::Api(ref e) if e.kind == ApiErrorKind::NotFound));
}

#[tokio::test]
async fn get_dataset_item_server_error_with_plain_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/private/datasets/items/item-1"))
        .respond_with(ResponseTemplate::new(503).set_body_string("Service Unavailable"))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    match client.get_dataset_item("item-1").await {
        Err(Error::Api(err)) => {
            assert_eq!(err.kind, ApiErrorKind::Undecodable);
            assert_eq!(err.status, 503);
            assert!(err.body_decode_failed());
        }
        other => panic!("expected server error, got {:?}", other.map(|_| ())),
    }
}

#[tokio::test]
async fn get_dataset_item_unknown_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/private/datasets/items/item-1"))
        .respond_with(ResponseTemplate::new(418).set_body_string("teapot"))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    match client.get_dataset_item("item-1").await {
        Err(Error::Api(err)) => {
            assert_eq!(err.kind, ApiErrorKind::UnknownStatus);
            assert_eq!(err.status, 418);
        }
        other => panic!("expected unknown status, got {:?}", other.map(|_| ())),
    }
}

#[tokio::test]
async fn get_dataset_item_schema_violation() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/private/datasets/items/item-1"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"data": {"x": 1}}"#))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let err = client.get_dataset_item("item-1").await.unwrap_err();
    match err {
        Error::Schema(e) => assert_eq!(e.field(), Some("source")),
        other => panic!("expected schema error, got {other:?}"),
    }
}

#[tokio::test]
async fn get_dataset_item_malformed_json() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/private/datasets/items/item-1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{not valid json}"))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let result = client.get_dataset_item("item-1").await;
    assert!(matches!(result, Err(Error::Schema(_))));
}

#[tokio::test]
async fn get_experiment_item_success() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("experiment_item.json");

    Mock::given(method("GET"))
        .and(path("/v1/private/experiments/items/run-1"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let item = client.get_experiment_item("run-1").await.unwrap();
    assert_eq!(item.experiment_id, "0190babd-aaaa-7000-8000-000000000000");
}

#[tokio::test]
async fn get_provider_api_key_success() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("provider_api_key.json");

    Mock::given(method("GET"))
        .and(path("/v1/private/llm-provider-key/key-1"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let key = client.get_provider_api_key("key-1").await.unwrap();
    assert_eq!(key.provider, Provider::Anthropic);
}

#[tokio::test]
async fn unreachable_server_is_request_failure() {
    let client = Client::with_base_url("http://127.0.0.1:1");
    let result = client.get_dataset_item("item-1").await;
    assert!(matches!(result, Err(Error::RequestFailed)));
}

#[tokio::test]
async fn item_id_with_reserved_characters_stays_one_segment() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("dataset_item.json");

    Mock::given(method("GET"))
        .and(path("/v1/private/datasets/items/a%2Fb%3Fc"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let item = client.get_dataset_item("a/b?c").await.unwrap();
    assert_eq!(item.source, DatasetItemSource::Trace);
}
