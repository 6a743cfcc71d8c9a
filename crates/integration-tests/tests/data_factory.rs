//! End-to-end Data Factory scenarios against a mock backend

mod harness;

use std::collections::HashMap;

use datagate_core::ClientError;
use datagate_data_factory::DataFactoryClient;
use wiremock::matchers::{body_string, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use harness::{mock_backend, platform_headers};

#[tokio::test]
async fn crud_round_trip_over_a_named_resource() {
    let (server, base_url) = mock_backend().await;
    let client = DataFactoryClient::new(base_url);

    mount_crud_stubs(&server).await;

    let created = client
        .perform_post("lab", r#"{"name": "Dia lab"}"#, platform_headers())
        .await
        .unwrap();
    assert_eq!(created.status_code, 201);
    assert!(created.response_body.is_none());

    let read = client
        .perform_get("lab", "id1", platform_headers())
        .await
        .unwrap();
    assert_eq!(
        read.response_body.unwrap().prop("name").value().as_deref(),
        Some("Dia lab")
    );

    let updated = client
        .perform_put("lab", "id1", r#"{"name": "Renamed lab"}"#, platform_headers())
        .await
        .unwrap();
    assert_eq!(updated.status_code, 204);

    let deleted = client
        .perform_delete("lab", "id1", platform_headers())
        .await
        .unwrap();
    assert_eq!(deleted.status_code, 204);
}

async fn mount_crud_stubs(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/lab"))
        .and(header("x-access-token", "token"))
        .and(body_string(r#"{"name": "Dia lab"}"#))
        .respond_with(ResponseTemplate::new(201))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/lab/id1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"name": "Dia lab"})),
        )
        .mount(server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/lab/id1"))
        .and(body_string(r#"{"name": "Renamed lab"}"#))
        .respond_with(ResponseTemplate::new(204))
        .mount(server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/lab/id1"))
        .respond_with(ResponseTemplate::new(204))
        .mount(server)
        .await;
}

#[tokio::test]
async fn both_search_variants_reach_the_same_resource() {
    let (server, base_url) = mock_backend().await;
    let client = DataFactoryClient::new(base_url);

    Mock::given(method("POST"))
        .and(path("/search/lab"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!([{"name": "found-by-body"}])),
        )
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/lab"))
        .and(query_param("name", "Dia lab"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!([{"name": "found-by-query"}])),
        )
        .mount(&server)
        .await;

    let by_body = client
        .perform_search(
            "lab",
            &HashMap::from([("name".to_owned(), serde_json::json!("Dia lab"))]),
            platform_headers(),
        )
        .await
        .unwrap();
    assert_eq!(
        by_body.response_body.unwrap().elements()[0]
            .prop("name")
            .value()
            .as_deref(),
        Some("found-by-body")
    );

    let by_query = client
        .perform_search_by_params(
            "lab",
            &HashMap::from([("name".to_owned(), "Dia lab".to_owned())]),
            platform_headers(),
        )
        .await
        .unwrap();
    assert_eq!(
        by_query.response_body.unwrap().elements()[0]
            .prop("name")
            .value()
            .as_deref(),
        Some("found-by-query")
    );
}

#[tokio::test]
async fn batch_upload_addresses_the_upload_type() {
    let (server, base_url) = mock_backend().await;
    let client = DataFactoryClient::new(base_url);
    let body = r#"[{"name": "row1"}, {"name": "row2"}]"#;

    Mock::given(method("POST"))
        .and(path("/lab/batch"))
        .and(body_string(body))
        .respond_with(ResponseTemplate::new(201))
        .mount(&server)
        .await;

    let response = client
        .perform_post_batch("lab", "batch", body, platform_headers())
        .await
        .unwrap();

    assert_eq!(response.status_code, 201);
}

#[tokio::test]
async fn validation_errors_carry_localized_field_messages() {
    let (server, base_url) = mock_backend().await;
    let client = DataFactoryClient::new(base_url);

    Mock::given(method("POST"))
        .and(path("/lab"))
        .respond_with(ResponseTemplate::new(422).set_body_json(serde_json::json!({
            "code": "VALIDATION_ERROR",
            "details": {"errors": [{"message": "msg", "field": "name", "value": ""}]}
        })))
        .mount(&server)
        .await;

    let error = client
        .perform_post("lab", r#"{"name": ""}"#, platform_headers())
        .await
        .unwrap_err();

    let ClientError::Validation(failure) = error else {
        panic!("expected validation failure, got {error:?}");
    };
    assert_eq!(failure.code, "VALIDATION_ERROR");
    assert_eq!(failure.details.errors[0].field, "name");
    assert_eq!(
        failure.details.errors[0].message,
        "Значення змінної не відповідає правилам вказаним в домені"
    );
}

#[tokio::test]
async fn unreachable_statuses_fall_back_to_transport_failures() {
    let (server, base_url) = mock_backend().await;
    let client = DataFactoryClient::new(base_url);

    Mock::given(method("GET"))
        .and(path("/lab/id1"))
        .respond_with(ResponseTemplate::new(418).set_body_string("teapot"))
        .mount(&server)
        .await;

    let error = client
        .perform_get("lab", "id1", platform_headers())
        .await
        .unwrap_err();

    assert!(matches!(
        error,
        ClientError::Transport { status: Some(418), .. }
    ));
}
