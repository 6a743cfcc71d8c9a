//! Config-driven wiring: load a TOML file, build a facade from its URL

mod harness;

use std::fs;

use datagate_config::ClientsConfig;
use datagate_data_factory::DataFactoryClient;
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

use harness::{mock_backend, platform_headers};

#[tokio::test]
async fn facade_built_from_a_loaded_config_reaches_the_backend() {
    let (server, base_url) = mock_backend().await;

    Mock::given(method("GET"))
        .and(path("/lab/id1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"name": "Dia lab"})),
        )
        .mount(&server)
        .await;

    // The default branch keeps the scenario hermetic: no process-wide
    // environment mutation, the placeholder still goes through expansion
    let config_path = std::env::temp_dir().join(format!(
        "datagate-clients-{}-{}.toml",
        std::process::id(),
        server.address().port()
    ));
    fs::write(
        &config_path,
        format!(
            "# generated for this scenario\n[registry-rest-api]\nurl = \"{{{{ env.DATAGATE_IT_REGISTRY_URL | default(\"{base_url}\") }}}}\"\n"
        ),
    )
    .unwrap();

    let config = ClientsConfig::load(&config_path).unwrap();
    fs::remove_file(&config_path).unwrap();

    let registry = config.registry_rest_api.expect("section is present");
    let client = DataFactoryClient::new(registry.url);

    let response = client
        .perform_get("lab", "id1", platform_headers())
        .await
        .unwrap();

    assert_eq!(
        response.response_body.unwrap().prop("name").value().as_deref(),
        Some("Dia lab")
    );
}
