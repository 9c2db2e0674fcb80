use eslm_client::{ClientError, EslmClient};
use eslm_types::{CapabilityDraft, PromptStatus, ServiceStatus, SlmConfigUpdate, Status};
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn capability_json(id: &str, name: &str) -> serde_json::Value {
    json!({
        "id": id,
        "name": name,
        "metadata": {
            "id": id,
            "type": "Capability",
            "status": "Implemented",
            "generated": "11/22/2025, 10:24:01 AM"
        },
        "description": "Track and manage all system capabilities",
        "enablers": ["Health Monitoring"],
        "upstreamDependencies": [],
        "downstreamImpacts": [],
        "implementationNotes": "Uses graph-based dependency tracking",
        "acceptanceCriteria": ["All capabilities tracked"]
    })
}

#[tokio::test]
async fn list_capabilities_decodes_payload() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/capabilities"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([capability_json("CAP-318652", "Capability Tracking")])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = EslmClient::new(&server.uri()).unwrap();
    let caps = client.list_capabilities().await.unwrap();

    assert_eq!(caps.len(), 1);
    assert_eq!(caps[0].status(), Status::Implemented);
}

#[tokio::test]
async fn get_capability_uses_id_path() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/capabilities/CAP-011"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(capability_json("CAP-011", "Output Delivery System")),
        )
        .mount(&server)
        .await;

    let client = EslmClient::new(&format!("{}/", server.uri())).unwrap();
    let cap = client.get_capability("CAP-011").await.unwrap();
    assert_eq!(cap.name, "Output Delivery System");
}

#[tokio::test]
async fn create_capability_sends_partial_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/capabilities"))
        .and(body_json(json!({ "name": "Flow Visualization" })))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(capability_json("CAP-020", "Flow Visualization")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = EslmClient::new(&server.uri()).unwrap();
    let draft = CapabilityDraft {
        name: Some("Flow Visualization".into()),
        ..Default::default()
    };
    let created = client.create_capability(&draft).await.unwrap();
    assert_eq!(created.id, "CAP-020");
}

#[tokio::test]
async fn update_capability_uses_put() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/capabilities/CAP-020"))
        .and(body_json(json!({ "description": "Graph view" })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(capability_json("CAP-020", "Flow Visualization")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = EslmClient::new(&server.uri()).unwrap();
    let draft = CapabilityDraft {
        description: Some("Graph view".into()),
        ..Default::default()
    };
    client.update_capability("CAP-020", &draft).await.unwrap();
}

#[tokio::test]
async fn not_found_is_passed_through_as_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/stories/STORY-404"))
        .respond_with(ResponseTemplate::new(404).set_body_string("no such story"))
        .mount(&server)
        .await;

    let client = EslmClient::new(&server.uri()).unwrap();
    let err = client.get_story("STORY-404").await.unwrap_err();

    match err {
        ClientError::Status { status, ref body } => {
            assert_eq!(status, 404);
            assert_eq!(body, "no such story");
        }
        other => panic!("expected status error, got {other:?}"),
    }
    assert_eq!(err.status(), Some(404));
}

#[tokio::test]
async fn server_errors_are_not_retried() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/health/services"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;

    let client = EslmClient::new(&server.uri()).unwrap();
    let err = client.service_health().await.unwrap_err();
    assert_eq!(err.status(), Some(503));
}

#[tokio::test]
async fn mismatched_body_is_a_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/dashboard/stats"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "unexpected": true })))
        .mount(&server)
        .await;

    let client = EslmClient::new(&server.uri()).unwrap();
    let err = client.dashboard_stats().await.unwrap_err();
    assert!(matches!(err, ClientError::Decode(_)));
}

#[tokio::test]
async fn service_health_decodes_statuses() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/health/services"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": "3",
                "name": "Output Delivery",
                "status": "degraded",
                "lastCheck": "2025-11-22T10:03:26Z",
                "responseTime": 350,
                "uptime": 98.2
            }
        ])))
        .mount(&server)
        .await;

    let client = EslmClient::new(&server.uri()).unwrap();
    let health = client.service_health().await.unwrap();
    assert_eq!(health[0].status, ServiceStatus::Degraded);
}

#[tokio::test]
async fn submit_prompt_posts_prompt_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/prompts"))
        .and(body_json(json!({ "prompt": "Create a navbar" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "p-1",
            "prompt": "Create a navbar",
            "timestamp": "2025-11-22T10:03:26Z",
            "status": "pending"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = EslmClient::new(&server.uri()).unwrap();
    let prompt = client.submit_prompt("Create a navbar").await.unwrap();
    assert_eq!(prompt.status, PromptStatus::Pending);
}

#[tokio::test]
async fn outputs_filter_by_prompt_id() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/outputs"))
        .and(query_param("promptId", "p-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": "o-1",
                "type": "component",
                "content": "<NavBar />",
                "timestamp": "2025-11-22T10:03:26Z",
                "promptId": "p-1"
            }
        ])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/outputs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(0)
        .mount(&server)
        .await;

    let client = EslmClient::new(&server.uri()).unwrap();
    let filtered = client.outputs(Some("p-1")).await.unwrap();
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].prompt_id, "p-1");
}

#[tokio::test]
async fn outputs_without_filter_send_no_prompt_id() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/outputs"))
        .and(query_param_is_missing("promptId"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": "o-1",
                "type": "component",
                "content": "<NavBar />",
                "timestamp": "2025-11-22T10:03:26Z",
                "promptId": "p-1"
            },
            {
                "id": "o-2",
                "type": "layout",
                "content": "<Settings />",
                "timestamp": "2025-11-22T10:04:10Z",
                "promptId": "p-2"
            }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let client = EslmClient::new(&server.uri()).unwrap();
    let all = client.outputs(None).await.unwrap();
    let prompts: Vec<_> = all.iter().map(|o| o.prompt_id.as_str()).collect();
    assert_eq!(prompts, vec!["p-1", "p-2"]);
}

#[tokio::test]
async fn update_slm_config_sends_only_changed_fields() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/slm/config"))
        .and(body_json(json!({ "temperature": 0.5 })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "modelName": "DELM-UI-v1.0",
            "version": "1.0.0",
            "temperature": 0.5,
            "maxTokens": 2048,
            "enabled": true
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = EslmClient::new(&server.uri()).unwrap();
    let update = SlmConfigUpdate {
        temperature: Some(0.5),
        ..Default::default()
    };
    let config = client.update_slm_config(&update).await.unwrap();
    assert_eq!(config.temperature, 0.5);
}

#[tokio::test]
async fn unreachable_backend_is_a_transport_error() {
    // Port 9 (discard) on localhost is not expected to serve HTTP.
    let client = EslmClient::new("http://127.0.0.1:9").unwrap();
    let err = client.list_enablers().await.unwrap_err();
    assert!(matches!(err, ClientError::Http(_)));
}
