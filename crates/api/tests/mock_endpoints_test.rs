mod common;

use std::time::{Duration, Instant};

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
};
use serde_json::{json, Value};

use common::{body_json, body_text, get, get_json, send, TestEnv};

#[tokio::test]
async fn test_health_endpoint() {
    let env = TestEnv::new();
    let (status, headers, json) = get_json(env.app(), "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(headers[header::CACHE_CONTROL], "no-store");
    assert_eq!(json["status"], "ok");
    assert_eq!(json["service"], "langeval-mock");
    assert!(json["timestamp"].is_string());
    assert!(json["version"].is_string());
}

#[tokio::test]
async fn test_mock_endpoints_return_same_body_on_every_call() {
    let env = TestEnv::new();
    let uris = [
        "/api/v1/benchmarks",
        "/api/v1/models",
        "/api/v1/team",
        "/api/v1/navigation",
        "/api/v1/dashboard/health",
        "/api/v1/dashboard/status",
        "/api/v1/dev-console/logs",
        "/api/v1/dev-console/failure-detail",
        "/api/v1/dataset-gen/history",
        "/api/v1/contribution/commits",
        "/api/v1/human-review/queue",
        "/api/v1/battle-arena/campaigns",
        "/api/v1/resource/scenarios/default",
    ];

    for uri in uris {
        let (first_status, headers, first) = get_json(env.app(), uri).await;
        let (_, _, second) = get_json(env.app(), uri).await;

        assert_eq!(first_status, StatusCode::OK, "{uri}");
        assert_eq!(headers[header::CACHE_CONTROL], "no-store", "{uri}");
        assert_eq!(first, second, "{uri}");
    }
}

#[tokio::test]
async fn test_list_shapes() {
    let env = TestEnv::new();

    let (_, _, benchmarks) = get_json(env.app(), "/api/v1/benchmarks").await;
    assert_eq!(benchmarks["data"].as_array().unwrap().len(), 3);
    assert_eq!(benchmarks["data"][0]["name"], "MMLU");

    let (_, _, models) = get_json(env.app(), "/api/v1/models").await;
    assert_eq!(models.as_array().unwrap().len(), 3);
    assert_eq!(models[0]["type"], "API");

    let (_, _, team) = get_json(env.app(), "/api/v1/team").await;
    assert_eq!(team[1]["role"], "EDITOR");

    let (_, _, radar) = get_json(env.app(), "/api/v1/dashboard/health").await;
    assert_eq!(radar["data"][0], json!({ "subject": "Accuracy", "A": 120, "fullMark": 150 }));

    let (_, _, queue) = get_json(env.app(), "/api/v1/human-review/queue").await;
    assert_eq!(queue.as_array().unwrap().len(), 7);
    assert!(queue[0]["agentName"].is_string());
}

#[tokio::test]
async fn test_mock_source_header() {
    let env = TestEnv::new();

    for uri in [
        "/api/v1/dashboard/status",
        "/api/v1/dev-console/logs",
        "/api/v1/dev-console/failure-detail",
    ] {
        let (_, headers, _) = get_json(env.app(), uri).await;
        assert_eq!(headers["x-source"], "mock", "{uri}");
    }

    let (_, _, status) = get_json(env.app(), "/api/v1/dashboard/status").await;
    assert_eq!(status["stage"], "Beta Testing");
    assert_eq!(status["details"]["status"], "GO");
    assert_eq!(status["details"]["passRate"], 94.5);
}

#[tokio::test]
async fn test_delete_model_returns_no_content() {
    let env = TestEnv::new();
    let request = Request::builder()
        .method(Method::DELETE)
        .uri("/api/v1/models/2")
        .body(Body::empty())
        .unwrap();

    let response = send(env.app(), request).await;

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(body_text(response).await.is_empty());
}

#[tokio::test]
async fn test_model_check_and_method_not_allowed() {
    let env = TestEnv::new();

    let check = Request::builder()
        .method(Method::POST)
        .uri("/api/v1/models/gpt-4-check")
        .body(Body::empty())
        .unwrap();
    let response = send(env.app(), check).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({ "status": "connected", "latency": "45ms" })
    );

    let other = Request::builder()
        .method(Method::POST)
        .uri("/api/v1/models/1")
        .body(Body::empty())
        .unwrap();
    let response = send(env.app(), other).await;
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(
        body_json(response).await,
        json!({ "error": "Method not allowed" })
    );
}

#[tokio::test]
async fn test_create_agent_echoes_body_with_fixed_fields() {
    let env = TestEnv::new();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/v1/resource/agents/create")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            json!({
                "name": "Refund Bot",
                "type": "Task Agent",
                "status": "draft",
                "version": "v9",
            })
            .to_string(),
        ))
        .unwrap();

    let response = send(env.app(), request).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["message"], "Agent created successfully");
    assert_eq!(json["data"]["name"], "Refund Bot");
    assert_eq!(json["data"]["type"], "Task Agent");
    assert_eq!(json["data"]["status"], "active");
    assert_eq!(json["data"]["version"], "v0.0.1");

    let id = json["data"]["id"].as_str().unwrap();
    let number: u32 = id.strip_prefix("agent-").unwrap().parse().unwrap();
    assert!(number < 1000);
}

#[tokio::test]
async fn test_create_agent_rejects_malformed_body() {
    let env = TestEnv::new();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/v1/resource/agents/create")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let response = send(env.app(), request).await;

    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn test_execute_scenario_fabricates_execution_id() {
    let env = TestEnv::new();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/v1/resource/scenarios/scn-42/execute")
        .body(Body::empty())
        .unwrap();

    let response = send(env.app(), request).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["status"], "Running");
    let millis: i64 = json["executionId"]
        .as_str()
        .unwrap()
        .strip_prefix("exec_")
        .unwrap()
        .parse()
        .unwrap();
    assert!(millis > 0);

    let (status, _, executions) =
        get_json(env.app(), "/api/v1/resource/scenarios/scn-42/executions").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(executions, json!([]));
}

#[tokio::test]
async fn test_default_scenario_graph() {
    let env = TestEnv::new();
    let (_, _, json) = get_json(env.app(), "/api/v1/resource/scenarios/default").await;

    assert_eq!(json["data"]["nodes"].as_array().unwrap().len(), 12);
    assert_eq!(json["data"]["edges"].as_array().unwrap().len(), 11);
    assert_eq!(json["data"]["nodes"][0]["id"], "start");
}

#[tokio::test]
async fn test_campaigns_pagination() {
    let env = TestEnv::new();

    let (_, _, first) = get_json(env.app(), "/api/v1/battle-arena/campaigns").await;
    assert_eq!(first["page"], 1);
    assert_eq!(first["size"], 10);
    assert_eq!(first["total"], 6);
    assert_eq!(first["pages"], 1);
    assert_eq!(first["items"].as_array().unwrap().len(), 6);

    let (_, _, second) = get_json(env.app(), "/api/v1/battle-arena/campaigns?page=2&size=4").await;
    assert_eq!(second["pages"], 2);
    let items = second["items"].as_array().unwrap();
    assert_eq!(items.len(), 2);

    for item in items {
        let current: u64 = item["current_turn"].as_u64().unwrap();
        let max: u64 = item["max_turns"].as_u64().unwrap();
        assert!(current <= max);
        assert!(["adversarial", "comparison"].contains(&item["mode"].as_str().unwrap()));
    }

    let (_, _, beyond) = get_json(env.app(), "/api/v1/battle-arena/campaigns?page=9").await;
    assert_eq!(beyond["items"], Value::Array(Vec::new()));
    assert_eq!(beyond["total"], 6);
}

#[tokio::test]
async fn test_campaigns_blank_or_invalid_params_use_defaults() {
    let env = TestEnv::new();

    for uri in [
        "/api/v1/battle-arena/campaigns?page=&size=",
        "/api/v1/battle-arena/campaigns?page=abc&size=lots",
    ] {
        let (status, _, body) = get_json(env.app(), uri).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
        assert_eq!(body["page"], 1);
        assert_eq!(body["size"], 10);
        assert_eq!(body["items"].as_array().unwrap().len(), 6);
    }
}

#[tokio::test]
async fn test_simulated_latency_applies_when_enabled() {
    let mut env = TestEnv::new();
    env.config.mock.simulate_latency = true;

    let start = Instant::now();
    let response = get(env.app(), "/api/v1/dashboard/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(start.elapsed() >= Duration::from_millis(300));
}
