//! `/api/v1/resource/*`：智能体、知识库、指标库、追踪和场景。
//!
//! 列表接口优先请求上游资源服务，失败时回退到模拟数据并在响应中注明来源。

use axum::{
    extract::{Path, Query, RawQuery, State},
    response::{IntoResponse, Response},
    Json,
};
use langeval_domain::fixtures;
use rand::Rng;
use serde::Deserialize;
use serde_json::{json, Map, Value};
use tracing::{info, warn};

use super::simulate_latency;
use crate::{
    error::{ApiError, ApiResult},
    response::{
        created, data, with_source, ApiResponse, DataEnvelope, MockFallback, Source,
        SourcedResponse,
    },
    routes::AppState,
    upstream,
};

const CREATE_AGENT_LATENCY_MS: u64 = 1000;
const DEFAULT_SCENARIO_LATENCY_MS: u64 = 800;
const DEFAULT_TRACE_LIMIT: &str = "50";
const DEFAULT_TRACE_OFFSET: &str = "0";

/// 追踪列表查询参数
#[derive(Debug, Default, Deserialize)]
pub struct TraceParams {
    #[serde(rename = "agentId")]
    pub agent_id: Option<String>,
    pub limit: Option<String>,
    pub offset: Option<String>,
    pub cursor: Option<String>,
}

impl TraceParams {
    /// 转发给上游的参数，空值不转发
    fn upstream_params(&self) -> Vec<(&str, &str)> {
        let mut params = vec![
            ("limit", non_empty(&self.limit).unwrap_or(DEFAULT_TRACE_LIMIT)),
            ("offset", non_empty(&self.offset).unwrap_or(DEFAULT_TRACE_OFFSET)),
        ];
        if let Some(agent_id) = non_empty(&self.agent_id) {
            params.push(("agent_id", agent_id));
        }
        if let Some(cursor) = non_empty(&self.cursor) {
            params.push(("cursor", cursor));
        }
        params
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

pub async fn list_agents(State(state): State<AppState>, RawQuery(query): RawQuery) -> Response {
    match state
        .upstream
        .get_json("resource/agents", query.as_deref())
        .await
    {
        Ok(body) => {
            let agents: Vec<Value> = upstream::items(&body).iter().map(map_agent).collect();
            info!("从上游获取到 {} 个智能体", agents.len());
            Json(SourcedResponse::backend(agents)).into_response()
        }
        Err(e) => {
            warn!("智能体列表上游不可用，使用模拟数据: {}", e);
            Json(SourcedResponse::mock(fixtures::agents(), e.to_string())).into_response()
        }
    }
}

/// 创建智能体：回显请求体并补上 id 和固定的状态字段
pub async fn create_agent(
    State(state): State<AppState>,
    Json(body): Json<Map<String, Value>>,
) -> ApiResponse<Value> {
    simulate_latency(&state, CREATE_AGENT_LATENCY_MS).await;

    let id = format!("agent-{}", rand::rng().random_range(0..1000u32));

    let mut agent = Map::new();
    agent.insert("id".to_string(), Value::String(id));
    agent.extend(body);
    agent.insert("status".to_string(), json!("active"));
    agent.insert("version".to_string(), json!("v0.0.1"));

    ApiResponse::success_with_message(Value::Object(agent), "Agent created successfully")
}

pub async fn list_knowledge_bases(State(state): State<AppState>) -> Response {
    match state.upstream.get_json("resource/knowledge-bases", None).await {
        Ok(body) => {
            let knowledge_bases: Vec<Value> = upstream::items(&body)
                .iter()
                .map(map_knowledge_base)
                .collect();
            Json(SourcedResponse::backend(knowledge_bases)).into_response()
        }
        Err(e) => {
            warn!("知识库列表上游不可用，使用模拟数据: {}", e);
            Json(SourcedResponse::mock(fixtures::knowledge_bases(), e.to_string()))
                .into_response()
        }
    }
}

/// 指标库：上游响应原样透传，来源写在 `x-source` 响应头里
pub async fn list_metrics(State(state): State<AppState>) -> Response {
    match state.upstream.get_json("resource/metrics-library", None).await {
        Ok(body) => with_source(Source::Backend, Json(body)),
        Err(e) => {
            warn!("指标库上游不可用，使用模拟数据: {}", e);
            with_source(Source::Mock, Json(fixtures::metrics()))
        }
    }
}

/// 追踪列表：上游响应原样透传
pub async fn list_traces(
    State(state): State<AppState>,
    Query(params): Query<TraceParams>,
) -> Response {
    match state
        .upstream
        .get_json_with_params("resource/traces", &params.upstream_params())
        .await
    {
        Ok(body) => Json(body).into_response(),
        Err(e) => {
            warn!("追踪列表上游不可用，使用模拟数据: {}", e);
            let traces = fixtures::traces();
            let total = traces.len();
            Json(MockFallback::new(traces, e.to_string()).with_total(total)).into_response()
        }
    }
}

pub async fn get_trace(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match state
        .upstream
        .get_json(&format!("resource/traces/{id}"), None)
        .await
    {
        Ok(body) => Json(body).into_response(),
        Err(e) => {
            warn!("追踪 {} 上游不可用，使用模拟数据: {}", id, e);
            let mut detail = fixtures::trace_detail();
            detail["id"] = Value::String(id);
            Json(MockFallback::new(detail, e.to_string())).into_response()
        }
    }
}

/// 场景详情：上游失败时查模拟数据，都没有则 404
pub async fn get_scenario(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Value>> {
    match state
        .upstream
        .get_json(&format!("resource/scenarios/{id}"), None)
        .await
    {
        Ok(scenario) => return Ok(Json(map_scenario(scenario))),
        Err(e) => warn!("场景 {} 上游不可用，使用模拟数据: {}", id, e),
    }

    fixtures::scenario_detail(&id)
        .map(Json)
        .ok_or(ApiError::ScenarioNotFound)
}

pub async fn get_default_scenario(State(state): State<AppState>) -> Json<DataEnvelope<Value>> {
    simulate_latency(&state, DEFAULT_SCENARIO_LATENCY_MS).await;
    data(fixtures::default_scenario_graph())
}

/// 执行场景；没有执行引擎，只生成一个执行 id
pub async fn execute_scenario(Path(id): Path<String>) -> impl IntoResponse {
    let execution_id = format!("exec_{}", chrono::Utc::now().timestamp_millis());
    info!("场景 {} 模拟执行: {}", id, execution_id);

    created(json!({
        "executionId": execution_id,
        "status": "Running",
    }))
}

pub async fn list_executions(Path(_id): Path<String>) -> Json<Vec<Value>> {
    Json(Vec::new())
}

fn text_or(source: &Value, key: &str, default: &str) -> Value {
    match source.get(key).and_then(Value::as_str) {
        Some(text) if !text.is_empty() => Value::String(text.to_string()),
        _ => Value::String(default.to_string()),
    }
}

/// 上游智能体转换为控制台使用的结构，同时保留旧字段名
fn map_agent(agent: &Value) -> Value {
    let mut mapped = Map::new();
    let field = |key: &str| agent.get(key).cloned().unwrap_or(Value::Null);

    mapped.insert("id".to_string(), field("id"));
    mapped.insert("name".to_string(), field("name"));
    mapped.insert("description".to_string(), field("description"));
    mapped.insert("type".to_string(), text_or(agent, "type", "RAG Chatbot"));
    mapped.insert("version".to_string(), text_or(agent, "version", "v1.0.0"));
    mapped.insert("status".to_string(), text_or(agent, "status", "active"));
    mapped.insert("endpoint_url".to_string(), text_or(agent, "endpoint_url", ""));
    mapped.insert("repo_url".to_string(), text_or(agent, "repo_url", ""));
    mapped.insert("repoUrl".to_string(), text_or(agent, "repo_url", ""));
    mapped.insert("webhookUrl".to_string(), text_or(agent, "endpoint_url", ""));
    mapped.insert(
        "secretKey".to_string(),
        text_or(agent, "api_key_encrypted", "**********"),
    );

    for key in [
        "langfuse_project_id",
        "langfuse_project_name",
        "langfuse_org_id",
        "langfuse_org_name",
        "api_key_encrypted",
        "meta_data",
    ] {
        if let Some(value) = agent.get(key) {
            mapped.insert(key.to_string(), value.clone());
        }
    }

    Value::Object(mapped)
}

/// 上游场景补上编辑器使用的驼峰字段，节点和连线缺失时为空列表
fn map_scenario(scenario: Value) -> Value {
    let Value::Object(mut map) = scenario else {
        return scenario;
    };

    if let Some(agent_id) = map.get("agent_id").cloned() {
        map.insert("agentId".to_string(), agent_id);
    }
    if let Some(updated_at) = map.get("updated_at").cloned() {
        map.insert("updatedAt".to_string(), updated_at);
    }
    for key in ["nodes", "edges"] {
        if map.get(key).is_none_or(Value::is_null) {
            map.insert(key.to_string(), Value::Array(Vec::new()));
        }
    }

    Value::Object(map)
}

fn map_knowledge_base(kb: &Value) -> Value {
    json!({
        "id": kb.get("id").cloned().unwrap_or(Value::Null),
        "name": kb.get("name").cloned().unwrap_or(Value::Null),
        "doc_count": 0,
        "status": "synced",
        "type": text_or(kb, "chunking_strategy", "file"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_agent_applies_defaults() {
        let mapped = map_agent(&json!({
            "id": "a1",
            "name": "Support",
            "repo_url": "https://git.example.com/support",
            "langfuse_project_id": "lf-1",
        }));

        assert_eq!(mapped["type"], "RAG Chatbot");
        assert_eq!(mapped["version"], "v1.0.0");
        assert_eq!(mapped["status"], "active");
        assert_eq!(mapped["repoUrl"], "https://git.example.com/support");
        assert_eq!(mapped["webhookUrl"], "");
        assert_eq!(mapped["secretKey"], "**********");
        assert_eq!(mapped["langfuse_project_id"], "lf-1");
        assert!(mapped.get("meta_data").is_none());
    }

    #[test]
    fn test_map_agent_keeps_backend_values() {
        let mapped = map_agent(&json!({
            "id": "a2",
            "type": "Task Agent",
            "version": "v2.0.0",
            "status": "maintenance",
            "endpoint_url": "https://bot.example.com/hook",
            "api_key_encrypted": "enc:xyz",
        }));

        assert_eq!(mapped["type"], "Task Agent");
        assert_eq!(mapped["status"], "maintenance");
        assert_eq!(mapped["webhookUrl"], "https://bot.example.com/hook");
        assert_eq!(mapped["secretKey"], "enc:xyz");
        assert_eq!(mapped["api_key_encrypted"], "enc:xyz");
    }

    #[test]
    fn test_map_knowledge_base() {
        let mapped = map_knowledge_base(&json!({ "id": "kb-9", "name": "Docs" }));

        assert_eq!(
            mapped,
            json!({
                "id": "kb-9",
                "name": "Docs",
                "doc_count": 0,
                "status": "synced",
                "type": "file",
            })
        );
    }

    #[test]
    fn test_map_scenario_adds_editor_fields() {
        let mapped = map_scenario(json!({
            "id": "sc_7",
            "agent_id": "agent-002",
            "updated_at": "2024-02-03T10:00:00Z",
            "nodes": null,
        }));

        assert_eq!(mapped["agentId"], "agent-002");
        assert_eq!(mapped["updatedAt"], "2024-02-03T10:00:00Z");
        assert_eq!(mapped["nodes"], json!([]));
        assert_eq!(mapped["edges"], json!([]));
        assert_eq!(mapped["agent_id"], "agent-002");
    }

    #[test]
    fn test_trace_params_defaults_and_optional_fields() {
        assert_eq!(
            TraceParams::default().upstream_params(),
            vec![("limit", "50"), ("offset", "0")]
        );

        let params = TraceParams {
            agent_id: Some("agent-001".to_string()),
            limit: Some(String::new()),
            offset: Some("20".to_string()),
            cursor: Some("c-9".to_string()),
        };
        assert_eq!(
            params.upstream_params(),
            vec![
                ("limit", "50"),
                ("offset", "20"),
                ("agent_id", "agent-001"),
                ("cursor", "c-9")
            ]
        );
    }
}
