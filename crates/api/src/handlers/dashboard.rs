use axum::{extract::State, response::Response, Json};
use langeval_domain::{fixtures, Benchmark, FailureDetail, HealthAxis, PipelineLog};

use super::simulate_latency;
use crate::{
    response::{data, with_source, DataEnvelope, Source},
    routes::AppState,
};

const HEALTH_LATENCY_MS: u64 = 300;

pub async fn list_benchmarks() -> Json<DataEnvelope<Vec<Benchmark>>> {
    data(fixtures::benchmarks())
}

/// 健康雷达图
pub async fn get_health(State(state): State<AppState>) -> Json<DataEnvelope<Vec<HealthAxis>>> {
    simulate_latency(&state, HEALTH_LATENCY_MS).await;
    data(fixtures::health_radar())
}

/// 发布状态
pub async fn get_status() -> Response {
    with_source(Source::Mock, Json(fixtures::dashboard_status()))
}

pub async fn list_pipeline_logs() -> Response {
    let logs: Json<DataEnvelope<Vec<PipelineLog>>> = data(fixtures::pipeline_logs());
    with_source(Source::Mock, logs)
}

pub async fn get_failure_detail() -> Response {
    let detail: Json<DataEnvelope<FailureDetail>> = data(fixtures::failure_detail());
    with_source(Source::Mock, detail)
}
