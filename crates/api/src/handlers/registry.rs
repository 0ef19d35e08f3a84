use axum::{
    extract::Path,
    response::{IntoResponse, Response},
    Json,
};
use langeval_domain::{fixtures, ModelEntry, NavGroup, TeamMember};
use serde_json::json;
use tracing::info;

use crate::{
    error::{ApiError, ApiResult},
    response::{data, no_content, DataEnvelope},
};

pub async fn list_models() -> Json<Vec<ModelEntry>> {
    Json(fixtures::models())
}

/// 删除模型；模拟数据不保存状态
pub async fn delete_model(Path(id): Path<String>) -> impl IntoResponse {
    info!("删除模型: {}", id);
    no_content()
}

/// 连接检查：只有以 `check` 结尾的路径段被识别
pub async fn check_model(Path(id): Path<String>) -> ApiResult<Response> {
    if !id.ends_with("check") {
        return Err(ApiError::MethodNotAllowed);
    }

    Ok(Json(json!({ "status": "connected", "latency": "45ms" })).into_response())
}

pub async fn list_team() -> Json<Vec<TeamMember>> {
    Json(fixtures::team())
}

pub async fn list_navigation() -> Json<DataEnvelope<Vec<NavGroup>>> {
    data(fixtures::nav_groups())
}
