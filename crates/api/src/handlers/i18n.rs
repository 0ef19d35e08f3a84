use axum::{
    extract::{Path, State},
    Json,
};

use crate::{i18n::RequestConfig, routes::AppState};

/// 某语言的请求配置；未知语言返回默认语言的目录
pub async fn get_request_config(
    State(state): State<AppState>,
    Path(locale): Path<String>,
) -> Json<RequestConfig> {
    Json(state.catalogs.request_config(&state.locales, Some(locale.as_str())))
}
