use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::{error, warn};

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Image not found")]
    ImageNotFound,

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Scenario not found")]
    ScenarioNotFound,

    #[error("文件读取错误: {0}")]
    Io(#[from] std::io::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            // 文档图片的 404 是纯文本
            ApiError::ImageNotFound => (
                StatusCode::NOT_FOUND,
                [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
                self.to_string(),
            )
                .into_response(),
            ApiError::MethodNotAllowed => {
                warn!("不支持的请求: {}", self);
                (
                    StatusCode::METHOD_NOT_ALLOWED,
                    Json(json!({ "error": self.to_string() })),
                )
                    .into_response()
            }
            ApiError::ScenarioNotFound => (
                StatusCode::NOT_FOUND,
                Json(json!({ "error": self.to_string() })),
            )
                .into_response(),
            ApiError::Io(e) => {
                error!("文件读取失败: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "文件读取失败", "code": "IO_ERROR" })),
                )
                    .into_response()
            }
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
