use axum::{
    http::{HeaderName, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// 标记响应数据来源的响应头
pub const X_SOURCE: HeaderName = HeaderName::from_static("x-source");

/// `{ "data": ... }` 信封
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DataEnvelope<T> {
    pub data: T,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: Option<String>,
    pub data: Option<T>,
}

impl<T> ApiResponse<T>
where
    T: Serialize,
{
    pub fn success_with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            data: Some(data),
        }
    }
}

impl<T> IntoResponse for ApiResponse<T>
where
    T: Serialize,
{
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}

/// 数据来源
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    Mock,
    Backend,
}

impl Source {
    pub fn as_str(&self) -> &'static str {
        match self {
            Source::Mock => "mock",
            Source::Backend => "backend",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SourceMeta {
    pub source: Source,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// 带来源说明的列表响应，`{ data, meta: { source, reason } }`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SourcedResponse<T> {
    pub data: T,
    pub meta: SourceMeta,
}

impl<T> SourcedResponse<T> {
    pub fn backend(data: T) -> Self {
        Self {
            data,
            meta: SourceMeta {
                source: Source::Backend,
                reason: None,
            },
        }
    }

    pub fn mock(data: T, reason: impl Into<String>) -> Self {
        Self {
            data,
            meta: SourceMeta {
                source: Source::Mock,
                reason: Some(reason.into()),
            },
        }
    }
}

/// 追踪接口的回退格式，来源和错误原因放在顶层
#[derive(Debug, Serialize)]
pub struct MockFallback<T> {
    pub data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<usize>,
    pub source: Source,
    pub error: String,
}

impl<T> MockFallback<T> {
    pub fn new(data: T, error: impl Into<String>) -> Self {
        Self {
            data,
            total: None,
            source: Source::Mock,
            error: error.into(),
        }
    }

    pub fn with_total(mut self, total: usize) -> Self {
        self.total = Some(total);
        self
    }
}

pub fn data<T: Serialize>(data: T) -> Json<DataEnvelope<T>> {
    Json(DataEnvelope { data })
}

pub fn created<T: Serialize>(data: T) -> impl IntoResponse {
    (StatusCode::CREATED, Json(data))
}

pub fn no_content() -> impl IntoResponse {
    StatusCode::NO_CONTENT
}

/// 附加 `x-source` 响应头
pub fn with_source(source: Source, response: impl IntoResponse) -> Response {
    (
        [(X_SOURCE, HeaderValue::from_static(source.as_str()))],
        response,
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_api_response_success_with_message() {
        let response = ApiResponse::success_with_message("agent", "Agent created successfully");

        assert!(response.success);
        assert_eq!(response.data, Some("agent"));
        assert_eq!(
            response.message.as_deref(),
            Some("Agent created successfully")
        );
    }

    #[test]
    fn test_data_envelope_serialization() {
        let Json(envelope) = data(vec![1, 2, 3]);
        let value = serde_json::to_value(envelope).unwrap();

        assert_eq!(value, json!({ "data": [1, 2, 3] }));
    }

    #[test]
    fn test_sourced_response_mock_keeps_reason() {
        let response = SourcedResponse::mock(vec!["a"], "upstream not configured");
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value["meta"]["source"], "mock");
        assert_eq!(value["meta"]["reason"], "upstream not configured");
    }

    #[test]
    fn test_sourced_response_backend_omits_reason() {
        let response = SourcedResponse::backend(json!([]));
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value["meta"], json!({ "source": "backend" }));
    }

    #[test]
    fn test_with_source_sets_header() {
        let response = with_source(Source::Mock, Json(json!({})));

        assert_eq!(response.headers()[X_SOURCE], "mock");
    }

    #[test]
    fn test_created_and_no_content_status() {
        assert_eq!(
            created(json!({})).into_response().status(),
            StatusCode::CREATED
        );
        assert_eq!(no_content().into_response().status(), StatusCode::NO_CONTENT);
    }

    #[test]
    fn test_mock_fallback_shape() {
        let value = serde_json::to_value(MockFallback::new(json!([1, 2]), "Backend 502")).unwrap();
        assert_eq!(
            value,
            json!({ "data": [1, 2], "source": "mock", "error": "Backend 502" })
        );

        let value = serde_json::to_value(MockFallback::new(json!([]), "x").with_total(0)).unwrap();
        assert_eq!(value["total"], 0);
    }
}
