//! 资源服务的可选上游。请求失败时由调用方回退到模拟数据。

use std::time::Duration;

use langeval_config::UpstreamConfig;
use serde_json::Value;
use tracing::{debug, warn};

#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    #[error("upstream not configured")]
    NotConfigured,

    #[error("Backend {0}")]
    Status(u16),

    #[error("{0}")]
    Request(#[from] reqwest::Error),
}

#[derive(Debug, Clone)]
pub struct UpstreamClient {
    http: reqwest::Client,
    base_url: Option<String>,
}

impl UpstreamClient {
    pub fn from_config(config: &UpstreamConfig) -> Self {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .unwrap_or_else(|e| {
                warn!("创建上游HTTP客户端失败: {}，使用默认客户端", e);
                reqwest::Client::new()
            });

        Self {
            http,
            base_url: config
                .resource_service_url
                .as_ref()
                .map(|url| url.trim_end_matches('/').to_string()),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.base_url.is_some()
    }

    /// GET `<base>/<path>?<query>` 并解析 JSON；非 2xx 视为失败
    pub async fn get_json(&self, path: &str, query: Option<&str>) -> Result<Value, UpstreamError> {
        let mut url = self.url(path)?;
        if let Some(query) = query.filter(|q| !q.is_empty()) {
            url.push('?');
            url.push_str(query);
        }

        self.send(self.http.get(&url), &url).await
    }

    /// 同 [`get_json`](Self::get_json)，查询参数逐个编码
    pub async fn get_json_with_params(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<Value, UpstreamError> {
        let url = self.url(path)?;
        self.send(self.http.get(&url).query(params), &url).await
    }

    fn url(&self, path: &str) -> Result<String, UpstreamError> {
        let base = self.base_url.as_deref().ok_or(UpstreamError::NotConfigured)?;
        Ok(format!("{}/{}", base, path.trim_start_matches('/')))
    }

    async fn send(&self, request: reqwest::RequestBuilder, url: &str) -> Result<Value, UpstreamError> {
        debug!("请求上游: {}", url);

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Status(status.as_u16()));
        }

        Ok(response.json::<Value>().await?)
    }
}

/// 上游返回的 `items` 列表，缺失时为空
pub fn items(body: &Value) -> &[Value] {
    body.get("items")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_unconfigured_upstream_fails_fast() {
        let client = UpstreamClient::from_config(&UpstreamConfig::default());

        assert!(!client.is_configured());
        let err = client.get_json("resource/agents", None).await.unwrap_err();
        assert!(matches!(err, UpstreamError::NotConfigured));
        assert_eq!(err.to_string(), "upstream not configured");

        let err = client
            .get_json_with_params("resource/traces", &[("limit", "50")])
            .await
            .unwrap_err();
        assert!(matches!(err, UpstreamError::NotConfigured));
    }

    #[test]
    fn test_status_error_reason() {
        assert_eq!(UpstreamError::Status(503).to_string(), "Backend 503");
    }

    #[test]
    fn test_items_extraction() {
        assert_eq!(items(&json!({ "items": [1, 2] })).len(), 2);
        assert!(items(&json!({ "total": 0 })).is_empty());
        assert!(items(&json!({ "items": "nope" })).is_empty());
    }
}
