#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{HeaderMap, Request, Response, StatusCode},
    Router,
};
use langeval_api::access::{SessionResolver, SessionStatus};
use langeval_config::AppConfig;
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

/// 返回固定会话状态
pub struct FixedSession(pub SessionStatus);

#[async_trait]
impl SessionResolver for FixedSession {
    async fn resolve(&self, _headers: &HeaderMap) -> SessionStatus {
        self.0
    }
}

/// 测试用配置：关闭模拟延迟，目录指向临时目录
pub struct TestEnv {
    pub config: AppConfig,
    pub dir: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let messages_dir = dir.path().join("messages");
        let images_dir = dir.path().join("images");
        std::fs::create_dir_all(&messages_dir).unwrap();
        std::fs::create_dir_all(&images_dir).unwrap();

        std::fs::write(
            messages_dir.join("en.json"),
            r#"{"Metadata": {"title": "LangEval | AI Studio"}, "Common": {"save": "Save"}}"#,
        )
        .unwrap();
        std::fs::write(
            messages_dir.join("vi.json"),
            r#"{"Metadata": {"title": "LangEval | Studio AI"}, "Common": {"save": "Lưu"}}"#,
        )
        .unwrap();

        let mut config = AppConfig::default();
        config.mock.simulate_latency = false;
        config.i18n.messages_dir = messages_dir.to_string_lossy().into_owned();
        config.docs.images_dir = images_dir.to_string_lossy().into_owned();

        Self { config, dir }
    }

    pub fn write_image(&self, relative: &str, bytes: &[u8]) {
        let path = self.dir.path().join("images").join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, bytes).unwrap();
    }

    pub fn app(&self) -> Router {
        langeval_api::create_app(self.config.clone())
    }

    pub fn app_with_session(&self, status: SessionStatus) -> Router {
        langeval_api::create_app_with_sessions(self.config.clone(), Arc::new(FixedSession(status)))
    }
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(
        app,
        Request::builder().uri(uri).body(Body::empty()).unwrap(),
    )
    .await
}

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    String::from_utf8(body_bytes(response).await).unwrap()
}

pub async fn get_json(app: Router, uri: &str) -> (StatusCode, HeaderMap, Value) {
    let response = get(app, uri).await;
    let status = response.status();
    let headers = response.headers().clone();
    (status, headers, body_json(response).await)
}
