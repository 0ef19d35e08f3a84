//! # LangEval API
//!
//! LangEval 控制台的模拟后端，基于 Axum 提供控制台页面所需的全部 HTTP 接口。
//!
//! ## 概述
//!
//! - 模拟资源接口：固定数据，部分接口带模拟延迟，统一 `Cache-Control: no-store`
//! - 资源服务上游：智能体、知识库、指标库、追踪和场景详情优先请求上游，失败时回退到模拟数据
//! - 语言协商：`Accept-Language` 重定向和消息目录
//! - 访问控制：会话加载中返回占位页，确定后默认放行
//! - 文档图片：`/{locale}/docs/images/{*path}`，带一小时缓存
//!
//! ## API 端点
//!
//! ### 仪表盘
//! - `GET /api/v1/benchmarks`
//! - `GET /api/v1/dashboard/health` (300ms)
//! - `GET /api/v1/dashboard/status`
//! - `GET /api/v1/dev-console/logs`
//! - `GET /api/v1/dev-console/failure-detail`
//!
//! ### 注册表
//! - `GET /api/v1/models`
//! - `DELETE /api/v1/models/{id}`
//! - `POST /api/v1/models/{id}` - 以 `check` 结尾时返回连接状态，否则 405
//! - `GET /api/v1/team`
//! - `GET /api/v1/navigation`
//!
//! ### 活动记录
//! - `GET /api/v1/dataset-gen/history`
//! - `GET /api/v1/contribution/commits`
//! - `GET /api/v1/human-review/queue`
//! - `GET /api/v1/battle-arena/campaigns?page=&size=`
//!
//! ### 资源服务
//! - `GET /api/v1/resource/agents`
//! - `POST /api/v1/resource/agents/create` (1000ms)
//! - `GET /api/v1/resource/knowledge-bases`
//! - `GET /api/v1/resource/metrics-library`
//! - `GET /api/v1/resource/traces?agentId=&limit=&offset=&cursor=`
//! - `GET /api/v1/resource/traces/{id}`
//! - `GET /api/v1/resource/scenarios/default` (800ms)
//! - `GET /api/v1/resource/scenarios/{id}` - 未知场景返回 404
//! - `POST /api/v1/resource/scenarios/{id}/execute`
//! - `GET /api/v1/resource/scenarios/{id}/executions`
//!
//! ### 其他
//! - `GET /health`
//! - `GET /i18n/{locale}`
//! - `GET /{locale}`, `GET /{locale}/{*path}` - 页面骨架
//!
//! ## 使用示例
//!
//! ```rust,no_run
//! use langeval_api::create_app;
//! use langeval_config::AppConfig;
//!
//! # async fn run() -> std::io::Result<()> {
//! let config = AppConfig::default();
//! let listener = tokio::net::TcpListener::bind(&config.server.bind_address).await?;
//! axum::serve(listener, create_app(config)).await
//! # }
//! ```

pub mod access;
pub mod error;
pub mod handlers;
pub mod i18n;
pub mod middleware;
pub mod response;
pub mod routes;
pub mod upstream;

use std::sync::Arc;

use axum::Router;
use langeval_config::AppConfig;
use tower::ServiceBuilder;

use crate::access::SessionResolver;
use crate::middleware::{cors_layer, locale_redirect, request_logging, timeout_layer, trace_layer};
use crate::routes::{create_routes, AppState};

pub use error::{ApiError, ApiResult};

/// 创建应用，会话状态从配置的 cookie 读取
pub fn create_app(config: AppConfig) -> Router {
    build_app(AppState::from_config(config))
}

/// 使用自定义会话来源创建应用
pub fn create_app_with_sessions(config: AppConfig, sessions: Arc<dyn SessionResolver>) -> Router {
    build_app(AppState::with_session_resolver(config, sessions))
}

fn build_app(state: AppState) -> Router {
    let locales = Arc::clone(&state.locales);
    let server = state.config.server.clone();

    create_routes(state).layer(
        ServiceBuilder::new()
            .layer(trace_layer())
            .layer(cors_layer(&server))
            .layer(axum::middleware::from_fn(request_logging))
            .layer(timeout_layer(&server))
            .layer(axum::middleware::from_fn_with_state(
                locales,
                locale_redirect,
            )),
    )
}
