use axum::{
    routing::{get, post},
    Router,
};
use langeval_config::AppConfig;
use std::sync::Arc;

use crate::{
    access::{AccessGate, CookieSessionResolver, SessionResolver},
    handlers::{
        activity::{list_campaigns, list_commits, list_dataset_history, list_review_queue},
        dashboard::{
            get_failure_detail, get_health, get_status, list_benchmarks, list_pipeline_logs,
        },
        health::health_check,
        i18n::get_request_config,
        pages::{locale_home, locale_path},
        registry::{check_model, delete_model, list_models, list_navigation, list_team},
        resources::{
            create_agent, execute_scenario, get_default_scenario, get_scenario, get_trace,
            list_agents, list_executions, list_knowledge_bases, list_metrics, list_traces,
        },
    },
    i18n::{Catalogs, Locales},
    middleware::no_store_layer,
    upstream::UpstreamClient,
};

/// API应用状态
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub locales: Arc<Locales>,
    pub catalogs: Arc<Catalogs>,
    pub gate: Arc<AccessGate>,
    pub sessions: Arc<dyn SessionResolver>,
    pub upstream: UpstreamClient,
}

impl AppState {
    /// 按配置创建状态，会话状态从 cookie 读取
    pub fn from_config(config: AppConfig) -> Self {
        let sessions = Arc::new(CookieSessionResolver::new(
            config.access.session_cookie.clone(),
        ));
        Self::with_session_resolver(config, sessions)
    }

    pub fn with_session_resolver(config: AppConfig, sessions: Arc<dyn SessionResolver>) -> Self {
        let locales = Locales::from_config(&config.i18n);
        let catalogs = Catalogs::load(&config.i18n.messages_dir, &locales);

        Self {
            locales: Arc::new(locales),
            catalogs: Arc::new(catalogs),
            gate: Arc::new(AccessGate::from_config(&config.access)),
            sessions,
            upstream: UpstreamClient::from_config(&config.upstream),
            config: Arc::new(config),
        }
    }
}

/// 创建API路由
pub fn create_routes(state: AppState) -> Router {
    let api = Router::new()
        // 健康检查
        .route("/health", get(health_check))
        // 仪表盘
        .route("/api/v1/benchmarks", get(list_benchmarks))
        .route("/api/v1/dashboard/health", get(get_health))
        .route("/api/v1/dashboard/status", get(get_status))
        .route("/api/v1/dev-console/logs", get(list_pipeline_logs))
        .route("/api/v1/dev-console/failure-detail", get(get_failure_detail))
        // 注册表
        .route("/api/v1/models", get(list_models))
        .route("/api/v1/models/{id}", post(check_model).delete(delete_model))
        .route("/api/v1/team", get(list_team))
        .route("/api/v1/navigation", get(list_navigation))
        // 活动记录
        .route("/api/v1/dataset-gen/history", get(list_dataset_history))
        .route("/api/v1/contribution/commits", get(list_commits))
        .route("/api/v1/human-review/queue", get(list_review_queue))
        .route("/api/v1/battle-arena/campaigns", get(list_campaigns))
        // 资源服务
        .route("/api/v1/resource/agents", get(list_agents))
        .route("/api/v1/resource/agents/create", post(create_agent))
        .route("/api/v1/resource/knowledge-bases", get(list_knowledge_bases))
        .route("/api/v1/resource/metrics-library", get(list_metrics))
        .route("/api/v1/resource/traces", get(list_traces))
        .route("/api/v1/resource/traces/{id}", get(get_trace))
        .route("/api/v1/resource/scenarios/default", get(get_default_scenario))
        .route("/api/v1/resource/scenarios/{id}", get(get_scenario))
        .route("/api/v1/resource/scenarios/{id}/execute", post(execute_scenario))
        .route("/api/v1/resource/scenarios/{id}/executions", get(list_executions))
        // 语言目录
        .route("/i18n/{locale}", get(get_request_config))
        .layer(no_store_layer());

    let pages = Router::new()
        .route("/{locale}", get(locale_home))
        .route("/{locale}/{*path}", get(locale_path));

    api.merge(pages).with_state(state)
}
