use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{Request, State},
    http::{header, HeaderValue, Method, StatusCode},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use langeval_config::ServerConfig;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    set_header::SetResponseHeaderLayer,
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::{debug, info, warn};

use crate::i18n::Locales;

/// 不参与语言重定向的路径前缀
const UNLOCALIZED_PREFIXES: [&str; 5] = ["/api", "/health", "/i18n", "/_next", "/_vercel"];

/// 不参与语言重定向的静态资源扩展名
const STATIC_EXTENSIONS: [&str; 12] = [
    "svg", "png", "jpg", "jpeg", "gif", "webp", "ico", "css", "js", "pdf", "woff", "woff2",
];

pub async fn request_logging(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let start = std::time::Instant::now();

    info!("开始处理请求: {} {}", method, uri);

    let response = next.run(request).await;
    let duration = start.elapsed();

    info!(
        "完成请求处理: {} {} - 状态: {} - 耗时: {:?}",
        method,
        uri,
        response.status(),
        duration
    );

    response
}

pub fn cors_layer(config: &ServerConfig) -> CorsLayer {
    if !config.cors_enabled {
        return CorsLayer::new();
    }

    let origin = if config.cors_origins.iter().any(|o| o == "*") {
        AllowOrigin::from(Any)
    } else {
        let origins: Vec<HeaderValue> = config
            .cors_origins
            .iter()
            .filter_map(|o| match HeaderValue::from_str(o) {
                Ok(value) => Some(value),
                Err(_) => {
                    warn!("忽略无效的CORS来源: {}", o);
                    None
                }
            })
            .collect();
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any)
}

pub fn trace_layer(
) -> TraceLayer<tower_http::classify::SharedClassifier<tower_http::classify::ServerErrorsAsFailures>>
{
    TraceLayer::new_for_http()
}

/// 超时的请求返回 408
pub fn timeout_layer(config: &ServerConfig) -> TimeoutLayer {
    TimeoutLayer::with_status_code(
        StatusCode::REQUEST_TIMEOUT,
        Duration::from_secs(config.request_timeout_seconds),
    )
}

/// 接口响应一律不缓存
pub fn no_store_layer() -> SetResponseHeaderLayer<HeaderValue> {
    SetResponseHeaderLayer::overriding(header::CACHE_CONTROL, HeaderValue::from_static("no-store"))
}

/// 页面路径去掉结尾的 `/`；未带语言前缀的页面请求按 `Accept-Language` 重定向到 `/<locale><path>`
pub async fn locale_redirect(
    State(locales): State<Arc<Locales>>,
    request: Request,
    next: Next,
) -> Response {
    let path = request.uri().path();

    if is_unlocalized(path) {
        return next.run(request).await;
    }

    if path.len() > 1 && path.ends_with('/') {
        let trimmed = match path.trim_end_matches('/') {
            "" => "/",
            trimmed => trimmed,
        };
        let target = with_query(trimmed.to_string(), &request);
        debug!("去掉结尾斜杠: {} -> {}", path, target);
        return Redirect::permanent(&target).into_response();
    }

    if !needs_locale_prefix(path, &locales) {
        return next.run(request).await;
    }

    let accept_language = request
        .headers()
        .get(header::ACCEPT_LANGUAGE)
        .and_then(|value| value.to_str().ok());
    let locale = locales.negotiate(accept_language);

    let target = if path == "/" {
        format!("/{locale}")
    } else {
        format!("/{locale}{path}")
    };
    let target = with_query(target, &request);

    debug!("语言重定向: {} -> {}", path, target);
    Redirect::temporary(&target).into_response()
}

fn with_query(mut target: String, request: &Request) -> String {
    if let Some(query) = request.uri().query() {
        target.push('?');
        target.push_str(query);
    }
    target
}

/// 接口、框架资源和静态文件不做任何页面重写
fn is_unlocalized(path: &str) -> bool {
    let excluded_prefix = UNLOCALIZED_PREFIXES
        .iter()
        .any(|prefix| path == *prefix || path.starts_with(&format!("{prefix}/")));
    if excluded_prefix {
        return true;
    }

    path.rsplit('/')
        .next()
        .and_then(|name| name.rsplit_once('.'))
        .is_some_and(|(_, ext)| STATIC_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
}

fn needs_locale_prefix(path: &str, locales: &Locales) -> bool {
    if is_unlocalized(path) {
        return false;
    }

    let first_segment = path.trim_start_matches('/').split('/').next().unwrap_or("");
    !locales.is_supported(first_segment)
}
