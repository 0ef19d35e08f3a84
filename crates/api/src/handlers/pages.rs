//! `/{locale}` 下的页面路由：先经过访问控制，再返回页面骨架。

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{Html, IntoResponse, Redirect, Response},
};
use serde_json::Value;
use tracing::debug;

use super::docs;
use crate::{access::GateDecision, routes::AppState};

const DEFAULT_TITLE: &str = "LangEval | AI Studio";
const DOCS_IMAGES_PREFIX: &str = "docs/images/";

pub async fn locale_home(
    State(state): State<AppState>,
    Path(locale): Path<String>,
    headers: HeaderMap,
) -> Response {
    render_page(&state, &locale, "", &headers).await
}

/// `/{locale}/{*path}`：文档图片或页面
pub async fn locale_path(
    State(state): State<AppState>,
    Path((locale, path)): Path<(String, String)>,
    headers: HeaderMap,
) -> Response {
    if let Some(image) = path.strip_prefix(DOCS_IMAGES_PREFIX) {
        return match docs::serve_image(&state, image).await {
            Ok(response) => response,
            Err(e) => e.into_response(),
        };
    }

    render_page(&state, &locale, &path, &headers).await
}

async fn render_page(state: &AppState, locale: &str, path: &str, headers: &HeaderMap) -> Response {
    if !state.locales.is_supported(locale) {
        debug!("不支持的语言: {}", locale);
        return (StatusCode::NOT_FOUND, Html(not_found_shell())).into_response();
    }

    let page_path = format!("/{}", path.trim_start_matches('/'));
    let status = state.sessions.resolve(headers).await;

    match state.gate.decide(status, &page_path) {
        GateDecision::Placeholder => Html(placeholder_shell(locale)).into_response(),
        GateDecision::RedirectToLogin => {
            Redirect::temporary(&format!("/{}{}", locale, state.gate.login_path())).into_response()
        }
        GateDecision::Allow => {
            let messages = state.catalogs.messages(locale);
            Html(page_shell(locale, title(&messages), &page_path)).into_response()
        }
    }
}

fn title(messages: &Value) -> &str {
    messages
        .pointer("/Metadata/title")
        .and_then(Value::as_str)
        .unwrap_or(DEFAULT_TITLE)
}

fn page_shell(locale: &str, title: &str, path: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"{}\">\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n</head>\n<body data-path=\"{}\">\n<div id=\"root\"></div>\n</body>\n</html>\n",
        escape_html(locale),
        escape_html(title),
        escape_html(path)
    )
}

fn placeholder_shell(locale: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"{}\">\n<body>\n<div class=\"flex h-screen items-center justify-center\">Loading...</div>\n</body>\n</html>\n",
        escape_html(locale)
    )
}

fn not_found_shell() -> String {
    "<!DOCTYPE html>\n<html>\n<body>\n<h1>404</h1>\n<p>This page could not be found.</p>\n</body>\n</html>\n"
        .to_string()
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
