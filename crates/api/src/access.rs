//! 页面访问控制。
//!
//! 会话状态由外部身份提供方决定，这里只通过 [`SessionResolver`] 读取。
//! 状态未确定时返回占位页，确定后默认一律放行。

use async_trait::async_trait;
use axum::http::{header, HeaderMap};
use langeval_config::AccessConfig;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    Loading,
    Authenticated,
    Unauthenticated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    /// 阻塞式加载占位页
    Placeholder,
    Allow,
    RedirectToLogin,
}

/// 读取当前请求的会话状态
#[async_trait]
pub trait SessionResolver: Send + Sync {
    async fn resolve(&self, headers: &HeaderMap) -> SessionStatus;
}

/// 会话 cookie 存在且非空即视为已登录
#[derive(Debug, Clone)]
pub struct CookieSessionResolver {
    cookie_name: String,
}

impl CookieSessionResolver {
    pub fn new(cookie_name: impl Into<String>) -> Self {
        Self {
            cookie_name: cookie_name.into(),
        }
    }

    fn has_session_cookie(&self, headers: &HeaderMap) -> bool {
        let secure_name = format!("__Secure-{}", self.cookie_name);

        headers
            .get_all(header::COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .flat_map(|value| value.split(';'))
            .filter_map(|pair| pair.trim().split_once('='))
            .any(|(name, value)| {
                (name == self.cookie_name || name == secure_name) && !value.trim().is_empty()
            })
    }
}

#[async_trait]
impl SessionResolver for CookieSessionResolver {
    async fn resolve(&self, headers: &HeaderMap) -> SessionStatus {
        if self.has_session_cookie(headers) {
            SessionStatus::Authenticated
        } else {
            SessionStatus::Unauthenticated
        }
    }
}

#[derive(Debug, Clone)]
pub struct AccessGate {
    enforce: bool,
    login_path: String,
}

impl AccessGate {
    pub fn new(enforce: bool, login_path: impl Into<String>) -> Self {
        Self {
            enforce,
            login_path: login_path.into(),
        }
    }

    pub fn from_config(config: &AccessConfig) -> Self {
        Self::new(config.enforce, config.login_path.clone())
    }

    pub fn login_path(&self) -> &str {
        &self.login_path
    }

    /// `path` 是去掉语言前缀后的页面路径
    pub fn decide(&self, status: SessionStatus, path: &str) -> GateDecision {
        match status {
            SessionStatus::Loading => GateDecision::Placeholder,
            SessionStatus::Authenticated => GateDecision::Allow,
            SessionStatus::Unauthenticated if self.enforce && !self.is_login_path(path) => {
                GateDecision::RedirectToLogin
            }
            SessionStatus::Unauthenticated => GateDecision::Allow,
        }
    }

    fn is_login_path(&self, path: &str) -> bool {
        path == self.login_path
            || path
                .strip_prefix(self.login_path.as_str())
                .is_some_and(|rest| rest.starts_with('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with_cookie(cookie: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_static(cookie));
        headers
    }

    #[test]
    fn test_loading_always_blocks_with_placeholder() {
        for enforce in [false, true] {
            let gate = AccessGate::new(enforce, "/login");
            assert_eq!(
                gate.decide(SessionStatus::Loading, "/dashboard"),
                GateDecision::Placeholder
            );
        }
    }

    #[test]
    fn test_resolved_status_is_allowed_by_default() {
        let gate = AccessGate::from_config(&AccessConfig::default());

        for path in ["/", "/dashboard", "/login", "/battle-arena/battle-001"] {
            assert_eq!(
                gate.decide(SessionStatus::Authenticated, path),
                GateDecision::Allow
            );
            assert_eq!(
                gate.decide(SessionStatus::Unauthenticated, path),
                GateDecision::Allow
            );
        }
    }

    #[test]
    fn test_enforced_gate_redirects_anonymous_users() {
        let gate = AccessGate::new(true, "/login");

        assert_eq!(
            gate.decide(SessionStatus::Unauthenticated, "/dashboard"),
            GateDecision::RedirectToLogin
        );
        assert_eq!(
            gate.decide(SessionStatus::Unauthenticated, "/login"),
            GateDecision::Allow
        );
        assert_eq!(
            gate.decide(SessionStatus::Unauthenticated, "/login/callback"),
            GateDecision::Allow
        );
        assert_eq!(
            gate.decide(SessionStatus::Unauthenticated, "/login-help"),
            GateDecision::RedirectToLogin
        );
        assert_eq!(
            gate.decide(SessionStatus::Authenticated, "/dashboard"),
            GateDecision::Allow
        );
    }

    #[tokio::test]
    async fn test_cookie_resolver() {
        let resolver = CookieSessionResolver::new("next-auth.session-token");

        assert_eq!(
            resolver
                .resolve(&headers_with_cookie("theme=dark; next-auth.session-token=abc"))
                .await,
            SessionStatus::Authenticated
        );
        assert_eq!(
            resolver
                .resolve(&headers_with_cookie("__Secure-next-auth.session-token=abc"))
                .await,
            SessionStatus::Authenticated
        );
        assert_eq!(
            resolver
                .resolve(&headers_with_cookie("next-auth.session-token="))
                .await,
            SessionStatus::Unauthenticated
        );
        assert_eq!(
            resolver.resolve(&HeaderMap::new()).await,
            SessionStatus::Unauthenticated
        );
    }
}
