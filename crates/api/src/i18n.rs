//! 语言协商：把请求的语言映射到受支持的语言，并提供对应的消息目录。
//!
//! 所有操作都不会失败：无法识别的语言回退到默认语言，缺失的目录按空对象处理。

use std::collections::HashMap;
use std::path::Path;

use langeval_config::I18nConfig;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, warn};

/// 受支持的语言集合和默认语言
#[derive(Debug, Clone, PartialEq)]
pub struct Locales {
    supported: Vec<String>,
    default: String,
}

impl Locales {
    pub fn new(supported: Vec<String>, default: impl Into<String>) -> Self {
        Self {
            supported,
            default: default.into(),
        }
    }

    pub fn from_config(config: &I18nConfig) -> Self {
        Self::new(config.locales.clone(), config.default_locale.clone())
    }

    pub fn supported(&self) -> &[String] {
        &self.supported
    }

    pub fn default_locale(&self) -> &str {
        &self.default
    }

    pub fn is_supported(&self, locale: &str) -> bool {
        self.supported.iter().any(|l| l == locale)
    }

    /// 受支持的语言原样返回，其余一律回退到默认语言
    pub fn resolve(&self, requested: Option<&str>) -> &str {
        requested
            .and_then(|locale| self.supported.iter().find(|l| l.as_str() == locale))
            .map(String::as_str)
            .unwrap_or(&self.default)
    }

    /// 按 q 权重从 `Accept-Language` 中选出第一个受支持的语言，`vi-VN` 匹配 `vi`
    pub fn negotiate(&self, accept_language: Option<&str>) -> &str {
        let Some(header) = accept_language else {
            return &self.default;
        };

        let mut ranges: Vec<(&str, f32)> = header
            .split(',')
            .filter_map(|part| {
                let mut pieces = part.split(';');
                let tag = pieces.next()?.trim();
                if tag.is_empty() {
                    return None;
                }
                let quality = pieces
                    .filter_map(|p| p.trim().strip_prefix("q="))
                    .find_map(|q| q.trim().parse::<f32>().ok())
                    .unwrap_or(1.0);
                Some((tag, quality))
            })
            .filter(|(_, quality)| *quality > 0.0)
            .collect();

        // 稳定排序，权重相同时保持原有顺序
        ranges.sort_by(|a, b| b.1.total_cmp(&a.1));

        for (tag, _) in ranges {
            if tag == "*" {
                return &self.default;
            }
            if let Some(locale) = self.match_tag(tag) {
                return locale;
            }
        }

        &self.default
    }

    fn match_tag(&self, tag: &str) -> Option<&str> {
        let exact = self
            .supported
            .iter()
            .find(|locale| locale.eq_ignore_ascii_case(tag));
        if let Some(locale) = exact {
            return Some(locale.as_str());
        }

        let primary = primary_subtag(tag);
        self.supported
            .iter()
            .find(|locale| primary_subtag(locale).eq_ignore_ascii_case(primary))
            .map(String::as_str)
    }
}

fn primary_subtag(tag: &str) -> &str {
    tag.split(['-', '_']).next().unwrap_or(tag)
}

/// 某次请求使用的语言和消息目录
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RequestConfig {
    pub locale: String,
    pub messages: Value,
}

/// 启动时加载的消息目录，每种语言对应 `<messages_dir>/<locale>.json`
#[derive(Debug, Clone, Default)]
pub struct Catalogs {
    entries: HashMap<String, Value>,
}

impl Catalogs {
    pub fn load(dir: impl AsRef<Path>, locales: &Locales) -> Self {
        let dir = dir.as_ref();
        let entries = locales
            .supported()
            .iter()
            .map(|locale| (locale.clone(), load_catalog(dir, locale)))
            .collect();

        Self { entries }
    }

    /// 直接从内存构造，主要用于测试
    pub fn from_entries(entries: HashMap<String, Value>) -> Self {
        Self { entries }
    }

    pub fn messages(&self, locale: &str) -> Value {
        self.entries
            .get(locale)
            .cloned()
            .unwrap_or_else(|| Value::Object(Map::new()))
    }

    pub fn request_config(&self, locales: &Locales, requested: Option<&str>) -> RequestConfig {
        let locale = locales.resolve(requested);

        RequestConfig {
            locale: locale.to_string(),
            messages: self.messages(locale),
        }
    }
}

fn load_catalog(dir: &Path, locale: &str) -> Value {
    let path = dir.join(format!("{locale}.json"));

    let content = match std::fs::read_to_string(&path) {
        Ok(content) => content,
        Err(e) => {
            warn!("消息目录读取失败 {}: {}，使用空目录", path.display(), e);
            return Value::Object(Map::new());
        }
    };

    match serde_json::from_str::<Value>(&content) {
        Ok(value @ Value::Object(_)) => {
            debug!("已加载消息目录: {}", path.display());
            value
        }
        Ok(_) => {
            warn!("消息目录不是 JSON 对象: {}，使用空目录", path.display());
            Value::Object(Map::new())
        }
        Err(e) => {
            warn!("消息目录解析失败 {}: {}，使用空目录", path.display(), e);
            Value::Object(Map::new())
        }
    }
}
