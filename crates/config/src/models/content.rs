use serde::{Deserialize, Serialize};

use crate::validation::{ConfigValidator, ValidationUtils};
use crate::{ConfigError, ConfigResult};

/// 国际化配置
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct I18nConfig {
    pub locales: Vec<String>,
    pub default_locale: String,
    /// 消息目录，包含 `<locale>.json`
    pub messages_dir: String,
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            locales: vec!["en".to_string(), "vi".to_string()],
            default_locale: "en".to_string(),
            messages_dir: "messages".to_string(),
        }
    }
}

impl ConfigValidator for I18nConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.locales.is_empty() {
            return Err(ConfigError::Validation(
                "i18n.locales cannot be empty".to_string(),
            ));
        }

        for locale in &self.locales {
            ValidationUtils::validate_not_empty(locale, "i18n.locales entry")?;
            if locale.contains('/') {
                return Err(ConfigError::Validation(format!(
                    "i18n.locales entry '{locale}' must not contain '/'"
                )));
            }
        }

        if !self.locales.contains(&self.default_locale) {
            return Err(ConfigError::Validation(format!(
                "i18n.default_locale '{}' must be one of {:?}",
                self.default_locale, self.locales
            )));
        }

        ValidationUtils::validate_not_empty(&self.messages_dir, "i18n.messages_dir")
    }
}

/// 文档图片服务配置
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DocsConfig {
    pub images_dir: String,
    pub cache_max_age_seconds: u64,
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self {
            images_dir: "docs/images".to_string(),
            cache_max_age_seconds: 3600,
        }
    }
}

impl ConfigValidator for DocsConfig {
    fn validate(&self) -> ConfigResult<()> {
        ValidationUtils::validate_not_empty(&self.images_dir, "docs.images_dir")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MockConfig {
    /// 关闭后所有模拟延迟立即返回
    pub simulate_latency: bool,
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            simulate_latency: true,
        }
    }
}

impl ConfigValidator for MockConfig {
    fn validate(&self) -> ConfigResult<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_i18n_config_default() {
        let config = I18nConfig::default();
        assert_eq!(config.locales, vec!["en", "vi"]);
        assert_eq!(config.default_locale, "en");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_i18n_default_locale_must_be_supported() {
        let config = I18nConfig {
            default_locale: "fr".to_string(),
            ..I18nConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_i18n_rejects_empty_locales() {
        let config = I18nConfig {
            locales: vec![],
            ..I18nConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_docs_config_default() {
        let config = DocsConfig::default();
        assert_eq!(config.images_dir, "docs/images");
        assert_eq!(config.cache_max_age_seconds, 3600);
        assert!(config.validate().is_ok());
    }
}
