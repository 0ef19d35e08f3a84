use config::{Config as ConfigBuilder, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::{
    content::{DocsConfig, I18nConfig, MockConfig},
    observability::ObservabilityConfig,
    server::{AccessConfig, ServerConfig, UpstreamConfig},
};
use crate::{validation::ConfigValidator, ConfigError, ConfigResult};

pub const ENV_PREFIX: &str = "LANGEVAL";

const DEFAULT_CONFIG_PATHS: [&str; 3] = [
    "config/langeval.toml",
    "langeval.toml",
    "/etc/langeval/config.toml",
];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub i18n: I18nConfig,
    pub docs: DocsConfig,
    pub mock: MockConfig,
    pub upstream: UpstreamConfig,
    pub access: AccessConfig,
    pub observability: ObservabilityConfig,
}

impl AppConfig {
    /// 加载配置：配置文件 -> 环境变量 (`LANGEVAL_SERVER__BIND_ADDRESS` 形式) -> 校验
    pub fn load(config_path: Option<&str>) -> ConfigResult<Self> {
        let mut builder = ConfigBuilder::builder();

        if let Some(path) = config_path {
            if !Path::new(path).exists() {
                return Err(ConfigError::File(format!("配置文件不存在: {path}")));
            }
            builder = builder.add_source(File::new(path, FileFormat::Toml));
        } else if let Some(path) = DEFAULT_CONFIG_PATHS
            .iter()
            .find(|path| Path::new(path).exists())
        {
            builder = builder.add_source(File::new(path, FileFormat::Toml));
        }

        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("i18n.locales")
                .with_list_parse_key("server.cors_origins")
                .try_parsing(true),
        );

        let config: AppConfig = builder.build()?.try_deserialize()?;

        config.validate()?;

        Ok(config)
    }

    pub fn from_toml(toml_str: &str) -> ConfigResult<Self> {
        let config: AppConfig = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml(&self) -> ConfigResult<String> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }
}

impl ConfigValidator for AppConfig {
    fn validate(&self) -> crate::ConfigResult<()> {
        self.server.validate()?;
        self.i18n.validate()?;
        self.docs.validate()?;
        self.mock.validate()?;
        self.upstream.validate()?;
        self.access.validate()?;
        self.observability.validate()?;
        Ok(())
    }
}
