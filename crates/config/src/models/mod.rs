pub mod app_config;
pub mod content;
pub mod observability;
pub mod server;

pub use app_config::AppConfig;
pub use content::{DocsConfig, I18nConfig, MockConfig};
pub use observability::{LogLevel, ObservabilityConfig, OutputFormat};
pub use server::{AccessConfig, ServerConfig, UpstreamConfig};
