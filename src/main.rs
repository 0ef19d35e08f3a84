use anyhow::{Context, Result};
use clap::{Arg, Command};
use langeval_config::{AppConfig, LogLevel, OutputFormat, ValidationUtils};
use tokio::{net::TcpListener, signal};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // 解析命令行参数
    let matches = Command::new("langeval-mock")
        .version(env!("CARGO_PKG_VERSION"))
        .about("LangEval 控制台模拟后端")
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("配置文件路径，未指定时依次查找默认位置"),
        )
        .arg(
            Arg::new("bind")
                .short('b')
                .long("bind")
                .value_name("ADDR")
                .help("监听地址，覆盖配置中的 server.bind_address"),
        )
        .arg(
            Arg::new("log-level")
                .short('l')
                .long("log-level")
                .value_name("LEVEL")
                .help("日志级别")
                .value_parser(["trace", "debug", "info", "warn", "error"]),
        )
        .arg(
            Arg::new("log-format")
                .long("log-format")
                .value_name("FORMAT")
                .help("日志格式")
                .value_parser(["json", "pretty"]),
        )
        .get_matches();

    let config_path = matches.get_one::<String>("config");

    // 加载配置
    let mut config = AppConfig::load(config_path.map(String::as_str)).with_context(|| {
        format!(
            "加载配置失败: {}",
            config_path.map(String::as_str).unwrap_or("<默认路径>")
        )
    })?;

    if let Some(bind) = matches.get_one::<String>("bind") {
        ValidationUtils::validate_bind_address(bind, "--bind")?;
        config.server.bind_address = bind.clone();
    }
    if let Some(level) = matches.get_one::<String>("log-level") {
        config.observability.log_level = level
            .parse::<LogLevel>()
            .map_err(|e| anyhow::anyhow!(e))?;
    }
    if let Some(format) = matches.get_one::<String>("log-format") {
        config.observability.log_format = format
            .parse::<OutputFormat>()
            .map_err(|e| anyhow::anyhow!(e))?;
    }

    // 初始化日志系统
    init_logging(
        &config.observability.log_level.to_string(),
        config.observability.log_format,
    )?;

    info!("启动 LangEval 模拟后端");
    if let Some(path) = config_path {
        info!("配置文件: {path}");
    }
    info!(
        "支持语言: {:?}，默认语言: {}",
        config.i18n.locales, config.i18n.default_locale
    );
    match &config.upstream.resource_service_url {
        Some(url) => info!("资源服务上游: {url}"),
        None => info!("未配置资源服务上游，资源列表使用模拟数据"),
    }

    let bind_address = config.server.bind_address.clone();
    let app = langeval_api::create_app(config);

    // 创建TCP监听器
    let listener = TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("绑定地址失败: {bind_address}"))?;

    info!("API服务器启动在 http://{bind_address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(wait_for_shutdown_signal())
        .await
        .context("API服务器运行失败")?;

    info!("LangEval 模拟后端已退出");
    Ok(())
}

/// 初始化日志系统
fn init_logging(log_level: &str, log_format: OutputFormat) -> Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let registry = tracing_subscriber::registry().with(env_filter);

    match log_format {
        OutputFormat::Json => {
            registry
                .with(tracing_subscriber::fmt::layer().json())
                .try_init()
                .context("初始化JSON日志格式失败")?;
        }
        OutputFormat::Pretty => {
            registry
                .with(tracing_subscriber::fmt::layer().pretty())
                .try_init()
                .context("初始化Pretty日志格式失败")?;
        }
    }

    Ok(())
}

/// 等待关闭信号
async fn wait_for_shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("安装Ctrl+C信号处理器失败: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("安装SIGTERM信号处理器失败: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("收到Ctrl+C信号，开始优雅关闭");
        },
        _ = terminate => {
            info!("收到SIGTERM信号，开始优雅关闭");
        },
    }
}
