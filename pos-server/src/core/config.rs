use std::path::PathBuf;

/// 服务器配置
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖 (启动时先加载 `.env`)：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | HTTP_HOST | 0.0.0.0 | 监听地址 |
/// | HTTP_PORT | 8090 | HTTP 服务端口 |
/// | ENVIRONMENT | development | 运行环境 |
/// | LOG_LEVEL | info | 日志级别 (RUST_LOG 优先) |
/// | LOG_DIR | - | 日志文件目录 (按天滚动) |
/// | SEED_FILE | - | 菜单与桌台初始化数据 (JSON) |
///
/// # 示例
///
/// ```ignore
/// HTTP_PORT=8080 SEED_FILE=./seed.json cargo run -p pos-server
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// 监听地址
    pub http_host: String,
    /// HTTP API 服务端口
    pub http_port: u16,
    /// 运行环境: development | production
    pub environment: String,
    /// 默认日志级别
    pub log_level: String,
    /// 日志文件目录
    pub log_dir: Option<String>,
    /// 初始化数据文件，未设置时使用内置菜单
    pub seed_file: Option<PathBuf>,
}

/// 读取非空环境变量
fn env_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

impl Config {
    /// 从环境变量加载配置，未设置的项使用默认值
    ///
    /// 端口无法解析时同样回退到默认值
    pub fn from_env() -> Self {
        Self {
            http_host: env_var("HTTP_HOST").unwrap_or_else(|| "0.0.0.0".into()),
            http_port: env_var("HTTP_PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(8090),
            environment: env_var("ENVIRONMENT").unwrap_or_else(|| "development".into()),
            log_level: env_var("LOG_LEVEL").unwrap_or_else(|| "info".into()),
            log_dir: env_var("LOG_DIR"),
            seed_file: env_var("SEED_FILE").map(PathBuf::from),
        }
    }

    /// 使用自定义端口覆盖配置
    ///
    /// 常用于测试场景
    pub fn with_port(http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.http_port = http_port;
        config
    }

    /// 监听地址 `host:port`
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.http_host, self.http_port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
