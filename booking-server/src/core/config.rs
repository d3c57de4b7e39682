//! 服务器配置 - 预订服务的所有配置项

use chrono_tz::Tz;

/// 服务器配置
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | WORK_DIR | /var/lib/cedar/booking | 工作目录 |
/// | HTTP_PORT | 3000 | HTTP 服务端口 |
/// | TIMEZONE | Europe/Paris | 业务时区 |
/// | MAX_COVERS_PER_SLOT | 20 | 单时段容量上限 (客位数) |
/// | MAX_PARTY_SIZE | 10 | 自动预订的人数上限，超出走人工联系 |
/// | CORS_ORIGINS | * | 允许的跨域来源 (逗号分隔) |
/// | ENVIRONMENT | development | 运行环境 |
///
/// # 示例
///
/// ```ignore
/// WORK_DIR=/data/cedar HTTP_PORT=8080 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// 工作目录，存储数据库、日历配置、日志等文件
    pub work_dir: String,
    /// HTTP API 服务端口
    pub http_port: u16,
    /// 业务时区 (营业日按此时区判定)
    pub timezone: Tz,
    /// 单时段容量上限 (covers)
    pub max_covers_per_slot: u32,
    /// 自动预订的最大人数，超出路由到人工联系
    pub max_party_size: u32,
    /// 允许的跨域来源
    pub cors_origins: Vec<String>,
    /// 运行环境: development | staging | production
    pub environment: String,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值
    pub fn from_env() -> Self {
        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "/var/lib/cedar/booking".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            timezone: std::env::var("TIMEZONE")
                .ok()
                .and_then(|t| t.parse().ok())
                .unwrap_or(chrono_tz::Europe::Paris),
            max_covers_per_slot: std::env::var("MAX_COVERS_PER_SLOT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(20),
            max_party_size: std::env::var("MAX_PARTY_SIZE")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(10),
            cors_origins: std::env::var("CORS_ORIGINS")
                .unwrap_or_else(|_| "*".into())
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        }
    }

    /// 使用自定义值覆盖部分配置
    ///
    /// 常用于测试场景
    pub fn with_overrides(work_dir: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.work_dir = work_dir.into();
        config.http_port = http_port;
        config
    }

    /// 数据库文件路径
    pub fn database_path(&self) -> std::path::PathBuf {
        std::path::Path::new(&self.work_dir).join("reservations.redb")
    }

    /// 日历配置文件路径 (可选，缺省使用内置日历)
    pub fn calendar_path(&self) -> std::path::PathBuf {
        std::path::Path::new(&self.work_dir).join("calendar.json")
    }

    /// 是否生产环境
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
