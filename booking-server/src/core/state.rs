//! 服务器状态
//!
//! ServerState 持有所有服务的共享引用，使用 Arc 实现浅拷贝，
//! 克隆成本极低，可直接作为 axum 的应用状态。
//!
//! # 服务组件
//!
//! | 字段 | 类型 | 说明 |
//! |------|------|------|
//! | config | Arc<Config> | 配置项 (不可变) |
//! | calendar | Arc<ServiceCalendar> | 营业日历 |
//! | capacity | Arc<SlotCapacityStore> | 时段容量账目 |
//! | resolver | Arc<AvailabilityResolver> | 可订性推导 |
//! | engine | Arc<BookingEngine> | 预订引擎 |
//! | storage | ReservationStore | redb 持久化 |
//! | content | Arc<ContentService> | 静态展示内容 |

use std::sync::Arc;

use anyhow::Context;

use crate::booking::{AvailabilityResolver, BookingEngine, ReservationStore, SlotCapacityStore};
use crate::calendar::{ServiceCalendar, load_calendar};
use crate::content::ContentService;
use crate::core::Config;

/// 服务器状态 - 持有所有服务的单例引用
#[derive(Clone)]
pub struct ServerState {
    pub config: Arc<Config>,
    pub calendar: Arc<ServiceCalendar>,
    pub capacity: Arc<SlotCapacityStore>,
    pub resolver: Arc<AvailabilityResolver>,
    pub engine: Arc<BookingEngine>,
    pub storage: ReservationStore,
    pub content: Arc<ContentService>,
}

impl ServerState {
    /// 初始化所有服务
    ///
    /// 启动顺序:
    /// 1. 确保工作目录存在
    /// 2. 打开 redb 数据库
    /// 3. 加载营业日历 (缺失时使用内置默认)
    /// 4. 从已持久化的预订重建容量账目
    pub async fn initialize(config: &Config) -> anyhow::Result<Self> {
        std::fs::create_dir_all(&config.work_dir)
            .with_context(|| format!("Failed to create work dir {}", config.work_dir))?;

        let storage = ReservationStore::open(config.database_path())
            .with_context(|| format!("Failed to open {}", config.database_path().display()))?;

        let calendar = Arc::new(load_calendar(&config.calendar_path())?);
        let capacity = Arc::new(SlotCapacityStore::new());
        let resolver = Arc::new(AvailabilityResolver::new(
            Arc::clone(&calendar),
            Arc::clone(&capacity),
            config.max_covers_per_slot,
        ));
        let engine = Arc::new(BookingEngine::new(
            Arc::clone(&capacity),
            Arc::clone(&resolver),
            storage.clone(),
            config.max_covers_per_slot,
            config.max_party_size,
            config.timezone,
        ));

        let replayed = engine
            .rebuild_capacity()
            .context("Failed to rebuild capacity ledger")?;
        tracing::info!(reservations = replayed, "Server state initialized");

        Ok(Self {
            config: Arc::new(config.clone()),
            calendar,
            capacity,
            resolver,
            engine,
            storage,
            content: Arc::new(ContentService::new()),
        })
    }
}
