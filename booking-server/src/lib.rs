//! Cedar Booking Server - 餐厅预订与可订性服务
//!
//! # 架构概述
//!
//! 本模块是预订服务的主入口，提供以下核心功能：
//!
//! - **服务日历** (`calendar`): 营业日、场次与候选时刻规则 (纯配置)
//! - **预订引擎** (`booking`): 容量账目、可订性解析、原子预订流水线
//! - **内容服务** (`content`): 菜单 / 评价 / 门店信息 (只读静态内容)
//! - **HTTP API** (`api`): RESTful API 接口
//!
//! # 模块结构
//!
//! ```text
//! booking-server/src/
//! ├── core/          # 配置、状态、服务器
//! ├── calendar/      # 服务日历规则
//! ├── booking/       # 容量、可订性、预订引擎、存储
//! ├── content/       # 静态内容服务
//! ├── api/           # HTTP 路由和处理器
//! └── utils/         # 工具函数
//! ```

pub mod api;
pub mod booking;
pub mod calendar;
pub mod content;
pub mod core;
pub mod utils;

// Re-export 公共类型
pub use booking::{
    AvailabilityResolver, BookingEngine, RejectReason, ReservationStore, SlotCapacityStore,
};
pub use calendar::ServiceCalendar;
pub use core::{Config, Server, ServerState};
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// 启动前环境准备: dotenv + 日志
pub fn setup_environment() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    let log_level = std::env::var("LOG_LEVEL").ok();
    let log_dir = std::env::var("LOG_DIR").ok();
    init_logger_with_file(log_level.as_deref(), log_dir.as_deref());
    Ok(())
}

pub fn print_banner() {
    println!(
        r#"
   ______         __
  / ____/__  ____/ /___ ______
 / /   / _ \/ __  / __ `/ ___/
/ /___/  __/ /_/ / /_/ / /
\____/\___/\__,_/\__,_/_/
    ____              __   _
   / __ )____  ____  / /__(_)___  ____ _
  / __  / __ \/ __ \/ //_/ / __ \/ __ `/
 / /_/ / /_/ / /_/ / ,< / / / / / /_/ /
/_____/\____/\____/_/|_/_/_/ /_/\__, /
                               /____/
    "#
    );
}
