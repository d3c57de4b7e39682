//! Cedar Shared - 预订平台公共类型库
//!
//! booking-server 和 cedar-client 之间共享的线缆层类型：
//!
//! - **模型** (`models`): 预订、时段、菜单、评价等实体
//! - **请求** (`request`): 客户端提交的请求载荷
//! - **响应** (`response`): 统一 API 响应信封
//! - **错误码** (`error`): 跨进程稳定的错误码表

pub mod error;
pub mod models;
pub mod request;
pub mod response;

// Re-export 公共类型
pub use error::ApiErrorCode;
pub use request::{ContactMessageRequest, ReservationRequest};
pub use response::{API_CODE_SUCCESS, ApiResponse};
