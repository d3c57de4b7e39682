//! Cedar Client - 预订表单客户端库
//!
//! 提供两层能力:
//!
//! - [`HttpClient`]: 对预订服务 REST API 的类型化访问
//!   (可订性查询、预订提交、菜单 / 评价 / 门店信息、联系表单)
//! - [`ReservationForm`]: 预订表单的纯状态机 (无 I/O)，
//!   由 [`FormController`] 负责把状态机产生的副作用接到 HTTP 客户端上
//!
//! # 使用示例
//!
//! ```ignore
//! let config = ClientConfig::new("http://localhost:3000");
//! let mut controller = FormController::new(HttpClient::new(&config));
//!
//! controller.select_date(date).await;        // 拉取该日可订时段
//! controller.form_mut().set_time(time);
//! controller.form_mut().set_party_size(4);
//! // ... 填写联系方式 ...
//! let outcome = controller.submit().await;   // 提交并等待确认/拒绝
//! ```

pub mod config;
pub mod controller;
pub mod error;
pub mod form;
pub mod http;

pub use config::ClientConfig;
pub use controller::FormController;
pub use error::{ClientError, ClientResult};
pub use form::{Effect, FormEvent, FormFields, FormState, ReservationForm};
pub use http::HttpClient;
