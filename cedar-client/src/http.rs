//! HTTP client for the booking server REST API
//!
//! 所有响应使用统一信封 `{code, message, data}`。
//! 非 `E0000` 的码映射为 [`ClientError::Api`]，
//! 信封缺失 data 视为响应格式错误。

use reqwest::Client;
use serde::de::DeserializeOwned;
use shared::models::{AvailabilityView, ContactMessage, Menu, Reservation, Review, StoreInfo};
use shared::request::{ContactMessageRequest, ReservationRequest};
use shared::{ApiErrorCode, ApiResponse};

use crate::{ClientConfig, ClientError, ClientResult};

/// HTTP client for making requests to the booking server
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Make a GET request, unwrapping the response envelope
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        let response = self.client.get(&url).send().await?;
        Self::unwrap_envelope(response).await
    }

    /// Make a POST request with JSON body, unwrapping the response envelope
    pub async fn post<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        let response = self.client.post(&url).json(body).send().await?;
        Self::unwrap_envelope(response).await
    }

    /// 解开统一信封
    ///
    /// 错误码来自信封而不是 HTTP 状态 — 两者一致，
    /// 但信封里的 code/message 更精确。
    async fn unwrap_envelope<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> ClientResult<T> {
        let envelope: ApiResponse<T> = response.json().await.map_err(|e| {
            ClientError::InvalidResponse(format!("Failed to decode response envelope: {e}"))
        })?;

        if !envelope.is_success() {
            return Err(ClientError::Api {
                code: ApiErrorCode::from_code(&envelope.code),
                message: envelope.message,
            });
        }

        envelope
            .data
            .ok_or_else(|| ClientError::InvalidResponse("Success envelope with no data".into()))
    }

    // ── Typed API calls ─────────────────────────────────────────────

    /// 查询某日可订时段
    pub async fn fetch_availability(&self, date: chrono::NaiveDate) -> ClientResult<AvailabilityView> {
        self.get(&format!("api/availability?date={date}")).await
    }

    /// 提交预订
    pub async fn submit_reservation(
        &self,
        request: &ReservationRequest,
    ) -> ClientResult<Reservation> {
        self.post("api/reservations", request).await
    }

    /// 按 id 查询预订
    pub async fn fetch_reservation(&self, id: &str) -> ClientResult<Reservation> {
        self.get(&format!("api/reservations/{id}")).await
    }

    /// 获取菜单
    pub async fn fetch_menu(&self) -> ClientResult<Menu> {
        self.get("api/menu").await
    }

    /// 获取顾客评价
    pub async fn fetch_reviews(&self) -> ClientResult<Vec<Review>> {
        self.get("api/reviews").await
    }

    /// 获取门店信息
    pub async fn fetch_store_info(&self) -> ClientResult<StoreInfo> {
        self.get("api/info").await
    }

    /// 提交联系表单
    pub async fn send_contact_message(
        &self,
        request: &ContactMessageRequest,
    ) -> ClientResult<ContactMessage> {
        self.post("api/contact", request).await
    }
}
