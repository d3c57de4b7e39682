//! 预订表单状态机 (无 I/O)
//!
//! 表单的全部状态集中在一个显式状态机里，而不是散落的布尔标志。
//! 状态机本身不做网络请求: `apply` 消费事件、返回需要执行的副作用
//! ([`Effect`])，由 [`crate::controller::FormController`] 负责执行。
//! 这样全部转移规则都可以在无 I/O 的单元测试里覆盖。
//!
//! # 状态转移
//!
//! ```text
//! Idle ──SelectDate──► TimesLoading ──AvailabilityArrived──► TimesLoaded
//!                           │                                    │
//!                           └──(加载失败)──► Error               Submit
//!                                              ▲                 ▼
//!                  TimesLoaded ◄──DismissError─┴─(拒绝)── Submitting
//!                                                            │(确认)
//!                       Idle ◄───────ResetElapsed───────── Success
//! ```
//!
//! # 过期响应
//!
//! 每次 `SelectDate` 递增请求序号并随 [`Effect::FetchAvailability`]
//! 带出；响应事件必须回带同一序号，序号不匹配的响应直接丢弃。
//! 连续换日期时，旧日期的迟到响应永远不会覆盖新日期的结果
//! (last-date-wins)。

use chrono::{NaiveDate, NaiveTime};
use shared::models::{AvailabilityView, Reservation};
use shared::request::ReservationRequest;

/// 用户已填写的表单字段
///
/// 字段独立于状态机状态保存: 提交失败回到 `TimesLoaded` 时
/// 联系方式等内容不丢失。
#[derive(Debug, Clone, Default)]
pub struct FormFields {
    pub date: Option<NaiveDate>,
    pub time: Option<NaiveTime>,
    pub party_size: Option<u32>,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub special_requests: String,
}

impl FormFields {
    /// 提交所需的字段是否全部就位
    pub fn ready_to_submit(&self) -> bool {
        self.date.is_some()
            && self.time.is_some()
            && self.party_size.is_some()
            && !self.name.trim().is_empty()
            && !self.email.trim().is_empty()
            && !self.phone.trim().is_empty()
    }

    fn build_request(&self) -> Option<ReservationRequest> {
        Some(ReservationRequest {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            date: self.date?.to_string(),
            time: self.time?.format("%H:%M").to_string(),
            party_size: self.party_size?,
            special_requests: if self.special_requests.trim().is_empty() {
                None
            } else {
                Some(self.special_requests.clone())
            },
        })
    }
}

/// 状态机状态
#[derive(Debug, Clone, PartialEq)]
pub enum FormState {
    /// 初始状态，未选日期
    Idle,
    /// 已选日期，等待可订时段响应
    TimesLoading { date: NaiveDate, seq: u64 },
    /// 可订时段已加载，可选时刻并提交
    TimesLoaded { view: AvailabilityView },
    /// 提交已发出，等待确认/拒绝 — 不可再次提交
    Submitting { view: AvailabilityView },
    /// 预订确认，展示摘要后定时回到 Idle
    Success { reservation: Reservation },
    /// 出错，保留上次加载的时段以便返回重选
    Error {
        message: String,
        view: Option<AvailabilityView>,
    },
}

/// 状态机输入事件
#[derive(Debug, Clone)]
pub enum FormEvent {
    /// 用户选择日期
    SelectDate(NaiveDate),
    /// 可订时段响应到达 (seq 不匹配的过期响应被丢弃)
    AvailabilityArrived {
        seq: u64,
        result: Result<AvailabilityView, String>,
    },
    /// 用户选择时刻 (不触发重新拉取)
    SelectTime(NaiveTime),
    /// 用户点击提交
    Submit,
    /// 提交结果到达
    SubmissionFinished(Result<Reservation, String>),
    /// 用户关闭错误提示，回到时段列表
    DismissError,
    /// 成功展示时长已到，重置表单
    ResetElapsed,
}

/// 状态机要求执行的副作用
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// 拉取指定日期的可订时段，响应必须回带 seq
    FetchAvailability { seq: u64, date: NaiveDate },
    /// 提交预订
    SubmitReservation(ReservationRequest),
    /// 安排一次 ResetElapsed (成功展示计时器)
    ScheduleReset,
}

/// 预订表单状态机
#[derive(Debug, Clone)]
pub struct ReservationForm {
    state: FormState,
    fields: FormFields,
    seq: u64,
}

impl ReservationForm {
    pub fn new() -> Self {
        Self {
            state: FormState::Idle,
            fields: FormFields::default(),
            seq: 0,
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    /// 填写人数
    pub fn set_party_size(&mut self, party_size: u32) {
        self.fields.party_size = Some(party_size);
    }

    /// 填写联系方式
    pub fn set_contact(
        &mut self,
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) {
        self.fields.name = name.into();
        self.fields.email = email.into();
        self.fields.phone = phone.into();
    }

    /// 填写特殊要求
    pub fn set_special_requests(&mut self, requests: impl Into<String>) {
        self.fields.special_requests = requests.into();
    }

    /// 消费一个事件，返回需要执行的副作用
    pub fn apply(&mut self, event: FormEvent) -> Vec<Effect> {
        match event {
            FormEvent::SelectDate(date) => self.on_select_date(date),
            FormEvent::AvailabilityArrived { seq, result } => self.on_availability(seq, result),
            FormEvent::SelectTime(time) => self.on_select_time(time),
            FormEvent::Submit => self.on_submit(),
            FormEvent::SubmissionFinished(result) => self.on_submission_finished(result),
            FormEvent::DismissError => self.on_dismiss_error(),
            FormEvent::ResetElapsed => self.on_reset_elapsed(),
        }
    }

    fn on_select_date(&mut self, date: NaiveDate) -> Vec<Effect> {
        // 提交中不允许换日期 — 必须先等到确定的结果
        if matches!(self.state, FormState::Submitting { .. }) {
            return vec![];
        }
        self.seq += 1;
        self.fields.date = Some(date);
        self.fields.time = None;
        self.state = FormState::TimesLoading {
            date,
            seq: self.seq,
        };
        vec![Effect::FetchAvailability {
            seq: self.seq,
            date,
        }]
    }

    fn on_availability(
        &mut self,
        seq: u64,
        result: Result<AvailabilityView, String>,
    ) -> Vec<Effect> {
        // 过期响应: 用户已经又换了日期，丢弃
        if seq != self.seq {
            tracing::debug!(seq, current = self.seq, "Discarding stale availability response");
            return vec![];
        }
        if !matches!(self.state, FormState::TimesLoading { .. }) {
            return vec![];
        }
        self.state = match result {
            Ok(view) => FormState::TimesLoaded { view },
            Err(message) => FormState::Error {
                message,
                view: None,
            },
        };
        vec![]
    }

    fn on_select_time(&mut self, time: NaiveTime) -> Vec<Effect> {
        if let FormState::TimesLoaded { view } = &self.state {
            // 只接受当前列表里确实存在的时刻
            if view.sessions.iter().any(|s| s.times.contains(&time)) {
                self.fields.time = Some(time);
            }
        }
        vec![]
    }

    fn on_submit(&mut self) -> Vec<Effect> {
        let FormState::TimesLoaded { view } = &self.state else {
            return vec![];
        };
        // 必填字段不齐则拒绝提交，不联系服务器
        if !self.fields.ready_to_submit() {
            return vec![];
        }
        let Some(request) = self.fields.build_request() else {
            return vec![];
        };
        self.state = FormState::Submitting { view: view.clone() };
        vec![Effect::SubmitReservation(request)]
    }

    fn on_submission_finished(&mut self, result: Result<Reservation, String>) -> Vec<Effect> {
        let FormState::Submitting { view } = &self.state else {
            return vec![];
        };
        match result {
            Ok(reservation) => {
                self.state = FormState::Success { reservation };
                vec![Effect::ScheduleReset]
            }
            Err(message) => {
                // 保留时段列表和已填字段，用户可以换时段重试
                self.state = FormState::Error {
                    message,
                    view: Some(view.clone()),
                };
                vec![]
            }
        }
    }

    fn on_dismiss_error(&mut self) -> Vec<Effect> {
        if let FormState::Error { view: Some(view), .. } = &self.state {
            self.state = FormState::TimesLoaded { view: view.clone() };
        } else if matches!(self.state, FormState::Error { .. }) {
            self.state = FormState::Idle;
        }
        vec![]
    }

    fn on_reset_elapsed(&mut self) -> Vec<Effect> {
        // 纯 UX 计时器: 只有还停在 Success 时才重置
        if matches!(self.state, FormState::Success { .. }) {
            self.state = FormState::Idle;
            self.fields = FormFields::default();
        }
        vec![]
    }
}

impl Default for ReservationForm {
    fn default() -> Self {
        Self::new()
    }
}
