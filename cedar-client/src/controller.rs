//! 表单控制器 - 状态机与 HTTP 客户端的胶水层
//!
//! [`ReservationForm`] 是纯状态机，本模块负责执行它产出的副作用:
//! 拉取可订时段、提交预订、安排成功展示计时器。
//! 控制器只是事件循环，所有转移规则都在状态机里。

use std::time::Duration;

use crate::form::{Effect, FormEvent, FormState, ReservationForm};
use crate::http::HttpClient;

/// 成功页展示时长，之后表单自动回到初始状态
const SUCCESS_DISPLAY: Duration = Duration::from_secs(5);

/// 表单控制器
pub struct FormController {
    form: ReservationForm,
    http: HttpClient,
    reset_delay: Duration,
    pending_reset: bool,
}

impl FormController {
    pub fn new(http: HttpClient) -> Self {
        Self {
            form: ReservationForm::new(),
            http,
            reset_delay: SUCCESS_DISPLAY,
            pending_reset: false,
        }
    }

    /// 覆盖成功展示时长 (测试用)
    pub fn with_reset_delay(mut self, delay: Duration) -> Self {
        self.reset_delay = delay;
        self
    }

    pub fn state(&self) -> &FormState {
        self.form.state()
    }

    pub fn form(&self) -> &ReservationForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut ReservationForm {
        &mut self.form
    }

    /// 用户选择日期: 触发一次可订时段拉取并等待结果
    ///
    /// 返回后状态为 `TimesLoaded` 或 `Error`。迟到的旧日期响应
    /// 由状态机按请求序号丢弃。
    pub async fn select_date(&mut self, date: chrono::NaiveDate) {
        let effects = self.form.apply(FormEvent::SelectDate(date));
        self.run_effects(effects).await;
    }

    /// 用户点击提交: 提交并等待确定的确认/拒绝结果
    pub async fn submit(&mut self) {
        let effects = self.form.apply(FormEvent::Submit);
        self.run_effects(effects).await;
    }

    /// 用户关闭错误提示
    pub fn dismiss_error(&mut self) {
        let _ = self.form.apply(FormEvent::DismissError);
    }

    /// 成功页计时器: 等待展示时长后重置表单
    ///
    /// 单独驱动而不在 [`submit`](Self::submit) 里内联等待，
    /// 提交调用返回时 UI 即可渲染成功摘要。状态机只有仍停在
    /// `Success` 时才会真正重置。
    pub async fn await_success_reset(&mut self) {
        if self.pending_reset {
            self.pending_reset = false;
            tokio::time::sleep(self.reset_delay).await;
            let _ = self.form.apply(FormEvent::ResetElapsed);
        }
    }

    async fn run_effects(&mut self, effects: Vec<Effect>) {
        let mut queue = std::collections::VecDeque::from(effects);
        while let Some(effect) = queue.pop_front() {
            match effect {
                Effect::FetchAvailability { seq, date } => {
                    let result = self
                        .http
                        .fetch_availability(date)
                        .await
                        .map_err(|e| e.user_message());
                    queue.extend(self.form.apply(FormEvent::AvailabilityArrived { seq, result }));
                }
                Effect::SubmitReservation(request) => {
                    let result = self
                        .http
                        .submit_reservation(&request)
                        .await
                        .map_err(|e| e.user_message());
                    queue.extend(self.form.apply(FormEvent::SubmissionFinished(result)));
                }
                Effect::ScheduleReset => {
                    self.pending_reset = true;
                }
            }
        }
    }
}
