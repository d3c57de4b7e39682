//! 预订并发压力测试
//!
//! 使用 ServerState::initialize 完整初始化 (临时工作目录 + redb)，
//! 大量并发提交抢同一批时段，验证:
//! 1. 永不超卖: 每个时段确认的客位总和 ≤ 容量上限
//! 2. 被拒绝的提交只能是 SlotFull (输入全部合法)
//! 3. 确认的预订全部可以从存储按 id 读回

use booking_server::booking::RejectReason;
use booking_server::{Config, ServerState};
use chrono::{Datelike, Duration, Weekday};
use rand::Rng;
use shared::request::ReservationRequest;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

const SUBMISSIONS: usize = 200;
const MAX_COVERS: u32 = 20;

/// 下一个距今至少 7 天的周二 (保证开放且不受当日时刻影响)
fn upcoming_tuesday() -> chrono::NaiveDate {
    let mut date = chrono::Utc::now()
        .with_timezone(&chrono_tz::Europe::Paris)
        .date_naive()
        + Duration::days(7);
    while date.weekday() != Weekday::Tue {
        date += Duration::days(1);
    }
    date
}

fn random_request(rng: &mut impl Rng, date: chrono::NaiveDate) -> ReservationRequest {
    // 晚市 19:00-21:30 的合法时刻
    const TIMES: &[&str] = &["19:00", "19:30", "20:00", "20:30", "21:00", "21:30"];
    ReservationRequest {
        name: format!("Guest {}", rng.gen_range(1..10_000)),
        email: format!("guest{}@example.fr", rng.gen_range(1..10_000)),
        phone: "06 12 34 56 78".to_string(),
        date: date.to_string(),
        time: TIMES[rng.gen_range(0..TIMES.len())].to_string(),
        party_size: rng.gen_range(1..=6),
        special_requests: None,
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn concurrent_submissions_never_overbook() {
    let work_dir = tempfile::tempdir().unwrap();
    let mut config = Config::with_overrides(work_dir.path().to_str().unwrap(), 0);
    config.max_covers_per_slot = MAX_COVERS;

    let state = Arc::new(ServerState::initialize(&config).await.unwrap());
    let date = upcoming_tuesday();

    let requests: Vec<ReservationRequest> = {
        let mut rng = rand::thread_rng();
        (0..SUBMISSIONS).map(|_| random_request(&mut rng, date)).collect()
    };

    let start = Instant::now();
    let handles: Vec<_> = requests
        .into_iter()
        .map(|req| {
            let state = Arc::clone(&state);
            tokio::task::spawn_blocking(move || {
                let outcome = state.engine.submit(&req);
                (req, outcome)
            })
        })
        .collect();

    let mut confirmed = Vec::new();
    let mut rejected = 0usize;
    for handle in handles {
        let (req, outcome) = handle.await.unwrap();
        match outcome {
            Ok(reservation) => confirmed.push(reservation),
            Err(RejectReason::SlotFull) => rejected += 1,
            Err(other) => panic!("unexpected rejection for {req:?}: {other}"),
        }
    }
    println!(
        "{} submissions in {:?}: {} confirmed, {} slot-full",
        SUBMISSIONS,
        start.elapsed(),
        confirmed.len(),
        rejected
    );
    assert_eq!(confirmed.len() + rejected, SUBMISSIONS);
    assert!(!confirmed.is_empty());

    // 1. 永不超卖
    let mut covers_per_slot: HashMap<_, u32> = HashMap::new();
    for reservation in &confirmed {
        *covers_per_slot.entry(reservation.slot.clone()).or_default() += reservation.party_size;
    }
    for (slot, covers) in &covers_per_slot {
        assert!(
            *covers <= MAX_COVERS,
            "slot {slot} overbooked: {covers} > {MAX_COVERS}"
        );
        assert_eq!(state.capacity.committed(slot), *covers);
    }

    // 3. 确认的预订全部已持久化
    for reservation in &confirmed {
        let stored = state
            .storage
            .get_reservation(&reservation.id)
            .unwrap()
            .unwrap_or_else(|| panic!("reservation {} not persisted", reservation.id));
        assert_eq!(stored.slot, reservation.slot);
    }
}

#[tokio::test]
async fn restart_replays_capacity_from_storage() {
    let work_dir = tempfile::tempdir().unwrap();
    let mut config = Config::with_overrides(work_dir.path().to_str().unwrap(), 0);
    config.max_covers_per_slot = MAX_COVERS;

    let date = upcoming_tuesday();
    let request = ReservationRequest {
        name: "Marie L".to_string(),
        email: "marie@example.fr".to_string(),
        phone: "06 12 34 56 78".to_string(),
        date: date.to_string(),
        time: "19:00".to_string(),
        party_size: 4,
        special_requests: None,
    };

    let slot = {
        let state = ServerState::initialize(&config).await.unwrap();
        let reservation = state.engine.submit(&request).unwrap();
        reservation.slot
        // state (和 redb 句柄) 在这里落盘并释放
    };

    // 模拟重启: 相同工作目录重新初始化
    let state = ServerState::initialize(&config).await.unwrap();
    assert_eq!(state.capacity.committed(&slot), 4);
}
