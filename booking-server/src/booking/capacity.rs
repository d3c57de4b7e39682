//! 时段容量账目
//!
//! 使用 DashMap 维护每个时段已提交的客位数 (committed covers)。
//! entry guard 持有分片写锁，check-and-increment 在锁内完成，
//! 对同一时段的并发调用不可能同时通过检查 — 这是整个子系统
//! 唯一的正确性关键操作。

use dashmap::DashMap;
use shared::models::Slot;

/// `try_reserve` 的结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReserveOutcome {
    /// 容量已占用成功
    Reserved,
    /// 剩余容量不足，未做任何变更
    Full,
}

/// 每时段容量存储
///
/// 只记录出现过预订的时段；从未使用的时段 committed = 0。
#[derive(Debug, Default)]
pub struct SlotCapacityStore {
    committed: DashMap<Slot, u32>,
}

impl SlotCapacityStore {
    pub fn new() -> Self {
        Self {
            committed: DashMap::new(),
        }
    }

    /// 当前已提交客位数，从未使用的时段返回 0
    pub fn committed(&self, slot: &Slot) -> u32 {
        self.committed.get(slot).map(|v| *v).unwrap_or(0)
    }

    /// 原子地检查并占用容量
    ///
    /// `committed + party_size <= max_covers` 时递增并返回 `Reserved`，
    /// 否则返回 `Full` 且不变更。检查与递增在同一 entry guard 内，
    /// 不可分割。
    pub fn try_reserve(&self, slot: &Slot, party_size: u32, max_covers: u32) -> ReserveOutcome {
        let mut entry = self.committed.entry(slot.clone()).or_insert(0);
        if *entry + party_size <= max_covers {
            *entry += party_size;
            ReserveOutcome::Reserved
        } else {
            ReserveOutcome::Full
        }
    }

    /// 释放已占用的容量
    ///
    /// 仅用于持久化失败后的回滚，避免泄漏占用。饱和递减。
    pub fn release(&self, slot: &Slot, party_size: u32) {
        if let Some(mut entry) = self.committed.get_mut(slot) {
            *entry = entry.saturating_sub(party_size);
        }
    }

    /// 启动时从持久化记录重建账目
    pub fn seed(&self, slot: &Slot, covers: u32) {
        let mut entry = self.committed.entry(slot.clone()).or_insert(0);
        *entry += covers;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};
    use std::sync::Arc;

    fn slot() -> Slot {
        Slot::new(
            NaiveDate::from_ymd_opt(2026, 9, 8).unwrap(),
            "dinner",
            NaiveTime::from_hms_opt(19, 0, 0).unwrap(),
        )
    }

    #[test]
    fn unused_slot_has_zero_committed() {
        let store = SlotCapacityStore::new();
        assert_eq!(store.committed(&slot()), 0);
    }

    #[test]
    fn reserve_up_to_capacity() {
        let store = SlotCapacityStore::new();
        let s = slot();
        assert_eq!(store.try_reserve(&s, 4, 10), ReserveOutcome::Reserved);
        assert_eq!(store.try_reserve(&s, 6, 10), ReserveOutcome::Reserved);
        assert_eq!(store.committed(&s), 10);
        // 已满，后续占用失败且不变更
        assert_eq!(store.try_reserve(&s, 1, 10), ReserveOutcome::Full);
        assert_eq!(store.committed(&s), 10);
    }

    #[test]
    fn full_does_not_mutate() {
        let store = SlotCapacityStore::new();
        let s = slot();
        assert_eq!(store.try_reserve(&s, 8, 10), ReserveOutcome::Reserved);
        assert_eq!(store.try_reserve(&s, 5, 10), ReserveOutcome::Full);
        assert_eq!(store.committed(&s), 8);
    }

    #[test]
    fn release_restores_capacity() {
        let store = SlotCapacityStore::new();
        let s = slot();
        store.try_reserve(&s, 10, 10);
        store.release(&s, 4);
        assert_eq!(store.committed(&s), 6);
        assert_eq!(store.try_reserve(&s, 4, 10), ReserveOutcome::Reserved);
    }

    #[test]
    fn release_saturates_at_zero() {
        let store = SlotCapacityStore::new();
        let s = slot();
        store.try_reserve(&s, 2, 10);
        store.release(&s, 5);
        assert_eq!(store.committed(&s), 0);
    }

    #[test]
    fn concurrent_reserves_never_overbook() {
        // 20 个线程各抢 3 covers，容量 10 → 恰好 3 个成功
        let store = Arc::new(SlotCapacityStore::new());
        let s = slot();
        let handles: Vec<_> = (0..20)
            .map(|_| {
                let store = Arc::clone(&store);
                let s = s.clone();
                std::thread::spawn(move || store.try_reserve(&s, 3, 10) == ReserveOutcome::Reserved)
            })
            .collect();
        let successes = handles
            .into_iter()
            .filter_map(|h| h.join().ok())
            .filter(|&reserved| reserved)
            .count();
        assert_eq!(successes, 3);
        assert_eq!(store.committed(&s), 9);
    }
}
