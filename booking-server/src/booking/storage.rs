//! redb-based storage layer for reservations
//!
//! # Tables
//!
//! | Table | Key | Value | Purpose |
//! |-------|-----|-------|---------|
//! | `reservations` | reservation_id | `Reservation` (JSON) | Confirmed reservations |
//! | `contact_messages` | message_id | `ContactMessage` (JSON) | Contact form inbox |
//!
//! # Durability
//!
//! redb commits are persistent as soon as `commit()` returns (copy-on-write
//! with atomic pointer swap), so a confirmed reservation survives an
//! unexpected shutdown. 容量账目不落库 — 启动时从 reservations 表重建。

use redb::{Database, ReadableDatabase, ReadableTable, TableDefinition};
use shared::models::{ContactMessage, Reservation};
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

/// Table for reservations: key = reservation id, value = JSON-serialized Reservation
const RESERVATIONS_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("reservations");

/// Table for contact messages: key = message id, value = JSON-serialized ContactMessage
const CONTACT_MESSAGES_TABLE: TableDefinition<&str, &[u8]> =
    TableDefinition::new("contact_messages");

/// Storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    #[error("Storage error: {0}")]
    Storage(#[from] redb::StorageError),

    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Reservation storage backed by redb
#[derive(Clone)]
pub struct ReservationStore {
    db: Arc<Database>,
    #[cfg(test)]
    fail_writes: Arc<std::sync::atomic::AtomicBool>,
}

impl ReservationStore {
    /// Open or create the database at the given path
    pub fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        let db = Database::create(path)?;
        Self::init(db)
    }

    /// Open an in-memory database (for testing)
    #[cfg(test)]
    pub fn open_in_memory() -> StorageResult<Self> {
        let db = Database::builder().create_with_backend(redb::backends::InMemoryBackend::new())?;
        Self::init(db)
    }

    fn init(db: Database) -> StorageResult<Self> {
        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(RESERVATIONS_TABLE)?;
            let _ = write_txn.open_table(CONTACT_MESSAGES_TABLE)?;
        }
        write_txn.commit()?;

        Ok(Self {
            db: Arc::new(db),
            #[cfg(test)]
            fail_writes: Arc::new(std::sync::atomic::AtomicBool::new(false)),
        })
    }

    /// Write failure injection for the release-on-persist-failure path
    #[cfg(test)]
    pub fn fail_next_writes(&self, fail: bool) {
        self.fail_writes
            .store(fail, std::sync::atomic::Ordering::SeqCst);
    }

    #[cfg(test)]
    fn check_injected_failure(&self) -> StorageResult<()> {
        if self.fail_writes.load(std::sync::atomic::Ordering::SeqCst) {
            return Err(StorageError::Serialization(serde_json::Error::io(
                std::io::Error::other("injected write failure"),
            )));
        }
        Ok(())
    }

    /// Persist a reservation record
    pub fn insert_reservation(&self, reservation: &Reservation) -> StorageResult<()> {
        #[cfg(test)]
        self.check_injected_failure()?;

        let value = serde_json::to_vec(reservation)?;
        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(RESERVATIONS_TABLE)?;
            table.insert(reservation.id.as_str(), value.as_slice())?;
        }
        write_txn.commit()?;
        Ok(())
    }

    /// Look up a reservation by id
    pub fn get_reservation(&self, id: &str) -> StorageResult<Option<Reservation>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(RESERVATIONS_TABLE)?;
        match table.get(id)? {
            Some(raw) => Ok(Some(serde_json::from_slice(raw.value())?)),
            None => Ok(None),
        }
    }

    /// All reservations on or after a date (启动时容量重建用)
    ///
    /// 顺序扫描: 单店规模下记录量很小，不需要二级索引。
    pub fn reservations_on_or_after(
        &self,
        date: chrono::NaiveDate,
    ) -> StorageResult<Vec<Reservation>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(RESERVATIONS_TABLE)?;
        let mut reservations = Vec::new();
        for entry in table.iter()? {
            let (_, raw) = entry?;
            let reservation: Reservation = serde_json::from_slice(raw.value())?;
            if reservation.slot.date >= date {
                reservations.push(reservation);
            }
        }
        Ok(reservations)
    }

    /// Persist a contact message
    pub fn insert_contact_message(&self, message: &ContactMessage) -> StorageResult<()> {
        let value = serde_json::to_vec(message)?;
        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(CONTACT_MESSAGES_TABLE)?;
            table.insert(message.id.as_str(), value.as_slice())?;
        }
        write_txn.commit()?;
        Ok(())
    }
}

impl std::fmt::Debug for ReservationStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReservationStore")
            .field("db", &"<redb::Database>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};
    use shared::models::{ReservationContact, ReservationStatus, Slot};

    fn reservation(id: &str, date: NaiveDate) -> Reservation {
        Reservation {
            id: id.to_string(),
            slot: Slot::new(date, "dinner", NaiveTime::from_hms_opt(19, 0, 0).unwrap()),
            party_size: 4,
            contact: ReservationContact {
                name: "Marie L".into(),
                email: "marie@example.fr".into(),
                phone: "06 12 34 56 78".into(),
            },
            special_requests: None,
            status: ReservationStatus::Confirmed,
            created_at: 0,
        }
    }

    #[test]
    fn insert_and_get_round_trip() {
        let store = ReservationStore::open_in_memory().unwrap();
        let r = reservation("r-1", NaiveDate::from_ymd_opt(2026, 9, 8).unwrap());
        store.insert_reservation(&r).unwrap();

        let found = store.get_reservation("r-1").unwrap().unwrap();
        assert_eq!(found.slot, r.slot);
        assert_eq!(found.party_size, 4);
        assert!(store.get_reservation("r-404").unwrap().is_none());
    }

    #[test]
    fn scan_filters_past_dates() {
        let store = ReservationStore::open_in_memory().unwrap();
        store
            .insert_reservation(&reservation("old", NaiveDate::from_ymd_opt(2026, 9, 1).unwrap()))
            .unwrap();
        store
            .insert_reservation(&reservation("new", NaiveDate::from_ymd_opt(2026, 9, 10).unwrap()))
            .unwrap();

        let upcoming = store
            .reservations_on_or_after(NaiveDate::from_ymd_opt(2026, 9, 5).unwrap())
            .unwrap();
        assert_eq!(upcoming.len(), 1);
        assert_eq!(upcoming[0].id, "new");
    }

    #[test]
    fn injected_failure_surfaces_as_error() {
        let store = ReservationStore::open_in_memory().unwrap();
        store.fail_next_writes(true);
        let r = reservation("r-1", NaiveDate::from_ymd_opt(2026, 9, 8).unwrap());
        assert!(store.insert_reservation(&r).is_err());

        store.fail_next_writes(false);
        assert!(store.insert_reservation(&r).is_ok());
    }
}
