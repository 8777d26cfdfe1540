//! In-memory record store.
//!
//! [`MemoryStore`] keeps workers and attendance in ordered maps behind a
//! `RwLock` and implements both [`RecordStore`] and the write operations the
//! surrounding application needs. Every successful write publishes a
//! [`StoreEvent`] so views can re-pull instead of observing live queries.

use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::NaiveDate;
use tokio::sync::broadcast;
use tracing::debug;

use crate::error::{StoreError, StoreResult};
use crate::models::{AttendanceRecord, RecordId, Worker, WorkerId};

use super::RecordStore;

const EVENT_CAPACITY: usize = 64;

/// A change notification published after a successful write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    /// A worker was inserted or updated.
    WorkerSaved {
        /// The affected worker.
        worker_id: WorkerId,
    },
    /// A worker and all of their attendance were removed.
    WorkerDeleted {
        /// The removed worker.
        worker_id: WorkerId,
    },
    /// An attendance record was inserted, replaced or updated.
    AttendanceSaved {
        /// The owning worker.
        worker_id: WorkerId,
        /// The attendance day.
        date: NaiveDate,
    },
    /// An attendance record was removed.
    AttendanceDeleted {
        /// The owning worker.
        worker_id: WorkerId,
        /// The attendance day.
        date: NaiveDate,
    },
}

#[derive(Debug)]
struct Tables {
    workers: BTreeMap<WorkerId, Worker>,
    attendance: BTreeMap<RecordId, AttendanceRecord>,
    by_worker_date: BTreeMap<(WorkerId, NaiveDate), RecordId>,
    next_worker_id: WorkerId,
    next_record_id: RecordId,
}

impl Default for Tables {
    fn default() -> Self {
        Self {
            workers: BTreeMap::new(),
            attendance: BTreeMap::new(),
            by_worker_date: BTreeMap::new(),
            next_worker_id: 1,
            next_record_id: 1,
        }
    }
}

/// Moves `next` past `used`. An id at the top of the range leaves it as is.
fn advance_past(next: &mut i64, used: i64) {
    if let Some(after) = used.checked_add(1) {
        *next = (*next).max(after);
    }
}

impl Tables {
    fn remove_record(&mut self, id: RecordId) -> Option<AttendanceRecord> {
        let record = self.attendance.remove(&id)?;
        self.by_worker_date.remove(&(record.worker_id, record.date));
        Some(record)
    }
}

/// A thread-safe, process-local implementation of [`RecordStore`].
///
/// # Example
///
/// ```
/// use attendance_payroll::models::{AttendanceRecord, Worker};
/// use attendance_payroll::store::{MemoryStore, RecordStore};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let store = MemoryStore::new();
/// let worker_id = store
///     .insert_worker(Worker::new("Zhang Wei", Decimal::new(200, 0), Decimal::new(25, 0)))
///     .unwrap();
///
/// let date = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();
/// store
///     .upsert_attendance(AttendanceRecord::new(worker_id, date, true, true, Decimal::ZERO))
///     .unwrap();
///
/// assert!(store.get_by_worker_and_date(worker_id, date).unwrap().is_some());
/// ```
#[derive(Debug)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
    events: broadcast::Sender<StoreEvent>,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            tables: RwLock::new(Tables::default()),
            events,
        }
    }

    /// Subscribes to change notifications for writes made after this call.
    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.events.subscribe()
    }

    fn read(&self) -> StoreResult<RwLockReadGuard<'_, Tables>> {
        self.tables.read().map_err(|_| StoreError::Unavailable {
            message: "record store lock poisoned".to_string(),
        })
    }

    fn write(&self) -> StoreResult<RwLockWriteGuard<'_, Tables>> {
        self.tables.write().map_err(|_| StoreError::Unavailable {
            message: "record store lock poisoned".to_string(),
        })
    }

    fn publish(&self, event: StoreEvent) {
        debug!(?event, "Store changed");
        // No receivers is not an error: nobody is watching.
        let _ = self.events.send(event);
    }

    /// Inserts a worker, or replaces the row with the same id.
    ///
    /// A worker with id `0` is assigned the next free id. Replacing a worker
    /// keeps their attendance.
    pub fn insert_worker(&self, worker: Worker) -> StoreResult<WorkerId> {
        let id = {
            let mut tables = self.write()?;
            let id = if worker.id == 0 {
                tables.next_worker_id
            } else {
                worker.id
            };
            advance_past(&mut tables.next_worker_id, id);
            tables.workers.insert(id, Worker { id, ..worker });
            id
        };
        self.publish(StoreEvent::WorkerSaved { worker_id: id });
        Ok(id)
    }

    /// Overwrites an existing worker.
    pub fn update_worker(&self, worker: Worker) -> StoreResult<()> {
        let worker_id = worker.id;
        {
            let mut tables = self.write()?;
            let slot = tables
                .workers
                .get_mut(&worker_id)
                .ok_or(StoreError::NotFound {
                    entity: "worker",
                    id: worker_id,
                })?;
            *slot = worker;
        }
        self.publish(StoreEvent::WorkerSaved { worker_id });
        Ok(())
    }

    /// Removes a worker and cascades to their attendance.
    ///
    /// Returns `false` if the worker did not exist.
    pub fn delete_worker(&self, worker_id: WorkerId) -> StoreResult<bool> {
        let removed = {
            let mut tables = self.write()?;
            if tables.workers.remove(&worker_id).is_none() {
                return Ok(false);
            }
            let owned: Vec<RecordId> = tables
                .attendance
                .values()
                .filter(|record| record.worker_id == worker_id)
                .map(|record| record.id)
                .collect();
            for id in &owned {
                tables.remove_record(*id);
            }
            owned.len()
        };
        debug!(worker_id, cascaded = removed, "Deleted worker");
        self.publish(StoreEvent::WorkerDeleted { worker_id });
        Ok(true)
    }

    /// Returns workers whose name contains `keyword`, ignoring case, by name.
    pub fn search_workers(&self, keyword: &str) -> StoreResult<Vec<Worker>> {
        let needle = keyword.to_lowercase();
        let mut workers: Vec<Worker> = self
            .read()?
            .workers
            .values()
            .filter(|worker| worker.name.to_lowercase().contains(&needle))
            .cloned()
            .collect();
        workers.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(workers)
    }

    /// Inserts an attendance record, replacing any record the worker already
    /// has on that date.
    ///
    /// A record with id `0` takes over the id of the row it replaces, or the
    /// next free id. Fails with [`StoreError::Conflict`] if the worker does
    /// not exist.
    pub fn upsert_attendance(&self, record: AttendanceRecord) -> StoreResult<RecordId> {
        let key = (record.worker_id, record.date);
        let id = {
            let mut tables = self.write()?;
            if !tables.workers.contains_key(&record.worker_id) {
                return Err(StoreError::Conflict {
                    message: format!(
                        "attendance on {} references unknown worker {}",
                        record.date, record.worker_id
                    ),
                });
            }

            let existing = tables.by_worker_date.get(&key).copied();
            let id = match (record.id, existing) {
                (0, Some(existing)) => existing,
                (0, None) => tables.next_record_id,
                (id, _) => id,
            };
            if let Some(existing) = existing.filter(|existing| *existing != id) {
                tables.remove_record(existing);
            }
            tables.remove_record(id);

            advance_past(&mut tables.next_record_id, id);
            tables.attendance.insert(id, AttendanceRecord { id, ..record });
            tables.by_worker_date.insert(key, id);
            id
        };
        self.publish(StoreEvent::AttendanceSaved {
            worker_id: key.0,
            date: key.1,
        });
        Ok(id)
    }

    /// Overwrites an existing attendance record.
    ///
    /// Moving a record onto a date the worker already has another record for
    /// is a [`StoreError::Conflict`].
    pub fn update_attendance(&self, record: AttendanceRecord) -> StoreResult<()> {
        let key = (record.worker_id, record.date);
        {
            let mut tables = self.write()?;
            if !tables.attendance.contains_key(&record.id) {
                return Err(StoreError::NotFound {
                    entity: "attendance",
                    id: record.id,
                });
            }
            if !tables.workers.contains_key(&record.worker_id) {
                return Err(StoreError::Conflict {
                    message: format!("unknown worker {}", record.worker_id),
                });
            }
            if let Some(other) = tables.by_worker_date.get(&key).copied() {
                if other != record.id {
                    return Err(StoreError::Conflict {
                        message: format!(
                            "worker {} already has attendance on {}",
                            record.worker_id, record.date
                        ),
                    });
                }
            }
            tables.remove_record(record.id);
            tables.by_worker_date.insert(key, record.id);
            tables.attendance.insert(record.id, record);
        }
        self.publish(StoreEvent::AttendanceSaved {
            worker_id: key.0,
            date: key.1,
        });
        Ok(())
    }

    /// Removes one attendance record. Returns `false` if it did not exist.
    pub fn delete_attendance(&self, id: RecordId) -> StoreResult<bool> {
        let removed = self.write()?.remove_record(id);
        match removed {
            Some(record) => {
                self.publish(StoreEvent::AttendanceDeleted {
                    worker_id: record.worker_id,
                    date: record.date,
                });
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Removes every attendance record of a worker, keeping the worker.
    pub fn delete_attendance_by_worker(&self, worker_id: WorkerId) -> StoreResult<usize> {
        let removed: Vec<AttendanceRecord> = {
            let mut tables = self.write()?;
            let owned: Vec<RecordId> = tables
                .by_worker_date
                .range((worker_id, NaiveDate::MIN)..=(worker_id, NaiveDate::MAX))
                .map(|(_, id)| *id)
                .collect();
            owned
                .into_iter()
                .filter_map(|id| tables.remove_record(id))
                .collect()
        };
        for record in &removed {
            self.publish(StoreEvent::AttendanceDeleted {
                worker_id,
                date: record.date,
            });
        }
        Ok(removed.len())
    }

    /// Returns all of a worker's records, newest first.
    pub fn get_by_worker(&self, worker_id: WorkerId) -> StoreResult<Vec<AttendanceRecord>> {
        let mut records = self.get_by_worker_and_date_range(
            worker_id,
            NaiveDate::MIN,
            NaiveDate::MAX,
        )?;
        records.reverse();
        Ok(records)
    }

    /// Counts a worker's records in `[start, end]`.
    pub fn count_by_worker_and_date_range(
        &self,
        worker_id: WorkerId,
        start: NaiveDate,
        end: NaiveDate,
    ) -> StoreResult<usize> {
        if start > end {
            return Ok(0);
        }
        Ok(self
            .read()?
            .by_worker_date
            .range((worker_id, start)..=(worker_id, end))
            .count())
    }

    /// Number of stored workers.
    pub fn worker_count(&self) -> StoreResult<usize> {
        Ok(self.read()?.workers.len())
    }
}

impl RecordStore for MemoryStore {
    fn get_by_worker_and_date(
        &self,
        worker_id: WorkerId,
        date: NaiveDate,
    ) -> StoreResult<Option<AttendanceRecord>> {
        let tables = self.read()?;
        Ok(tables
            .by_worker_date
            .get(&(worker_id, date))
            .and_then(|id| tables.attendance.get(id))
            .cloned())
    }

    fn get_by_worker_and_date_range(
        &self,
        worker_id: WorkerId,
        start: NaiveDate,
        end: NaiveDate,
    ) -> StoreResult<Vec<AttendanceRecord>> {
        if start > end {
            return Ok(Vec::new());
        }
        let tables = self.read()?;
        Ok(tables
            .by_worker_date
            .range((worker_id, start)..=(worker_id, end))
            .filter_map(|(_, id)| tables.attendance.get(id))
            .cloned()
            .collect())
    }

    fn get_by_date_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> StoreResult<Vec<AttendanceRecord>> {
        let mut records: Vec<AttendanceRecord> = self
            .read()?
            .attendance
            .values()
            .filter(|record| record.date >= start && record.date <= end)
            .cloned()
            .collect();
        records.sort_by_key(|record| (record.date, record.worker_id));
        Ok(records)
    }

    fn get_worker_by_id(&self, id: WorkerId) -> StoreResult<Option<Worker>> {
        Ok(self.read()?.workers.get(&id).cloned())
    }

    fn get_all_workers(&self) -> StoreResult<Vec<Worker>> {
        let mut workers: Vec<Worker> = self.read()?.workers.values().cloned().collect();
        workers.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(workers)
    }
}
