use super::types::{AttendanceRecord, EntryMode, YearMonth};
use std::{cell::RefCell, collections::HashMap, rc::Rc};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("保存処理が実行中です。しばらくしてから再度お試しください。")]
    Busy,
}

/// Where a user's monthly sheet is loaded from and saved to.
pub trait AttendanceStore {
    fn load(
        &self,
        user_id: &str,
        month: YearMonth,
        mode: EntryMode,
    ) -> Result<Vec<AttendanceRecord>, StoreError>;

    fn save(
        &self,
        user_id: &str,
        month: YearMonth,
        mode: EntryMode,
        records: &[AttendanceRecord],
    ) -> Result<usize, StoreError>;
}

type StoreKey = (String, YearMonth, EntryMode);

/// Keeps saved sheets for the lifetime of the page. Nothing leaves memory.
#[derive(Clone, Default)]
pub struct SessionStore {
    entries: Rc<RefCell<HashMap<StoreKey, Vec<AttendanceRecord>>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl AttendanceStore for SessionStore {
    fn load(
        &self,
        user_id: &str,
        month: YearMonth,
        mode: EntryMode,
    ) -> Result<Vec<AttendanceRecord>, StoreError> {
        let entries = self.entries.try_borrow().map_err(|_| StoreError::Busy)?;
        Ok(entries
            .get(&(user_id.to_string(), month, mode))
            .cloned()
            .unwrap_or_default())
    }

    fn save(
        &self,
        user_id: &str,
        month: YearMonth,
        mode: EntryMode,
        records: &[AttendanceRecord],
    ) -> Result<usize, StoreError> {
        let mut entries = self
            .entries
            .try_borrow_mut()
            .map_err(|_| StoreError::Busy)?;
        entries.insert((user_id.to_string(), month, mode), records.to_vec());
        Ok(records.len())
    }
}

pub fn save_records(
    store: &impl AttendanceStore,
    user_id: &str,
    month: YearMonth,
    mode: EntryMode,
    records: &[AttendanceRecord],
) -> Result<usize, StoreError> {
    let saved = store.save(user_id, month, mode, records)?;
    log::debug!(
        "saved {} {} record(s) for {} ({})",
        saved,
        mode.as_str(),
        user_id,
        month
    );
    Ok(saved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::attendance::types::RecordId;
    use chrono::NaiveDate;

    fn month() -> YearMonth {
        YearMonth {
            year: 2025,
            month: 4,
        }
    }

    fn records(count: usize) -> Vec<AttendanceRecord> {
        let date = NaiveDate::from_ymd_opt(2025, 4, 1).unwrap();
        (0..count)
            .map(|i| AttendanceRecord::blank(RecordId::new(i.to_string()), date))
            .collect()
    }

    #[test]
    fn save_returns_count_and_load_reads_it_back() {
        let store = SessionStore::new();
        let saved = save_records(&store, "me", month(), EntryMode::Actual, &records(3)).unwrap();
        assert_eq!(saved, 3);
        let loaded = store.load("me", month(), EntryMode::Actual).unwrap();
        assert_eq!(loaded, records(3));
    }

    #[test]
    fn entries_are_scoped_by_user_month_and_mode() {
        let store = SessionStore::new();
        store
            .save("me", month(), EntryMode::Actual, &records(2))
            .unwrap();
        assert!(store
            .load("me", month(), EntryMode::Planned)
            .unwrap()
            .is_empty());
        assert!(store
            .load("yamada", month(), EntryMode::Actual)
            .unwrap()
            .is_empty());
        let next = YearMonth {
            year: 2025,
            month: 5,
        };
        assert!(store.load("me", next, EntryMode::Actual).unwrap().is_empty());
    }

    #[test]
    fn clones_share_the_same_session() {
        let store = SessionStore::new();
        let other = store.clone();
        store
            .save("tanaka", month(), EntryMode::Planned, &records(1))
            .unwrap();
        assert_eq!(
            other.load("tanaka", month(), EntryMode::Planned).unwrap().len(),
            1
        );
    }
}
