//! In-memory crontab
//!
//! Uses `Arc<Mutex<>>` internally so it can be cloned: hand one clone to the
//! code under test and inspect the other.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::domain::ports::CrontabStore;
use crate::error::CronbookResult;

/// Crontab held in memory
#[derive(Debug, Clone, Default)]
pub struct MemoryCrontab {
    text: Arc<Mutex<String>>,
    writes: Arc<Mutex<usize>>,
}

impl MemoryCrontab {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from existing crontab text
    pub fn with_text(text: impl Into<String>) -> Self {
        let store = Self::new();
        *lock(&store.text) = text.into();
        store
    }

    /// Current content
    pub fn text(&self) -> String {
        lock(&self.text).clone()
    }

    /// How many times `write` has been called
    pub fn write_count(&self) -> usize {
        *lock(&self.writes)
    }
}

impl CrontabStore for MemoryCrontab {
    fn read(&self) -> CronbookResult<String> {
        Ok(self.text())
    }

    fn write(&self, text: &str) -> CronbookResult<()> {
        *lock(&self.text) = text.to_string();
        *lock(&self.writes) += 1;
        Ok(())
    }

    fn describe(&self) -> String {
        "in-memory crontab".to_string()
    }
}

fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
