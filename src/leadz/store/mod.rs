//! # Storage Layer
//!
//! leadz keeps its entire lead list in a **single key-value slot** as one JSON
//! array. There is no per-record storage and no index: every mutation reads the
//! whole list, edits it in memory and writes the whole list back.
//!
//! ## Two levels
//!
//! - [`StorageSlot`] is raw I/O: read or write an opaque string under a key.
//!   It reports failures as `Result`s.
//! - [`LeadStore`] is the persistence boundary the rest of the crate talks to.
//!   It owns (de)serialization and **never fails**: a missing, unreadable or
//!   corrupt slot loads as an empty list, and a failed write is dropped. Both
//!   are logged through `tracing`.
//!
//! ## Implementations
//!
//! - [`fs::FileSlot`]: production, one `<key>.json` file per key.
//! - [`memory::MemorySlot`]: in-memory map for tests, can simulate write errors.
//!
//! ## Storage Format
//!
//! ```text
//! $LEADZ_HOME/
//! ├── leads.json      # JSON array of every lead, in insertion order
//! └── config.json     # allowed sources/statuses
//! ```

use crate::error::Result;
use crate::model::Lead;
use chrono::Utc;
use tracing::{debug, error, warn};
use uuid::Uuid;

pub mod fs;
pub mod memory;

/// The fixed key the lead list lives under.
pub const LEADS_KEY: &str = "leads";

/// Abstract interface for a persistent key-value slot.
///
/// Methods take `&self`; implementations that need mutation use interior
/// mutability since leadz is single-threaded.
pub trait StorageSlot {
    /// Returns `Ok(None)` when nothing has been stored under `key` yet.
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Replaces the value under `key`.
    /// MUST leave the previous value intact when it fails.
    fn write(&self, key: &str, value: &str) -> Result<()>;
}

pub struct LeadStore<S: StorageSlot> {
    slot: S,
    key: String,
}

impl<S: StorageSlot> LeadStore<S> {
    pub fn new(slot: S) -> Self {
        Self {
            slot,
            key: LEADS_KEY.to_string(),
        }
    }

    pub fn slot(&self) -> &S {
        &self.slot
    }

    /// Loads every stored lead, or an empty list if the slot is absent or unusable.
    pub fn load(&self) -> Vec<Lead> {
        let raw = match self.slot.read(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!(key = %self.key, error = %e, "could not read lead storage, starting empty");
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<Lead>>(&raw) {
            Ok(leads) => leads,
            Err(e) => {
                warn!(key = %self.key, error = %e, "lead storage is corrupt, starting empty");
                Vec::new()
            }
        }
    }

    /// Writes the full list back. Failures are logged and otherwise ignored.
    pub fn save(&self, leads: &[Lead]) {
        let raw = match serde_json::to_string(leads) {
            Ok(raw) => raw,
            Err(e) => {
                error!(key = %self.key, error = %e, "could not serialize leads, nothing saved");
                return;
            }
        };

        match self.slot.write(&self.key, &raw) {
            Ok(()) => debug!(key = %self.key, count = leads.len(), "saved leads"),
            Err(e) => {
                error!(key = %self.key, error = %e, "could not write lead storage, nothing saved")
            }
        }
    }
}

/// Produces a new lead id: a base-36 microsecond timestamp and 64 random bits.
///
/// Uniqueness is probabilistic; existing ids are not consulted.
pub fn generate_id() -> String {
    let micros = u64::try_from(Utc::now().timestamp_micros()).unwrap_or_default();
    let (_, random) = Uuid::new_v4().as_u64_pair();
    format!("{}-{:016x}", to_base36(micros), random)
}

fn to_base36(mut n: u64) -> String {
    const DIGITS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if n == 0 {
        return "0".to_string();
    }
    let mut out = Vec::new();
    while n > 0 {
        out.push(DIGITS[(n % 36) as usize]);
        n /= 36;
    }
    out.reverse();
    String::from_utf8(out).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::memory::MemorySlot;
    use super::*;
    use std::collections::HashSet;

    fn sample() -> Vec<Lead> {
        vec![
            Lead::new("a", "Jo Smith", "555-1234567", "web", "new"),
            Lead::new("b", "Ann Lee", "(555) 000 1111", "referral", "lost"),
        ]
    }

    #[test]
    fn load_of_empty_slot_is_empty() {
        let store = LeadStore::new(MemorySlot::new());
        assert!(store.load().is_empty());
    }

    #[test]
    fn save_then_load_preserves_order_and_fields() {
        let store = LeadStore::new(MemorySlot::new());
        store.save(&sample());
        assert_eq!(store.load(), sample());
    }

    #[test]
    fn corrupt_slot_loads_as_empty() {
        let slot = MemorySlot::new();
        slot.write(LEADS_KEY, "{not json").unwrap();
        let store = LeadStore::new(slot);
        assert!(store.load().is_empty());
    }

    #[test]
    fn wrong_shape_loads_as_empty() {
        let slot = MemorySlot::new();
        slot.write(LEADS_KEY, r#"{"id":"a"}"#).unwrap();
        let store = LeadStore::new(slot);
        assert!(store.load().is_empty());
    }

    #[test]
    fn failed_write_keeps_previous_state() {
        let store = LeadStore::new(MemorySlot::new());
        store.save(&sample());

        store.slot().set_simulate_write_error(true);
        store.save(&[]);

        store.slot().set_simulate_write_error(false);
        assert_eq!(store.load(), sample());
    }

    #[test]
    fn failed_read_loads_as_empty() {
        let store = LeadStore::new(MemorySlot::new());
        store.save(&sample());
        store.slot().set_simulate_read_error(true);
        assert!(store.load().is_empty());
    }

    #[test]
    fn generated_ids_are_distinct() {
        let ids: HashSet<String> = (0..500).map(|_| generate_id()).collect();
        assert_eq!(ids.len(), 500);
    }

    #[test]
    fn generated_id_has_timestamp_and_random_parts() {
        let id = generate_id();
        let (ts, random) = id.split_once('-').unwrap();
        assert!(!ts.is_empty());
        assert_eq!(random.len(), 16);
        assert!(random.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn base36_encoding() {
        assert_eq!(to_base36(0), "0");
        assert_eq!(to_base36(35), "z");
        assert_eq!(to_base36(36), "10");
    }
}
