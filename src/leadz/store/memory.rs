use super::StorageSlot;
use crate::error::{LeadzError, Result};
use std::cell::RefCell;
use std::collections::HashMap;

/// In-memory slot for testing. Does NOT persist data.
///
/// Read and write failures can be simulated to exercise the store's
/// degrade-to-empty / drop-the-write paths.
#[derive(Default)]
pub struct MemorySlot {
    values: RefCell<HashMap<String, String>>,
    simulate_read_error: RefCell<bool>,
    simulate_write_error: RefCell<bool>,
}

impl MemorySlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_simulate_read_error(&self, simulate: bool) {
        *self.simulate_read_error.borrow_mut() = simulate;
    }

    /// Makes every write fail, like a full disk.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }

    /// Raw value under `key`, bypassing error simulation.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }
}

impl StorageSlot for MemorySlot {
    fn read(&self, key: &str) -> Result<Option<String>> {
        if *self.simulate_read_error.borrow() {
            return Err(LeadzError::Store("Simulated read error".to_string()));
        }
        Ok(self.values.borrow().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(LeadzError::Store("Simulated write error".to_string()));
        }
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::Lead;
    use crate::store::LeadStore;

    pub struct StoreFixture {
        pub store: LeadStore<MemorySlot>,
        leads: Vec<Lead>,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: LeadStore::new(MemorySlot::new()),
                leads: Vec::new(),
            }
        }

        pub fn with_lead(mut self, id: &str, name: &str, phone: &str, status: &str) -> Self {
            self.leads.push(Lead::new(id, name, phone, "web", status));
            self.store.save(&self.leads);
            self
        }

        pub fn with_leads(mut self, count: usize) -> Self {
            for i in 0..count {
                self.leads.push(Lead::new(
                    format!("lead-{}", i + 1),
                    format!("Test Lead {}", i + 1),
                    format!("555-000-{:04}", i + 1),
                    "referral",
                    "new",
                ));
            }
            self.store.save(&self.leads);
            self
        }
    }
}
