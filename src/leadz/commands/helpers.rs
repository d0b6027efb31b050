use crate::error::{LeadzError, Result};
use crate::index::{find, index_leads, DisplayLead, LeadSelector};
use crate::store::{LeadStore, StorageSlot};

pub fn indexed_leads<S: StorageSlot>(store: &LeadStore<S>) -> Vec<DisplayLead> {
    index_leads(store.load())
}

pub fn resolve_selector(leads: &[DisplayLead], selector: &LeadSelector) -> Result<DisplayLead> {
    find(leads, selector)
        .cloned()
        .ok_or_else(|| LeadzError::LeadNotFound(selector.to_string()))
}

pub fn leads_by_selectors<S: StorageSlot>(
    store: &LeadStore<S>,
    selectors: &[LeadSelector],
) -> Result<Vec<DisplayLead>> {
    let indexed = indexed_leads(store);
    selectors
        .iter()
        .map(|selector| resolve_selector(&indexed, selector))
        .collect()
}
