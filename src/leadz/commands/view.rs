use crate::commands::CmdResult;
use crate::error::Result;
use crate::index::LeadSelector;
use crate::store::{LeadStore, StorageSlot};

use super::helpers::leads_by_selectors;

pub fn run<S: StorageSlot>(store: &LeadStore<S>, selectors: &[LeadSelector]) -> Result<CmdResult> {
    let leads = leads_by_selectors(store, selectors)?;
    Ok(CmdResult::default().with_listed_leads(leads))
}
