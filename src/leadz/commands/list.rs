use crate::commands::CmdResult;
use crate::error::Result;
use crate::index::{index_leads, DisplayLead};
use crate::query::{self, LeadFilter};
use crate::store::{LeadStore, StorageSlot};
use tracing::debug;

/// Lists the leads matching `filter`. Each keeps the index it has in the full
/// list, so it can be passed straight to `edit`, `view` or `delete`.
pub fn run<S: StorageSlot>(store: &LeadStore<S>, filter: &LeadFilter) -> Result<CmdResult> {
    let leads = store.load();
    let mut matching = query::filter(&leads, filter).into_iter().peekable();

    // `matching` is an ordered subsequence of `leads`, so one pass pairs each
    // match with its full-list index.
    let listed: Vec<DisplayLead> = index_leads(leads)
        .into_iter()
        .filter(|dl| {
            if matching.peek() == Some(&dl.lead) {
                matching.next();
                true
            } else {
                false
            }
        })
        .collect();

    debug!(
        search = filter.search(),
        status = filter.status(),
        matched = listed.len(),
        "listed leads"
    );
    Ok(CmdResult::default().with_listed_leads(listed))
}
