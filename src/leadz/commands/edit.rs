use crate::commands::CmdResult;
use crate::error::Result;
use crate::index::LeadSelector;
use crate::session::{FormMode, Session};
use crate::store::{LeadStore, StorageSlot};

use super::helpers::{indexed_leads, resolve_selector};

/// Loads a lead into the form; the next submit updates it.
pub fn begin<S: StorageSlot>(
    store: &LeadStore<S>,
    session: &mut Session,
    selector: &LeadSelector,
) -> Result<CmdResult> {
    let indexed = indexed_leads(store);
    let target = resolve_selector(&indexed, selector)?;
    session.form = FormMode::Edit(target.lead.id.clone());
    Ok(CmdResult::default().with_listed_leads(vec![target]))
}

pub fn cancel(session: &mut Session) -> CmdResult {
    session.reset_form();
    CmdResult::default()
}
