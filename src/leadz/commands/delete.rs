use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::LeadSelector;
use crate::session::{PendingAction, Session};
use crate::store::{LeadStore, StorageSlot};
use tracing::info;

use super::helpers::{indexed_leads, resolve_selector};

/// First step of a delete: remember which lead the user wants gone.
///
/// Storage is not touched until [`confirm`] is called with a yes.
pub fn request<S: StorageSlot>(
    store: &LeadStore<S>,
    session: &mut Session,
    selector: &LeadSelector,
) -> Result<CmdResult> {
    let indexed = indexed_leads(store);
    let target = resolve_selector(&indexed, selector)?;

    session.pending = PendingAction::ConfirmingDelete(target.lead.id.clone());

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info(format!(
        "Delete lead ({}): {}?",
        target.index, target.lead.name
    )));
    Ok(result.with_listed_leads(vec![target]))
}

/// Second step of a delete: act on the user's answer.
///
/// A yes removes the pending lead and returns the form to add-mode, whatever it
/// was editing. A no changes nothing. Either way the pending action is cleared.
pub fn confirm<S: StorageSlot>(
    store: &LeadStore<S>,
    session: &mut Session,
    confirmed: bool,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    let PendingAction::ConfirmingDelete(id) = session.take_pending() else {
        result.add_message(CmdMessage::warning("No delete is waiting for confirmation"));
        return Ok(result);
    };

    if !confirmed {
        result.add_message(CmdMessage::info("Delete cancelled"));
        return Ok(result);
    }

    let (removed, kept): (Vec<_>, Vec<_>) =
        store.load().into_iter().partition(|l| l.id == id);
    store.save(&kept);
    session.reset_form();

    match removed.first() {
        Some(lead) => {
            info!(id = %id, "lead deleted");
            result.add_message(CmdMessage::success(format!("Lead deleted: {}", lead.name)));
        }
        None => result.add_message(CmdMessage::info("Lead was already gone")),
    }
    Ok(result.with_affected_leads(removed))
}
