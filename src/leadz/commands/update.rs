use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Lead, LeadForm};
use crate::store::{LeadStore, StorageSlot};
use tracing::warn;

/// Replaces the lead with `id` by one built from an already validated form.
///
/// The replacement keeps its position. When no lead has `id` (it was removed
/// since the form was filled in) nothing is written and no message is
/// produced.
pub fn run<S: StorageSlot>(store: &LeadStore<S>, id: &str, form: &LeadForm) -> Result<CmdResult> {
    let mut leads = store.load();
    let mut result = CmdResult::default();

    let Some(position) = leads.iter().position(|l| l.id == id) else {
        warn!(id = %id, "lead vanished before update, nothing saved");
        return Ok(result);
    };

    let lead = Lead::from_form(id.to_string(), form);
    leads[position] = lead.clone();
    store.save(&leads);

    result.add_message(CmdMessage::success(format!("Lead updated: {}", lead.name)));
    result.affected_leads.push(lead);
    Ok(result)
}
