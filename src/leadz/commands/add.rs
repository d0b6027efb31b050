use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Lead, LeadForm};
use crate::store::{generate_id, LeadStore, StorageSlot};
use tracing::info;

/// Appends a new lead built from an already validated form.
pub fn run<S: StorageSlot>(store: &LeadStore<S>, form: &LeadForm) -> Result<CmdResult> {
    let lead = Lead::from_form(generate_id(), form);

    let mut leads = store.load();
    leads.push(lead.clone());
    store.save(&leads);

    info!(id = %lead.id, "lead added");
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Lead added: {}", lead.name)));
    result.affected_leads.push(lead);
    Ok(result)
}
