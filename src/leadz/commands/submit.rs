use crate::commands::{add, update, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::LeadForm;
use crate::session::Session;
use crate::store::{LeadStore, StorageSlot};
use crate::validation::validate_form;

/// Handles a form submit: validate everything, then add or update.
///
/// The lead to update is `form.id` if set, otherwise the one the session is
/// editing. A rejected form leaves storage and the session untouched; an
/// accepted one returns the form to add-mode.
pub fn run<S: StorageSlot>(
    store: &LeadStore<S>,
    session: &mut Session,
    form: &LeadForm,
) -> Result<CmdResult> {
    let validation = validate_form(form);
    if !validation.is_valid() {
        let mut result = CmdResult::default();
        for (field, message) in validation.errors() {
            result.add_message(CmdMessage::error(format!("{}: {}", field, message)));
        }
        return Ok(result.with_validation(validation));
    }

    let target = form
        .id
        .clone()
        .or_else(|| session.editing_id().map(str::to_string));

    let result = match target {
        Some(id) => update::run(store, &id, form)?,
        None => add::run(store, form)?,
    };
    session.reset_form();
    Ok(result.with_validation(validation))
}
