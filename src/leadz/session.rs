//! UI state that survives between operations: what the form is doing and
//! whether a delete is waiting for confirmation.
//!
//! The commands read and update this explicitly instead of keeping it in
//! globals.

/// What a form submit will do.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormMode {
    #[default]
    Add,
    Edit(String),
}

/// A destructive action waiting for the user's yes/no.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PendingAction {
    #[default]
    None,
    ConfirmingDelete(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub form: FormMode,
    pub pending: PendingAction,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn editing_id(&self) -> Option<&str> {
        match &self.form {
            FormMode::Edit(id) => Some(id),
            FormMode::Add => None,
        }
    }

    pub fn reset_form(&mut self) {
        self.form = FormMode::Add;
    }

    /// Takes the pending action, leaving `None` behind.
    pub fn take_pending(&mut self) -> PendingAction {
        std::mem::take(&mut self.pending)
    }
}
