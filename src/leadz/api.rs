//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single entry
//! point for every leadz operation, whatever UI drives it.
//!
//! It:
//! - **Dispatches** to the appropriate command function
//! - **Normalizes inputs** (raw selector strings → [`LeadSelector`], raw filter
//!   strings → [`LeadFilter`])
//! - **Owns the session** (form mode, pending delete) so a UI never has to
//!   thread it through by hand
//!
//! It does no business logic, no I/O and no formatting.
//!
//! ## Generic Over StorageSlot
//!
//! - Production: `LeadzApi<FileSlot>`
//! - Testing: `LeadzApi<MemorySlot>`

use crate::commands;
use crate::error::{LeadzError, Result};
use crate::index::LeadSelector;
use crate::model::LeadForm;
use crate::query::LeadFilter;
use crate::session::Session;
use crate::store::{LeadStore, StorageSlot};
use std::str::FromStr;

pub struct LeadzApi<S: StorageSlot> {
    store: LeadStore<S>,
    session: Session,
    paths: commands::LeadzPaths,
}

impl<S: StorageSlot> LeadzApi<S> {
    pub fn new(store: LeadStore<S>, paths: commands::LeadzPaths) -> Self {
        Self {
            store,
            session: Session::new(),
            paths,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn store(&self) -> &LeadStore<S> {
        &self.store
    }

    pub fn paths(&self) -> &commands::LeadzPaths {
        &self.paths
    }

    pub fn submit_lead(&mut self, form: &LeadForm) -> Result<commands::CmdResult> {
        commands::submit::run(&self.store, &mut self.session, form)
    }

    pub fn begin_edit(&mut self, selector: &str) -> Result<commands::CmdResult> {
        let selector = parse_selector(selector)?;
        commands::edit::begin(&self.store, &mut self.session, &selector)
    }

    pub fn cancel_edit(&mut self) -> commands::CmdResult {
        commands::edit::cancel(&mut self.session)
    }

    pub fn request_delete(&mut self, selector: &str) -> Result<commands::CmdResult> {
        let selector = parse_selector(selector)?;
        commands::delete::request(&self.store, &mut self.session, &selector)
    }

    pub fn confirm_delete(&mut self, confirmed: bool) -> Result<commands::CmdResult> {
        commands::delete::confirm(&self.store, &mut self.session, confirmed)
    }

    pub fn list_leads(&self, search: &str, status: &str) -> Result<commands::CmdResult> {
        commands::list::run(&self.store, &LeadFilter::new(search, status))
    }

    pub fn view_leads<I: AsRef<str>>(&self, selectors: &[I]) -> Result<commands::CmdResult> {
        let selectors = parse_selectors(selectors)?;
        commands::view::run(&self.store, &selectors)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths, action)
    }

    pub fn init(&self) -> Result<commands::CmdResult> {
        commands::init::run(&self.paths)
    }
}

fn parse_selector(input: &str) -> Result<LeadSelector> {
    LeadSelector::from_str(input).map_err(LeadzError::Api)
}

fn parse_selectors<I: AsRef<str>>(inputs: &[I]) -> Result<Vec<LeadSelector>> {
    inputs.iter().map(|s| parse_selector(s.as_ref())).collect()
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, LeadzPaths, MessageLevel};
