use crate::config::LeadzConfig;
use crate::index::DisplayLead;
use crate::model::Lead;
use crate::validation::FormValidation;
use std::path::PathBuf;

pub mod add;
pub mod config;
pub mod delete;
pub mod edit;
pub mod helpers;
pub mod init;
pub mod list;
pub mod submit;
pub mod update;
pub mod view;

/// Where leadz keeps its files.
#[derive(Debug, Clone)]
pub struct LeadzPaths {
    pub home: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_leads: Vec<Lead>,
    pub listed_leads: Vec<DisplayLead>,
    pub validation: Option<FormValidation>,
    pub config: Option<LeadzConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_leads(mut self, leads: Vec<Lead>) -> Self {
        self.affected_leads = leads;
        self
    }

    pub fn with_listed_leads(mut self, leads: Vec<DisplayLead>) -> Self {
        self.listed_leads = leads;
        self
    }

    pub fn with_validation(mut self, validation: FormValidation) -> Self {
        self.validation = Some(validation);
        self
    }

    pub fn with_config(mut self, config: LeadzConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// True when a submit was rejected by validation.
    pub fn is_rejected(&self) -> bool {
        self.validation.as_ref().is_some_and(|v| !v.is_valid())
    }
}
