//! # CLI Layer
//!
//! This module is **one possible client** for leadz. It is the only code that:
//! - Knows about terminal I/O (stdout, stderr, prompts)
//! - Handles argument parsing
//! - Sets up logging
//! - Formats output for humans
//!
//! Each invocation is one user interaction: `add` and `edit` fill in the form
//! and submit it, `delete` asks for confirmation, `list` renders the filtered
//! view. The `source`/`status` flags are checked against the configured
//! choices here, playing the part of a select box; the library only checks
//! that they are present.

use super::render::{
    print_messages, render_full_leads, render_lead_list, render_text_list, sanitize,
};
use super::setup::{init_logging, Cli, Commands, LeadFields};
use clap::Parser;
use leadz::api::{CmdResult, ConfigAction};
use leadz::config::LeadzConfig;
use leadz::error::{LeadzError, Result};
use leadz::init::{initialize, LeadzContext};
use leadz::model::LeadForm;
use std::io::{BufRead, IsTerminal, Write};

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    let mut ctx = initialize(cli.home.clone())?;

    match cli.command {
        Some(Commands::Add { fields }) => handle_add(&mut ctx, fields),
        Some(Commands::List { search, status }) => handle_list(&ctx, search, status),
        Some(Commands::View { leads }) => handle_view(&ctx, leads),
        Some(Commands::Edit { lead, fields }) => handle_edit(&mut ctx, lead, fields),
        Some(Commands::Delete { lead, yes }) => handle_delete(&mut ctx, lead, yes),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        Some(Commands::Init) => handle_init(&ctx),
        None => handle_list(&ctx, None, None),
    }
}

fn handle_add(ctx: &mut LeadzContext, fields: LeadFields) -> Result<()> {
    check_choices(&ctx.config, &fields)?;
    let form = LeadForm::new(
        fields.name.unwrap_or_default(),
        fields.phone.unwrap_or_default(),
        fields.source.unwrap_or_default(),
        fields.status.unwrap_or_default(),
    );
    let result = ctx.api.submit_lead(&form)?;
    finish_submit(result)
}

fn handle_list(ctx: &LeadzContext, search: Option<String>, status: Option<String>) -> Result<()> {
    let search = search.unwrap_or_default();
    let status = status.unwrap_or_default();
    let result = ctx.api.list_leads(&search, &status)?;
    print!("{}", render_lead_list(&result.listed_leads, "No leads found."));
    print_messages(&result.messages);
    Ok(())
}

fn handle_view(ctx: &LeadzContext, leads: Vec<String>) -> Result<()> {
    let result = ctx.api.view_leads(&leads)?;
    print!("{}", render_full_leads(&result.listed_leads));
    print_messages(&result.messages);
    Ok(())
}

fn handle_edit(ctx: &mut LeadzContext, lead: String, fields: LeadFields) -> Result<()> {
    // Only the flags given here are checked; a stored value that has since
    // left the configured choices is kept as is.
    check_choices(&ctx.config, &fields)?;

    let started = ctx.api.begin_edit(&lead)?;
    let Some(current) = started.listed_leads.first() else {
        ctx.api.cancel_edit();
        return Err(LeadzError::LeadNotFound(lead));
    };

    let mut form = LeadForm::from_lead(&current.lead);
    if let Some(name) = fields.name {
        form.name = name;
    }
    if let Some(phone) = fields.phone {
        form.phone = phone;
    }
    if let Some(source) = fields.source {
        form.source = source;
    }
    if let Some(status) = fields.status {
        form.status = status;
    }

    let result = ctx.api.submit_lead(&form)?;
    if result.is_rejected() {
        ctx.api.cancel_edit();
    }
    finish_submit(result)
}

fn handle_delete(ctx: &mut LeadzContext, lead: String, yes: bool) -> Result<()> {
    let requested = ctx.api.request_delete(&lead)?;

    let confirmed = if yes {
        true
    } else {
        let question = requested
            .messages
            .first()
            .map(|m| m.content.clone())
            .unwrap_or_else(|| format!("Delete lead {}?", lead));
        ask_yes_no(&question)?
    };

    let result = ctx.api.confirm_delete(confirmed)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &LeadzContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let show_all = key.is_none();
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = ctx.api.config(action)?;
    if show_all {
        if let Some(config) = &result.config {
            let lines: Vec<String> = config
                .list_all()
                .into_iter()
                .map(|(k, v)| format!("{} = {}", k, v))
                .collect();
            print!("{}", render_text_list(&lines, "No configuration values."));
        }
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_init(ctx: &LeadzContext) -> Result<()> {
    let result = ctx.api.init()?;
    print_messages(&result.messages);
    Ok(())
}

fn finish_submit(result: CmdResult) -> Result<()> {
    print_messages(&result.messages);
    if result.is_rejected() {
        return Err(LeadzError::Api("Lead was not saved".to_string()));
    }
    Ok(())
}

/// Rejects a given, non-empty source or status that is not one of the
/// configured choices. Empty values pass through so the form validator can
/// report them.
fn check_choices(config: &LeadzConfig, fields: &LeadFields) -> Result<()> {
    let source = fields.source.as_deref().unwrap_or_default().trim();
    if !source.is_empty() && !config.allows_source(source) {
        return Err(LeadzError::Api(format!(
            "Unknown source '{}' (choose from: {})",
            source,
            config.sources.join(", ")
        )));
    }
    let status = fields.status.as_deref().unwrap_or_default().trim();
    if !status.is_empty() && !config.allows_status(status) {
        return Err(LeadzError::Api(format!(
            "Unknown status '{}' (choose from: {})",
            status,
            config.statuses.join(", ")
        )));
    }
    Ok(())
}

/// Reads one answer line from stdin. Anything but y/yes (including EOF) is a no.
fn ask_yes_no(question: &str) -> Result<bool> {
    let mut stdout = std::io::stdout();
    write!(stdout, "{} [y/N] ", sanitize(question))?;
    stdout.flush()?;

    let mut answer = String::new();
    std::io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(
        answer.trim().to_lowercase().as_str(),
        "y" | "yes"
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(source: Option<&str>, status: Option<&str>) -> LeadFields {
        LeadFields {
            source: source.map(str::to_string),
            status: status.map(str::to_string),
            ..LeadFields::default()
        }
    }

    #[test]
    fn choices_accept_configured_values() {
        let config = LeadzConfig::default();
        assert!(check_choices(&config, &fields(Some("web"), Some("new"))).is_ok());
    }

    #[test]
    fn choices_let_missing_and_empty_values_through() {
        let config = LeadzConfig::default();
        assert!(check_choices(&config, &LeadFields::default()).is_ok());
        assert!(check_choices(&config, &fields(Some(" "), Some(""))).is_ok());
    }

    #[test]
    fn choices_reject_unknown_values() {
        let config = LeadzConfig::default();
        let err = check_choices(&config, &fields(Some("billboard"), Some("new"))).unwrap_err();
        assert!(err.to_string().contains("billboard"));

        assert!(check_choices(&config, &fields(Some("web"), Some("won"))).is_err());
    }
}
