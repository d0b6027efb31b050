//! # Rendering
//!
//! Turns command results into terminal text. Layout (column widths, truncation)
//! is computed on the plain strings first and colour is applied afterwards, so
//! ANSI codes never throw the alignment off.
//!
//! Every stored string is untrusted: [`sanitize`] strips control characters
//! before anything reaches the terminal.

use colored::{ColoredString, Colorize};
use leadz::api::{CmdMessage, MessageLevel};
use leadz::index::DisplayLead;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const NAME_WIDTH: usize = 30;
const PHONE_WIDTH: usize = 20;
const SOURCE_WIDTH: usize = 12;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        let content = sanitize(&message.content);
        match message.level {
            MessageLevel::Info => println!("{}", content.dimmed()),
            MessageLevel::Success => println!("{}", content.green()),
            MessageLevel::Warning => eprintln!("{}", content.yellow()),
            MessageLevel::Error => eprintln!("{}", content.red()),
        }
    }
}

/// One line per lead: index, name, phone, source, status.
pub(super) fn render_lead_list(leads: &[DisplayLead], empty_message: &str) -> String {
    if leads.is_empty() {
        return format!("{}\n", empty_message);
    }

    let index_width = leads
        .iter()
        .map(|dl| dl.index.to_string().len() + 1)
        .max()
        .unwrap_or(2);

    let mut out = String::new();
    for dl in leads {
        let index = pad_to_width(&format!("{}.", dl.index), index_width);
        let name = cell(&dl.lead.name, NAME_WIDTH);
        let phone = cell(&dl.lead.phone, PHONE_WIDTH);
        let source = cell(&dl.lead.source, SOURCE_WIDTH);
        let status = sanitize(&dl.lead.status);

        out.push_str(&format!(
            "{} {}  {}  {}  {}\n",
            index.yellow(),
            name,
            phone,
            source.dimmed(),
            status_colored(&status)
        ));
    }
    out
}

/// Every field of each lead, including its id.
pub(super) fn render_full_leads(leads: &[DisplayLead]) -> String {
    let mut out = String::new();
    for (i, dl) in leads.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&format!(
            "{} {}\n",
            format!("{}.", dl.index).yellow(),
            sanitize(&dl.lead.name).bold()
        ));
        out.push_str(&format!("  {:<7} {}\n", "id", sanitize(&dl.lead.id).dimmed()));
        out.push_str(&format!("  {:<7} {}\n", "phone", sanitize(&dl.lead.phone)));
        out.push_str(&format!("  {:<7} {}\n", "source", sanitize(&dl.lead.source)));
        out.push_str(&format!(
            "  {:<7} {}\n",
            "status",
            status_colored(&sanitize(&dl.lead.status))
        ));
    }
    out
}

pub(super) fn render_text_list(lines: &[String], empty_message: &str) -> String {
    if lines.is_empty() {
        return format!("{}\n", empty_message);
    }
    lines.iter().map(|l| format!("{}\n", l)).collect()
}

fn status_colored(status: &str) -> ColoredString {
    match status {
        "new" => status.cyan(),
        "contacted" => status.yellow(),
        "qualified" => status.green(),
        "lost" => status.red(),
        _ => status.normal(),
    }
}

/// Replaces control characters (escape sequences, newlines, tabs) with spaces.
pub(super) fn sanitize(s: &str) -> String {
    s.chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect()
}

fn cell(value: &str, width: usize) -> String {
    pad_to_width(&truncate_to_width(&sanitize(value), width), width)
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

fn pad_to_width(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}

#[cfg(test)]
mod tests {
    use super::*;
    use leadz::model::Lead;

    fn no_color() {
        colored::control::set_override(false);
    }

    fn display(index: usize, name: &str, status: &str) -> DisplayLead {
        DisplayLead {
            index,
            lead: Lead::new(format!("id-{}", index), name, "555-1234567", "web", status),
        }
    }

    #[test]
    fn empty_list_shows_message() {
        no_color();
        assert_eq!(render_lead_list(&[], "No leads found."), "No leads found.\n");
    }

    #[test]
    fn list_has_one_line_per_lead() {
        no_color();
        let out = render_lead_list(
            &[display(1, "Jo Smith", "new"), display(12, "Ann", "lost")],
            "none",
        );
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("1. "));
        assert!(lines[0].contains("Jo Smith"));
        assert!(lines[1].starts_with("12."));
        assert!(lines[1].ends_with("lost"));
    }

    #[test]
    fn columns_line_up() {
        no_color();
        let out = render_lead_list(
            &[display(1, "Jo", "new"), display(2, "Ångström Émile", "new")],
            "none",
        );
        let phone_cols: Vec<usize> = out
            .lines()
            .map(|l| {
                let byte = l.find("555").unwrap();
                l[..byte].width()
            })
            .collect();
        assert_eq!(phone_cols[0], phone_cols[1]);
    }

    #[test]
    fn long_names_are_truncated() {
        no_color();
        let long = "x".repeat(80);
        let out = render_lead_list(&[display(1, &long, "new")], "none");
        assert!(out.contains('…'));
        assert!(!out.contains(&long));
    }

    #[test]
    fn control_characters_are_stripped() {
        no_color();
        let out = render_full_leads(&[display(1, "Evil\u{1b}[2J\nName", "new")]);
        assert!(!out.contains('\u{1b}'));
        assert!(out.contains("Evil [2J Name"));
    }

    #[test]
    fn full_view_shows_id() {
        no_color();
        let out = render_full_leads(&[display(3, "Jo", "qualified")]);
        assert!(out.contains("id-3"));
        assert!(out.contains("qualified"));
    }

    #[test]
    fn text_list() {
        assert_eq!(render_text_list(&[], "empty"), "empty\n");
        assert_eq!(
            render_text_list(&["a = 1".into(), "b = 2".into()], "empty"),
            "a = 1\nb = 2\n"
        );
    }
}
