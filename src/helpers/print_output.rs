use chrono::DateTime;
use colored::*;

use crate::error::TokenError;
use crate::types::output::Output;

const RULE: &str = "======================================================================";
const THIN_RULE: &str = "----------------------------------------------------------------------";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    Batch,
    Single,
}

fn format_timestamp(timestamp: i64) -> String {
    match DateTime::from_timestamp(timestamp, 0) {
        Some(utc) => utc.format("%Y-%m-%d %H:%M:%S (UTC)").to_string(),
        None => timestamp.to_string(),
    }
}

fn render_text(layout: Layout, output: &Output) -> String {
    let mut report = String::new();
    let title = match layout {
        Layout::Batch => "Room Token Generator - Multiple Participants",
        Layout::Single => "Room Token Generator",
    };

    report.push_str(&format!("{}\n{}\n{}\n\n", RULE, title.bold(), RULE));
    report.push_str(&format!("Room: {}\n", output.room));
    if layout == Layout::Single {
        if let Some(token) = output.tokens.first() {
            report.push_str(&format!("Participant: {}\n", token.participant));
        }
    }
    report.push_str(&format!("Valid for: {} hours\n", output.valid_for_hours));
    if let Some(url) = &output.server_url {
        report.push_str(&format!("Server URL: {}\n", url));
    }
    report.push('\n');

    for (i, issued) in output.tokens.iter().enumerate() {
        let label = match layout {
            Layout::Batch => format!("CLIENT {} ({}):", i + 1, issued.participant),
            Layout::Single => "TOKEN:".to_string(),
        };
        report.push_str(&format!("{}\n{}\n{}\n\n", label.green(), THIN_RULE, issued.token));
    }

    if let Some(expires_at) = output.tokens.iter().map(|t| t.expires_at).max() {
        let prefix = match layout {
            Layout::Batch => "All tokens expire:",
            Layout::Single => "Expires:",
        };
        report.push_str(&format!("{} {}\n", prefix.yellow(), format_timestamp(expires_at)));
    }
    report.push_str(RULE);
    report
}

pub fn render(format: &str, layout: Layout, output: &Output) -> Result<String, TokenError> {
    match format {
        "json" => Ok(serde_json::to_string_pretty(output)?),
        _ => Ok(render_text(layout, output)),
    }
}

pub fn print_output(format: &str, layout: Layout, output: &Output) -> Result<(), TokenError> {
    println!("{}", render(format, layout, output)?);
    Ok(())
}

/// Usage errors go to stdout, everything else to stderr.
pub fn print_error(err: &TokenError) {
    match err {
        TokenError::Usage(message) => println!("{}", message),
        other => eprintln!("{} {}", "[!]".red(), other.to_string().red()),
    }
}
