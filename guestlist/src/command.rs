//! Line-oriented command parsing for the interactive session.

use thiserror::Error;

use crate::core::types::{FieldName, GuestId};

/// A parsed user command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Replace one draft field with the given text.
    SetField(FieldName, String),
    /// Validate and commit the draft.
    Submit,
    /// Clear the draft and leave edit mode.
    Cancel,
    /// Enter edit mode for an existing guest.
    Edit(GuestId),
    /// Delete a guest (after confirmation).
    Delete(GuestId),
    /// Replace the search query (empty to clear).
    Search(String),
    /// Render the current view.
    List,
    /// Dump the current view as JSON.
    Json,
    /// Run the registry invariant checks.
    Check,
    Help,
    Quit,
}

/// Command line could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown command '{0}' (try 'help')")]
    Unknown(String),
    #[error("'{0}' expects a guest id")]
    MissingId(&'static str),
    #[error("invalid guest id '{0}'")]
    InvalidId(String),
}

/// Parse one input line into a command.
///
/// Blank lines parse to `None`. The first word selects the command; for field
/// edits and search the remainder of the line is the full replacement string
/// (missing remainder means the empty string).
pub fn parse(line: &str) -> Result<Option<Command>, ParseError> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let (word, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim_start()),
        None => (trimmed, ""),
    };

    let command = match word {
        "name" => Command::SetField(FieldName::Name, rest.to_string()),
        "email" => Command::SetField(FieldName::Email, rest.to_string()),
        "phone" => Command::SetField(FieldName::Phone, rest.to_string()),
        "submit" => Command::Submit,
        "cancel" => Command::Cancel,
        "edit" => Command::Edit(parse_id("edit", rest)?),
        "delete" => Command::Delete(parse_id("delete", rest)?),
        "search" => Command::Search(rest.to_string()),
        "list" => Command::List,
        "json" => Command::Json,
        "check" => Command::Check,
        "help" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => return Err(ParseError::Unknown(other.to_string())),
    };
    Ok(Some(command))
}

fn parse_id(command: &'static str, rest: &str) -> Result<GuestId, ParseError> {
    if rest.is_empty() {
        return Err(ParseError::MissingId(command));
    }
    rest.parse::<u64>()
        .map(GuestId)
        .map_err(|_| ParseError::InvalidId(rest.to_string()))
}

/// One-line-per-command usage text for the `help` command.
pub const HELP: &str = "\
name|email|phone <text>  set a draft field (blank text clears it)
submit                   commit the draft (add, or update when editing)
cancel                   discard the draft and leave edit mode
edit <id>                load a guest into the draft
delete <id>              delete a guest (asks for confirmation)
search [text]            filter the list (no text clears the filter)
list                     show the current view
json                     dump the current view as JSON
check                    run registry invariant checks
quit                     exit (the list is not saved)";
