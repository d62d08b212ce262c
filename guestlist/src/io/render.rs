//! Plain-text rendering of the session view.

use std::io::Write;

use anyhow::{Context, Result};

use crate::core::draft::EditTarget;
use crate::session::ViewState;

/// Write the view as plain text: mode line, draft, search echo, match count
/// and one line per guest.
pub fn render_view(out: &mut impl Write, view: &ViewState) -> Result<()> {
    match view.mode {
        EditTarget::Creating => writeln!(out, "mode: adding a new guest")?,
        EditTarget::Editing(id) => writeln!(out, "mode: editing guest {id}")?,
    }
    writeln!(
        out,
        "draft: name=[{}] email=[{}] phone=[{}]",
        view.draft.name, view.draft.email, view.draft.phone
    )?;
    if !view.query.is_empty() {
        writeln!(out, "search: [{}]", view.query)?;
    }

    writeln!(out, "guests ({} of {}):", view.matches, view.total)?;
    if view.guests.is_empty() {
        if view.query.is_empty() {
            writeln!(out, "  no guests yet. add your first guest!")?;
        } else {
            writeln!(out, "  no guests found. try a different search.")?;
        }
    } else {
        for guest in &view.guests {
            writeln!(
                out,
                "  {}. {} <{}> {}",
                guest.id, guest.name, guest.email, guest.phone
            )?;
        }
    }

    out.flush().context("flush view output")?;
    Ok(())
}
