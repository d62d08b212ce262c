//! Single-draft editing protocol for the registry form.
//!
//! One draft exists at a time, always present (starting empty), owned
//! exclusively by the session. The draft is a working copy: fields are copied
//! in from a record on `begin_edit` and copied out to the store on a
//! successful submit. It never aliases a stored record.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::core::store::{GuestStore, NotFound};
use crate::core::types::{FieldName, Guest, GuestFields, GuestId};

/// Which record the current draft will overwrite on submit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditTarget {
    /// The draft will become a new record.
    #[default]
    Creating,
    /// The draft will overwrite the record with this id.
    Editing(GuestId),
}

/// Rejected submit: one or more required fields were empty.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub struct ValidationError {
    pub missing: Vec<FieldName>,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.missing.iter().map(|field| field.as_str()).collect();
        write!(f, "all fields are required (missing: {})", names.join(", "))
    }
}

/// Outcome of a submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Draft validated and applied to the store (as an add or an update).
    Committed(Guest),
    /// Draft left untouched; nothing was written to the store.
    Rejected(ValidationError),
}

/// In-progress form values plus the current edit target.
///
/// States: `Creating` (initial, all-empty draft) and `Editing(id)`. Every
/// transition is synchronous and leaves the session interactable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftSession {
    draft: GuestFields,
    target: EditTarget,
}

impl DraftSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &GuestFields {
        &self.draft
    }

    pub fn target(&self) -> EditTarget {
        self.target
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.target, EditTarget::Editing(_))
    }

    /// Overwrite one field of the draft. No validation; available in either
    /// state.
    pub fn set_field(&mut self, field: FieldName, value: String) {
        match field {
            FieldName::Name => self.draft.name = value,
            FieldName::Email => self.draft.email = value,
            FieldName::Phone => self.draft.phone = value,
        };
    }

    /// Copy `guest`'s fields into the draft and enter edit mode.
    ///
    /// Unconditionally discards whatever unsaved draft values were present.
    pub fn begin_edit(&mut self, guest: &Guest) {
        self.draft = guest.fields();
        self.target = EditTarget::Editing(guest.id);
        debug!(id = %guest.id, "edit mode entered");
    }

    /// Clear the draft and return to create mode.
    pub fn cancel(&mut self) {
        self.draft = GuestFields::default();
        self.target = EditTarget::Creating;
    }

    /// Validate the draft and apply it to `store`.
    ///
    /// Validation requires all three fields non-empty; only the empty string
    /// counts as missing. A rejected draft and its edit target are left
    /// untouched with no store mutation. On success the draft is cleared and
    /// the target returns to `Creating`, whichever branch committed.
    ///
    /// A stale edit target (id no longer in the store) surfaces [`NotFound`]
    /// with draft, target and store all unchanged.
    pub fn submit(&mut self, store: &mut GuestStore) -> Result<SubmitOutcome, NotFound> {
        let missing = self.draft.missing();
        if !missing.is_empty() {
            return Ok(SubmitOutcome::Rejected(ValidationError { missing }));
        }

        let committed = match self.target {
            EditTarget::Editing(id) => store.update(id, self.draft.clone())?,
            EditTarget::Creating => store.add(self.draft.clone()),
        };

        self.cancel();
        debug!(id = %committed.id, "draft committed");
        Ok(SubmitOutcome::Committed(committed))
    }
}
