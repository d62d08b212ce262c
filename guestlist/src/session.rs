//! Orchestration for a single-actor editing session.
//!
//! A [`Session`] owns one store, one draft, and the current search query. It
//! applies discrete user events one at a time, asks the [`Confirm`]
//! collaborator before destructive operations, reports rejections through the
//! [`Notify`] collaborator, and produces a [`ViewState`] snapshot for the
//! display layer after each event.

use anyhow::Result;
use serde::Serialize;
use tracing::debug;

use crate::core::draft::{DraftSession, EditTarget, SubmitOutcome};
use crate::core::invariants::validate_invariants;
use crate::core::search;
use crate::core::store::{GuestStore, NotFound};
use crate::core::types::{FieldName, Guest, GuestFields, GuestId};
use crate::io::console::{Confirm, Notify};

/// Snapshot of everything the display layer needs after an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewState {
    /// Current mode: create, or edit with the target id.
    pub mode: EditTarget,
    /// Current draft field values.
    pub draft: GuestFields,
    /// Search query echo.
    pub query: String,
    /// Guests matching the query, in insertion order.
    pub guests: Vec<Guest>,
    /// Count of matching guests.
    pub matches: usize,
    /// Count of all guests in the store.
    pub total: usize,
}

/// Single-actor editing session over one guest store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    store: GuestStore,
    draft: DraftSession,
    query: String,
}

impl Session {
    pub fn new(store: GuestStore) -> Self {
        Self {
            store,
            draft: DraftSession::new(),
            query: String::new(),
        }
    }

    pub fn store(&self) -> &GuestStore {
        &self.store
    }

    pub fn draft(&self) -> &DraftSession {
        &self.draft
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Forward a field edit to the draft.
    pub fn set_field(&mut self, field: FieldName, value: String) {
        self.draft.set_field(field, value);
    }

    /// Replace the search query.
    pub fn set_query(&mut self, query: String) {
        self.query = query;
    }

    /// Clear the draft and return to create mode.
    pub fn cancel(&mut self) {
        self.draft.cancel();
    }

    /// Validate and commit the draft.
    ///
    /// Returns the committed record, or `None` after reporting a validation
    /// rejection or a stale edit target through `notifier`. Either failure
    /// leaves store, draft and target untouched.
    pub fn submit<N: Notify>(&mut self, notifier: &mut N) -> Option<Guest> {
        match self.draft.submit(&mut self.store) {
            Ok(SubmitOutcome::Committed(guest)) => Some(guest),
            Ok(SubmitOutcome::Rejected(err)) => {
                notifier.notify(&err.to_string());
                None
            }
            Err(err) => {
                notifier.notify(&err.to_string());
                None
            }
        }
    }

    /// Enter edit mode for the guest with `id`.
    ///
    /// An unknown id is a no-op-with-report: `notifier` is told and the
    /// session is unchanged.
    pub fn request_edit<N: Notify>(&mut self, id: GuestId, notifier: &mut N) -> bool {
        match self.store.get(id).cloned() {
            Some(guest) => {
                self.draft.begin_edit(&guest);
                true
            }
            None => {
                notifier.notify(&NotFound(id).to_string());
                false
            }
        }
    }

    /// Delete the guest with `id` after an affirmative confirmation.
    ///
    /// The confirmation collaborator is asked first; only a yes reaches the
    /// store. If the removed id is the current edit target, the draft is
    /// cancelled in the same event so it never points at a nonexistent guest.
    /// Returns whether a removal occurred.
    pub fn request_delete<C: Confirm>(&mut self, id: GuestId, confirmer: &mut C) -> Result<bool> {
        let message = format!("delete guest {id}? this cannot be undone");
        if !confirmer.confirm(&message)? {
            debug!(id = %id, "delete declined");
            return Ok(false);
        }

        let removed = self.store.remove(id);
        if removed && self.draft.target() == EditTarget::Editing(id) {
            self.draft.cancel();
            debug!(id = %id, "deleted the edit target, draft cancelled");
        }
        Ok(removed)
    }

    /// Registry invariant messages (empty when healthy).
    pub fn check(&self) -> Vec<String> {
        validate_invariants(&self.store)
    }

    /// Snapshot for rendering: filtered list, counts, draft and mode.
    pub fn view(&self) -> ViewState {
        let guests: Vec<Guest> = search::filter(self.store.list(), &self.query)
            .into_iter()
            .cloned()
            .collect();
        let matches = guests.len();
        ViewState {
            mode: self.draft.target(),
            draft: self.draft.draft().clone(),
            query: self.query.clone(),
            guests,
            matches,
            total: self.store.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::demo_roster;
    use crate::test_support::{RecordingNotify, ScriptedConfirm};

    fn demo_session() -> Session {
        Session::new(GuestStore::from_guests(demo_roster()))
    }

    fn fill_draft(session: &mut Session, name: &str, email: &str, phone: &str) {
        session.set_field(FieldName::Name, name.to_string());
        session.set_field(FieldName::Email, email.to_string());
        session.set_field(FieldName::Phone, phone.to_string());
    }

    #[test]
    fn submit_in_create_mode_appends() {
        let mut session = demo_session();
        let mut notify = RecordingNotify::default();
        fill_draft(&mut session, "Amy", "amy@x.com", "555");

        let committed = session.submit(&mut notify).expect("committed");
        assert_eq!(committed.name, "Amy");
        assert_eq!(session.store().len(), 3);
        assert!(notify.messages.is_empty());
    }

    #[test]
    fn submit_rejection_notifies_and_mutates_nothing() {
        let mut session = demo_session();
        let before = session.clone();
        let mut notify = RecordingNotify::default();
        session.set_field(FieldName::Name, "Amy".to_string());

        assert!(session.submit(&mut notify).is_none());
        assert_eq!(session.store(), before.store());
        assert_eq!(notify.messages.len(), 1);
        assert!(notify.messages[0].contains("all fields are required"));
    }

    #[test]
    fn request_edit_copies_fields_into_draft() {
        let mut session = demo_session();
        let mut notify = RecordingNotify::default();

        assert!(session.request_edit(GuestId(2), &mut notify));
        assert_eq!(session.draft().target(), EditTarget::Editing(GuestId(2)));
        assert_eq!(session.draft().draft().name, "Jane Smith");
        assert!(notify.messages.is_empty());
    }

    #[test]
    fn request_edit_unknown_id_is_reported() {
        let mut session = demo_session();
        let mut notify = RecordingNotify::default();

        assert!(!session.request_edit(GuestId(99), &mut notify));
        assert_eq!(session.draft().target(), EditTarget::Creating);
        assert_eq!(notify.messages, vec!["no guest with id 99".to_string()]);
    }

    #[test]
    fn edit_then_submit_updates_in_place() {
        let mut session = demo_session();
        let mut notify = RecordingNotify::default();
        session.request_edit(GuestId(1), &mut notify);
        session.set_field(FieldName::Email, "doe@example.com".to_string());

        let committed = session.submit(&mut notify).expect("committed");
        assert_eq!(committed.id, GuestId(1));
        assert_eq!(session.store().len(), 2);
        assert_eq!(session.store().list()[0].email, "doe@example.com");
        assert_eq!(session.draft().target(), EditTarget::Creating);
    }

    #[test]
    fn confirmed_delete_removes_the_guest() {
        let mut session = demo_session();
        let mut confirm = ScriptedConfirm::new([true]);

        let removed = session.request_delete(GuestId(1), &mut confirm).expect("delete");
        assert!(removed);
        assert_eq!(session.store().len(), 1);
        assert!(session.store().get(GuestId(1)).is_none());
        assert_eq!(confirm.asked.len(), 1);
        assert!(confirm.asked[0].contains("delete guest 1"));
    }

    #[test]
    fn declined_delete_leaves_the_store_untouched() {
        let mut session = demo_session();
        let before = session.store().clone();
        let mut confirm = ScriptedConfirm::new([false]);

        let removed = session.request_delete(GuestId(1), &mut confirm).expect("delete");
        assert!(!removed);
        assert_eq!(session.store(), &before);
    }

    /// Deleting the guest currently open in the draft exits edit mode.
    #[test]
    fn deleting_the_edit_target_cancels_the_draft() {
        let mut session = demo_session();
        let mut notify = RecordingNotify::default();
        session.request_edit(GuestId(1), &mut notify);

        let mut confirm = ScriptedConfirm::new([true]);
        assert!(session.request_delete(GuestId(1), &mut confirm).expect("delete"));
        assert_eq!(session.draft().target(), EditTarget::Creating);
        assert_eq!(session.draft().draft(), &GuestFields::default());
    }

    #[test]
    fn deleting_another_guest_keeps_the_edit_target() {
        let mut session = demo_session();
        let mut notify = RecordingNotify::default();
        session.request_edit(GuestId(1), &mut notify);

        let mut confirm = ScriptedConfirm::new([true]);
        assert!(session.request_delete(GuestId(2), &mut confirm).expect("delete"));
        assert_eq!(session.draft().target(), EditTarget::Editing(GuestId(1)));
    }

    #[test]
    fn deleting_an_unknown_id_is_a_no_op() {
        let mut session = demo_session();
        let mut confirm = ScriptedConfirm::new([true]);

        let removed = session.request_delete(GuestId(99), &mut confirm).expect("delete");
        assert!(!removed);
        assert_eq!(session.store().len(), 2);
    }

    #[test]
    fn view_filters_by_query_and_reports_counts() {
        let mut session = demo_session();
        session.set_query("jane".to_string());

        let view = session.view();
        assert_eq!(view.query, "jane");
        assert_eq!(view.matches, 1);
        assert_eq!(view.total, 2);
        assert_eq!(view.guests[0].name, "Jane Smith");
        assert_eq!(view.mode, EditTarget::Creating);
    }

    #[test]
    fn view_echoes_draft_and_mode_while_editing() {
        let mut session = demo_session();
        let mut notify = RecordingNotify::default();
        session.request_edit(GuestId(2), &mut notify);

        let view = session.view();
        assert_eq!(view.mode, EditTarget::Editing(GuestId(2)));
        assert_eq!(view.draft.name, "Jane Smith");
    }

    #[test]
    fn check_is_clean_on_a_healthy_session() {
        assert!(demo_session().check().is_empty());
    }
}
