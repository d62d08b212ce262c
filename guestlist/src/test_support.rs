//! Test-only helpers for building guests and scripted collaborators.

use std::collections::VecDeque;

use anyhow::Result;

use crate::core::types::{Guest, GuestFields, GuestId};
use crate::io::console::{Confirm, Notify};

/// Build a guest record with explicit id and fields.
pub fn guest(id: u64, name: &str, email: &str, phone: &str) -> Guest {
    Guest {
        id: GuestId(id),
        name: name.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
    }
}

/// Build draft fields.
pub fn fields(name: &str, email: &str, phone: &str) -> GuestFields {
    GuestFields {
        name: name.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
    }
}

/// Confirmation collaborator answering from a fixed queue, recording every
/// message it was asked.
pub struct ScriptedConfirm {
    answers: VecDeque<bool>,
    pub asked: Vec<String>,
}

impl ScriptedConfirm {
    pub fn new(answers: impl IntoIterator<Item = bool>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
            asked: Vec::new(),
        }
    }
}

impl Confirm for ScriptedConfirm {
    fn confirm(&mut self, message: &str) -> Result<bool> {
        self.asked.push(message.to_string());
        Ok(self.answers.pop_front().expect("unscripted confirm call"))
    }
}

/// Notify collaborator that records every message.
#[derive(Default)]
pub struct RecordingNotify {
    pub messages: Vec<String>,
}

impl Notify for RecordingNotify {
    fn notify(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }
}
