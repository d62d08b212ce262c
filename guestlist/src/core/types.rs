//! Shared types for the guest registry core.
//!
//! These types define stable contracts between core components. They should not
//! depend on external state or I/O and must remain deterministic across runs.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique identifier for a guest record, assigned by the store at creation
/// and immutable thereafter.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct GuestId(pub u64);

impl fmt::Display for GuestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A stored guest record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guest {
    pub id: GuestId,
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl Guest {
    /// Copy of the three editable fields (the draft never aliases a record).
    pub fn fields(&self) -> GuestFields {
        GuestFields {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
        }
    }
}

/// The three text fields shared by drafts and commits.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuestFields {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl GuestFields {
    /// Fields that are currently the empty string.
    ///
    /// Only emptiness counts: a whitespace-only value is considered filled,
    /// matching the field-level check applied at submit time.
    pub fn missing(&self) -> Vec<FieldName> {
        let mut missing = Vec::new();
        if self.name.is_empty() {
            missing.push(FieldName::Name);
        }
        if self.email.is_empty() {
            missing.push(FieldName::Email);
        }
        if self.phone.is_empty() {
            missing.push(FieldName::Phone);
        }
        missing
    }

    /// True when all three fields are non-empty.
    pub fn is_complete(&self) -> bool {
        self.missing().is_empty()
    }
}

/// Names of the editable guest fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldName {
    Name,
    Email,
    Phone,
}

impl FieldName {
    pub fn as_str(self) -> &'static str {
        match self {
            FieldName::Name => "name",
            FieldName::Email => "email",
            FieldName::Phone => "phone",
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Well-known starter records for an interactive session.
pub fn demo_roster() -> Vec<Guest> {
    vec![
        Guest {
            id: GuestId(1),
            name: "John Doe".to_string(),
            email: "john@example.com".to_string(),
            phone: "123-456-7890".to_string(),
        },
        Guest {
            id: GuestId(2),
            name: "Jane Smith".to_string(),
            email: "jane@example.com".to_string(),
            phone: "098-765-4321".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_reports_only_empty_fields() {
        let fields = GuestFields {
            name: String::new(),
            email: "a@b.c".to_string(),
            phone: String::new(),
        };
        assert_eq!(fields.missing(), vec![FieldName::Name, FieldName::Phone]);
        assert!(!fields.is_complete());
    }

    /// Whitespace-only values count as filled (the check is emptiness, not a trim).
    #[test]
    fn whitespace_only_field_is_not_missing() {
        let fields = GuestFields {
            name: "  ".to_string(),
            email: "a@b.c".to_string(),
            phone: "1".to_string(),
        };
        assert!(fields.missing().is_empty());
        assert!(fields.is_complete());
    }

    #[test]
    fn demo_roster_has_distinct_ids() {
        let roster = demo_roster();
        assert_eq!(roster.len(), 2);
        assert_ne!(roster[0].id, roster[1].id);
    }
}
