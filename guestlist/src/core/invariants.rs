//! Semantic invariants for the registry store.

use std::collections::HashSet;

use crate::core::store::GuestStore;
use crate::core::types::FieldName;

/// Check registry invariants:
/// - No duplicate ids
/// - Id counter strictly ahead of every stored id
/// - All stored records have non-empty fields
///
/// Returns a list of stable error messages (empty on success).
pub fn validate_invariants(store: &GuestStore) -> Vec<String> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for (index, guest) in store.list().iter().enumerate() {
        if !seen.insert(guest.id) {
            errors.push(format!("duplicate id {} at index {}", guest.id, index));
        }

        if guest.id.0 >= store.next_id() {
            errors.push(format!(
                "id counter {} not ahead of stored id {}",
                store.next_id(),
                guest.id
            ));
        }

        for (field, value) in [
            (FieldName::Name, &guest.name),
            (FieldName::Email, &guest.email),
            (FieldName::Phone, &guest.phone),
        ] {
            if value.is_empty() {
                errors.push(format!("guest {}: empty {}", guest.id, field));
            }
        }
    }

    errors
}
