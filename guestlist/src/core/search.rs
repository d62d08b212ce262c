//! Live text filter over the guest list.

use crate::core::types::Guest;

/// Return the guests matching `query`, preserving list order.
///
/// The case-folded query must be a substring of the case-folded name or
/// email, or a verbatim substring of the phone field (phone numbers have no
/// case). An empty query matches every guest. Pure: no mutation, same inputs
/// always yield the same output.
pub fn filter<'a>(guests: &'a [Guest], query: &str) -> Vec<&'a Guest> {
    if query.is_empty() {
        return guests.iter().collect();
    }
    let needle = query.to_lowercase();
    guests
        .iter()
        .filter(|guest| {
            guest.name.to_lowercase().contains(&needle)
                || guest.email.to_lowercase().contains(&needle)
                || guest.phone.contains(query)
        })
        .collect()
}
