//! Resolve a phone number to a contact name.
//!
//! First match wins: contacts are scanned in the order the contact source
//! produced them, and each contact's numbers in their stored order. When two
//! contacts share the same trailing digits, the earlier one is returned.

use crate::model::RawContact;
use crate::phone::NumberingPlan;

/// Find the name of the first contact owning a number that matches `phone_number`.
pub fn find_contact_name(phone_number: &str, contacts: &[RawContact]) -> Option<String> {
    find_contact_name_with(&NumberingPlan::default(), phone_number, contacts)
}

pub fn find_contact_name_with(
    plan: &NumberingPlan,
    phone_number: &str,
    contacts: &[RawContact],
) -> Option<String> {
    let wanted = plan.match_key(phone_number);
    contacts
        .iter()
        .find(|c| {
            c.normalized_phone_numbers
                .iter()
                .any(|n| plan.match_key(n) == wanted)
        })
        .map(|c| c.name.clone())
}
