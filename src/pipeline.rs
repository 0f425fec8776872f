//! Sort, filter, and group pipeline.
//!
//! The pipeline turns the raw contact list plus a [`QueryState`] into
//! the grouped result the presentation layer renders. It is a pure function
//! of its inputs and is recomputed from scratch on every state change.
//!
//! # Stages
//!
//! 1. Sort by `name`, case-sensitive, ascending or descending.
//! 2. Filter with the predicate selected by the search field:
//!    - `id`: exact match against the decimal id.
//!    - `address`, `company`: case-insensitive substring match against any
//!      leaf of the nested record (see [`NestedFields`]).
//!    - everything else: case-insensitive substring match on the field.
//! 3. Group by the upper-cased first letter of `name`, keeping groups in
//!    first-seen order and contacts in sorted order within each group.
//!
//! An empty search query matches every contact, whatever the field.

use serde::Serialize;
use std::collections::HashMap;

use crate::models::{Contact, NestedFields};
use crate::query::{QueryState, SearchField, SortOrder};

/// Group key used for contacts whose name is empty.
pub const EMPTY_NAME_KEY: char = '#';

/// One section of the grouped result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactGroup {
    pub letter: char,
    pub contacts: Vec<Contact>,
}

/// Run the whole pipeline: sort, filter, group.
pub fn shape(contacts: &[Contact], query: &QueryState) -> Vec<ContactGroup> {
    let sorted = sort_contacts(contacts, query.sort_order);
    let filtered = filter_contacts(sorted, query.search_field, &query.search_query);
    group_by_initial(filtered)
}

/// Sort a copy of `contacts` by name. Equal names keep their input order.
pub fn sort_contacts(contacts: &[Contact], order: SortOrder) -> Vec<Contact> {
    let mut sorted = contacts.to_vec();
    match order {
        SortOrder::Asc => sorted.sort_by(|a, b| a.name.cmp(&b.name)),
        SortOrder::Desc => sorted.sort_by(|a, b| b.name.cmp(&a.name)),
    }
    sorted
}

/// Keep the contacts matching `query` on `field`, preserving order.
pub fn filter_contacts(contacts: Vec<Contact>, field: SearchField, query: &str) -> Vec<Contact> {
    let needle = query.to_lowercase();
    contacts
        .into_iter()
        .filter(|c| matches_lowered(c, field, &needle))
        .collect()
}

/// Whether `contact` matches `query` on `field`.
#[cfg(test)]
pub fn matches(contact: &Contact, field: SearchField, query: &str) -> bool {
    matches_lowered(contact, field, &query.to_lowercase())
}

fn matches_lowered(contact: &Contact, field: SearchField, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }

    match field {
        SearchField::Id => contact.id.to_string() == needle,
        SearchField::Address => nested_contains(&contact.address, needle),
        SearchField::Company => nested_contains(&contact.company, needle),
        SearchField::Name => contains_lowered(&contact.name, needle),
        SearchField::Username => contains_lowered(&contact.username, needle),
        SearchField::Email => contains_lowered(&contact.email, needle),
        SearchField::Phone => contains_lowered(&contact.phone, needle),
        SearchField::Website => contains_lowered(&contact.website, needle),
    }
}

fn nested_contains(record: &dyn NestedFields, needle: &str) -> bool {
    record.any_leaf(&mut |leaf: &str| contains_lowered(leaf, needle))
}

fn contains_lowered(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

/// Group key for a name: its first character, upper-cased.
pub fn group_key(name: &str) -> char {
    name.chars()
        .next()
        .and_then(|c| c.to_uppercase().next())
        .unwrap_or(EMPTY_NAME_KEY)
}

/// Bucket contacts by [`group_key`]. Groups appear in the order their first
/// member appears in the input.
pub fn group_by_initial(contacts: Vec<Contact>) -> Vec<ContactGroup> {
    let mut groups: Vec<ContactGroup> = Vec::new();
    let mut index: HashMap<char, usize> = HashMap::new();

    for contact in contacts {
        let letter = group_key(&contact.name);
        let slot = *index.entry(letter).or_insert_with(|| {
            groups.push(ContactGroup {
                letter,
                contacts: Vec::new(),
            });
            groups.len() - 1
        });
        groups[slot].contacts.push(contact);
    }

    groups
}

/// Total number of contacts across all groups.
pub fn total_contacts(groups: &[ContactGroup]) -> usize {
    groups.iter().map(|g| g.contacts.len()).sum()
}
