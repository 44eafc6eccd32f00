use crate::types::Entry;
use log::debug;
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Size,
    ModTime,
    Name,
    NameCaseInsensitive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortOrder {
    pub key: SortKey,
    pub descending: bool,
}

/// Reorder entries in place. Size and time ties stay name-ascending in both directions.
pub fn sort_entries(entries: &mut [Entry], order: SortOrder) {
    debug!("sorting {} entries by {:?}", entries.len(), order);

    let direction = |ord: Ordering| if order.descending { ord.reverse() } else { ord };

    match order.key {
        SortKey::Size => entries.sort_by(|a, b| {
            direction(a.size.cmp(&b.size)).then_with(|| a.full_name.cmp(&b.full_name))
        }),
        SortKey::ModTime => entries.sort_by(|a, b| {
            direction(a.modified.cmp(&b.modified)).then_with(|| a.full_name.cmp(&b.full_name))
        }),
        SortKey::Name => entries.sort_by(|a, b| direction(a.full_name.cmp(&b.full_name))),
        SortKey::NameCaseInsensitive => entries.sort_by(|a, b| {
            direction(a.full_name.to_lowercase().cmp(&b.full_name.to_lowercase()))
        }),
    }
}
