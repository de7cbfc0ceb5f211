//! Client-side filtering over an already-fetched collection.
//!
//! Search boxes and numeric filters only ever narrow what the screen already
//! holds; they never go back to the server.

use crate::models::{Due, Listing, Notification, Property, Tenant, WorkOrder};

/// Records a search box can match against.
pub trait Searchable {
    /// The text a query is matched against.
    fn search_text(&self) -> &str;
}

macro_rules! searchable_by_name {
    ($($ty:ty),*) => {
        $(impl Searchable for $ty {
            fn search_text(&self) -> &str {
                &self.name
            }
        })*
    };
}

searchable_by_name!(Property, Listing, Tenant, Due, Notification, WorkOrder);

/// Case-insensitive substring match; a blank query matches everything.
pub fn matches_query(text: &str, query: &str) -> bool {
    let query = query.trim();
    query.is_empty() || text.to_lowercase().contains(&query.to_lowercase())
}

/// Items whose search text contains `query`, in original order.
pub fn search<'a, T: Searchable>(items: &'a [T], query: &str) -> Vec<&'a T> {
    items
        .iter()
        .filter(|item| matches_query(item.search_text(), query))
        .collect()
}

/// Inclusive numeric bounds; `None` leaves a side open.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Range {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl Range {
    /// Parse bounds typed into two text inputs; unparseable input is open.
    pub fn parse(min: &str, max: &str) -> Self {
        let bound = |s: &str| s.trim().replace(',', "").parse::<f64>().ok();
        Self {
            min: bound(min),
            max: bound(max),
        }
    }

    pub fn is_open(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }

    /// Whether `value` is inside. Records without a value only pass an open range.
    pub fn contains(&self, value: Option<f64>) -> bool {
        if self.is_open() {
            return true;
        }
        let Some(value) = value else {
            return false;
        };
        self.min.map_or(true, |min| value >= min) && self.max.map_or(true, |max| value <= max)
    }
}

/// Items whose `value` falls inside `range`, in original order.
pub fn within<'a, T>(items: &'a [T], range: Range, value: impl Fn(&T) -> Option<f64>) -> Vec<&'a T> {
    items.iter().filter(|item| range.contains(value(item))).collect()
}
