use crate::catalog::EventCatalog;
use crate::event::{Category, Event};

/// Label the UI uses for the unfiltered category option.
pub const ALL_EVENTS: &str = "All Events";

/// Category filter: the "All Events" sentinel, or one exact category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryFilter {
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Parse a category button label. Unknown labels yield `None`; the
    /// sentinel yields `All`.
    pub fn parse(label: &str) -> Option<CategoryFilter> {
        if label == ALL_EVENTS {
            return Some(CategoryFilter::All);
        }
        Category::parse(label).map(CategoryFilter::Only)
    }

    fn matches(&self, event: &Event) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => event.category == *category,
        }
    }
}

/// Sort order for query results. `Unsorted` is the explicit fallback for
/// unrecognized sort keys: results stay in catalog insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Date,
    Price,
    Popular,
    Unsorted,
}

impl SortOrder {
    pub fn parse(key: &str) -> SortOrder {
        match key {
            "date" => SortOrder::Date,
            "price" => SortOrder::Price,
            "popular" => SortOrder::Popular,
            _ => SortOrder::Unsorted,
        }
    }
}

/// The query state composed by the events page: free-text search, category
/// filter, and sort order.
#[derive(Debug, Clone)]
pub struct EventQuery {
    pub search: String,
    pub category: CategoryFilter,
    pub sort: SortOrder,
}

impl Default for EventQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            category: CategoryFilter::All,
            sort: SortOrder::Date,
        }
    }
}

/// Pure query engine over the immutable catalog: filter by case-insensitive
/// substring of title or description plus category, then stable-sort.
/// Repeated calls with identical inputs return identical sequences.
pub fn query(catalog: &EventCatalog, q: &EventQuery) -> Vec<Event> {
    let needle = q.search.to_lowercase();

    let mut hits: Vec<Event> = catalog
        .events()
        .iter()
        .filter(|event| {
            let text_match = event.title.to_lowercase().contains(&needle)
                || event.description.to_lowercase().contains(&needle);
            text_match && q.category.matches(event)
        })
        .cloned()
        .collect();

    // Vec::sort_by is stable, so ties keep catalog insertion order.
    match q.sort {
        SortOrder::Date => hits.sort_by(|a, b| a.date.cmp(&b.date)),
        SortOrder::Price => hits.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortOrder::Popular => hits.sort_by(|a, b| b.attendees.cmp(&a.attendees)),
        SortOrder::Unsorted => {}
    }

    hits
}
