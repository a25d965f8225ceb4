use crate::event::{Category, Event};

const SEED_EVENTS: &str = include_str!("seed_events.json");

/// The immutable collection of all events. Invariants are checked once at
/// load; afterwards the catalog only hands out shared references.
pub struct EventCatalog {
    events: Vec<Event>,
}

impl EventCatalog {
    /// Build a catalog from an ordered event list, validating the load-time
    /// invariants: unique ids and `attendees <= capacity`.
    pub fn new(events: Vec<Event>) -> Result<Self, CatalogError> {
        let mut seen = std::collections::HashSet::new();
        for event in &events {
            if !seen.insert(event.id) {
                return Err(CatalogError::DuplicateId(event.id));
            }
            if event.attendees > event.capacity {
                return Err(CatalogError::Overbooked {
                    id: event.id,
                    attendees: event.attendees,
                    capacity: event.capacity,
                });
            }
        }
        tracing::debug!(count = events.len(), "event catalog loaded");
        Ok(Self { events })
    }

    /// Catalog loaded from the embedded seed data.
    pub fn seeded() -> Result<Self, CatalogError> {
        let events: Vec<Event> = serde_json::from_str(SEED_EVENTS)?;
        Self::new(events)
    }

    /// All events in catalog insertion order.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn get(&self, id: u32) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }

    /// The first `limit` featured events, in catalog order (home page strip).
    pub fn featured(&self, limit: usize) -> Vec<&Event> {
        self.events.iter().filter(|e| e.featured).take(limit).collect()
    }

    /// Recognized category names, with the "All Events" sentinel first.
    pub fn category_names() -> Vec<&'static str> {
        let mut names = vec![crate::query::ALL_EVENTS];
        names.extend(Category::ALL.iter().map(|c| c.name()));
        names
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("duplicate event id: {0}")]
    DuplicateId(u32),

    #[error("event {id} overbooked: {attendees} attendees exceeds capacity {capacity}")]
    Overbooked { id: u32, attendees: u32, capacity: u32 },

    #[error("seed data malformed: {0}")]
    Seed(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn event(id: u32, attendees: u32, capacity: u32) -> Event {
        Event {
            id,
            title: format!("Event {}", id),
            category: Category::Music,
            date: NaiveDate::from_ymd_opt(2026, 9, 1).unwrap(),
            time: "7:00 PM".to_string(),
            location: "Hall".to_string(),
            city: "Springfield".to_string(),
            price: 20.0,
            price_vip: 50.0,
            capacity,
            attendees,
            description: String::new(),
            tags: vec![],
            organizer: "Org".to_string(),
            image: String::new(),
            featured: id % 2 == 1,
        }
    }

    #[test]
    fn test_seeded_catalog_satisfies_invariants() {
        let catalog = EventCatalog::seeded().unwrap();
        assert!(!catalog.is_empty());
        for event in catalog.events() {
            assert!(event.attendees <= event.capacity, "event {} overbooked", event.id);
        }
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let result = EventCatalog::new(vec![event(1, 0, 10), event(1, 0, 10)]);
        assert!(matches!(result, Err(CatalogError::DuplicateId(1))));
    }

    #[test]
    fn test_overbooked_event_rejected() {
        let result = EventCatalog::new(vec![event(1, 11, 10)]);
        assert!(matches!(result, Err(CatalogError::Overbooked { id: 1, .. })));
    }

    #[test]
    fn test_featured_respects_limit_and_order() {
        let catalog =
            EventCatalog::new(vec![event(1, 0, 10), event(2, 0, 10), event(3, 0, 10), event(5, 0, 10)])
                .unwrap();
        let featured = catalog.featured(2);
        let ids: Vec<u32> = featured.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_category_names_start_with_sentinel() {
        let names = EventCatalog::category_names();
        assert_eq!(names[0], "All Events");
        assert_eq!(names.len(), 7);
    }
}
