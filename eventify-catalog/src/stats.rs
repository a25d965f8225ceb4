use crate::catalog::EventCatalog;
use crate::event::Category;
use serde::Serialize;

/// Per-category slice of the admin overview.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryShare {
    pub category: Category,
    pub count: usize,
    /// Share of all catalog events, in percent.
    pub share: f64,
}

/// Aggregates shown on the admin panel.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogStats {
    pub total_events: usize,
    pub total_attendees: u64,
    /// Projected revenue at standard pricing: sum of attendees * price.
    pub projected_revenue: f64,
    pub by_category: Vec<CategoryShare>,
}

impl CatalogStats {
    pub fn collect(catalog: &EventCatalog) -> Self {
        let events = catalog.events();
        let total_events = events.len();
        let total_attendees = events.iter().map(|e| u64::from(e.attendees)).sum();
        let projected_revenue = events.iter().map(|e| f64::from(e.attendees) * e.price).sum();

        let by_category = Category::ALL
            .iter()
            .map(|&category| {
                let count = events.iter().filter(|e| e.category == category).count();
                let share = if total_events == 0 {
                    0.0
                } else {
                    count as f64 / total_events as f64 * 100.0
                };
                CategoryShare { category, count, share }
            })
            .collect();

        Self { total_events, total_attendees, projected_revenue, by_category }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::Event;
    use chrono::NaiveDate;

    fn event(id: u32, category: Category, price: f64, attendees: u32) -> Event {
        Event {
            id,
            title: format!("Event {}", id),
            category,
            date: NaiveDate::from_ymd_opt(2026, 9, 1).unwrap(),
            time: "7:00 PM".to_string(),
            location: "Hall".to_string(),
            city: "Springfield".to_string(),
            price,
            price_vip: price * 2.0,
            capacity: 1000,
            attendees,
            description: String::new(),
            tags: vec![],
            organizer: "Org".to_string(),
            image: String::new(),
            featured: false,
        }
    }

    #[test]
    fn test_revenue_is_attendees_times_standard_price() {
        let catalog = EventCatalog::new(vec![
            event(1, Category::Music, 20.0, 100),
            event(2, Category::Food, 15.0, 200),
        ])
        .unwrap();
        let stats = CatalogStats::collect(&catalog);
        assert_eq!(stats.total_events, 2);
        assert_eq!(stats.total_attendees, 300);
        assert_eq!(stats.projected_revenue, 100.0 * 20.0 + 200.0 * 15.0);
    }

    #[test]
    fn test_category_shares_sum_to_hundred() {
        let catalog = EventCatalog::new(vec![
            event(1, Category::Music, 20.0, 0),
            event(2, Category::Music, 20.0, 0),
            event(3, Category::Arts, 30.0, 0),
            event(4, Category::Sports, 40.0, 0),
        ])
        .unwrap();
        let stats = CatalogStats::collect(&catalog);

        let music = stats.by_category.iter().find(|s| s.category == Category::Music).unwrap();
        assert_eq!(music.count, 2);
        assert_eq!(music.share, 50.0);

        let total_share: f64 = stats.by_category.iter().map(|s| s.share).sum();
        assert!((total_share - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_catalog_yields_zero_shares() {
        let catalog = EventCatalog::new(vec![]).unwrap();
        let stats = CatalogStats::collect(&catalog);
        assert_eq!(stats.total_events, 0);
        assert!(stats.by_category.iter().all(|s| s.share == 0.0));
    }
}
