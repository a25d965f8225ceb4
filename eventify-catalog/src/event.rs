use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Event categories recognized by the catalog
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Category {
    Music,
    Technology,
    Food,
    Sports,
    Arts,
    Business,
}

impl Category {
    /// All recognized categories, in display order.
    pub const ALL: [Category; 6] = [
        Category::Music,
        Category::Technology,
        Category::Food,
        Category::Sports,
        Category::Arts,
        Category::Business,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Category::Music => "Music",
            Category::Technology => "Technology",
            Category::Food => "Food",
            Category::Sports => "Sports",
            Category::Arts => "Arts",
            Category::Business => "Business",
        }
    }

    pub fn parse(name: &str) -> Option<Category> {
        Category::ALL.iter().copied().find(|c| c.name() == name)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A schedulable, bookable item in the catalog. Immutable after load.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: u32,
    pub title: String,
    pub category: Category,
    pub date: NaiveDate,
    pub time: String,
    pub location: String,
    pub city: String,
    pub price: f64,
    pub price_vip: f64,
    pub capacity: u32,
    pub attendees: u32,
    pub description: String,
    pub tags: Vec<String>,
    pub organizer: String,
    pub image: String,
    pub featured: bool,
}

impl Event {
    /// Unit price for a ticket tier. Standard tickets use the base price,
    /// VIP tickets the VIP price.
    pub fn unit_price(&self, vip: bool) -> f64 {
        if vip {
            self.price_vip
        } else {
            self.price
        }
    }
}
