/// Raw create-event form data. Fields arrive as entered, so everything is a
/// string until validation passes; the catalog itself stays read-only, so a
/// validated draft is handed back to the caller rather than inserted.
#[derive(Debug, Clone, Default)]
pub struct EventDraft {
    pub title: String,
    pub category: String,
    pub date: String,
    pub time: String,
    pub location: String,
    pub city: String,
    pub price: String,
    pub price_vip: String,
    pub capacity: String,
    pub description: String,
    pub image_url: String,
}

impl EventDraft {
    /// Required fields of the create-event form. VIP price and image are
    /// optional.
    const REQUIRED: [(&'static str, fn(&EventDraft) -> &str); 9] = [
        ("title", |d| &d.title),
        ("category", |d| &d.category),
        ("date", |d| &d.date),
        ("time", |d| &d.time),
        ("location", |d| &d.location),
        ("city", |d| &d.city),
        ("price", |d| &d.price),
        ("capacity", |d| &d.capacity),
        ("description", |d| &d.description),
    ];

    /// Check that every required field is filled in. Returns the full list
    /// of missing field names so the form can flag them all at once.
    pub fn validate(&self) -> Result<(), DraftError> {
        let missing: Vec<&'static str> = Self::REQUIRED
            .iter()
            .filter(|(_, get)| get(self).trim().is_empty())
            .map(|(name, _)| *name)
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(DraftError::MissingFields(missing))
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DraftError {
    #[error("missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_draft() -> EventDraft {
        EventDraft {
            title: "Summer Music Festival 2026".to_string(),
            category: "Music".to_string(),
            date: "2026-09-19".to_string(),
            time: "4:00 PM".to_string(),
            location: "Riverside Park".to_string(),
            city: "Austin".to_string(),
            price: "49".to_string(),
            price_vip: String::new(),
            capacity: "5000".to_string(),
            description: "Three stages on the river.".to_string(),
            image_url: String::new(),
        }
    }

    #[test]
    fn test_complete_draft_validates() {
        assert!(complete_draft().validate().is_ok());
    }

    #[test]
    fn test_every_missing_field_is_reported() {
        let draft = EventDraft::default();
        let DraftError::MissingFields(missing) = draft.validate().unwrap_err();
        assert_eq!(
            missing,
            vec![
                "title",
                "category",
                "date",
                "time",
                "location",
                "city",
                "price",
                "capacity",
                "description"
            ]
        );
    }

    #[test]
    fn test_whitespace_only_counts_as_missing() {
        let mut draft = complete_draft();
        draft.city = "   ".to_string();
        let DraftError::MissingFields(missing) = draft.validate().unwrap_err();
        assert_eq!(missing, vec!["city"]);
    }
}
