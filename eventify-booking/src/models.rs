use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Ticket tier selected at booking time.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TicketType {
    Standard,
    Vip,
}

impl TicketType {
    pub fn parse(value: &str) -> Option<TicketType> {
        match value {
            "standard" => Some(TicketType::Standard),
            "vip" => Some(TicketType::Vip),
            _ => None,
        }
    }

    pub fn is_vip(&self) -> bool {
        matches!(self, TicketType::Vip)
    }
}

/// Booking lifecycle. Monotonic: confirmed may become cancelled, never the
/// reverse, and records are never deleted.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Confirmed,
    Cancelled,
}

/// A reservation of tickets against one event by one identity.
///
/// `event_title` and `event_date` are denormalized snapshots captured at
/// booking time and intentionally never re-synced; `total_price` is frozen
/// at creation. `user_id` and `event_id` are weak references.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: i64,
    pub user_id: i64,
    pub event_id: u32,
    pub event_title: String,
    pub event_date: NaiveDate,
    pub ticket_type: TicketType,
    pub quantity: u32,
    pub total_price: f64,
    pub booking_date: DateTime<Utc>,
    pub status: BookingStatus,
}

/// Input to `BookingLedger::add_booking`. The ledger trusts `user_id`,
/// `event_id`, and `total_price` as resolved by the orchestration layer.
#[derive(Debug, Clone)]
pub struct BookingRequest {
    pub user_id: i64,
    pub event_id: u32,
    pub event_title: String,
    pub event_date: NaiveDate,
    pub ticket_type: TicketType,
    pub quantity: u32,
    pub total_price: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticket_type_parse() {
        assert_eq!(TicketType::parse("standard"), Some(TicketType::Standard));
        assert_eq!(TicketType::parse("vip"), Some(TicketType::Vip));
        assert_eq!(TicketType::parse("VIP"), None);
        assert!(TicketType::Vip.is_vip());
    }

    #[test]
    fn test_status_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&BookingStatus::Confirmed).unwrap(), r#""confirmed""#);
        assert_eq!(serde_json::to_string(&BookingStatus::Cancelled).unwrap(), r#""cancelled""#);
    }
}
