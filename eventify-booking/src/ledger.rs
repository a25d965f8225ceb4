use crate::models::{Booking, BookingRequest, BookingStatus};
use eventify_shared::Clock;
use std::sync::Arc;

pub const MIN_QUANTITY: u32 = 1;
pub const MAX_QUANTITY: u32 = 10;

/// The append-only collection of all bookings.
///
/// Records are only ever appended and their status only ever moves
/// confirmed -> cancelled; cancellation never removes a record. Ids are
/// derived from the clock and bumped on collision, so they are unique and
/// ordered by creation.
pub struct BookingLedger {
    clock: Arc<dyn Clock>,
    bookings: Vec<Booking>,
    last_id: i64,
}

impl BookingLedger {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock, bookings: Vec::new(), last_id: 0 }
    }

    /// Append a new confirmed booking.
    ///
    /// Quantity must lie in [MIN_QUANTITY, MAX_QUANTITY]. The correlation
    /// ids and the precomputed `total_price` are trusted from the caller;
    /// the orchestration layer resolves them against the read-only catalog.
    pub fn add_booking(&mut self, request: BookingRequest) -> Result<Booking, LedgerError> {
        if !(MIN_QUANTITY..=MAX_QUANTITY).contains(&request.quantity) {
            return Err(LedgerError::InvalidQuantity(request.quantity));
        }

        let booking = Booking {
            id: self.next_id(),
            user_id: request.user_id,
            event_id: request.event_id,
            event_title: request.event_title,
            event_date: request.event_date,
            ticket_type: request.ticket_type,
            quantity: request.quantity,
            total_price: request.total_price,
            booking_date: self.clock.now(),
            status: BookingStatus::Confirmed,
        };

        tracing::info!(
            booking_id = booking.id,
            event_id = booking.event_id,
            quantity = booking.quantity,
            total = booking.total_price,
            "booking confirmed"
        );
        self.bookings.push(booking.clone());
        Ok(booking)
    }

    /// Transition a confirmed booking to cancelled. Unknown or
    /// already-cancelled ids are a successful no-op; cancellation is
    /// idempotent by design.
    pub fn cancel_booking(&mut self, booking_id: i64) {
        match self.bookings.iter_mut().find(|b| b.id == booking_id) {
            Some(booking) if booking.status == BookingStatus::Confirmed => {
                booking.status = BookingStatus::Cancelled;
                tracing::info!(booking_id, "booking cancelled");
            }
            Some(_) => tracing::debug!(booking_id, "booking already cancelled"),
            None => tracing::debug!(booking_id, "cancel requested for unknown booking"),
        }
    }

    /// All bookings for one user, both statuses, in ledger insertion order.
    /// Returns a snapshot; later mutations are not reflected.
    pub fn user_bookings(&self, user_id: i64) -> Vec<Booking> {
        self.bookings.iter().filter(|b| b.user_id == user_id).cloned().collect()
    }

    /// Number of still-confirmed bookings for one user (dashboard counter).
    pub fn confirmed_count(&self, user_id: i64) -> usize {
        self.bookings
            .iter()
            .filter(|b| b.user_id == user_id && b.status == BookingStatus::Confirmed)
            .count()
    }

    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    pub fn len(&self) -> usize {
        self.bookings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bookings.is_empty()
    }

    fn next_id(&mut self) -> i64 {
        let mut id = self.clock.timestamp_millis();
        if id <= self.last_id {
            id = self.last_id + 1;
        }
        self.last_id = id;
        id
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    #[error("quantity {0} outside the allowed range {MIN_QUANTITY}..={MAX_QUANTITY}")]
    InvalidQuantity(u32),
}
