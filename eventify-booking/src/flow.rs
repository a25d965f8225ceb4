use crate::ledger::{BookingLedger, LedgerError};
use crate::models::{Booking, BookingRequest, TicketType};
use eventify_catalog::{DraftError, EventCatalog, EventDraft};
use eventify_session::SessionStore;

/// Failures surfaced to the UI layer by the booking orchestration. All are
/// recoverable; none leave partial state behind.
#[derive(Debug, thiserror::Error)]
pub enum BookingError {
    /// Booking attempted with no active identity; UI redirects to login.
    #[error("authentication required")]
    AuthenticationRequired,

    #[error("event not found: {0}")]
    EventNotFound(u32),

    #[error(transparent)]
    Ledger(#[from] LedgerError),

    #[error(transparent)]
    Validation(#[from] DraftError),
}

/// Session-gated booking orchestration.
///
/// Resolves the event and the unit price for the selected ticket tier,
/// computes the total, and appends to the ledger. The quantity is clamped to
/// the allowed range by the UI before it gets here; the ledger still
/// enforces the bounds as a hard contract.
///
/// With no active identity this fails deterministically with
/// `AuthenticationRequired` and performs no ledger mutation.
pub fn submit_booking(
    session: &SessionStore,
    catalog: &EventCatalog,
    ledger: &mut BookingLedger,
    event_id: u32,
    ticket_type: TicketType,
    quantity: u32,
) -> Result<Booking, BookingError> {
    let identity = session.current_identity().ok_or(BookingError::AuthenticationRequired)?;
    let event = catalog.get(event_id).ok_or(BookingError::EventNotFound(event_id))?;

    let unit_price = event.unit_price(ticket_type.is_vip());
    let total_price = unit_price * f64::from(quantity);

    let booking = ledger.add_booking(BookingRequest {
        user_id: identity.id,
        event_id: event.id,
        event_title: event.title.clone(),
        event_date: event.date,
        ticket_type,
        quantity,
        total_price,
    })?;
    Ok(booking)
}

/// Session-gated create-event validation. The catalog is immutable after
/// load, so a successful submission hands the validated draft back to the
/// caller instead of inserting it.
pub fn submit_event_draft(
    session: &SessionStore,
    draft: EventDraft,
) -> Result<EventDraft, BookingError> {
    if session.current_identity().is_none() {
        return Err(BookingError::AuthenticationRequired);
    }
    draft.validate()?;
    Ok(draft)
}
