//! Line-oriented console front end. Stands in for the web UI: it composes
//! the query state, clamps ticket quantities, and renders the core's return
//! values and errors. No business rules live here.

use eventify_booking::{
    submit_booking, BookingError, BookingLedger, BookingStatus, TicketType, MAX_QUANTITY,
    MIN_QUANTITY,
};
use eventify_catalog::{
    query, CatalogStats, CategoryFilter, Event, EventCatalog, EventQuery, SortOrder,
};
use eventify_session::SessionStore;
use eventify_store::Config;
use std::io::{self, BufRead, Write};

pub fn run(
    config: &Config,
    catalog: &EventCatalog,
    mut session: SessionStore,
    mut ledger: BookingLedger,
) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut view = EventQuery::default();

    println!("eventify console — type 'help' for commands");
    print_prompt(&session)?;

    for line in stdin.lock().lines() {
        let line = line?;
        let mut parts = line.split_whitespace();
        let command = parts.next().unwrap_or("");
        let rest: Vec<&str> = parts.collect();

        match command {
            "" => {}
            "help" => print_help(),
            "events" => render_events(&query(catalog, &view)),
            "featured" => {
                for event in catalog.featured(config.catalog.featured_limit) {
                    render_event(event);
                }
            }
            "search" => {
                view.search = rest.join(" ");
                render_events(&query(catalog, &view));
            }
            "category" => match CategoryFilter::parse(&rest.join(" ")) {
                Some(filter) => {
                    view.category = filter;
                    render_events(&query(catalog, &view));
                }
                None => println!(
                    "unknown category; one of: {}",
                    EventCatalog::category_names().join(", ")
                ),
            },
            "sort" => {
                view.sort = SortOrder::parse(rest.first().copied().unwrap_or(""));
                render_events(&query(catalog, &view));
            }
            "stats" => render_stats(&CatalogStats::collect(catalog)),
            "login" => match rest.as_slice() {
                [email, credential] => {
                    let identity = session.login(email, (*credential).into());
                    println!("logged in as {} ({:?})", identity.email, identity.role);
                }
                _ => println!("usage: login <email> <password>"),
            },
            "signup" => match rest.as_slice() {
                [name, email, credential] => {
                    let identity = session.signup(name, email, (*credential).into());
                    println!("account created for {} (id {})", identity.email, identity.id);
                }
                _ => println!("usage: signup <name> <email> <password>"),
            },
            "logout" => {
                session.logout();
                println!("logged out");
            }
            "whoami" => match session.current_identity() {
                Some(identity) => println!("{} <{}> ({:?})", identity.name, identity.email, identity.role),
                None => println!("not logged in"),
            },
            "book" => handle_book(&rest, catalog, &session, &mut ledger),
            "cancel" => match rest.first().and_then(|s| s.parse::<i64>().ok()) {
                Some(booking_id) => {
                    ledger.cancel_booking(booking_id);
                    println!("cancelled (no-op if the id was unknown or already cancelled)");
                }
                None => println!("usage: cancel <booking-id>"),
            },
            "dashboard" => render_dashboard(&session, &ledger),
            "quit" | "exit" => break,
            other => println!("unknown command '{}'; type 'help'", other),
        }

        print_prompt(&session)?;
    }

    Ok(())
}

fn handle_book(
    args: &[&str],
    catalog: &EventCatalog,
    session: &SessionStore,
    ledger: &mut BookingLedger,
) {
    let (event_id, ticket_type, quantity) = match args {
        [id, tier, qty] => {
            let Some(event_id) = id.parse::<u32>().ok() else {
                println!("event id must be a number");
                return;
            };
            let Some(ticket_type) = TicketType::parse(tier) else {
                println!("ticket type must be 'standard' or 'vip'");
                return;
            };
            let Some(quantity) = qty.parse::<u32>().ok() else {
                println!("quantity must be a number");
                return;
            };
            (event_id, ticket_type, quantity)
        }
        _ => {
            println!("usage: book <event-id> <standard|vip> <quantity>");
            return;
        }
    };

    // UI responsibility: clamp the requested quantity into the allowed range.
    let quantity = quantity.clamp(MIN_QUANTITY, MAX_QUANTITY);

    match submit_booking(session, catalog, ledger, event_id, ticket_type, quantity) {
        Ok(booking) => println!(
            "booked! {} x {:?} for '{}' — total ${:.2} (booking id {})",
            booking.quantity, booking.ticket_type, booking.event_title, booking.total_price, booking.id
        ),
        Err(BookingError::AuthenticationRequired) => {
            println!("please login to book tickets");
        }
        Err(e) => println!("booking failed: {}", e),
    }
}

fn render_events(events: &[Event]) {
    if events.is_empty() {
        println!("no events found — try adjusting your search or filters");
        return;
    }
    for event in events {
        render_event(event);
    }
    println!("showing {} events", events.len());
}

fn render_event(event: &Event) {
    println!(
        "[{}] {} — {} — {} {} — {}, {} — ${:.2} (vip ${:.2}) — {}/{} attending{}",
        event.id,
        event.title,
        event.category,
        event.date,
        event.time,
        event.location,
        event.city,
        event.price,
        event.price_vip,
        event.attendees,
        event.capacity,
        if event.featured { " — featured" } else { "" },
    );
}

fn render_stats(stats: &CatalogStats) {
    println!(
        "{} events, {} attendees, projected revenue ${:.2}",
        stats.total_events, stats.total_attendees, stats.projected_revenue
    );
    for share in &stats.by_category {
        println!("  {:<12} {:>3} events ({:.0}%)", share.category.name(), share.count, share.share);
    }
}

fn render_dashboard(session: &SessionStore, ledger: &BookingLedger) {
    let Some(identity) = session.current_identity() else {
        println!("please login to see your dashboard");
        return;
    };
    println!("Welcome back, {}!", identity.name);

    let bookings = ledger.user_bookings(identity.id);
    println!(
        "{} bookings, {} active",
        bookings.len(),
        ledger.confirmed_count(identity.id)
    );
    for booking in &bookings {
        println!(
            "  #{} {} — {} — {} x {:?} — ${:.2} — {}",
            booking.id,
            booking.event_title,
            booking.event_date,
            booking.quantity,
            booking.ticket_type,
            booking.total_price,
            match booking.status {
                BookingStatus::Confirmed => "confirmed",
                BookingStatus::Cancelled => "cancelled",
            },
        );
    }
}

fn print_help() {
    println!("commands:");
    println!("  events                          list events with the current filters");
    println!("  search <text>                   filter by title/description substring");
    println!("  category <name>                 filter by category ('All Events' clears)");
    println!("  sort <date|price|popular>       change sort order");
    println!("  featured                        featured events");
    println!("  stats                           catalog overview");
    println!("  login <email> <password>        sign in (demo auth)");
    println!("  signup <name> <email> <pw>      create an account");
    println!("  logout / whoami                 session");
    println!("  book <event-id> <tier> <qty>    book tickets (tier: standard|vip)");
    println!("  cancel <booking-id>             cancel a booking");
    println!("  dashboard                       your bookings");
    println!("  quit                            exit");
}

fn print_prompt(session: &SessionStore) -> io::Result<()> {
    match session.current_identity() {
        Some(identity) => print!("{}> ", identity.email),
        None => print!("> "),
    }
    io::stdout().flush()
}
