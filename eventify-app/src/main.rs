mod console;

use eventify_booking::BookingLedger;
use eventify_catalog::EventCatalog;
use eventify_session::SessionStore;
use eventify_shared::SystemClock;
use eventify_store::{Config, FileStore};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "eventify=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load().expect("Failed to load config");
    tracing::info!(data_dir = %config.storage.data_dir, "starting eventify");

    let clock = Arc::new(SystemClock);
    let store = Arc::new(FileStore::new(&config.storage.data_dir)?);

    let catalog = EventCatalog::seeded()?;
    let mut session = SessionStore::new(store, clock.clone());
    if let Some(identity) = session.restore() {
        tracing::info!(email = %identity.email, "welcome back");
    }
    let ledger = BookingLedger::new(clock);

    console::run(&config, &catalog, session, ledger)
}
