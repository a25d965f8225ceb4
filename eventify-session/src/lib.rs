pub mod identity;
pub mod store;

pub use identity::{Identity, Role};
pub use store::{KvStore, SessionStore, StoreError, ADMIN_EMAIL, SESSION_KEY};
