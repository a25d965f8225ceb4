pub mod app_config;
pub mod kv;

pub use app_config::Config;
pub use kv::{FileStore, MemoryStore};
