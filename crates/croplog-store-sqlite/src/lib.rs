//! SQLite backend for the croplog crop store.
//!
//! Wraps [`tokio_rusqlite`] so database work runs on a background thread
//! without blocking the async runtime. Every operation opens its own
//! connection and closes it before returning.

mod encode;
mod schema;
mod store;

pub mod error;

pub use error::{Error, Result};
pub use store::SqliteStore;
