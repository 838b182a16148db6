//! Core types and trait definitions for croplog.
//!
//! This crate is deliberately free of HTTP and database dependencies. The
//! storage backend (`croplog-store-sqlite`) and the web front end
//! (`croplog-web`) both depend on it.

pub mod bulk;
pub mod crop;
pub mod display;
pub mod error;
pub mod generate;
pub mod record;
pub mod store;

pub use error::{Error, Result};
