//! Error type for `croplog-store-sqlite`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// The database could not be opened.
  #[error("storage unavailable: {0}")]
  Unavailable(#[source] tokio_rusqlite::Error),

  /// A statement or commit failed; nothing from it was written.
  #[error("statement failed: {0}")]
  Statement(#[source] tokio_rusqlite::Error),

  #[error("core error: {0}")]
  Core(#[from] croplog_core::Error),

  #[error("date parse error: {0}")]
  DateParse(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
