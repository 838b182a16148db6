//! The `CropStore` trait.
//!
//! Implemented by storage backends (e.g. `croplog-store-sqlite`). The web
//! front end and the bulk loader depend on this abstraction, not on any
//! concrete backend.

use std::future::Future;

use crate::record::{CropRecord, NewCropRecord};

/// Abstraction over a crop record store.
///
/// Records are append-only: nothing here updates or deletes a row. Every
/// call is self-contained; an implementation must not leave a connection or
/// transaction open between calls.
pub trait CropStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Insert a single record and return it with its assigned `id`.
  ///
  /// On error no row is written.
  fn insert_record(
    &self,
    record: NewCropRecord,
  ) -> impl Future<Output = Result<CropRecord, Self::Error>> + Send + '_;

  /// Insert `records` as one atomic batch and return how many were written.
  ///
  /// Either every record in the batch is committed or none is.
  fn insert_batch(
    &self,
    records: Vec<NewCropRecord>,
  ) -> impl Future<Output = Result<usize, Self::Error>> + Send + '_;

  /// Every stored record, ordered by ascending `id`.
  fn fetch_all(
    &self,
  ) -> impl Future<Output = Result<Vec<CropRecord>, Self::Error>> + Send + '_;
}
