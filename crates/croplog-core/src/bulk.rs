//! Chunked bulk insert of synthetic records.
//!
//! A bulk insert of `count` records runs as a sequence of chunks of at most
//! [`CHUNK_SIZE`] records. Each chunk is generated, written with
//! [`CropStore::insert_batch`] and committed before the next one starts. A
//! failed chunk stops the run; chunks committed before it stay committed.

use rand::Rng;
use thiserror::Error;

use crate::{generate::Generator, store::CropStore};

/// Most records written by a single batch statement.
pub const CHUNK_SIZE: usize = 10_000;

/// Cumulative progress, reported after each committed chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BulkProgress {
  pub inserted: usize,
  pub total:    usize,
}

/// Outcome of a completed bulk insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BulkReport {
  pub inserted: usize,
  pub chunks:   usize,
}

/// A chunk failed. `committed` rows from earlier chunks remain stored.
#[derive(Debug, Error)]
#[error("bulk insert stopped after {committed} of {requested} records: {source}")]
pub struct BulkError<E: std::error::Error + 'static> {
  pub committed: usize,
  pub requested: usize,
  #[source]
  pub source:    E,
}

/// Sizes of the chunks a bulk insert of `total` records is split into.
pub fn chunk_sizes(total: usize) -> impl Iterator<Item = usize> {
  (0..total)
    .step_by(CHUNK_SIZE)
    .map(move |start| CHUNK_SIZE.min(total - start))
}

/// Generate and store `count` synthetic records, chunk by chunk.
///
/// `on_progress` is called once per committed chunk with the running total.
pub async fn insert_bulk<S, R, F>(
  store:           &S,
  generator:       &Generator,
  rng:             &mut R,
  count:           usize,
  mut on_progress: F,
) -> Result<BulkReport, BulkError<S::Error>>
where
  S: CropStore,
  R: Rng + ?Sized,
  F: FnMut(BulkProgress),
{
  let mut report = BulkReport { inserted: 0, chunks: 0 };

  for size in chunk_sizes(count) {
    let batch = generator.generate_batch(rng, size);
    let written = store
      .insert_batch(batch)
      .await
      .map_err(|source| BulkError {
        committed: report.inserted,
        requested: count,
        source,
      })?;

    report.inserted += written;
    report.chunks += 1;
    on_progress(BulkProgress { inserted: report.inserted, total: count });
  }

  Ok(report)
}
