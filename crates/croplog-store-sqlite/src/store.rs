//! [`SqliteStore`]: the SQLite implementation of [`CropStore`].

use std::path::{Path, PathBuf};

use croplog_core::{
  record::{CropRecord, NewCropRecord},
  store::CropStore,
};
use uuid::Uuid;

use crate::{
  encode::{EncodedCrop, RawCropRecord},
  schema::{INSERT_CROP, SCHEMA, SELECT_ALL_CROPS},
  Error, Result,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A crop store backed by a single SQLite database.
///
/// The store holds no connection of its own: each operation opens one,
/// does its work and closes it again.
#[derive(Clone)]
pub struct SqliteStore {
  target: PathBuf,
  // Shared-cache in-memory databases vanish once their last connection
  // closes; this idle connection keeps one alive for the store's lifetime.
  anchor: Option<tokio_rusqlite::Connection>,
}

impl SqliteStore {
  /// Open (or create) the database at `path` and apply the schema.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let store = Self { target: path.as_ref().to_path_buf(), anchor: None };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open a private in-memory database for tests.
  pub async fn open_in_memory() -> Result<Self> {
    let target = PathBuf::from(format!(
      "file:croplog-{}?mode=memory&cache=shared",
      Uuid::new_v4().simple()
    ));
    let anchor = tokio_rusqlite::Connection::open(&target)
      .await
      .map_err(Error::Unavailable)?;
    let store = Self { target, anchor: Some(anchor) };
    store.init_schema().await?;
    Ok(store)
  }

  /// Where the store connects to: a file path or an SQLite URI.
  pub fn target(&self) -> &Path { &self.target }

  pub fn is_in_memory(&self) -> bool { self.anchor.is_some() }

  async fn init_schema(&self) -> Result<()> {
    self
      .with_connection(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await
  }

  /// Open a connection, run `f` on it, and close the connection whether or
  /// not `f` succeeded.
  async fn with_connection<F, R>(&self, f: F) -> Result<R>
  where
    F: FnOnce(&mut rusqlite::Connection) -> tokio_rusqlite::Result<R> + Send + 'static,
    R: Send + 'static,
  {
    let conn = tokio_rusqlite::Connection::open(&self.target)
      .await
      .map_err(Error::Unavailable)?;

    let result = conn.call(f).await.map_err(Error::Statement);

    if let Err(e) = conn.close().await {
      tracing::warn!(db = %self.target.display(), error = %e, "failed to close connection");
    }
    result
  }
}

fn execute_insert(
  stmt: &mut rusqlite::Statement<'_>,
  crop: &EncodedCrop,
) -> rusqlite::Result<usize> {
  stmt.execute(rusqlite::params![
    crop.crop_name,
    crop.planting_date,
    crop.harvest_date,
    crop.growth_stage,
    crop.pest_control_measures,
    crop.yield_prediction,
  ])
}

// ─── CropStore impl ──────────────────────────────────────────────────────────

impl CropStore for SqliteStore {
  type Error = Error;

  async fn insert_record(&self, record: NewCropRecord) -> Result<CropRecord> {
    let encoded = EncodedCrop::new(&record);

    let id = self
      .with_connection(move |conn| {
        let mut stmt = conn.prepare(INSERT_CROP)?;
        execute_insert(&mut stmt, &encoded)?;
        Ok(conn.last_insert_rowid())
      })
      .await?;

    tracing::debug!(id, crop = %record.crop_name, "inserted crop record");
    Ok(CropRecord::from_new(id, record))
  }

  async fn insert_batch(&self, records: Vec<NewCropRecord>) -> Result<usize> {
    let encoded: Vec<EncodedCrop> = records.iter().map(EncodedCrop::new).collect();

    let written = self
      .with_connection(move |conn| {
        // Dropping an uncommitted transaction rolls it back.
        let tx = conn.transaction()?;
        {
          let mut stmt = tx.prepare(INSERT_CROP)?;
          for crop in &encoded {
            execute_insert(&mut stmt, crop)?;
          }
        }
        tx.commit()?;
        Ok(encoded.len())
      })
      .await?;

    tracing::debug!(rows = written, "committed crop batch");
    Ok(written)
  }

  async fn fetch_all(&self) -> Result<Vec<CropRecord>> {
    let raws: Vec<RawCropRecord> = self
      .with_connection(|conn| {
        let mut stmt = conn.prepare(SELECT_ALL_CROPS)?;
        let rows = stmt
          .query_map([], RawCropRecord::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawCropRecord::into_record).collect()
  }
}
