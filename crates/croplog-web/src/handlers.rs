//! Request handlers for the two views.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/` | "Insert Data" view |
//! | `POST` | `/records` | Form body: a [`NewCropRecord`]; re-renders "Insert Data" |
//! | `POST` | `/bulk` | Form body: `count=<n>`; re-renders "Insert Data" with progress |
//! | `GET`  | `/records` | "View Database" view, first [`DISPLAY_WINDOW`] rows |
//!
//! Store errors are shown on the page; the response is still `200 OK`.

use axum::{
  Form,
  extract::{State, rejection::FormRejection},
  response::Html,
};
use chrono::{Local, NaiveDate};
use croplog_core::{
  bulk,
  display::{DISPLAY_WINDOW, display_window},
  generate::Generator,
  record::NewCropRecord,
  store::CropStore,
};
use rand::{SeedableRng, rngs::StdRng};
use serde::Deserialize;

use crate::{
  AppState,
  error::WebError,
  pages::{self, Notice},
};

type PageResult = Result<Html<String>, WebError>;

fn today() -> NaiveDate { Local::now().date_naive() }

fn insert_view_with<S: CropStore>(state: &AppState<S>, notices: &[Notice]) -> PageResult {
  pages::insert_page(&state.catalog, today(), notices).map(Html)
}

// ─── Insert Data ──────────────────────────────────────────────────────────────

/// `GET /`
pub async fn insert_view<S>(State(state): State<AppState<S>>) -> PageResult
where
  S: CropStore,
{
  insert_view_with(&state, &[])
}

/// `POST /records`
pub async fn insert_record<S>(
  State(state): State<AppState<S>>,
  form: Result<Form<NewCropRecord>, FormRejection>,
) -> PageResult
where
  S: CropStore,
{
  let Form(record) = match form {
    Ok(form) => form,
    Err(rejection) => {
      let notice = Notice::Error(format!("Invalid crop record: {}", rejection.body_text()));
      return insert_view_with(&state, &[notice]);
    }
  };

  let notice = match state.store.insert_record(record).await {
    Ok(stored) => {
      tracing::info!(id = stored.id, crop = %stored.crop_name, "crop record inserted");
      Notice::Success("Crop record inserted successfully!".into())
    }
    Err(e) => {
      tracing::warn!(error = %e, "crop record insert failed");
      Notice::Error(format!("Error inserting record: {e}"))
    }
  };
  insert_view_with(&state, &[notice])
}

#[derive(Debug, Deserialize)]
pub struct BulkForm {
  pub count: usize,
}

/// `POST /bulk`: blocks until every chunk is committed or one fails.
pub async fn insert_bulk<S>(
  State(state): State<AppState<S>>,
  form: Result<Form<BulkForm>, FormRejection>,
) -> PageResult
where
  S: CropStore,
{
  let count = match form {
    Ok(Form(BulkForm { count })) if state.catalog.allows_bulk(count) => count,
    Ok(Form(BulkForm { count })) => {
      let notice = Notice::Error(format!("{count} is not an available bulk insert size"));
      return insert_view_with(&state, &[notice]);
    }
    Err(rejection) => {
      let notice = Notice::Error(format!("Invalid bulk insert request: {}", rejection.body_text()));
      return insert_view_with(&state, &[notice]);
    }
  };

  let generator = Generator::new(state.catalog, today());
  let mut rng = StdRng::from_entropy();
  let mut notices = Vec::new();

  let result = bulk::insert_bulk(&*state.store, &generator, &mut rng, count, |p| {
    tracing::info!(inserted = p.inserted, total = p.total, "bulk insert progress");
    notices.push(Notice::Info(format!("{} records inserted...", p.inserted)));
  })
  .await;

  notices.push(match result {
    Ok(report) => Notice::Success(format!("{} records inserted successfully!", report.inserted)),
    Err(e) => {
      tracing::warn!(error = %e, committed = e.committed, "bulk insert failed");
      Notice::Error(format!("Error during bulk insert: {e}"))
    }
  });
  insert_view_with(&state, &notices)
}

// ─── View Database ────────────────────────────────────────────────────────────

/// `GET /records`
pub async fn records_view<S>(State(state): State<AppState<S>>) -> PageResult
where
  S: CropStore,
{
  match state.store.fetch_all().await {
    Ok(records) => {
      let shown = display_window(&records);
      tracing::debug!(total = records.len(), shown = shown.len(), window = DISPLAY_WINDOW, "records fetched");
      pages::records_page(shown, records.len(), &[]).map(Html)
    }
    Err(e) => {
      tracing::warn!(error = %e, "fetching crop records failed");
      let notice = Notice::Error(format!("Error fetching records: {e}"));
      pages::records_page(&[], 0, &[notice]).map(Html)
    }
  }
}
