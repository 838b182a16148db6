//! Web front end for croplog.
//!
//! Exposes an axum [`Router`] serving the "Insert Data" and "View Database"
//! views as server-rendered HTML, backed by any [`CropStore`].

pub mod config;
pub mod error;
pub mod handlers;
pub mod pages;

pub use config::ServerConfig;
pub use error::WebError;

use std::sync::Arc;

use axum::{
  Router,
  routing::{get, post},
};
use croplog_core::{crop::Catalog, store::CropStore};
use tower_http::trace::TraceLayer;

// ─── Application state ────────────────────────────────────────────────────────

/// Shared state threaded through all handlers.
#[derive(Clone)]
pub struct AppState<S: CropStore> {
  pub store:   Arc<S>,
  pub catalog: Catalog,
}

impl<S: CropStore> AppState<S> {
  pub fn new(store: S, catalog: Catalog) -> Self {
    Self { store: Arc::new(store), catalog }
  }
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build the application router for `state`.
pub fn router<S>(state: AppState<S>) -> Router
where
  S: CropStore + Clone + 'static,
{
  Router::new()
    .route("/", get(handlers::insert_view::<S>))
    .route(
      "/records",
      get(handlers::records_view::<S>).post(handlers::insert_record::<S>),
    )
    .route("/bulk", post(handlers::insert_bulk::<S>))
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}

#[cfg(test)]
mod tests {
  use super::*;

  use axum::{
    body::Body,
    http::{Request, StatusCode, header},
  };
  use chrono::NaiveDate;
  use croplog_core::{generate::Generator, record::CropRecord};
  use croplog_store_sqlite::SqliteStore;
  use rand::{SeedableRng, rngs::StdRng};
  use tower::ServiceExt as _;

  const WHEAT_FORM: &str = "crop_name=Wheat&planting_date=2024-01-01&harvest_date=2024-04-01\
                            &growth_stage=Seedling&pest_control_measures=Crop+rotation\
                            &yield_prediction=1200";

  async fn make_state() -> AppState<SqliteStore> {
    let store = SqliteStore::open_in_memory().await.unwrap();
    AppState::new(store, Catalog::standard())
  }

  async fn oneshot_raw(
    state:  AppState<SqliteStore>,
    method: &str,
    uri:    &str,
    body:   &str,
  ) -> (StatusCode, String) {
    let req = Request::builder()
      .method(method)
      .uri(uri)
      .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
      .body(Body::from(body.to_string()))
      .unwrap();
    let resp = router(state).oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
  }

  async fn rows(state: &AppState<SqliteStore>) -> Vec<CropRecord> {
    state.store.fetch_all().await.unwrap()
  }

  // ── Insert Data ──────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn insert_view_renders_both_forms() {
    let (status, html) = oneshot_raw(make_state().await, "GET", "/", "").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains(r#"action="/records""#));
    assert!(html.contains(r#"action="/bulk""#));
    assert!(html.contains(r#"name="yield_prediction""#));
  }

  #[tokio::test]
  async fn manual_insert_stores_record() {
    let state = make_state().await;

    let (status, html) = oneshot_raw(state.clone(), "POST", "/records", WHEAT_FORM).await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Crop record inserted successfully!"));

    let stored = rows(&state).await;
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].id, 1);
    assert_eq!(stored[0].planting_date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
    assert_eq!(stored[0].pest_control_measures.label(), "Crop rotation");
    assert_eq!(stored[0].yield_prediction, 1200);
  }

  #[tokio::test]
  async fn malformed_record_is_reported_not_stored() {
    let state = make_state().await;

    for body in [
      WHEAT_FORM.replace("yield_prediction=1200", "yield_prediction=-5"),
      WHEAT_FORM.replace("crop_name=Wheat", "crop_name=Quinoa"),
      WHEAT_FORM.replace("2024-04-01", "April+1st"),
    ] {
      let (status, html) = oneshot_raw(state.clone(), "POST", "/records", &body).await;
      assert_eq!(status, StatusCode::OK);
      assert!(html.contains("Invalid crop record"), "{body}");
    }
    assert!(rows(&state).await.is_empty());
  }

  #[tokio::test]
  async fn bulk_insert_reports_progress_and_total() {
    let state = make_state().await;

    let (status, html) = oneshot_raw(state.clone(), "POST", "/bulk", "count=1000").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("1000 records inserted..."));
    assert!(html.contains("1000 records inserted successfully!"));
    assert_eq!(rows(&state).await.len(), 1_000);
  }

  #[tokio::test]
  async fn bulk_size_outside_options_is_rejected() {
    let state = make_state().await;

    let (_, html) = oneshot_raw(state.clone(), "POST", "/bulk", "count=25000").await;
    assert!(html.contains("25000 is not an available bulk insert size"));

    let (_, html) = oneshot_raw(state.clone(), "POST", "/bulk", "count=lots").await;
    assert!(html.contains("Invalid bulk insert request"));

    assert!(rows(&state).await.is_empty());
  }

  // ── View Database ────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn empty_database_shows_warning() {
    let (status, html) = oneshot_raw(make_state().await, "GET", "/records", "").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("No records found in database."));
    assert!(html.contains("Refresh Data"));
  }

  #[tokio::test]
  async fn view_shows_first_ten_records_only() {
    let state = make_state().await;
    let generator = Generator::new(state.catalog, NaiveDate::from_ymd_opt(2026, 10, 14).unwrap());
    let batch = generator.generate_batch(&mut StdRng::seed_from_u64(9), 12);
    state.store.insert_batch(batch).await.unwrap();

    let (_, html) = oneshot_raw(state.clone(), "GET", "/records", "").await;
    // One header row plus ten body rows.
    assert_eq!(html.matches("<tr>").count(), 11);
    assert!(html.contains("Showing the first 10 of 12 records."));
    assert!(!html.contains("No records found"));
  }

  #[tokio::test]
  async fn inserted_record_appears_in_view() {
    let state = make_state().await;
    oneshot_raw(state.clone(), "POST", "/records", WHEAT_FORM).await;

    let (_, html) = oneshot_raw(state, "GET", "/records", "").await;
    assert!(html.contains("<td>Wheat</td><td>2024-01-01</td><td>2024-04-01</td>"));
    assert!(html.contains("<td>Seedling</td><td>Crop rotation</td><td>1200</td>"));
  }

  #[tokio::test]
  async fn storage_errors_are_shown_on_the_page() {
    let dir = tempfile::tempdir().unwrap();
    let store = SqliteStore::open(dir.path().join("crops.db")).await.unwrap();
    let state = AppState::new(store, Catalog::standard());
    drop(dir);

    let (status, html) = oneshot_raw(state.clone(), "GET", "/records", "").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Error fetching records: storage unavailable"));
    assert!(!html.contains("No records found"));

    let (_, html) = oneshot_raw(state.clone(), "POST", "/records", WHEAT_FORM).await;
    assert!(html.contains("Error inserting record: storage unavailable"));

    let (_, html) = oneshot_raw(state, "POST", "/bulk", "count=1000").await;
    assert!(html.contains("Error during bulk insert: bulk insert stopped after 0 of 1000 records"));
    assert!(!html.contains("records inserted..."));
  }
}
