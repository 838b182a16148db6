//! Table view shape: which records are shown and how each row reads.

use crate::record::CropRecord;

/// Number of records the table view shows.
pub const DISPLAY_WINDOW: usize = 10;

/// Column headers of the table view. The `id` column is not displayed.
pub const COLUMNS: [&str; 6] = [
  "Crop Name",
  "Planting Date",
  "Harvest Date",
  "Growth Stage",
  "Pest Control",
  "Yield Prediction",
];

/// The first `min(DISPLAY_WINDOW, records.len())` records.
///
/// `records` is expected in ascending `id` order, as returned by
/// [`CropStore::fetch_all`](crate::store::CropStore::fetch_all), so this is
/// the earliest-inserted window.
pub fn display_window(records: &[CropRecord]) -> &[CropRecord] {
  &records[..records.len().min(DISPLAY_WINDOW)]
}

/// Cell text for `record`, one entry per [`COLUMNS`] header.
pub fn display_row(record: &CropRecord) -> [String; 6] {
  [
    record.crop_name.to_string(),
    record.planting_date.format("%Y-%m-%d").to_string(),
    record.harvest_date.format("%Y-%m-%d").to_string(),
    record.growth_stage.to_string(),
    record.pest_control_measures.to_string(),
    record.yield_prediction.to_string(),
  ]
}
