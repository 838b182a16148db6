//! Encoding and decoding between domain types and the plain-text
//! representations stored in SQLite columns.
//!
//! Dates are stored as `YYYY-MM-DD`. Enumerations are stored as their
//! canonical labels. Yield is stored as an INTEGER.

use chrono::NaiveDate;
use croplog_core::record::{CropRecord, NewCropRecord};

use crate::{Error, Result};

const DATE_FORMAT: &str = "%Y-%m-%d";

// ─── NaiveDate ───────────────────────────────────────────────────────────────

pub fn encode_date(d: NaiveDate) -> String { d.format(DATE_FORMAT).to_string() }

pub fn decode_date(s: &str) -> Result<NaiveDate> {
  NaiveDate::parse_from_str(s, DATE_FORMAT)
    .map_err(|e| Error::DateParse(format!("{s:?}: {e}")))
}

// ─── Row types ───────────────────────────────────────────────────────────────

/// Column values for one `INSERT`, owned so they can move onto the
/// connection thread.
pub struct EncodedCrop {
  pub crop_name:             &'static str,
  pub planting_date:         String,
  pub harvest_date:          String,
  pub growth_stage:          &'static str,
  pub pest_control_measures: &'static str,
  pub yield_prediction:      i64,
}

impl EncodedCrop {
  pub fn new(record: &NewCropRecord) -> Self {
    Self {
      crop_name:             record.crop_name.label(),
      planting_date:         encode_date(record.planting_date),
      harvest_date:          encode_date(record.harvest_date),
      growth_stage:          record.growth_stage.label(),
      pest_control_measures: record.pest_control_measures.label(),
      yield_prediction:      i64::from(record.yield_prediction),
    }
  }
}

/// Raw values read directly from a `crops` row.
pub struct RawCropRecord {
  pub id:                    i64,
  pub crop_name:             String,
  pub planting_date:         String,
  pub harvest_date:          String,
  pub growth_stage:          String,
  pub pest_control_measures: String,
  pub yield_prediction:      u32,
}

impl RawCropRecord {
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      id:                    row.get(0)?,
      crop_name:             row.get(1)?,
      planting_date:         row.get(2)?,
      harvest_date:          row.get(3)?,
      growth_stage:          row.get(4)?,
      pest_control_measures: row.get(5)?,
      yield_prediction:      row.get(6)?,
    })
  }

  pub fn into_record(self) -> Result<CropRecord> {
    Ok(CropRecord {
      id:                    self.id,
      crop_name:             self.crop_name.parse()?,
      planting_date:         decode_date(&self.planting_date)?,
      harvest_date:          decode_date(&self.harvest_date)?,
      growth_stage:          self.growth_stage.parse()?,
      pest_control_measures: self.pest_control_measures.parse()?,
      yield_prediction:      self.yield_prediction,
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn dates_use_iso_calendar_format() {
    let d = NaiveDate::from_ymd_opt(2024, 4, 1).unwrap();
    assert_eq!(encode_date(d), "2024-04-01");
    assert_eq!(decode_date("2024-04-01").unwrap(), d);
    assert!(matches!(decode_date("04/01/2024"), Err(Error::DateParse(_))));
  }

  #[test]
  fn unknown_label_in_row_is_a_core_error() {
    let raw = RawCropRecord {
      id:                    1,
      crop_name:             "Quinoa".into(),
      planting_date:         "2024-01-01".into(),
      harvest_date:          "2024-04-01".into(),
      growth_stage:          "Seedling".into(),
      pest_control_measures: "Crop rotation".into(),
      yield_prediction:      1200,
    };
    assert!(matches!(raw.into_record(), Err(Error::Core(_))));
  }
}
