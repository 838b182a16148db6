//! Crop record: one row of the `crops` table.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::crop::{CropName, GrowthStage, PestControl};

/// A record that has not been stored yet: every column except `id`.
///
/// No ordering is enforced between `planting_date` and `harvest_date`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCropRecord {
  pub crop_name:             CropName,
  pub planting_date:         NaiveDate,
  pub harvest_date:          NaiveDate,
  pub growth_stage:          GrowthStage,
  pub pest_control_measures: PestControl,
  /// Predicted yield in kilograms.
  pub yield_prediction:      u32,
}

/// A stored record. `id` is assigned by the store and increases with
/// insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CropRecord {
  pub id:                    i64,
  pub crop_name:             CropName,
  pub planting_date:         NaiveDate,
  pub harvest_date:          NaiveDate,
  pub growth_stage:          GrowthStage,
  pub pest_control_measures: PestControl,
  pub yield_prediction:      u32,
}

impl CropRecord {
  /// Attach a store-assigned `id` to `record`.
  pub fn from_new(id: i64, record: NewCropRecord) -> Self {
    Self {
      id,
      crop_name: record.crop_name,
      planting_date: record.planting_date,
      harvest_date: record.harvest_date,
      growth_stage: record.growth_stage,
      pest_control_measures: record.pest_control_measures,
      yield_prediction: record.yield_prediction,
    }
  }

  /// The record's fields without its `id`.
  pub fn to_new(&self) -> NewCropRecord {
    NewCropRecord {
      crop_name:             self.crop_name,
      planting_date:         self.planting_date,
      harvest_date:          self.harvest_date,
      growth_stage:          self.growth_stage,
      pest_control_measures: self.pest_control_measures,
      yield_prediction:      self.yield_prediction,
    }
  }
}
