//! Synthetic crop records for load-testing the store.
//!
//! Every field is sampled independently and uniformly; no correlation is
//! modelled between crop, growth stage and yield.

use std::ops::RangeInclusive;

use chrono::{Days, Months, NaiveDate};
use rand::Rng;

use crate::{crop::Catalog, record::NewCropRecord};

/// How far back planting dates reach from "today".
pub const PLANTING_LOOKBACK_MONTHS: u32 = 24;

/// Days between planting and harvest.
pub const GROWING_DAYS: RangeInclusive<u64> = 60..=180;

/// Predicted yield in kilograms.
pub const YIELD_RANGE: RangeInclusive<u32> = 500..=5000;

/// Produces random [`NewCropRecord`]s drawn from a [`Catalog`].
#[derive(Debug, Clone, Copy)]
pub struct Generator {
  catalog:  Catalog,
  earliest: NaiveDate,
  today:    NaiveDate,
}

impl Generator {
  /// A generator whose planting dates fall in
  /// `[today - PLANTING_LOOKBACK_MONTHS, today]`.
  pub fn new(catalog: Catalog, today: NaiveDate) -> Self {
    let earliest = today
      .checked_sub_months(Months::new(PLANTING_LOOKBACK_MONTHS))
      .unwrap_or(NaiveDate::MIN);
    Self { catalog, earliest, today }
  }

  pub fn planting_window(&self) -> RangeInclusive<NaiveDate> {
    self.earliest..=self.today
  }

  pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> NewCropRecord {
    let span = (self.today - self.earliest).num_days().max(0) as u64;
    let planting_date = self.earliest + Days::new(rng.gen_range(0..=span));
    let harvest_date = planting_date + Days::new(rng.gen_range(GROWING_DAYS));

    NewCropRecord {
      crop_name: pick(rng, self.catalog.crops()),
      planting_date,
      harvest_date,
      growth_stage: pick(rng, self.catalog.growth_stages()),
      pest_control_measures: pick(rng, self.catalog.pest_controls()),
      yield_prediction: rng.gen_range(YIELD_RANGE),
    }
  }

  /// `count` independent records.
  pub fn generate_batch<R: Rng + ?Sized>(
    &self,
    rng: &mut R,
    count: usize,
  ) -> Vec<NewCropRecord> {
    (0..count).map(|_| self.generate(rng)).collect()
  }
}

// Catalog lists are never empty.
fn pick<T: Copy, R: Rng + ?Sized>(rng: &mut R, options: &[T]) -> T {
  options[rng.gen_range(0..options.len())]
}
