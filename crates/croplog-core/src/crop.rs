//! The closed enumerations a crop record draws from, and the [`Catalog`]
//! that hands them to the generator and the form.
//!
//! Every variant has a canonical label. The label is what gets stored in the
//! `crops` table, submitted by the HTML form, and shown in the table view.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{Display, IntoStaticStr, VariantArray};

use crate::{Error, Result};

// ─── Crop ────────────────────────────────────────────────────────────────────

/// Crop species.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
  Serialize,
  Deserialize,
  Display,
  IntoStaticStr,
  VariantArray,
)]
pub enum CropName {
  Wheat,
  Rice,
  Corn,
  Soybean,
  Barley,
  Sugarcane,
  Cotton,
  Potato,
  Tomato,
  Lettuce,
}

impl CropName {
  pub fn label(self) -> &'static str { self.into() }
}

impl FromStr for CropName {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    find_label(s).ok_or_else(|| Error::UnknownCrop(s.to_owned()))
  }
}

// ─── Growth stage ────────────────────────────────────────────────────────────

/// Phase of the growth cycle, in the order a crop passes through them.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  PartialOrd,
  Ord,
  Hash,
  Serialize,
  Deserialize,
  Display,
  IntoStaticStr,
  VariantArray,
)]
pub enum GrowthStage {
  Seedling,
  Vegetative,
  Flowering,
  Fruiting,
  Maturity,
}

impl GrowthStage {
  pub fn label(self) -> &'static str { self.into() }
}

impl FromStr for GrowthStage {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    find_label(s).ok_or_else(|| Error::UnknownGrowthStage(s.to_owned()))
  }
}

// ─── Pest control ────────────────────────────────────────────────────────────

/// Pest control measure applied to the field.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
  Serialize,
  Deserialize,
  Display,
  IntoStaticStr,
  VariantArray,
)]
pub enum PestControl {
  #[serde(rename = "Use of organic pesticides")]
  #[strum(serialize = "Use of organic pesticides")]
  OrganicPesticides,
  #[serde(rename = "Crop rotation")]
  #[strum(serialize = "Crop rotation")]
  CropRotation,
  #[serde(rename = "Neem oil application")]
  #[strum(serialize = "Neem oil application")]
  NeemOil,
  #[serde(rename = "Biological pest control")]
  #[strum(serialize = "Biological pest control")]
  Biological,
  #[serde(rename = "Chemical pesticides")]
  #[strum(serialize = "Chemical pesticides")]
  ChemicalPesticides,
  #[serde(rename = "Regular field monitoring")]
  #[strum(serialize = "Regular field monitoring")]
  FieldMonitoring,
}

impl PestControl {
  pub fn label(self) -> &'static str { self.into() }
}

impl FromStr for PestControl {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    find_label(s).ok_or_else(|| Error::UnknownPestControl(s.to_owned()))
  }
}

fn find_label<T>(s: &str) -> Option<T>
where
  T: VariantArray + Copy + Into<&'static str>,
{
  T::VARIANTS.iter().copied().find(|v| {
    let label: &'static str = (*v).into();
    label == s
  })
}

// ─── Catalog ─────────────────────────────────────────────────────────────────

/// Bulk insert sizes offered by the "Insert Data" view.
pub const BULK_OPTIONS: &[usize] = &[1_000, 10_000, 100_000];

/// The fixed option lists the application works from.
///
/// Built once at startup and passed by value to whoever needs it; nothing
/// mutates it afterwards. Every list is non-empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Catalog {
  crops:         &'static [CropName],
  growth_stages: &'static [GrowthStage],
  pest_controls: &'static [PestControl],
  bulk_options:  &'static [usize],
}

impl Catalog {
  /// Every variant of every enumeration, plus [`BULK_OPTIONS`].
  pub const fn standard() -> Self {
    Self {
      crops:         CropName::VARIANTS,
      growth_stages: GrowthStage::VARIANTS,
      pest_controls: PestControl::VARIANTS,
      bulk_options:  BULK_OPTIONS,
    }
  }

  pub fn crops(&self) -> &'static [CropName] { self.crops }

  pub fn growth_stages(&self) -> &'static [GrowthStage] { self.growth_stages }

  pub fn pest_controls(&self) -> &'static [PestControl] { self.pest_controls }

  pub fn bulk_options(&self) -> &'static [usize] { self.bulk_options }

  /// Whether `count` is one of the offered bulk insert sizes.
  pub fn allows_bulk(&self, count: usize) -> bool {
    self.bulk_options.contains(&count)
  }
}

impl Default for Catalog {
  fn default() -> Self { Self::standard() }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn labels_parse_back() {
    for crop in CropName::VARIANTS {
      assert_eq!(crop.label().parse::<CropName>().unwrap(), *crop);
    }
    for stage in GrowthStage::VARIANTS {
      assert_eq!(stage.label().parse::<GrowthStage>().unwrap(), *stage);
    }
    for measure in PestControl::VARIANTS {
      assert_eq!(measure.label().parse::<PestControl>().unwrap(), *measure);
    }
  }

  #[test]
  fn pest_control_uses_free_text_label() {
    assert_eq!(PestControl::CropRotation.label(), "Crop rotation");
    assert_eq!(PestControl::NeemOil.to_string(), "Neem oil application");
  }

  #[test]
  fn unknown_label_is_rejected() {
    let err = "Quinoa".parse::<CropName>().unwrap_err();
    assert!(matches!(err, Error::UnknownCrop(ref s) if s == "Quinoa"));
    assert!("seedling".parse::<GrowthStage>().is_err());
    assert!("crop rotation".parse::<PestControl>().is_err());
  }

  #[test]
  fn growth_stages_are_ordered() {
    assert!(GrowthStage::Seedling < GrowthStage::Vegetative);
    assert!(GrowthStage::Fruiting < GrowthStage::Maturity);
    assert_eq!(GrowthStage::VARIANTS.len(), 5);
  }

  #[test]
  fn standard_catalog_covers_every_variant() {
    let catalog = Catalog::standard();
    assert_eq!(catalog.crops().len(), 10);
    assert_eq!(catalog.growth_stages().len(), 5);
    assert_eq!(catalog.pest_controls().len(), 6);
    assert!(catalog.allows_bulk(10_000));
    assert!(!catalog.allows_bulk(25_000));
  }
}
