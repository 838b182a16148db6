//! Error types for `croplog-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("unknown crop name: {0:?}")]
  UnknownCrop(String),

  #[error("unknown growth stage: {0:?}")]
  UnknownGrowthStage(String),

  #[error("unknown pest control measure: {0:?}")]
  UnknownPestControl(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
