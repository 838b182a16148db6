//! SQL schema for the croplog SQLite store.
//!
//! Applied when a store is opened. The table layout is a fixed contract;
//! `PRAGMA user_version` marks the layout revision.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

-- Rows are append-only: no UPDATE or DELETE is ever issued.
-- AUTOINCREMENT keeps ids strictly increasing in insertion order.
CREATE TABLE IF NOT EXISTS crops (
    id                    INTEGER PRIMARY KEY AUTOINCREMENT,
    crop_name             TEXT    NOT NULL,
    planting_date         TEXT    NOT NULL,   -- YYYY-MM-DD
    harvest_date          TEXT    NOT NULL,   -- YYYY-MM-DD
    growth_stage          TEXT    NOT NULL,
    pest_control_measures TEXT    NOT NULL,
    yield_prediction      INTEGER NOT NULL CHECK (yield_prediction >= 0)
);

PRAGMA user_version = 1;
";

pub const INSERT_CROP: &str = "
INSERT INTO crops (
    crop_name, planting_date, harvest_date,
    growth_stage, pest_control_measures, yield_prediction
) VALUES (?1, ?2, ?3, ?4, ?5, ?6)";

pub const SELECT_ALL_CROPS: &str = "
SELECT id, crop_name, planting_date, harvest_date,
       growth_stage, pest_control_measures, yield_prediction
FROM crops
ORDER BY id ASC";
