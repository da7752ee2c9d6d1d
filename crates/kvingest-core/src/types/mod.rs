//! Core data types for the ingestion pipeline.
//!
//! - [`KvPair`] - an encoded key, its value and the row id it was built from
//! - [`RowId`] - a validated, borrowed row identifier

mod pair;
mod row_id;

pub use pair::KvPair;
pub use row_id::{encode_int_row_id, RowId, MAX_ROW_ID_LEN, MIN_ROW_ID, ZERO_ROW_ID};
