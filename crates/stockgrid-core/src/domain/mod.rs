//! # Domain Models
//!
//! Row shapes served by the stock API, plus the date types they carry.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Instrument`] | Listed instrument (id, stock, industry, sector, currency) |
//! | [`InstrumentField`] | Columns of the instrument table |
//! | [`ValuePoint`] | One dated value of an instrument's series |
//! | [`ValueField`] | Columns of the value-series table |
//! | [`SeriesDate`] | Upstream date, kept verbatim and ordered as text |
//! | [`UtcDateTime`] | UTC timestamp used in envelopes and exports |
//!
//! Rows are immutable once received: the table engine only ever reads them through
//! [`crate::table::Row`].

mod date;
mod models;
mod timestamp;

pub use date::SeriesDate;
pub use models::{Instrument, InstrumentField, InstrumentId, ValueField, ValuePoint};
pub use timestamp::UtcDateTime;
