//! # Stockgrid Core
//!
//! Table-data management for browsing listed instruments and their value series.
//!
//! ## Overview
//!
//! - **Domain models** for instruments and value points, with a closed column set per
//!   row shape
//! - **Table engine**: comparator, stable sort, multi-field search, pagination window
//!   and single-row selection
//! - **Fetch state machine** driving both remote collections through
//!   `Idle -> Loading -> Success | Failure`
//! - **Application store** with an explicit `(state, action) -> effects` reducer
//! - **Stock API client** over a pluggable HTTP transport
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`api`] | HTTP transport and the `StockApi` contract |
//! | [`config`] | Environment/flag configuration |
//! | [`domain`] | Instrument and value-series models |
//! | [`envelope`] | Machine-readable output envelope |
//! | [`error`] | Core error types |
//! | [`export`] | JSON export of a value series |
//! | [`fetch`] | Fetch slots, store reducer and session runner |
//! | [`table`] | Search, sort, pagination and selection |
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐  Action   ┌──────────────┐  Effect   ┌──────────────┐
//! │ CLI / caller │──────────▶│   AppState   │──────────▶│   StockApi   │
//! └──────────────┘           │  (reducer)   │◀──────────│ (HTTP client)│
//!        ▲                   └──────┬───────┘ completion└──────────────┘
//!        │                          │
//!        │   TableView              ▼
//!        └──────────────── search ▶ stable sort ▶ paginate
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use stockgrid_core::{Action, Config, ConfigOverrides, HttpStockApi, Session};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_env(ConfigOverrides::default())?;
//!     let mut session = Session::new(Arc::new(HttpStockApi::new(&config)), config.page_size);
//!
//!     session.mount().await;
//!     session.dispatch(Action::Search(String::from("fin"))).await;
//!
//!     for row in session.state().instrument_view().rows {
//!         println!("{} {}", row.id, row.stock);
//!     }
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod domain;
pub mod envelope;
pub mod error;
pub mod export;
pub mod fetch;
pub mod table;

pub use api::{
    FetchFuture, HttpClient, HttpError, HttpRequest, HttpResponse, HttpStockApi,
    ReqwestHttpClient, StockApi,
};
pub use config::{Config, ConfigOverrides};
pub use domain::{
    Instrument, InstrumentField, InstrumentId, SeriesDate, UtcDateTime, ValueField, ValuePoint,
};
pub use envelope::{Envelope, EnvelopeError, EnvelopeMeta};
pub use error::{CoreError, FetchError, ValidationError, GENERIC_FAILURE_NOTICE};
pub use export::{ExportedPoint, SeriesExport};
pub use fetch::{
    perform, Action, AppState, Effect, FetchAction, FetchSlot, FetchState, FetchTicket, Session,
};
pub use table::{
    ColumnHeader, PageSize, PageWindow, SelectionChange, SelectionState, SortDirection,
    SortState, TableField, TableState, TableView,
};
