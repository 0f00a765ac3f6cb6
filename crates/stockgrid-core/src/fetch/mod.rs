//! Fetch state machine and application store.
//!
//! Each remote collection lives in a [`FetchSlot`] moving through
//! `Idle -> Loading -> Success | Failure`. [`AppState::reduce`] is the only place
//! state changes; it hands back [`Effect`]s that a [`Session`] (or any caller)
//! performs against a [`crate::StockApi`] before dispatching the completion.
//!
//! Every started request carries a [`FetchTicket`]. A completion whose ticket has
//! been superseded, for example by selecting another instrument before the first
//! series arrived, is discarded, so the latest request always wins.

mod session;
mod state;
mod store;

pub use session::{perform, Session};
pub use state::{FetchAction, FetchSlot, FetchState, FetchTicket};
pub use store::{Action, AppState, Effect, InstrumentSlot, ValueSlot};
