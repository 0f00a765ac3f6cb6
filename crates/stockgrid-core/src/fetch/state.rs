use std::fmt::Debug;

use tracing::{debug, warn};

/// Lifecycle of one remotely fetched collection.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FetchState<T> {
    #[default]
    Idle,
    Loading,
    Success(Vec<T>),
    Failure(String),
}

impl<T> FetchState<T> {
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Failure(message) => Some(message.as_str()),
            _ => None,
        }
    }

    /// Loaded rows; empty in every state but `Success`, so a failure never leaves
    /// stale rows behind.
    pub fn data(&self) -> &[T] {
        match self {
            Self::Success(data) => data.as_slice(),
            _ => &[],
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Loading => "loading",
            Self::Success(_) => "success",
            Self::Failure(_) => "failure",
        }
    }
}

/// Handle for one issued request. Completions must present the ticket they were
/// started with; tickets from superseded requests are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FetchTicket<K> {
    generation: u64,
    key: K,
}

impl<K> FetchTicket<K> {
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    pub const fn key(&self) -> &K {
        &self.key
    }
}

/// Transitions of a [`FetchSlot`].
#[derive(Debug, Clone, PartialEq)]
pub enum FetchAction<T, K> {
    Started(FetchTicket<K>),
    Succeeded(FetchTicket<K>, Vec<T>),
    Failed(FetchTicket<K>, String),
    Reset,
}

/// State slot for one kind of remote collection, keyed by what was requested
/// (unit for the instrument list, the instrument id for a value series).
#[derive(Debug, Clone, PartialEq)]
pub struct FetchSlot<T, K> {
    name: &'static str,
    state: FetchState<T>,
    generation: u64,
    key: Option<K>,
}

impl<T, K> FetchSlot<T, K>
where
    K: Clone + PartialEq + Debug,
{
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            state: FetchState::Idle,
            generation: 0,
            key: None,
        }
    }

    pub const fn state(&self) -> &FetchState<T> {
        &self.state
    }

    pub const fn key(&self) -> Option<&K> {
        self.key.as_ref()
    }

    pub const fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_loading_for(&self, key: &K) -> bool {
        self.state.is_loading() && self.key.as_ref() == Some(key)
    }

    /// Ticket for the next request of `key`; pass it to [`FetchAction::Started`].
    pub fn next_ticket(&self, key: K) -> FetchTicket<K> {
        FetchTicket {
            generation: self.generation + 1,
            key,
        }
    }

    /// Whether `action` would change the slot. Completions for anything but the
    /// latest started request are stale.
    pub fn accepts(&self, action: &FetchAction<T, K>) -> bool {
        match action {
            FetchAction::Started(ticket) => ticket.generation > self.generation,
            FetchAction::Succeeded(ticket, _) | FetchAction::Failed(ticket, _) => {
                self.state.is_loading()
                    && ticket.generation == self.generation
                    && self.key.as_ref() == Some(&ticket.key)
            }
            FetchAction::Reset => true,
        }
    }

    /// Pure transition `(slot, action) -> slot`. Rejected actions leave the slot as is.
    pub fn reduce(self, action: FetchAction<T, K>) -> Self {
        if !self.accepts(&action) {
            warn!(
                slot = self.name,
                state = self.state.label(),
                generation = self.generation,
                "discarding stale fetch transition"
            );
            return self;
        }

        match action {
            FetchAction::Started(ticket) => {
                debug!(
                    slot = self.name,
                    key = ?ticket.key,
                    generation = ticket.generation,
                    "fetch started"
                );
                Self {
                    name: self.name,
                    state: FetchState::Loading,
                    generation: ticket.generation,
                    key: Some(ticket.key),
                }
            }
            FetchAction::Succeeded(_, data) => {
                debug!(slot = self.name, rows = data.len(), "fetch succeeded");
                Self {
                    state: FetchState::Success(data),
                    ..self
                }
            }
            FetchAction::Failed(_, message) => {
                warn!(slot = self.name, %message, "fetch failed");
                Self {
                    state: FetchState::Failure(message),
                    ..self
                }
            }
            FetchAction::Reset => {
                debug!(slot = self.name, "fetch reset");
                // Bumping the generation invalidates any request still in flight.
                Self {
                    name: self.name,
                    state: FetchState::Idle,
                    generation: self.generation + 1,
                    key: None,
                }
            }
        }
    }

    /// In-place [`FetchSlot::reduce`]. Returns whether the action was applied.
    pub fn dispatch(&mut self, action: FetchAction<T, K>) -> bool {
        let applied = self.accepts(&action);
        let name = self.name;
        let current = std::mem::replace(self, Self::new(name));
        *self = current.reduce(action);
        applied
    }
}
