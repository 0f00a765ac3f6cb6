use std::collections::VecDeque;
use std::sync::Arc;

use tracing::debug;

use super::{Action, AppState, Effect};
use crate::table::PageSize;
use crate::StockApi;

/// Run the remote call behind `effect` and turn its outcome into the completion action.
///
/// Never fails: fetch errors are folded into the returned action.
pub async fn perform(api: &dyn StockApi, effect: Effect) -> Action {
    match effect {
        Effect::FetchInstruments(ticket) => {
            Action::instruments_completed(ticket, api.instruments().await)
        }
        Effect::FetchValues(ticket) => {
            Action::values_completed(ticket, api.values(*ticket.key()).await)
        }
    }
}

/// Application state wired to a [`StockApi`].
///
/// Each dispatched action is reduced, and every effect it yields is awaited to
/// completion before the next queued action is processed.
pub struct Session {
    state: AppState,
    api: Arc<dyn StockApi>,
}

impl Session {
    pub fn new(api: Arc<dyn StockApi>, page_size: PageSize) -> Self {
        Self {
            state: AppState::new(page_size),
            api,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Initial load of the instrument list.
    pub async fn mount(&mut self) {
        self.dispatch(Action::Refresh).await;
    }

    pub async fn dispatch(&mut self, action: Action) {
        let mut queue = VecDeque::from([action]);
        while let Some(action) = queue.pop_front() {
            for effect in self.state.reduce(action) {
                debug!(?effect, "performing effect");
                queue.push_back(perform(self.api.as_ref(), effect).await);
            }
        }
    }
}
