use tracing::{debug, warn};

use super::{FetchAction, FetchSlot, FetchState, FetchTicket};
use crate::error::GENERIC_FAILURE_NOTICE;
use crate::table::{PageSize, SelectionChange, SelectionState, SortState, TableState, TableView};
use crate::{FetchError, Instrument, InstrumentField, InstrumentId, ValueField, ValuePoint};

pub type InstrumentSlot = FetchSlot<Instrument, ()>;
pub type ValueSlot = FetchSlot<ValuePoint, InstrumentId>;

/// Everything that can happen to the application state.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    InstrumentsFetch(FetchAction<Instrument, ()>),
    ValuesFetch(FetchAction<ValuePoint, InstrumentId>),
    /// Mount or explicit reload of the instrument list.
    Refresh,
    ToggleSelection(InstrumentId),
    Search(String),
    SortInstruments(InstrumentField),
    SortValues(ValueField),
    InstrumentsPage(usize),
    ValuesPage(usize),
    InstrumentsPageSize(PageSize),
    ValuesPageSize(PageSize),
    DismissNotice,
}

impl Action {
    pub fn instruments_completed(
        ticket: FetchTicket<()>,
        result: Result<Vec<Instrument>, FetchError>,
    ) -> Self {
        Self::InstrumentsFetch(match result {
            Ok(data) => FetchAction::Succeeded(ticket, data),
            Err(error) => FetchAction::Failed(ticket, failure_message("instruments", &error)),
        })
    }

    pub fn values_completed(
        ticket: FetchTicket<InstrumentId>,
        result: Result<Vec<ValuePoint>, FetchError>,
    ) -> Self {
        Self::ValuesFetch(match result {
            Ok(data) => FetchAction::Succeeded(ticket, data),
            Err(error) => FetchAction::Failed(ticket, failure_message("values", &error)),
        })
    }

    pub const fn label(&self) -> &'static str {
        match self {
            Self::InstrumentsFetch(_) => "instruments_fetch",
            Self::ValuesFetch(_) => "values_fetch",
            Self::Refresh => "refresh",
            Self::ToggleSelection(_) => "toggle_selection",
            Self::Search(_) => "search",
            Self::SortInstruments(_) => "sort_instruments",
            Self::SortValues(_) => "sort_values",
            Self::InstrumentsPage(_) => "instruments_page",
            Self::ValuesPage(_) => "values_page",
            Self::InstrumentsPageSize(_) => "instruments_page_size",
            Self::ValuesPageSize(_) => "values_page_size",
            Self::DismissNotice => "dismiss_notice",
        }
    }
}

/// The slot keeps only the user-facing notice; the transport detail goes to the log.
fn failure_message(collection: &'static str, error: &FetchError) -> String {
    warn!(collection, detail = error.detail(), "remote fetch failed");
    error.notice().to_owned()
}

/// Remote work requested by a state transition. The caller performs it and
/// dispatches the matching completion action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    FetchInstruments(FetchTicket<()>),
    FetchValues(FetchTicket<InstrumentId>),
}

/// Owned application state. Only [`AppState::reduce`] mutates it.
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    instruments: InstrumentSlot,
    values: ValueSlot,
    selection: SelectionState,
    instrument_table: TableState<InstrumentField>,
    value_table: TableState<ValueField>,
    notice: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(PageSize::default())
    }
}

impl AppState {
    pub fn new(page_size: PageSize) -> Self {
        Self {
            instruments: FetchSlot::new("instruments"),
            values: FetchSlot::new("values"),
            selection: SelectionState::default(),
            instrument_table: TableState::new(
                SortState::ascending(InstrumentField::Stock),
                page_size,
            ),
            value_table: TableState::new(SortState::ascending(ValueField::Date), page_size),
            notice: None,
        }
    }

    /// Apply `action` and return the remote work it calls for.
    pub fn reduce(&mut self, action: Action) -> Vec<Effect> {
        debug!(action = action.label(), "reduce");

        match action {
            Action::InstrumentsFetch(fetch) => {
                self.apply_instruments(fetch);
                Vec::new()
            }
            Action::ValuesFetch(fetch) => {
                self.apply_values(fetch);
                Vec::new()
            }
            Action::Refresh => self.start_instruments().into_iter().collect(),
            Action::ToggleSelection(id) => self.toggle(id).into_iter().collect(),
            Action::Search(query) => {
                self.instrument_table.set_query(query);
                Vec::new()
            }
            Action::SortInstruments(field) => {
                self.instrument_table.request_sort(field);
                Vec::new()
            }
            Action::SortValues(field) => {
                self.value_table.request_sort(field);
                Vec::new()
            }
            Action::InstrumentsPage(page) => {
                self.instrument_table.set_page(page);
                Vec::new()
            }
            Action::ValuesPage(page) => {
                self.value_table.set_page(page);
                Vec::new()
            }
            Action::InstrumentsPageSize(size) => {
                self.instrument_table.set_page_size(size);
                Vec::new()
            }
            Action::ValuesPageSize(size) => {
                self.value_table.set_page_size(size);
                Vec::new()
            }
            Action::DismissNotice => {
                self.notice = None;
                Vec::new()
            }
        }
    }

    fn start_instruments(&mut self) -> Option<Effect> {
        if self.instruments.is_loading_for(&()) {
            debug!("instrument list already loading");
            return None;
        }

        let ticket = self.instruments.next_ticket(());
        self.instruments.dispatch(FetchAction::Started(ticket));

        // The list is empty while it reloads, so no selection can point into it.
        if self.selection.retain_loaded(self.instruments.state().data()) {
            self.reset_values();
        }
        Some(Effect::FetchInstruments(ticket))
    }

    fn apply_instruments(&mut self, fetch: FetchAction<Instrument, ()>) {
        let succeeded = matches!(fetch, FetchAction::Succeeded(..));
        let failed = matches!(fetch, FetchAction::Failed(..));
        if !self.instruments.dispatch(fetch) {
            return;
        }

        if succeeded || failed {
            self.instrument_table.source_changed();
        }

        if failed {
            self.notice = Some(String::from(GENERIC_FAILURE_NOTICE));
        } else if succeeded {
            self.notice = None;
        }

        // The selection must keep pointing into the loaded list.
        if (succeeded || failed) && self.selection.retain_loaded(self.instruments.state().data())
        {
            self.reset_values();
        }
    }

    fn toggle(&mut self, id: InstrumentId) -> Option<Effect> {
        if !id.is_none() && self.instrument(id).is_none() && !self.selection.is_selected(id) {
            warn!(%id, "ignoring selection of an instrument that is not loaded");
            return None;
        }

        match self.selection.toggle(id) {
            SelectionChange::Cleared => {
                self.reset_values();
                None
            }
            SelectionChange::Selected(id) => {
                if self.values.is_loading_for(&id) {
                    return None;
                }
                let ticket = self.values.next_ticket(id);
                self.values.dispatch(FetchAction::Started(ticket));
                self.value_table.source_changed();
                Some(Effect::FetchValues(ticket))
            }
        }
    }

    fn apply_values(&mut self, fetch: FetchAction<ValuePoint, InstrumentId>) {
        let fetch = match fetch {
            FetchAction::Succeeded(ticket, points) => {
                let stock = self
                    .instrument(*ticket.key())
                    .map(|instrument| instrument.stock.clone())
                    .unwrap_or_default();
                let points = points
                    .into_iter()
                    .map(|mut point| {
                        if point.stock.is_empty() {
                            point.stock.clone_from(&stock);
                        }
                        point
                    })
                    .collect();
                FetchAction::Succeeded(ticket, points)
            }
            other => other,
        };

        let completed = matches!(fetch, FetchAction::Succeeded(..) | FetchAction::Failed(..));
        let failed = matches!(fetch, FetchAction::Failed(..));
        if self.values.dispatch(fetch) && completed {
            self.value_table.source_changed();
            if failed {
                self.notice = Some(String::from(GENERIC_FAILURE_NOTICE));
            }
        }
    }

    fn reset_values(&mut self) {
        self.values.dispatch(FetchAction::Reset);
        self.value_table.source_changed();
    }

    pub fn instruments_state(&self) -> &FetchState<Instrument> {
        self.instruments.state()
    }

    pub fn values_state(&self) -> &FetchState<ValuePoint> {
        self.values.state()
    }

    pub fn instruments(&self) -> &[Instrument] {
        self.instruments.state().data()
    }

    pub fn values(&self) -> &[ValuePoint] {
        self.values.state().data()
    }

    /// Instrument whose series is currently held (or being fetched).
    pub fn values_key(&self) -> Option<InstrumentId> {
        self.values.key().copied()
    }

    pub fn loading(&self) -> bool {
        self.instruments.state().is_loading() || self.values.state().is_loading()
    }

    pub fn error(&self) -> bool {
        self.instruments.state().is_error() || self.values.state().is_error()
    }

    /// Dismissible failure notice for the presentation layer.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn instrument(&self, id: InstrumentId) -> Option<&Instrument> {
        self.instruments()
            .iter()
            .find(|instrument| instrument.id == id)
    }

    /// Heading for the value-series table; empty when nothing is selected.
    pub fn selected_name(&self) -> &str {
        self.selection
            .selected()
            .and_then(|id| self.instrument(id))
            .map(|instrument| instrument.stock.as_str())
            .unwrap_or_default()
    }

    pub fn can_export(&self) -> bool {
        !self.values().is_empty()
    }

    pub fn instrument_table(&self) -> &TableState<InstrumentField> {
        &self.instrument_table
    }

    pub fn value_table(&self) -> &TableState<ValueField> {
        &self.value_table
    }

    pub fn instrument_view(&self) -> TableView<'_, Instrument> {
        self.instrument_table.view(self.instruments())
    }

    pub fn value_view(&self) -> TableView<'_, ValuePoint> {
        self.value_table.view(self.values())
    }
}
