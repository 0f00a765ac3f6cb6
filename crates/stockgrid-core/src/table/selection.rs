use crate::{Instrument, InstrumentId};

/// Outcome of a selection toggle, telling the caller what to do with the value series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionChange {
    /// Selection was cleared; the dependent series must be reset.
    Cleared,
    /// A (possibly different) instrument is now selected; fetch its series.
    Selected(InstrumentId),
}

/// Single-row selection over the instrument table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectionState {
    selected: Option<InstrumentId>,
}

impl SelectionState {
    pub const fn selected(&self) -> Option<InstrumentId> {
        self.selected
    }

    pub fn is_selected(&self, id: InstrumentId) -> bool {
        self.selected == Some(id)
    }

    /// Number of selected rows, for the table toolbar.
    pub fn count(&self) -> usize {
        usize::from(self.selected.is_some())
    }

    /// Toggle `id`: the selected row is cleared, any other row replaces the selection.
    pub fn toggle(&mut self, id: InstrumentId) -> SelectionChange {
        if self.selected == Some(id) || id.is_none() {
            self.selected = None;
            SelectionChange::Cleared
        } else {
            self.selected = Some(id);
            SelectionChange::Selected(id)
        }
    }

    /// Drop the selection when it no longer references a loaded instrument.
    /// Returns true when the selection was dropped.
    pub fn retain_loaded(&mut self, instruments: &[Instrument]) -> bool {
        match self.selected {
            Some(id) if !instruments.iter().any(|instrument| instrument.id == id) => {
                self.selected = None;
                true
            }
            _ => false,
        }
    }
}
