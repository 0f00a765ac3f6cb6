use stockgrid_core::{Action, InstrumentField, Session};

use crate::cli::StocksArgs;
use crate::error::CliError;

use super::{apply_sort, fetch_errors, page_warnings, requested_sort, table_data, CommandResult};

pub async fn run(args: &StocksArgs, session: &mut Session) -> Result<CommandResult, CliError> {
    let current = session.state().instrument_table().sort;
    let target = requested_sort::<InstrumentField>(&args.table, current)?;
    let errors = fetch_errors("instruments", session.state().instruments_state());

    if !args.search.is_empty() {
        session.dispatch(Action::Search(args.search.clone())).await;
    }
    apply_sort(
        session,
        target,
        |state| state.instrument_table().sort,
        Action::SortInstruments,
    )
    .await;
    session.dispatch(Action::InstrumentsPage(args.table.page)).await;

    let state = session.state();
    let view = state.instrument_view();
    let data = table_data("Stocks", state.instrument_table(), &view)?;

    Ok(CommandResult::ok(data)
        .with_warnings(page_warnings(&view))
        .with_errors(errors))
}
