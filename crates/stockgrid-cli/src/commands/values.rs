use stockgrid_core::{Action, InstrumentId, Session, ValueField};

use crate::cli::ValuesArgs;
use crate::error::CliError;

use super::{
    apply_sort, page_warnings, requested_sort, select_instrument, table_data, CommandResult,
};

pub async fn run(args: &ValuesArgs, session: &mut Session) -> Result<CommandResult, CliError> {
    let id = InstrumentId::parse(&args.id)?;
    let target = requested_sort::<ValueField>(&args.table, session.state().value_table().sort)?;
    let errors = select_instrument(session, id).await?;

    apply_sort(
        session,
        target,
        |state| state.value_table().sort,
        Action::SortValues,
    )
    .await;
    session.dispatch(Action::ValuesPage(args.table.page)).await;

    let state = session.state();
    let view = state.value_view();
    let data = table_data(state.selected_name(), state.value_table(), &view)?;

    Ok(CommandResult::ok(data)
        .with_warnings(page_warnings(&view))
        .with_errors(errors))
}
