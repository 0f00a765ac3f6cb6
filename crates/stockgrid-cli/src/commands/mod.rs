mod export;
mod stocks;
mod values;

use std::sync::Arc;
use std::time::Instant;

use serde::Serialize;
use serde_json::{json, Value};
use stockgrid_core::table::Row;
use stockgrid_core::{
    Action, AppState, Config, ConfigOverrides, Envelope, EnvelopeError, FetchError, FetchState,
    HttpStockApi, InstrumentId, PageSize, Session, SortDirection, SortState, StockApi,
    TableField, TableState, TableView, ValidationError,
};
use tracing::{info, warn};

use crate::cli::{Cli, Command, TableArgs};
use crate::error::CliError;
use crate::metadata::Metadata;

pub struct CommandResult {
    pub data: Value,
    pub warnings: Vec<String>,
    pub errors: Vec<EnvelopeError>,
}

impl CommandResult {
    pub fn ok(data: Value) -> Self {
        Self {
            data,
            warnings: Vec::new(),
            errors: Vec::new(),
        }
    }

    pub fn with_warnings(mut self, warnings: Vec<String>) -> Self {
        self.warnings.extend(warnings);
        self
    }

    pub fn with_errors(mut self, errors: Vec<EnvelopeError>) -> Self {
        self.errors.extend(errors);
        self
    }
}

pub async fn run(cli: &Cli) -> Result<Envelope<Value>, CliError> {
    let overrides = ConfigOverrides {
        base_url: cli.base_url.clone(),
        timeout_ms: cli.timeout_ms,
        page_size: cli.command.page_size(),
    };
    let config = Config::from_env(overrides)?;
    info!(base_url = %config.base_url, timeout_ms = config.timeout_ms, "configuration resolved");

    let api: Arc<dyn StockApi> = Arc::new(HttpStockApi::new(&config));
    run_with_api(&cli.command, api, config.page_size).await
}

/// Run `command` against `api`, starting from a freshly mounted session.
pub async fn run_with_api(
    command: &Command,
    api: Arc<dyn StockApi>,
    page_size: PageSize,
) -> Result<Envelope<Value>, CliError> {
    let started = Instant::now();
    let mut session = Session::new(api, page_size);
    session.mount().await;

    let CommandResult {
        data,
        warnings,
        errors,
    } = match command {
        Command::Stocks(args) => stocks::run(args, &mut session).await?,
        Command::Values(args) => values::run(args, &mut session).await?,
        Command::Export(args) => export::run(args, &mut session).await?,
    };

    let latency_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
    let mut metadata = Metadata::new(latency_ms);
    for warning in warnings {
        metadata.push_warning(warning);
    }

    let meta = metadata.into_envelope_meta()?;
    Envelope::with_errors(meta, data, errors).map_err(CliError::from)
}

/// Envelope error for a failed collection, or nothing when it did not fail.
fn fetch_errors<T>(collection: &str, state: &FetchState<T>) -> Vec<EnvelopeError> {
    state
        .error_message()
        .map(|notice| {
            warn!(collection, notice, "fetch failed");
            EnvelopeError::from_fetch(&FetchError::network(notice))
        })
        .into_iter()
        .collect()
}

/// Select `id` in the loaded instrument list and wait for its series.
///
/// Returns the envelope errors of whichever fetch failed on the way.
async fn select_instrument(
    session: &mut Session,
    id: InstrumentId,
) -> Result<Vec<EnvelopeError>, CliError> {
    let errors = fetch_errors("instruments", session.state().instruments_state());
    if !errors.is_empty() {
        return Ok(errors);
    }

    if session.state().instrument(id).is_none() {
        return Err(ValidationError::UnknownInstrument { id: id.get() }.into());
    }

    session.dispatch(Action::ToggleSelection(id)).await;
    Ok(fetch_errors("values", session.state().values_state()))
}

/// Sort the table should end up with for the given flags.
fn requested_sort<F: TableField>(
    args: &TableArgs,
    current: SortState<F>,
) -> Result<SortState<F>, ValidationError> {
    let field = match args.sort.as_deref() {
        Some(name) => F::parse(name)?,
        None => current.field,
    };
    let direction = if args.desc {
        SortDirection::Descending
    } else {
        SortDirection::Ascending
    };
    Ok(SortState::new(field, direction))
}

/// Dispatch sort requests until the table sort matches `target`.
///
/// A request on the active column flips it, so at most two are needed.
async fn apply_sort<F, S, A>(session: &mut Session, target: SortState<F>, sort_of: S, action: A)
where
    F: TableField,
    S: Fn(&AppState) -> SortState<F>,
    A: Fn(F) -> Action,
{
    for _ in 0..2 {
        if sort_of(session.state()) == target {
            break;
        }
        session.dispatch(action(target.field)).await;
    }
}

fn page_warnings<R>(view: &TableView<'_, R>) -> Vec<String> {
    if view.page > 0 && view.page >= view.page_count {
        vec![format!(
            "page {} is past the last page ({} pages)",
            view.page, view.page_count
        )]
    } else {
        Vec::new()
    }
}

fn table_data<F, R>(
    title: &str,
    table: &TableState<F>,
    view: &TableView<'_, R>,
) -> Result<Value, CliError>
where
    F: TableField,
    R: Row<Field = F> + Serialize,
{
    let sort = json!({
        "field": table.sort.field.name(),
        "direction": table.sort.direction,
    });

    Ok(json!({
        "title": title,
        "query": table.query,
        "sort": sort,
        "columns": table.headers(),
        "rows": serde_json::to_value(&view.rows)?,
        "padding": view.padding,
        "total": view.total,
        "page": view.page,
        "pageSize": view.page_size,
        "pageCount": view.page_count,
    }))
}
