use serde_json::json;
use stockgrid_core::{InstrumentId, SeriesExport, Session};

use crate::cli::ExportArgs;
use crate::error::CliError;

use super::{select_instrument, CommandResult};

pub async fn run(args: &ExportArgs, session: &mut Session) -> Result<CommandResult, CliError> {
    let id = InstrumentId::parse(&args.id)?;
    let errors = select_instrument(session, id).await?;
    if !errors.is_empty() {
        let data = json!({
            "stock": session.state().selected_name(),
            "output": null,
            "points": 0,
        });
        return Ok(CommandResult::ok(data).with_errors(errors));
    }

    let export = SeriesExport::from_state(session.state())?;
    export.write_to(&args.output)?;

    Ok(CommandResult::ok(json!({
        "stock": export.stock,
        "output": args.output.display().to_string(),
        "points": export.values.len(),
        "exportedAt": export.exported_at,
    })))
}
