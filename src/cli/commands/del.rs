use super::{Services, ask_confirmation, ensure_still_authenticated, require_session};
use crate::cli::parser::Commands;
use crate::cli::render::print_sales;
use crate::config::Config;
use crate::core::lookup::not_found_message;
use crate::errors::{AppError, AppResult};
use crate::models::FilterCriteria;
use crate::session::SqliteSessionStore;
use crate::ui::messages::{info, success, warning};
use crate::utils::date::format_br;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, yes, from, to } = cmd {
        let filters = FilterCriteria::from_inputs(from.as_deref(), to.as_deref())?;

        let services = Services::open(cfg)?;
        let store = SqliteSessionStore::new(&services.pool);
        let mut dash = services.dashboard(&store)?;
        require_session(&dash)?;
        dash.set_filters(filters);

        //
        // Select the record to delete
        //
        let record = dash
            .fetch_sale(*id)?
            .ok_or_else(|| AppError::Validation(not_found_message(&id.to_string())))?;

        let prompt = format!(
            "Deletar a venda #{} do produto '{}' ({})? Esta ação é irreversível.",
            record.id,
            record.product_name,
            format_br(&record.sale_date)
        );
        dash.request_delete(record);

        //
        // Confirmation step
        //
        if !*yes && !ask_confirmation(&prompt) {
            dash.cancel_delete();
            info("Operação cancelada.");
            return Ok(());
        }

        //
        // Execute deletion; on failure the selection stays pending
        //
        let confirmation = dash.confirm_delete()?;
        success(format!("Venda #{} deletada.", confirmation.id));

        ensure_still_authenticated(&dash)?;
        match dash.refresh_cycle().error() {
            Some(msg) => warning(format!("Falha ao atualizar a lista: {}", msg)),
            None => print_sales(dash.records(), dash.filters(), cfg),
        }
    }

    Ok(())
}
