use super::{Services, ensure_still_authenticated};
use crate::cli::parser::Commands;
use crate::cli::render::print_sales;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::FilterCriteria;
use crate::session::SqliteSessionStore;
use crate::ui::messages::{success, warning};

/// Create a sale from the form fields, then show the refreshed list.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        product,
        quantity,
        date,
        value,
        from,
        to,
    } = cmd
    {
        let filters = FilterCriteria::from_inputs(from.as_deref(), to.as_deref())?;

        let services = Services::open(cfg)?;
        let store = SqliteSessionStore::new(&services.pool);
        let mut dash = services.dashboard(&store)?;

        dash.set_filters(filters);
        dash.open_create_form();
        {
            let draft = dash.draft_mut();
            draft.product_name = product.clone().unwrap_or_default();
            draft.quantity = quantity.clone().unwrap_or_default();
            draft.sale_date = date.clone().unwrap_or_default();
            draft.total_value = value.clone().unwrap_or_default();
        }

        let record = dash.submit_create()?;
        success(format!(
            "Venda #{} ({}) criada com sucesso.",
            record.id, record.product_name
        ));

        ensure_still_authenticated(&dash)?;
        match dash.refresh_cycle().error() {
            Some(msg) => warning(format!("Falha ao atualizar a lista: {}", msg)),
            None => print_sales(dash.records(), dash.filters(), cfg),
        }
    }

    Ok(())
}
