use super::{Services, require_session};
use crate::cli::parser::Commands;
use crate::cli::render::{print_charts, print_sales};
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::FilterCriteria;
use crate::session::SqliteSessionStore;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { from, to, charts } = cmd {
        // Validate filters before touching storage or network.
        let filters = FilterCriteria::from_inputs(from.as_deref(), to.as_deref())?;

        let services = Services::open(cfg)?;
        let store = SqliteSessionStore::new(&services.pool);
        let mut dash = services.dashboard(&store)?;
        require_session(&dash)?;

        dash.apply_filters(filters)?;

        print_sales(dash.records(), dash.filters(), cfg);
        if *charts {
            print_charts(dash.records(), cfg);
        }
    }
    Ok(())
}
