use super::Services;
use crate::cli::parser::Commands;
use crate::cli::render::print_record;
use crate::config::Config;
use crate::core::LookupStatus;
use crate::errors::{AppError, AppResult};
use crate::session::SqliteSessionStore;
use crate::ui::messages::warning;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Find { id } = cmd {
        let services = Services::open(cfg)?;
        let store = SqliteSessionStore::new(&services.pool);
        let mut dash = services.dashboard(&store)?;

        dash.set_lookup_input(id);
        match dash.search()? {
            LookupStatus::Found(record) => print_record(&record, cfg),
            LookupStatus::NotFound(msg) => warning(msg),
            LookupStatus::Failed(msg) => return Err(AppError::Other(msg)),
            LookupStatus::Idle | LookupStatus::Searching => {}
        }
    }
    Ok(())
}
