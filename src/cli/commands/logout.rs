use super::Services;
use crate::config::Config;
use crate::errors::AppResult;
use crate::session::SqliteSessionStore;
use crate::ui::messages::success;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let services = Services::open(cfg)?;
    let store = SqliteSessionStore::new(&services.pool);
    let mut dash = services.dashboard(&store)?;

    dash.logout()?;
    success("Sessão encerrada.");
    Ok(())
}
