use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::session::{SessionStore, SqliteSessionStore};
use crate::ui::messages::{info, success};

pub fn handle(cfg: &Config) -> AppResult<()> {
    let pool = DbPool::open(&cfg.storage)?;
    let store = SqliteSessionStore::new(&pool);

    if store.is_authenticated()? {
        success(format!("Sessão ativa ({}).", cfg.api_base_url));
    } else {
        info("Nenhuma sessão ativa. Use `rvendas login`.");
    }
    Ok(())
}
