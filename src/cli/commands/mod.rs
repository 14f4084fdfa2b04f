pub mod add;
pub mod config;
pub mod del;
pub mod find;
pub mod init;
pub mod list;
pub mod log;
pub mod login;
pub mod logout;
pub mod status;

use crate::api::{ApiClient, HttpTransport};
use crate::config::Config;
use crate::core::{Dashboard, View};
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::session::SessionStore;
use crate::ui::messages::warning;
use std::io::{self, BufRead, Write};

/// Storage and transport opened once per command.
pub struct Services {
    pub pool: DbPool,
    pub transport: HttpTransport,
}

impl Services {
    pub fn open(cfg: &Config) -> AppResult<Self> {
        Ok(Self {
            pool: DbPool::open(&cfg.storage)?,
            transport: HttpTransport::from_config(cfg)?,
        })
    }

    pub fn dashboard<'a>(&'a self, store: &'a dyn SessionStore) -> AppResult<Dashboard<'a>> {
        let client = ApiClient::new(&self.transport, store);
        Ok(Dashboard::new(client)?.with_audit_log(&self.pool))
    }
}

/// Commands that talk to `/vendas` need a stored session.
pub fn require_session(dash: &Dashboard) -> AppResult<()> {
    if dash.view() == View::Login {
        warning("Nenhuma sessão ativa.");
        return Err(AppError::NotAuthenticated);
    }
    Ok(())
}

/// After a forced logout the command must fail even if the flow itself
/// reported success.
pub fn ensure_still_authenticated(dash: &Dashboard) -> AppResult<()> {
    if dash.view() == View::Login {
        return Err(AppError::SessionExpired);
    }
    Ok(())
}

/// Ask a yes/no confirmation from the user
pub fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirmar [s/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().lock().read_line(&mut s).is_ok() {
        matches!(
            s.trim().to_lowercase().as_str(),
            "s" | "sim" | "y" | "yes"
        )
    } else {
        false
    }
}

/// Read a single line from stdin after printing `prompt`.
pub fn read_line(prompt: &str) -> AppResult<String> {
    print!("{}", prompt);
    io::stdout().flush()?;
    let mut s = String::new();
    io::stdin().lock().read_line(&mut s)?;
    Ok(s.trim_end_matches(['\r', '\n']).to_string())
}
