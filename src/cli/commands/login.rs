use super::{Services, read_line};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::View;
use crate::errors::AppResult;
use crate::models::Credentials;
use crate::session::SqliteSessionStore;
use crate::ui::messages::{info, success, warning};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Login { user, password } = cmd {
        let password = match password {
            Some(p) => p.clone(),
            None => read_line("Senha: ")?,
        };

        let services = Services::open(cfg)?;
        let store = SqliteSessionStore::new(&services.pool);
        let mut dash = services.dashboard(&store)?;

        match dash.login(&Credentials::new(user.as_str(), password)) {
            Ok(()) => {
                success(format!("Login realizado como '{}'.", user));
                info(format!("{} venda(s) disponíveis.", dash.records().len()));
            }
            // Logged in, but the initial list could not be loaded.
            Err(e) if dash.view() == View::Main => {
                success(format!("Login realizado como '{}'.", user));
                warning(format!("Falha ao carregar as vendas: {}", e));
            }
            Err(e) => return Err(e),
        }
    }

    Ok(())
}
