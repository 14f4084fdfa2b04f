use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::log;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - the SQLite storage with its tables
pub fn handle(cli: &Cli) -> AppResult<()> {
    let mut cfg = Config::init_all(cli.storage.as_deref(), cli.test)?;
    if let Some(url) = &cli.api_url {
        cfg.api_base_url = url.clone();
    }

    println!("⚙️  Initializing rvendas…");
    println!("📄 Config file : {}", Config::config_file().display());
    println!("🗄️  Storage     : {}", &cfg.storage);
    println!("🌐 API         : {}", &cfg.api_base_url);

    let pool = DbPool::open(&cfg.storage)?;

    log::audit(
        &pool.conn,
        "init",
        "Storage initialized",
        &format!("Storage initialized at {}", &cfg.storage),
    );

    println!("🎉 rvendas initialization completed!");
    Ok(())
}
