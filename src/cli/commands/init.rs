use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::initialize::open_initialized;
use crate::db::log::ttlog;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

/// `init`: config file (skipped with `--test`), database file and schema.
pub fn handle(cli: &Cli) -> AppResult<()> {
    let db_path = Config::init_all(cli.db.as_deref(), cli.test)?;
    let db_path = db_path.to_string_lossy().to_string();

    if !cli.test {
        info(format!("Config file: {}", Config::config_file().display()));
    }

    let pool = open_initialized(&db_path)?;
    success(format!("Database initialized at {db_path}"));

    // the audit row is best effort
    if let Err(e) = ttlog(
        &pool.conn,
        "init",
        &db_path,
        &format!("Database initialized at {db_path}"),
    ) {
        warning(format!("Failed to write internal log: {e}"));
    }

    success("rtogether is ready 💞");
    Ok(())
}
