pub mod add;
pub mod calendar;
pub mod config;
pub mod db;
pub mod del;
pub mod export;
pub mod init;
pub mod list;
pub mod log;
pub mod together;

use crate::config::Config;
use crate::db::initialize::open_initialized;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

/// The configured store, migrated and ready.
pub(crate) fn open_store(cfg: &Config) -> AppResult<DbPool> {
    open_initialized(&cfg.database)
}
