use super::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::del::DeleteLogic;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use crate::ui::prompt::confirm;
use crate::utils::date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del {
        date: date_str,
        id,
        yes,
    } = cmd
    {
        let d = date::parse_date(date_str).ok_or_else(|| AppError::InvalidDate(date_str.into()))?;
        let d = date::format_date(&d);

        if !*yes {
            let prompt = match id {
                Some(id) => format!("Delete special day #{id} on {d}? This action is irreversible."),
                None => format!("Delete the special day on {d}? This action is irreversible."),
            };
            if !confirm(&prompt) {
                info("Operation cancelled.");
                return Ok(());
            }
        }

        let mut pool = open_store(cfg)?;
        let removed = DeleteLogic::apply(&mut pool, &d, *id)?;

        success(format!(
            "Special day #{} on {} has been deleted ({}).",
            removed.id,
            removed.date,
            removed.title_or_default()
        ));
    }

    Ok(())
}
