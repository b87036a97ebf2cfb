use super::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::{AddLogic, SaveOutcome};
use crate::errors::{AppError, AppResult};
use crate::models::SpecialDay;
use crate::ui::messages::success;
use crate::utils::date;
use crate::utils::formatting::describe_kind;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        date: date_str,
        title,
        note,
        kind,
        author,
        new,
    } = cmd
    {
        let d = date::parse_date(date_str).ok_or_else(|| AppError::InvalidDate(date_str.into()))?;

        let day = SpecialDay::new(
            &date::format_date(&d),
            title.as_deref(),
            note.as_deref(),
            *kind,
            author.as_deref(),
        );

        let mut pool = open_store(cfg)?;
        let (label, _) = describe_kind(day.kind);

        match AddLogic::save(&mut pool, &day, *new)? {
            SaveOutcome::Inserted(id) => success(format!(
                "{label} #{id} added for {}: {}",
                day.date,
                day.title_or_default()
            )),
            SaveOutcome::Updated(id) => success(format!(
                "{label} #{id} updated for {}: {}",
                day.date,
                day.title_or_default()
            )),
        }
    }

    Ok(())
}
