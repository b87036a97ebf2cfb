use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::{insert_special_day, load_by_date, update_special_day};
use crate::errors::AppResult;
use crate::models::SpecialDay;
use log::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Inserted(i64),
    Updated(i64),
}

impl SaveOutcome {
    pub fn id(&self) -> i64 {
        match self {
            SaveOutcome::Inserted(id) | SaveOutcome::Updated(id) => *id,
        }
    }
}

pub struct AddLogic;

impl AddLogic {
    /// Per-date editor semantics: when `day.date` already holds an event,
    /// the first one is overwritten; otherwise a new row is inserted.
    /// `force_new` always inserts.
    pub fn save(pool: &mut DbPool, day: &SpecialDay, force_new: bool) -> AppResult<SaveOutcome> {
        let existing = if force_new {
            None
        } else {
            load_by_date(pool, &day.date)?.into_iter().next()
        };

        let outcome = match existing {
            Some(old) => {
                update_special_day(pool, old.id, day)?;
                SaveOutcome::Updated(old.id)
            }
            None => SaveOutcome::Inserted(insert_special_day(pool, day)?),
        };

        let (op, verb) = match outcome {
            SaveOutcome::Inserted(_) => ("add", "Added"),
            SaveOutcome::Updated(_) => ("edit", "Updated"),
        };
        debug!(
            "event=special_day_saved op={op} id={} date={}",
            outcome.id(),
            day.date
        );
        ttlog(
            &pool.conn,
            op,
            &day.date,
            &format!(
                "{verb} {} #{}: {}",
                day.kind.to_db_str(),
                outcome.id(),
                day.title_or_default()
            ),
        )?;

        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::initialize::init_db;
    use crate::db::queries::load_all;
    use crate::models::DayKind;

    fn pool() -> DbPool {
        let pool = DbPool::in_memory().expect("memory db");
        init_db(&pool.conn).expect("schema");
        pool
    }

    #[test]
    fn second_save_on_same_date_updates_first_event() {
        let mut pool = pool();
        let a = SpecialDay::new("2025-09-03", Some("First date"), None, DayKind::Other, None);
        let b = SpecialDay::new(
            "2025-09-03",
            Some("First date ♥"),
            None,
            DayKind::Anniversary,
            None,
        );

        let first = AddLogic::save(&mut pool, &a, false).expect("insert");
        let second = AddLogic::save(&mut pool, &b, false).expect("update");
        assert!(matches!(first, SaveOutcome::Inserted(_)));
        assert_eq!(second, SaveOutcome::Updated(first.id()));

        let all = load_all(&mut pool).expect("all");
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].kind, DayKind::Anniversary);
    }

    #[test]
    fn force_new_adds_a_second_event_on_the_same_date() {
        let mut pool = pool();
        let a = SpecialDay::new("1995-03-15", Some("Mai"), None, DayKind::Birthday, None);
        let b = SpecialDay::new("1995-03-15", Some("Lan"), None, DayKind::Birthday, None);
        AddLogic::save(&mut pool, &a, false).expect("a");
        let out = AddLogic::save(&mut pool, &b, true).expect("b");
        assert!(matches!(out, SaveOutcome::Inserted(_)));
        assert_eq!(load_all(&mut pool).expect("all").len(), 2);
    }
}
