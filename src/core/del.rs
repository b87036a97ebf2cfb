use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::{delete_special_day, get_special_day, load_by_date};
use crate::errors::{AppError, AppResult};
use crate::models::SpecialDay;

pub struct DeleteLogic;

impl DeleteLogic {
    /// Remove event `id` if given (it must be stored on `date`), otherwise
    /// the first event stored on `date`. Returns the removed row.
    pub fn apply(pool: &mut DbPool, date: &str, id: Option<i64>) -> AppResult<SpecialDay> {
        let target = match id {
            Some(id) => get_special_day(pool, id)?.filter(|d| d.date == date),
            None => load_by_date(pool, date)?.into_iter().next(),
        };

        let target = target.ok_or_else(|| match id {
            Some(id) => AppError::NoSpecialDay(format!("{date} (id {id})")),
            None => AppError::NoSpecialDay(date.to_string()),
        })?;

        delete_special_day(pool, target.id)?;

        ttlog(
            &pool.conn,
            "del",
            date,
            &format!(
                "Deleted {} #{}: {}",
                target.kind.to_db_str(),
                target.id,
                target.title_or_default()
            ),
        )?;

        Ok(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::initialize::init_db;
    use crate::db::queries::{insert_special_day, load_all};
    use crate::models::DayKind;

    fn seeded() -> (DbPool, i64, i64) {
        let mut pool = DbPool::in_memory().expect("memory db");
        init_db(&pool.conn).expect("schema");
        let a = SpecialDay::new("2025-02-14", Some("a"), None, DayKind::Other, None);
        let b = SpecialDay::new("2025-02-14", Some("b"), None, DayKind::Other, None);
        let ia = insert_special_day(&mut pool, &a).expect("a");
        let ib = insert_special_day(&mut pool, &b).expect("b");
        (pool, ia, ib)
    }

    #[test]
    fn without_id_removes_the_first_event_of_the_day() {
        let (mut pool, ia, ib) = seeded();
        let removed = DeleteLogic::apply(&mut pool, "2025-02-14", None).expect("delete");
        assert_eq!(removed.id, ia);
        let left = load_all(&mut pool).expect("all");
        assert_eq!(left.len(), 1);
        assert_eq!(left[0].id, ib);
    }

    #[test]
    fn id_must_belong_to_the_date() {
        let (mut pool, _ia, ib) = seeded();
        assert!(matches!(
            DeleteLogic::apply(&mut pool, "2025-02-15", Some(ib)),
            Err(AppError::NoSpecialDay(_))
        ));
        assert_eq!(
            DeleteLogic::apply(&mut pool, "2025-02-14", Some(ib))
                .expect("delete")
                .id,
            ib
        );
    }

    #[test]
    fn empty_day_is_an_error() {
        let (mut pool, _, _) = seeded();
        assert!(matches!(
            DeleteLogic::apply(&mut pool, "2030-01-01", None),
            Err(AppError::NoSpecialDay(_))
        ));
    }
}
