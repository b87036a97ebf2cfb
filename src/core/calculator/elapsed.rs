//! Calendar-aware "time together" breakdown.
//!
//! Years and months are counted as real calendar rollovers of the start
//! instant (so "1 month" always means the same day-of-month has come around),
//! and only the leftover after the last monthly rollover is split into fixed
//! units: weeks, days, hours, minutes, seconds.
//!
//! Calendar steps happen in the start instant's own UTC offset and are always
//! taken from `start` in one jump of `12 * years + months` months, clamping
//! to the last day of shorter months (Jan 31 + 1 month is Feb 28/29).
//! `ElapsedBreakdown::apply_to` replays exactly the same jump, so
//! `breakdown.apply_to(start) == now` (both truncated to the second).

use crate::models::ElapsedBreakdown;
use chrono::{DateTime, Datelike, FixedOffset, Months, SubsecRound, TimeZone};

const SECS_PER_MINUTE: i64 = 60;
const SECS_PER_HOUR: i64 = 60 * SECS_PER_MINUTE;
const SECS_PER_DAY: i64 = 24 * SECS_PER_HOUR;
const SECS_PER_WEEK: i64 = 7 * SECS_PER_DAY;

/// Compute the elapsed breakdown from `start` to `now`.
///
/// Total for every input: when `now` is not after `start` the result is the
/// all-zero breakdown.
pub fn compute_elapsed<Tz: TimeZone>(
    start: &DateTime<FixedOffset>,
    now: &DateTime<Tz>,
) -> ElapsedBreakdown {
    let start = start.trunc_subsecs(0);
    let now = now.with_timezone(start.offset()).trunc_subsecs(0);

    if now <= start {
        return ElapsedBreakdown::default();
    }

    // 1) whole calendar years
    let raw_years = u32::try_from(now.year() - start.year()).unwrap_or(0);
    let (years, year_anchor) = rollover(&start, &now, 0, raw_years, 12);

    // 2) whole calendar months on top of the years, always counted from
    // `start` itself so a clamped year anchor (Feb 29 → Feb 28) never
    // shifts the month steps. Same month in a later year means the
    // anniversary day is still ahead: count 12 and let the rollover step
    // back to 11.
    let raw_months = match (now.month() as i32 - year_anchor.month() as i32).rem_euclid(12) {
        0 if now.year() != year_anchor.year() => 12,
        m => m as u32,
    };
    let (months, anchor) = rollover(&start, &now, years * 12, raw_months, 1);

    // 3) fixed-size remainder, floor at every step
    let mut rest = (now - anchor).num_seconds().max(0);

    let weeks = rest / SECS_PER_WEEK;
    rest -= weeks * SECS_PER_WEEK;
    let days = rest / SECS_PER_DAY;
    rest -= days * SECS_PER_DAY;
    let hours = rest / SECS_PER_HOUR;
    rest -= hours * SECS_PER_HOUR;
    let minutes = rest / SECS_PER_MINUTE;
    rest -= minutes * SECS_PER_MINUTE;

    ElapsedBreakdown {
        years,
        months,
        weeks: weeks as u32,
        days: days as u32,
        hours: hours as u32,
        minutes: minutes as u32,
        seconds: rest as u32,
    }
}

/// Advance `start` by `offset + count * unit_months` months; while that
/// lands after `now` (this cycle's rollover has not happened yet), step
/// `count` back. Returns the accepted count and the advanced instant.
fn rollover(
    start: &DateTime<FixedOffset>,
    now: &DateTime<FixedOffset>,
    offset: u32,
    mut count: u32,
    unit_months: u32,
) -> (u32, DateTime<FixedOffset>) {
    loop {
        let probe = count
            .checked_mul(unit_months)
            .and_then(|m| m.checked_add(offset))
            .and_then(|m| start.checked_add_months(Months::new(m)));
        match probe {
            Some(p) if p <= *now => return (count, p),
            _ if count == 0 => return (0, *start),
            _ => count -= 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn at(s: &str) -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339(s).expect("valid rfc3339")
    }

    fn start() -> DateTime<FixedOffset> {
        at("2025-09-03T12:05:00+07:00")
    }

    fn bd(
        years: u32,
        months: u32,
        weeks: u32,
        days: u32,
        hours: u32,
        minutes: u32,
        seconds: u32,
    ) -> ElapsedBreakdown {
        ElapsedBreakdown {
            years,
            months,
            weeks,
            days,
            hours,
            minutes,
            seconds,
        }
    }

    #[test]
    fn same_instant_is_all_zero() {
        assert!(compute_elapsed(&start(), &start()).is_zero());
    }

    #[test]
    fn one_second_later() {
        let now = at("2025-09-03T12:05:01+07:00");
        assert_eq!(compute_elapsed(&start(), &now), bd(0, 0, 0, 0, 0, 0, 1));
    }

    #[test]
    fn exactly_one_year_later() {
        let now = at("2026-09-03T12:05:00+07:00");
        assert_eq!(compute_elapsed(&start(), &now), bd(1, 0, 0, 0, 0, 0, 0));
    }

    #[test]
    fn one_month_and_two_days() {
        let now = at("2025-10-05T12:05:00+07:00");
        assert_eq!(compute_elapsed(&start(), &now), bd(0, 1, 0, 2, 0, 0, 0));
    }

    #[test]
    fn anniversary_not_reached_yet_this_year() {
        // one second short of the first anniversary
        let now = at("2026-09-03T12:04:59+07:00");
        let got = compute_elapsed(&start(), &now);
        assert_eq!(got.years, 0);
        assert_eq!(got.months, 11);
        assert_eq!(got.apply_to(&start()), Some(now));
    }

    #[test]
    fn month_rollover_wraps_across_new_year() {
        let now = at("2026-02-10T08:00:00+07:00");
        let got = compute_elapsed(&start(), &now);
        assert_eq!((got.years, got.months), (0, 5));
        // Feb 3 12:05 → Feb 10 08:00 is 6 days 19h 55m
        assert_eq!(got, bd(0, 5, 0, 6, 19, 55, 0));
    }

    #[test]
    fn now_in_another_zone_is_the_same_instant() {
        let now_utc = at("2025-10-05T05:05:00+00:00").with_timezone(&Utc);
        assert_eq!(compute_elapsed(&start(), &now_utc), bd(0, 1, 0, 2, 0, 0, 0));
    }

    #[test]
    fn now_before_start_clamps_to_zero() {
        let now = at("2020-01-01T00:00:00+07:00");
        assert!(compute_elapsed(&start(), &now).is_zero());
    }

    #[test]
    fn sub_second_parts_are_truncated() {
        let now = at("2025-09-03T12:05:01.999+07:00");
        assert_eq!(compute_elapsed(&start(), &now), bd(0, 0, 0, 0, 0, 0, 1));
    }

    #[test]
    fn end_of_month_start_clamps_instead_of_overflowing() {
        let s = at("2025-01-31T10:00:00+00:00");
        let now = at("2025-03-01T10:00:00+00:00");
        let got = compute_elapsed(&s, &now);
        // Jan 31 + 1 month = Feb 28; Feb 28 → Mar 1 is one day
        assert_eq!(got, bd(0, 1, 0, 1, 0, 0, 0));
        assert_eq!(got.apply_to(&s), Some(now));
    }

    #[test]
    fn leap_day_start() {
        let s = at("2024-02-29T09:00:00+00:00");
        let now = at("2025-02-28T09:00:00+00:00");
        let got = compute_elapsed(&s, &now);
        assert_eq!(got, bd(1, 0, 0, 0, 0, 0, 0));
        assert_eq!(got.apply_to(&s), Some(now));
    }

    /// Walk forward from `s` in irregular steps, checking field bounds and
    /// exact reconstruction at every stop.
    fn walk_and_check(s: DateTime<FixedOffset>, stops: i64) {
        let mut now = s;
        for i in 0..stops {
            now += Duration::seconds(19 * 3_600 + 7 * 60 + 11 + i * 29);
            let got = compute_elapsed(&s, &now);
            assert!(got.months <= 11, "{got:?} at {now}");
            assert!(got.weeks <= 4, "{got:?} at {now}");
            assert!(got.days < 7 && got.hours < 24, "{got:?} at {now}");
            assert!(got.minutes < 60 && got.seconds < 60, "{got:?} at {now}");
            assert_eq!(got.apply_to(&s), Some(now), "at {now}");
        }
    }

    #[test]
    fn fields_stay_in_bounds_and_reconstruct_exactly() {
        walk_and_check(start(), 2_000);
    }

    #[test]
    fn leap_day_start_stays_in_bounds_across_years() {
        // ~10 years, crosses Feb 2028 and Feb 2032
        walk_and_check(at("2024-02-29T09:00:00+00:00"), 3_000);
    }

    #[test]
    fn month_end_start_stays_in_bounds_across_years() {
        walk_and_check(at("2025-01-31T22:30:00+00:00"), 3_000);
    }

    #[test]
    fn leap_day_start_just_before_next_leap_anniversary() {
        let s = at("2024-02-29T09:00:00+00:00");
        let now = at("2028-02-28T12:00:00+00:00");
        let got = compute_elapsed(&s, &now);
        // 2024-02-29 + 47 months = 2028-01-29 09:00, then 30d 3h
        assert_eq!(got, bd(3, 11, 4, 2, 3, 0, 0));
        assert_eq!(got.apply_to(&s), Some(now));
    }

    #[test]
    fn ticking_one_second_adds_exactly_one_second() {
        let s = at("2025-01-31T23:59:30+00:00");
        // straddle the Jan 31 → Feb → Mar boundaries
        let mut now = at("2025-02-28T23:59:00+00:00");
        let mut prev_total: Option<i64> = None;
        for _ in 0..180 {
            let got = compute_elapsed(&s, &now);
            let total = (got.apply_to(&s).expect("in range") - s).num_seconds();
            if let Some(p) = prev_total {
                assert_eq!(total, p + 1, "at {now}");
            }
            prev_total = Some(total);
            now += Duration::seconds(1);
        }
    }
}
