use super::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calendar::{Badge, DayCell, MonthGrid};
use crate::core::recurrence::split_calendar_date;
use crate::db::queries::load_range;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::header;
use crate::utils::date;
use crate::utils::formatting::{badge_marker, bold, describe_kind, dim, plural};
use chrono::Datelike;
use log::debug;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Calendar { month } = cmd {
        let (year, month) = match month {
            Some(m) => date::parse_year_month(m).ok_or_else(|| AppError::InvalidMonth(m.clone()))?,
            None => {
                let t = date::today();
                (t.year(), t.month())
            }
        };

        let (from, to) = cfg.recurrence_window().bounds(year, month);
        debug!("event=calendar_fetch year={year} month={month} from={from} to={to}");

        let mut pool = open_store(cfg)?;
        let events = load_range(&mut pool, &from, &to)?;

        let grid = MonthGrid::build(year, month, cfg.week_starts_on, &events)
            .ok_or_else(|| AppError::InvalidMonth(format!("{year}-{month:02}")))?;

        header(format!("{} {}", date::month_name(month), year));
        print_grid(&grid);
        print_entries(&grid);
    }

    Ok(())
}

fn print_grid(grid: &MonthGrid<'_>) {
    let today = date::today();

    let headers: Vec<String> = grid
        .week_start
        .headers()
        .iter()
        .map(|h| format!("{h:<3}"))
        .collect();
    println!("{}", bold(headers.join(" ").trim_end()));

    for week in grid.weeks() {
        let row: Vec<String> = week
            .iter()
            .map(|slot| match slot {
                Some(cell) => day_slot(cell, cell.date == today),
                None => "   ".to_string(),
            })
            .collect();
        println!("{}", row.join(" ").trim_end());
    }
}

fn day_slot(cell: &DayCell<'_>, is_today: bool) -> String {
    let num = format!("{:>2}", cell.date.day());
    let num = if is_today { bold(&num) } else { num };
    format!("{num}{}", badge_marker(cell.badge))
}

fn print_entries(grid: &MonthGrid<'_>) {
    let marked: Vec<&DayCell<'_>> = grid
        .cells
        .iter()
        .filter(|c| c.badge != Badge::None)
        .collect();

    println!();
    if marked.is_empty() {
        println!("{}", dim("No special days this month."));
        return;
    }

    for cell in marked {
        let key = cell.date.format("%m-%d");
        for ev in cell.shown() {
            let (label, _) = describe_kind(ev.kind);
            let marker = match cell.badge {
                Badge::Yearly(_) => "♥",
                _ => "*",
            };
            let mut line = format!("{key} {marker} {label}: {}", ev.title_or_default());

            if matches!(cell.badge, Badge::Yearly(_))
                && let Some((y, _, _)) = split_calendar_date(&ev.date)
                && grid.year > y
            {
                let years = (grid.year - y) as u32;
                line.push_str(&dim(&format!(" (since {y}, {})", plural(years, "years"))));
            }
            println!("{line}");
        }
    }
}
