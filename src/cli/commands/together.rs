use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::compute_elapsed;
use crate::errors::{AppError, AppResult};
use crate::models::ElapsedBreakdown;
use crate::ui::messages::header;
use crate::utils::formatting::{elapsed_compact, elapsed_lines};
use chrono::{DateTime, FixedOffset, Timelike, Utc};
use std::io::{self, Write};
use std::thread;
use std::time::Duration;

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

#[derive(Clone, Copy)]
enum Style {
    Lines,
    Compact,
    Json,
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Together {
        now,
        watch,
        ticks,
        compact,
        json,
    } = cmd
    {
        let start = cfg.start()?;
        let style = if *json {
            Style::Json
        } else if *compact {
            Style::Compact
        } else {
            Style::Lines
        };

        if *watch {
            return watch_loop(&start, style, *ticks);
        }

        let now = match now {
            Some(s) => DateTime::parse_from_rfc3339(s.trim())
                .map_err(|_| AppError::InvalidInstant(s.clone()))?,
            None => Utc::now().fixed_offset(),
        };

        let elapsed = compute_elapsed(&start, &now);
        render(&start, &now, &elapsed, style, false)?;
    }

    Ok(())
}

/// Re-evaluate once per second, aligned to the wall-clock second. The
/// calculator keeps no state, so each tick is an independent call.
fn watch_loop(start: &DateTime<FixedOffset>, style: Style, ticks: Option<u64>) -> AppResult<()> {
    let mut done = 0u64;
    loop {
        let now = Utc::now().fixed_offset();
        let elapsed = compute_elapsed(start, &now);
        render(start, &now, &elapsed, style, true)?;

        done += 1;
        if ticks.is_some_and(|limit| done >= limit) {
            if matches!(style, Style::Compact) {
                println!();
            }
            return Ok(());
        }

        let to_next_second = 1_000 - (now.nanosecond() / 1_000_000).min(999);
        thread::sleep(Duration::from_millis(to_next_second as u64));
    }
}

fn render(
    start: &DateTime<FixedOffset>,
    now: &DateTime<FixedOffset>,
    elapsed: &ElapsedBreakdown,
    style: Style,
    live: bool,
) -> AppResult<()> {
    let mut out = io::stdout().lock();
    match style {
        Style::Json => {
            let doc = serde_json::json!({
                "start": start.to_rfc3339(),
                "now": now.to_rfc3339(),
                "elapsed": elapsed,
            });
            writeln!(out, "{}", serde_json::to_string(&doc)?)?;
        }
        Style::Compact if live => {
            write!(out, "\r{}", elapsed_compact(elapsed))?;
            out.flush()?;
        }
        Style::Compact => writeln!(out, "{}", elapsed_compact(elapsed))?,
        Style::Lines => {
            if live {
                write!(out, "{CLEAR_SCREEN}")?;
            }
            drop(out);
            header(format!("Together since {}", start.format("%Y-%m-%d %H:%M %:z")));
            let mut out = io::stdout().lock();
            for line in elapsed_lines(elapsed) {
                writeln!(out, "{line}")?;
            }
            out.flush()?;
        }
    }
    Ok(())
}
