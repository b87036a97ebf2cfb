use super::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::listing::{ListQuery, Page};
use crate::db::queries::load_all;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::info;
use crate::utils::date;
use crate::utils::formatting::{describe_kind, dim};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        search,
        kind,
        author,
        from,
        to,
        sort,
        order,
        page,
        page_size,
        json,
    } = cmd
    {
        let query = ListQuery {
            search: search.clone(),
            kind: *kind,
            author: author.clone(),
            from: normalize_bound(from.as_deref())?,
            to: normalize_bound(to.as_deref())?,
            sort_by: *sort,
            order: *order,
            page: *page,
            page_size: page_size.unwrap_or(cfg.page_size),
        };

        let mut pool = open_store(cfg)?;
        let days = load_all(&mut pool)?;
        let result = query.apply(&days);

        if *json {
            println!("{}", serde_json::to_string_pretty(&result)?);
            return Ok(());
        }

        if result.items.is_empty() {
            info("No special days found.");
            return Ok(());
        }

        print_page(&result);
    }

    Ok(())
}

fn normalize_bound(raw: Option<&str>) -> AppResult<Option<String>> {
    raw.map(|s| {
        date::parse_date(s)
            .map(|d| date::format_date(&d))
            .ok_or_else(|| AppError::InvalidDate(s.to_string()))
    })
    .transpose()
}

fn print_page(page: &Page<'_>) {
    let mut table = Table::new(vec![
        Column::new("ID", 6),
        Column::new("Date", 10),
        Column::new("Kind", 11),
        Column::new("Title", 32),
        Column::new("Author", 16),
        Column::new("Note", 40),
    ]);

    for d in &page.items {
        table.add_row(vec![
            d.id.to_string(),
            d.date.clone(),
            describe_kind(d.kind).0.to_string(),
            d.title_or_default().to_string(),
            d.author_or_default().to_string(),
            d.note.clone().unwrap_or_default(),
        ]);
    }

    print!("{}", table.render());
    println!(
        "\n{}",
        dim(&format!(
            "Page {}/{} ({} total)",
            page.page, page.total_pages, page.total
        ))
    );
}
