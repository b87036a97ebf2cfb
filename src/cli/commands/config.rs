use crate::cli::parser::Commands;
use crate::config::Config;
use crate::config::migrate::{check_config_file, migrate_config_file};
use crate::errors::AppResult;
use crate::ui::messages::{error, info, success, warning};
use std::path::Path;
use std::process::Command;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Config {
        print_config,
        check,
        migrate,
        edit_config,
        editor,
    } = cmd
    else {
        return Ok(());
    };

    let path = Config::config_file();

    if *print_config {
        info(format!("Effective configuration ({})", path.display()));
        println!("{}", cfg.to_yaml()?);
    }

    if *check {
        let missing = check_config_file(&path)?;
        if missing.is_empty() {
            success("Configuration file is complete.");
        } else {
            warning(format!("Missing keys: {}", missing.join(", ")));
        }
    }

    if *migrate {
        migrate_config_file(&path)?;
    }

    if *edit_config {
        edit(&path, editor.as_deref());
    }

    Ok(())
}

fn default_editor() -> String {
    std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            if cfg!(target_os = "windows") {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        })
}

fn launch(editor: &str, path: &Path) -> bool {
    Command::new(editor)
        .arg(path)
        .status()
        .is_ok_and(|s| s.success())
}

/// Try the requested editor first, then `$EDITOR`/`$VISUAL`/platform default.
fn edit(path: &Path, requested: Option<&str>) {
    let fallback = default_editor();
    let first = requested.unwrap_or(&fallback);

    if launch(first, path) {
        success(format!("Configuration edited with '{first}'"));
        return;
    }
    if first == fallback {
        error(format!("Failed to run editor '{first}'"));
        return;
    }

    warning(format!("Editor '{first}' not available, falling back to '{fallback}'"));
    if launch(&fallback, path) {
        success(format!("Configuration edited with '{fallback}'"));
    } else {
        error(format!("Failed to run fallback editor '{fallback}'"));
    }
}
