//! Terminal front end for the quote collection.
//!
//! # Responsibility
//! - Map subcommands onto widget events against the durable store.
//! - Print the resulting display region; alerts go to stderr.
//!
//! Each invocation is its own session: session state starts empty.

mod terminal_view;

use clap::{Parser, Subcommand};
use log::info;
use quotebook_core::db::open_db;
use quotebook_core::{
    init_logging, ConfigOverrides, MemoryKeyValueStore, QuoteApp, QuotebookConfig,
    SqliteKeyValueStore, UiEvent,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use std::process::ExitCode;
use terminal_view::TerminalView;

#[derive(Parser)]
#[command(name = "quotebook")]
#[command(version)]
#[command(about = "Keep a personal collection of quotes")]
struct Args {
    /// SQLite file holding the durable store.
    #[arg(long, env = "QUOTEBOOK_DB_PATH", global = true)]
    db_path: Option<String>,
    /// Absolute directory for rolling logs; logging is off when unset.
    #[arg(long, env = "QUOTEBOOK_LOG_DIR", global = true)]
    log_dir: Option<String>,
    #[arg(long, env = "QUOTEBOOK_LOG_LEVEL", global = true)]
    log_level: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show a random quote, optionally switching the category filter.
    Show {
        #[arg(long)]
        category: Option<String>,
    },
    /// Add a quote and display it.
    Add { text: String, category: String },
    /// List the category filter options; `*` marks the active one.
    Categories,
    /// Write the collection as pretty-printed JSON.
    Export {
        /// Output file; `-` prints to stdout. Defaults to `quotes.json`.
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Append the quotes from a JSON array file.
    Import { path: PathBuf },
}

fn main() -> ExitCode {
    let args = Args::parse();
    let config = QuotebookConfig::resolve(ConfigOverrides {
        db_path: args.db_path,
        log_dir: args.log_dir,
        log_level: args.log_level,
    });

    if let Some(log_dir) = &config.log_dir {
        if let Err(err) = init_logging(&config.log_level, &log_dir.to_string_lossy()) {
            eprintln!("warning: logging disabled: {err}");
        }
    }

    match run(&config, args.command) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &QuotebookConfig, command: Command) -> Result<ExitCode, String> {
    let view = match &command {
        Command::Add { text, category } => TerminalView::with_form(text.clone(), category.clone()),
        _ => TerminalView::new(),
    };
    // Read the import file before the store is opened.
    let import_contents = match &command {
        Command::Import { path } => Some(std::fs::read_to_string(path).map_err(|err| {
            format!("failed to read `{}`: {err}", path.display())
        })?),
        _ => None,
    };

    let conn = open_db(&config.db_path)
        .map_err(|err| format!("failed to open `{}`: {err}", config.db_path.display()))?;
    let mut app = QuoteApp::start(
        SqliteKeyValueStore::new(conn),
        MemoryKeyValueStore::new(),
        view,
        StdRng::from_entropy(),
    )
    .map_err(|err| err.to_string())?;
    info!("event=cli_start module=cli status=ok");

    match command {
        Command::Show { category } => {
            if let Some(category) = category {
                app.dispatch(UiEvent::FilterChanged(category))
                    .map_err(|err| err.to_string())?;
            }
            app.view().print_display();
        }
        Command::Add { .. } => {
            app.dispatch(UiEvent::AddQuote)
                .map_err(|err| err.to_string())?;
            if app.view().error_count() == 0 {
                app.view().print_display();
            }
        }
        Command::Categories => app.view().print_options(),
        Command::Export { out } => {
            app.dispatch(UiEvent::Export)
                .map_err(|err| err.to_string())?;
            if let Some((file_name, contents)) = app.view_mut().take_download() {
                write_export(out.unwrap_or_else(|| PathBuf::from(file_name)), &contents)?;
            }
        }
        Command::Import { .. } => {
            app.dispatch(UiEvent::ImportFile(import_contents))
                .map_err(|err| err.to_string())?;
        }
    }

    if app.view().error_count() > 0 {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}

fn write_export(out: PathBuf, contents: &str) -> Result<(), String> {
    if out.as_os_str() == "-" {
        println!("{contents}");
        return Ok(());
    }
    std::fs::write(&out, contents)
        .map_err(|err| format!("failed to write `{}`: {err}", out.display()))?;
    eprintln!("Exported to {}", out.display());
    Ok(())
}
