//! # CLI Layer
//!
//! This module is **one possible UI client** for phonedir, not the application
//! itself. It is the only place in the codebase that:
//! - Knows about terminal I/O (stdin, stdout, stderr)
//! - Handles argument parsing
//! - Formats output for human consumption
//!
//! ## Structure
//!
//! - `run()`: Main dispatch logic (called by `main.rs`)
//! - `init_context()`: Loads configuration, starts file logging, opens the directory
//! - `handle_*()`: Per-command handlers that call the API and print results
//!
//! Domain failures (bad input, unknown fields, invalid indexes) are printed
//! and the process exits normally. Anything else bubbles up to `main`.

use super::prompt::Prompter;
use super::render::{
    print_failure, print_messages, render_config_entries, render_field_menu, render_page,
    render_record,
};
use super::setup::{Cli, Commands, PageArgs};
use clap::Parser;
use flexi_logger::LoggerHandle;
use phonedir::api::{CmdResult, ConfigAction, DirectoryApi};
use phonedir::config::{default_config_dir, ConfigKey, DirectoryConfig};
use phonedir::error::{DirectoryError, Result};
use phonedir::logging::{init_file_logging, LogFacade};
use phonedir::model::{Field, RecordData};
use phonedir::page::PageRequest;
use phonedir::store::fs::FileStore;
use std::io::{self, BufRead, Write};
use std::rc::Rc;

struct AppContext {
    api: DirectoryApi<FileStore>,
    config: DirectoryConfig,
    _logger: Option<LoggerHandle>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context(&cli)?;

    let outcome = match cli.command {
        Some(Commands::Display(args)) => handle_display(&ctx, args),
        Some(Commands::Add) => handle_add(&mut ctx),
        Some(Commands::Edit { index }) => handle_edit(&mut ctx, index),
        Some(Commands::Search { query, page }) => handle_search(&ctx, &query, page),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        None => handle_display(&ctx, PageArgs::default()),
    };

    report_recoverable(outcome)
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let config_dir = default_config_dir()?;
    let config = match DirectoryConfig::load(&config_dir) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Warning: ignoring unreadable config: {}", e);
            DirectoryConfig::default()
        }
    };

    let logger = match init_file_logging(&config.log_level, &config.log_file) {
        Ok(handle) => Some(handle),
        Err(e) => {
            eprintln!("Warning: file logging disabled: {}", e);
            None
        }
    };

    let data_file = cli
        .file
        .clone()
        .unwrap_or_else(|| config.data_file.clone());
    let store = FileStore::new(data_file).with_policy(config.load_policy);
    let api = DirectoryApi::open(store, Rc::new(LogFacade))?.with_config_dir(config_dir);

    Ok(AppContext {
        api,
        config,
        _logger: logger,
    })
}

fn report_recoverable(outcome: Result<()>) -> Result<()> {
    match outcome {
        Err(e) if e.is_recoverable() => {
            print_failure(&e.to_string());
            Ok(())
        }
        other => other,
    }
}

fn page_request(ctx: &AppContext, args: &PageArgs) -> PageRequest {
    let size = args.records_per_page.unwrap_or(ctx.config.records_per_page);
    PageRequest::new(args.page, size)
}

fn print_listing(result: &CmdResult) {
    if let Some(page) = &result.listed {
        print!("{}", render_page(page));
    }
    print_messages(&result.messages);
}

fn handle_display(ctx: &AppContext, args: PageArgs) -> Result<()> {
    let result = ctx.api.display(page_request(ctx, &args))?;
    print_listing(&result);
    Ok(())
}

fn handle_search(ctx: &AppContext, query: &str, args: PageArgs) -> Result<()> {
    let result = ctx.api.search(query, page_request(ctx, &args))?;
    print_listing(&result);
    Ok(())
}

fn handle_add(ctx: &mut AppContext) -> Result<()> {
    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());
    let data = read_new_record(&mut prompter)?;

    match ctx.api.add_record(data) {
        Ok(result) => {
            print_messages(&result.messages);
            Ok(())
        }
        Err(DirectoryError::Validation(errs)) => {
            print_failure(&format!("Failed to create record: {}", errs));
            Ok(())
        }
        Err(e) => Err(e),
    }
}

fn read_new_record<R: BufRead, W: Write>(prompter: &mut Prompter<R, W>) -> Result<RecordData> {
    let mut values: [String; 6] = Default::default();
    for (slot, field) in values.iter_mut().zip(Field::ALL) {
        *slot = prompter.ask(&format!("{}: ", title_case(field.label())))?;
    }
    Ok(RecordData::from_values(values))
}

/// `Last name` → `Last Name`, matching the prompts users are used to.
fn title_case(label: &str) -> String {
    label
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

fn handle_edit(ctx: &mut AppContext, index: usize) -> Result<()> {
    let record = match ctx.api.get_record(index) {
        Ok(record) => record,
        Err(DirectoryError::RecordNotFound { .. }) => {
            print_failure("Invalid index.");
            return Ok(());
        }
        Err(e) => return Err(e),
    };

    println!("Current values:");
    print!("{}", render_record(record));
    println!("Choose a field to edit:");
    print!("{}", render_field_menu());

    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());
    let selection = prompter.ask("Enter the number of the field to edit: ")?;
    let field = match ctx.api.field_selection(&selection) {
        Ok(field) => field,
        Err(DirectoryError::UnknownField(_)) => {
            print_failure("Invalid input. Please enter a valid field number.");
            return Ok(());
        }
        Err(e) => return Err(e),
    };

    let value = prompter.ask(&format!("Enter the new value for {}: ", field.label()))?;
    match ctx.api.edit_record(index, field, value) {
        Ok(result) => {
            print_messages(&result.messages);
            Ok(())
        }
        Err(DirectoryError::InvalidFormat(err)) => {
            print_failure(&format!("Invalid input. {}", err));
            Ok(())
        }
        Err(e) => Err(e),
    }
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key.parse::<ConfigKey>()?),
        (Some(key), Some(value)) => ConfigAction::Set(key.parse::<ConfigKey>()?, value),
    };

    let result = ctx.api.config(action)?;
    print!("{}", render_config_entries(&result.config_entries));
    print_messages(&result.messages);
    Ok(())
}
