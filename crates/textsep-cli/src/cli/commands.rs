//! # CLI Layer
//!
//! The only place in textsep that:
//! - Knows about terminal I/O (stdin, stdout, stderr)
//! - Installs the tracing subscriber
//! - Converts 1-based user indexes into 0-based positions
//!
//! Each handler calls one API method and prints what comes back.

use super::render;
use super::setup::{parse_cli, Cli, Commands, FolderCommands};
use anyhow::{bail, Context, Result};
use std::io::{IsTerminal, Read};
use textsep::api::TextsepApi;
use textsep::clipboard::SystemClipboard;
use textsep::commands::config::ConfigAction;
use textsep::commands::CmdResult;
use textsep::init::initialize;
use textsep::model::FolderId;
use textsep::store::fs_backend::FsBackend;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

type Api = TextsepApi<FsBackend, SystemClipboard>;

const LOG_ENV_VAR: &str = "TEXTSEP_LOG";

pub fn run() -> Result<()> {
    let cli = parse_cli();
    init_logging(cli.verbose);

    let mut ctx = initialize(cli.data.clone())?;
    if let Some(strategy) = cli.strategy {
        ctx.api.set_strategy(strategy);
    }
    eprint!("{}", render::render_messages(&ctx.api.take_warnings()));

    dispatch(&mut ctx.api, cli)
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("textsep=debug,textsep_cli=debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV_VAR)
            .or_else(|_| EnvFilter::try_from_default_env())
            .unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    // A second init (tests) is harmless.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

fn dispatch(api: &mut Api, cli: Cli) -> Result<()> {
    let Some(command) = cli.command else {
        return handle_list(api, FolderId::Saved, None, None);
    };
    tracing::debug!(?command, "dispatching");

    match command {
        Commands::Add { text, folder } => {
            let text = text_or_stdin(text)?;
            let result = api.process_into(&folder, &text)?;
            print_result(&result);
        }
        Commands::Detect { text } => {
            let text = text_or_stdin(text)?;
            let result = api.preview(&text)?;
            print!("{}", render::render_detected(&result.affected_items));
            print_result(&result);
        }
        Commands::List {
            folder,
            page,
            per_page,
        } => return handle_list(api, folder, page, per_page),
        Commands::Copy { index, folder } => {
            print_result(&api.copy_item(&folder, zero_based(index)?)?);
        }
        Commands::Remove { index, folder } => {
            print_result(&api.remove(&folder, zero_based(index)?)?);
        }
        Commands::Take { index, folder } => {
            print_result(&api.copy_and_remove(&folder, zero_based(index)?)?);
        }
        Commands::Edit {
            index,
            content,
            folder,
        } => {
            print_result(&api.edit(&folder, zero_based(index)?, &content)?);
        }
        Commands::Restore { index } => {
            print_result(&api.restore(zero_based(index)?)?);
        }
        Commands::Move { index, to, folder } => {
            print_result(&api.move_item(&folder, zero_based(index)?, &to)?);
        }
        Commands::Clear { folder } => print_result(&api.clear_all(&folder)?),
        Commands::Dedupe => print_result(&api.remove_duplicates()?),
        Commands::Prefix { prefix } => print_result(&api.bulk_add_prefix(&prefix)?),
        Commands::Separator { value } => {
            let result = match value {
                Some(value) => api.set_separator(&value)?,
                None => {
                    let result = api.separator()?;
                    if let Some(current) = &result.value {
                        println!("{}", current);
                    }
                    result
                }
            };
            print_result(&result);
        }
        Commands::Folders => {
            let result = api.folders()?;
            print!("{}", render::render_folders(&result.folders));
        }
        Commands::Folder { action } => {
            let result = match action {
                FolderCommands::Create { label } => api.create_folder(&label)?,
                FolderCommands::Rename { id, label } => api.rename_folder(&id, &label)?,
            };
            print_result(&result);
        }
        Commands::Config { key, value } => {
            let action = match (key, value) {
                (None, _) => ConfigAction::ShowAll,
                (Some(key), None) => ConfigAction::ShowKey(key),
                (Some(key), Some(value)) => ConfigAction::Set(key, value),
            };
            let result = api.config(&action)?;
            match (&action, &result.config, &result.value) {
                (ConfigAction::ShowAll, Some(config), _) => {
                    print!("{}", render::render_config(config));
                }
                (ConfigAction::ShowKey(_), _, Some(value)) => println!("{}", value),
                _ => {}
            }
            print_result(&result);
        }
    }
    Ok(())
}

fn handle_list(
    api: &mut Api,
    folder: FolderId,
    page: Option<usize>,
    per_page: Option<usize>,
) -> Result<()> {
    api.select_folder(folder)?;
    if let Some(size) = per_page {
        api.set_page_size(size)?;
    }
    if let Some(page) = page {
        api.go_to_page(page)?;
    }

    let result = api.list()?;
    if let Some(listed) = &result.listed {
        print!("{}", render::render_page(listed));
    }
    print_result(&result);
    Ok(())
}

fn print_result(result: &CmdResult) {
    print!("{}", render::render_messages(&result.messages));
}

/// `N` as typed by the user to a 0-based position.
fn zero_based(index: usize) -> Result<usize> {
    match index.checked_sub(1) {
        Some(i) => Ok(i),
        None => bail!("Indexes start at 1"),
    }
}

fn text_or_stdin(text: Option<String>) -> Result<String> {
    if let Some(text) = text {
        return Ok(text);
    }
    let stdin = std::io::stdin();
    if stdin.is_terminal() {
        bail!("No text given. Pass TEXT or pipe it on stdin");
    }
    let mut buffer = String::new();
    stdin
        .lock()
        .read_to_string(&mut buffer)
        .context("Failed to read stdin")?;
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indexes_are_one_based() {
        assert_eq!(zero_based(1).unwrap(), 0);
        assert_eq!(zero_based(12).unwrap(), 11);
        assert!(zero_based(0).is_err());
    }

    #[test]
    fn explicit_text_skips_stdin() {
        assert_eq!(text_or_stdin(Some("hi".into())).unwrap(), "hi");
    }
}
