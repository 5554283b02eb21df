use clap::{Parser, Subcommand};
use std::path::PathBuf;
use textsep::detect::Strategy;
use textsep::model::FolderId;

#[derive(Parser, Debug)]
#[command(
    name = "textsep",
    bin_name = "textsep",
    version,
    disable_help_subcommand = true
)]
#[command(about = "Split pasted text into separate items and keep them in folders", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Data directory (defaults to $TEXTSEP_DATA, then the OS data dir)
    #[arg(long, global = true, value_name = "DIR", help_heading = "Options")]
    pub data: Option<PathBuf>,

    /// Detection strategy for this run: pattern or delimiter
    #[arg(long, global = true, help_heading = "Options")]
    pub strategy: Option<Strategy>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Split text and store the items (reads stdin when TEXT is omitted)
    #[command(alias = "a", display_order = 1)]
    Add {
        text: Option<String>,

        /// Folder to add to
        #[arg(long, short, default_value = "saved")]
        folder: FolderId,
    },

    /// Show how text would be split, without storing anything
    #[command(display_order = 2)]
    Detect { text: Option<String> },

    /// List the items of a folder
    #[command(alias = "ls", display_order = 3)]
    List {
        #[arg(long, short, default_value = "saved")]
        folder: FolderId,

        /// Page to show (1-based)
        #[arg(long, short)]
        page: Option<usize>,

        /// Items per page: 10, 20 or 30
        #[arg(long)]
        per_page: Option<usize>,
    },

    /// Copy an item to the clipboard
    #[command(display_order = 10)]
    Copy {
        index: usize,

        #[arg(long, short, default_value = "saved")]
        folder: FolderId,
    },

    /// Remove an item (from "removed" this deletes it for good)
    #[command(alias = "rm", display_order = 11)]
    Remove {
        index: usize,

        #[arg(long, short, default_value = "saved")]
        folder: FolderId,
    },

    /// Copy an item to the clipboard and remove it
    #[command(display_order = 12)]
    Take {
        index: usize,

        #[arg(long, short, default_value = "saved")]
        folder: FolderId,
    },

    /// Replace an item's content
    #[command(display_order = 13)]
    Edit {
        index: usize,
        content: String,

        #[arg(long, short, default_value = "saved")]
        folder: FolderId,
    },

    /// Move an item from "removed" back to "saved"
    #[command(display_order = 14)]
    Restore { index: usize },

    /// Move an item to another folder
    #[command(alias = "mv", display_order = 15)]
    Move {
        index: usize,

        /// Destination folder id
        #[arg(long)]
        to: FolderId,

        #[arg(long, short, default_value = "saved")]
        folder: FolderId,
    },

    /// Remove every item in a folder
    #[command(display_order = 20)]
    Clear {
        #[arg(long, short, default_value = "saved")]
        folder: FolderId,
    },

    /// Drop repeated items from "saved", keeping the first of each
    #[command(display_order = 21)]
    Dedupe,

    /// Prepend text to every item in "saved"
    #[command(display_order = 22)]
    Prefix { prefix: String },

    /// Show or set the custom separator (an empty value resets it)
    #[command(display_order = 30)]
    Separator { value: Option<String> },

    /// List folders with their item counts
    #[command(display_order = 31)]
    Folders,

    /// Create or rename folders
    #[command(display_order = 32)]
    Folder {
        #[command(subcommand)]
        action: FolderCommands,
    },

    /// Show or change configuration
    #[command(display_order = 33)]
    Config {
        key: Option<String>,
        value: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum FolderCommands {
    /// Create a folder
    Create { label: String },

    /// Rename a folder
    Rename { id: FolderId, label: String },
}

pub fn parse_cli() -> Cli {
    Cli::parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn folder_defaults_to_saved() {
        let cli = Cli::try_parse_from(["textsep", "remove", "2"]).unwrap();
        match cli.command {
            Some(Commands::Remove { index, folder }) => {
                assert_eq!(index, 2);
                assert_eq!(folder, FolderId::Saved);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn global_options_parse_after_subcommand() {
        let cli =
            Cli::try_parse_from(["textsep", "add", "x", "--strategy", "delimiter", "-v"]).unwrap();
        assert_eq!(cli.strategy, Some(Strategy::Delimiter));
        assert!(cli.verbose);
    }

    #[test]
    fn invalid_folder_id_is_rejected() {
        assert!(Cli::try_parse_from(["textsep", "list", "--folder", "../x"]).is_err());
    }

    #[test]
    fn bare_invocation_has_no_command() {
        let cli = Cli::try_parse_from(["textsep"]).unwrap();
        assert!(cli.command.is_none());
    }
}
