//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `hints`: Resolve translation calls in source files to dictionary text
//! - `completions`: List dictionary keys as completion candidates
//! - `init`: Initialize fine-i18n configuration file
//! - `serve`: Start MCP server for editor and agent integration

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::config::{CONFIG_FILE_NAME, ConfigPatch};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Hints(cmd)) => cmd.common.verbose,
            Some(Command::Completions(cmd)) => cmd.common.verbose,
            Some(Command::Init(_)) | Some(Command::Serve) | None => false,
        }
    }
}

/// Common arguments shared by the dictionary commands.
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// Project root directory to search for dictionary files (default: current directory)
    #[arg(long)]
    pub source_root: Option<PathBuf>,

    /// Comma-separated dictionary file suffixes, e.g. ".properties,.json" (overrides config file)
    #[arg(long)]
    pub suffix: Option<String>,

    /// Translation function name (overrides config file)
    #[arg(long)]
    pub func_name: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl CommonArgs {
    pub fn root(&self) -> PathBuf {
        self.source_root
            .clone()
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// Command line values that take precedence over the config file.
    pub fn overrides(&self) -> ConfigPatch {
        ConfigPatch {
            i18n_file_suffix: self.suffix.clone(),
            i18n_func_name: self.func_name.clone(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Args)]
pub struct HintsCommand {
    /// Source files to resolve
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Print hints as JSON
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct CompletionsCommand {
    /// Only list candidates if this text (up to the cursor) ends in a
    /// translation call opening, e.g. `t("`
    #[arg(long)]
    pub line_prefix: Option<String>,

    /// Print candidates as JSON
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct InitCommand {
    /// Directory to create the config file in (default: current directory)
    #[arg(long)]
    pub source_root: Option<PathBuf>,
}

impl InitCommand {
    /// Where the config file goes. Relative to the working directory unless
    /// `--source-root` is given.
    pub fn config_path(&self) -> PathBuf {
        match &self.source_root {
            Some(dir) => dir.join(CONFIG_FILE_NAME),
            None => PathBuf::from(CONFIG_FILE_NAME),
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show the dictionary text for each translation call in the given files
    Hints(HintsCommand),
    /// List dictionary keys with their text
    Completions(CompletionsCommand),
    /// Initialize a new .finei18nrc.json configuration file
    Init(InitCommand),
    /// Start MCP server for editors and AI coding agents
    Serve,
}
