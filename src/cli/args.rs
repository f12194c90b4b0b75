//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use crate::manifest::DEFAULT_APPLICATION_ID;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// envstitch - Environment property resolution for mobile builds.
#[derive(Debug, Parser)]
#[command(name = "envstitch")]
#[command(author, version, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the native build project (env files are searched in its parent)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the resolved property map (default if no command specified)
    Resolve(ResolveArgs),

    /// Print the manifest placeholder assignments
    Placeholders(PlaceholdersArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `resolve` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ResolveArgs {
    /// Output as JSON instead of KEY=VALUE lines
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `placeholders` command.
#[derive(Debug, Clone, clap::Args)]
pub struct PlaceholdersArgs {
    /// Output as JSON instead of placeholder=value lines
    #[arg(long)]
    pub json: bool,

    /// Application identifier used as the scheme fallback
    #[arg(long, env = "APPLICATION_ID", default_value = DEFAULT_APPLICATION_ID)]
    pub app_id: String,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
