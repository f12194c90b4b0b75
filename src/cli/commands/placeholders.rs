//! Manifest placeholder output.
//!
//! The `envstitch placeholders` command resolves the environment properties
//! and prints the two manifest placeholder assignments the build injects.

use std::path::{Path, PathBuf};

use crate::cli::args::PlaceholdersArgs;
use crate::env::EnvResolver;
use crate::manifest::ManifestPlaceholders;

use super::dispatcher::{Command, CommandResult};

/// The placeholders command implementation.
pub struct PlaceholdersCommand {
    project_root: PathBuf,
    args: PlaceholdersArgs,
}

impl PlaceholdersCommand {
    /// Create a new placeholders command.
    pub fn new(project_root: &Path, args: PlaceholdersArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            args,
        }
    }
}

impl Command for PlaceholdersCommand {
    fn execute(&self) -> crate::error::Result<CommandResult> {
        let resolver = EnvResolver::for_project(&self.project_root);
        let properties = resolver.resolve()?;
        let placeholders = ManifestPlaceholders::from_properties(&properties, &self.args.app_id);

        if self.args.json {
            println!("{}", serde_json::to_string_pretty(&placeholders)?);
        } else {
            println!("{}", placeholders.render());
        }

        Ok(CommandResult::success())
    }
}
