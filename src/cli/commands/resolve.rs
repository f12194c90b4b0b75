//! Property map display.
//!
//! The `envstitch resolve` command prints the fully resolved property map,
//! sorted by key for deterministic output.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::cli::args::ResolveArgs;
use crate::env::EnvResolver;

use super::dispatcher::{Command, CommandResult};

/// The resolve command implementation.
pub struct ResolveCommand {
    project_root: PathBuf,
    args: ResolveArgs,
}

impl ResolveCommand {
    /// Create a new resolve command.
    pub fn new(project_root: &Path, args: ResolveArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            args,
        }
    }
}

impl Command for ResolveCommand {
    fn execute(&self) -> crate::error::Result<CommandResult> {
        let resolver = EnvResolver::for_project(&self.project_root);
        let properties = resolver.resolve()?;

        // BTreeMap gives stable key order in both output formats
        let sorted: BTreeMap<&str, &str> = properties
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();

        if self.args.json {
            println!("{}", serde_json::to_string_pretty(&sorted)?);
        } else {
            for (key, value) in &sorted {
                println!("{}={}", key, value);
            }
        }

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn executes_against_a_project_directory() {
        let temp = TempDir::new().unwrap();
        let project = temp.path().join("android");
        fs::create_dir_all(&project).unwrap();
        fs::write(temp.path().join(".env"), "FOO=bar").unwrap();

        let cmd = ResolveCommand::new(&project, ResolveArgs::default());
        let result = cmd.execute().unwrap();
        assert!(result.success);
    }

    #[test]
    fn succeeds_when_no_env_file_exists() {
        let temp = TempDir::new().unwrap();
        let project = temp.path().join("android");
        fs::create_dir_all(&project).unwrap();

        let cmd = ResolveCommand::new(&project, ResolveArgs { json: true });
        let result = cmd.execute().unwrap();
        assert!(result.success);
    }
}
