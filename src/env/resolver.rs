//! Environment property resolution.
//!
//! Resolves the build's environment properties using the priority chain:
//! 1. Process environment variables (override keys only)
//! 2. First existing candidate file (`../.env.local`, then `../.env`)
//! 3. Absent (the consumer applies its own fallbacks)

use super::file::load_env_file;
use crate::error::Result;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Environment variable holding the Auth0 tenant domain.
pub const AUTH0_DOMAIN_VAR: &str = "AUTH0_DOMAIN";

/// Environment variable holding the application URL scheme.
pub const APP_SCHEME_VAR: &str = "APP_SCHEME";

/// Keys eligible for replacement from the process environment.
///
/// This is a fixed set, not a general rule: only these keys are consulted
/// in the process environment, and only non-blank values take effect.
pub const OVERRIDE_KEYS: &[&str] = &[AUTH0_DOMAIN_VAR, APP_SCHEME_VAR];

/// Resolves build environment properties from candidate env files and
/// process environment overrides.
///
/// The candidate list is checked in order and only the FIRST existing file
/// is read — even if it turns out to be empty or malformed, later candidates
/// are never consulted. Override keys from the process environment then win
/// over anything the file provided.
///
/// # Example
///
/// ```
/// use envstitch::env::EnvResolver;
/// use std::path::PathBuf;
///
/// let resolver = EnvResolver::new(vec![PathBuf::from("/nonexistent/.env")]);
/// let props = resolver.resolve_with_lookup(|_| None).unwrap();
/// assert!(props.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct EnvResolver {
    candidates: Vec<PathBuf>,
}

impl EnvResolver {
    /// Create a resolver over an explicit ordered candidate file list.
    pub fn new(candidates: Vec<PathBuf>) -> Self {
        Self { candidates }
    }

    /// Create a resolver for a native build project directory.
    ///
    /// Candidate files live in the project's parent (the app repository
    /// root): `../.env.local` first, `../.env` second.
    pub fn for_project(project_root: &Path) -> Self {
        let repo_root = project_root.join("..");
        Self::new(vec![repo_root.join(".env.local"), repo_root.join(".env")])
    }

    /// The candidate files, in priority order.
    pub fn candidates(&self) -> &[PathBuf] {
        &self.candidates
    }

    /// Resolve properties against the real process environment.
    pub fn resolve(&self) -> Result<HashMap<String, String>> {
        self.resolve_with_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve properties with an injected environment lookup.
    ///
    /// The lookup receives each override key name and returns the process
    /// environment value, if any. Tests pass fakes here instead of mutating
    /// real process state.
    pub fn resolve_with_lookup<F>(&self, lookup: F) -> Result<HashMap<String, String>>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut properties = HashMap::new();

        for path in &self.candidates {
            if path.exists() {
                tracing::debug!("Loading env properties from {}", path.display());
                properties = load_env_file(path)?;
                break;
            }
        }

        if properties.is_empty() {
            tracing::debug!("No env file contributed properties; overrides only");
        }

        for key in OVERRIDE_KEYS {
            if let Some(value) = lookup(key) {
                if !value.trim().is_empty() {
                    tracing::debug!("{} overridden from process environment", key);
                    properties.insert((*key).to_string(), value);
                }
            }
        }

        Ok(properties)
    }
}
