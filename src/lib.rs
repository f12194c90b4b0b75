//! envstitch - Environment property resolution for mobile builds.
//!
//! envstitch loads environment-specific build secrets (an Auth0 domain and
//! an application URL scheme) from dotenv-style files, overlays select
//! process environment variables, and renders the result as Android
//! manifest placeholder values. It runs once per build invocation.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`env`] - Env file parsing and property resolution
//! - [`error`] - Error types and result aliases
//! - [`manifest`] - Manifest placeholder derivation
//!
//! # Example
//!
//! ```
//! use envstitch::env::EnvResolver;
//! use envstitch::manifest::ManifestPlaceholders;
//! use std::path::PathBuf;
//!
//! // No env file on disk; scheme comes from the process environment.
//! let resolver = EnvResolver::new(vec![PathBuf::from("/nonexistent/.env")]);
//! let props = resolver
//!     .resolve_with_lookup(|key| (key == "APP_SCHEME").then(|| "myapp".to_string()))
//!     .unwrap();
//!
//! let placeholders = ManifestPlaceholders::from_properties(&props, "com.example.app");
//! assert_eq!(placeholders.auth0_scheme, "myapp");
//! assert_eq!(placeholders.auth0_domain, "");
//! ```

pub mod cli;
pub mod env;
pub mod error;
pub mod manifest;

pub use error::{EnvStitchError, Result};
