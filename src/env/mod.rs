//! Environment property loading and resolution.
//!
//! Builds the property map the native build step consumes. The priority
//! chain is:
//!
//! 1. Process environment variables, for the fixed override keys only
//! 2. The first existing candidate file (`../.env.local`, then `../.env`)
//! 3. Absent

pub mod file;
pub mod resolver;

pub use file::{load_env_file, parse_env_file};
pub use resolver::{EnvResolver, APP_SCHEME_VAR, AUTH0_DOMAIN_VAR, OVERRIDE_KEYS};
