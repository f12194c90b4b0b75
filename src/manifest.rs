//! Manifest placeholder derivation.
//!
//! Turns the resolved property map into the two values the Android build
//! injects as manifest placeholders: the Auth0 tenant domain and the app's
//! callback URL scheme.

use crate::env::{APP_SCHEME_VAR, AUTH0_DOMAIN_VAR};
use serde::Serialize;
use std::collections::HashMap;

/// Application identifier used as the scheme fallback when `APP_SCHEME`
/// is absent from both the env file and the process environment.
pub const DEFAULT_APPLICATION_ID: &str = "com.kin.kin";

/// The resolved manifest placeholder values.
///
/// Field names serialize in the placeholder-slot spelling the manifest
/// uses (`auth0Domain`, `auth0Scheme`).
///
/// # Example
///
/// ```
/// use envstitch::manifest::ManifestPlaceholders;
/// use std::collections::HashMap;
///
/// let mut props = HashMap::new();
/// props.insert("AUTH0_DOMAIN".to_string(), "example.auth0.com".to_string());
///
/// let placeholders = ManifestPlaceholders::from_properties(&props, "com.example.app");
/// assert_eq!(placeholders.auth0_domain, "example.auth0.com");
/// assert_eq!(placeholders.auth0_scheme, "com.example.app");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ManifestPlaceholders {
    /// Auth0 tenant domain; empty string when unset in both sources.
    pub auth0_domain: String,
    /// Callback URL scheme; falls back to the application identifier.
    pub auth0_scheme: String,
}

impl ManifestPlaceholders {
    /// Derive placeholder values from resolved properties.
    pub fn from_properties(properties: &HashMap<String, String>, application_id: &str) -> Self {
        Self {
            auth0_domain: properties.get(AUTH0_DOMAIN_VAR).cloned().unwrap_or_default(),
            auth0_scheme: properties
                .get(APP_SCHEME_VAR)
                .cloned()
                .unwrap_or_else(|| application_id.to_string()),
        }
    }

    /// Render as `placeholder=value` lines for consumption by a build script.
    pub fn render(&self) -> String {
        format!(
            "auth0Domain={}\nauth0Scheme={}",
            self.auth0_domain, self.auth0_scheme
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn props(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn uses_resolved_values_when_present() {
        let placeholders = ManifestPlaceholders::from_properties(
            &props(&[
                ("AUTH0_DOMAIN", "example.auth0.com"),
                ("APP_SCHEME", "myapp"),
            ]),
            DEFAULT_APPLICATION_ID,
        );
        assert_eq!(placeholders.auth0_domain, "example.auth0.com");
        assert_eq!(placeholders.auth0_scheme, "myapp");
    }

    #[test]
    fn missing_domain_falls_back_to_empty_string() {
        let placeholders =
            ManifestPlaceholders::from_properties(&HashMap::new(), DEFAULT_APPLICATION_ID);
        assert_eq!(placeholders.auth0_domain, "");
    }

    #[test]
    fn missing_scheme_falls_back_to_application_id() {
        let placeholders =
            ManifestPlaceholders::from_properties(&HashMap::new(), DEFAULT_APPLICATION_ID);
        assert_eq!(placeholders.auth0_scheme, DEFAULT_APPLICATION_ID);
    }

    #[test]
    fn unrelated_properties_are_ignored() {
        let placeholders = ManifestPlaceholders::from_properties(
            &props(&[("FOO", "bar"), ("APP_SCHEME", "myapp")]),
            DEFAULT_APPLICATION_ID,
        );
        assert_eq!(placeholders.auth0_scheme, "myapp");
        assert_eq!(placeholders.auth0_domain, "");
    }

    #[test]
    fn serializes_with_placeholder_slot_names() {
        let placeholders = ManifestPlaceholders {
            auth0_domain: "example.auth0.com".to_string(),
            auth0_scheme: "myapp".to_string(),
        };
        let json = serde_json::to_value(&placeholders).unwrap();
        assert_eq!(json["auth0Domain"], "example.auth0.com");
        assert_eq!(json["auth0Scheme"], "myapp");
    }

    #[test]
    fn render_emits_one_assignment_per_line() {
        let placeholders = ManifestPlaceholders {
            auth0_domain: "example.auth0.com".to_string(),
            auth0_scheme: "myapp".to_string(),
        };
        assert_eq!(
            placeholders.render(),
            "auth0Domain=example.auth0.com\nauth0Scheme=myapp"
        );
    }
}
