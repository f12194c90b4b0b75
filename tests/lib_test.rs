//! Library integration tests.

use envstitch::EnvStitchError;

#[test]
fn error_types_are_public() {
    let err = EnvStitchError::EnvFileRead {
        path: std::path::PathBuf::from("/repo/.env"),
        source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
    };
    assert!(err.to_string().contains("/repo/.env"));
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> envstitch::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn cli_types_are_public() {
    use clap::Parser;
    use envstitch::cli::{Cli, Commands};

    let cli = Cli::parse_from(["envstitch", "placeholders", "--json"]);
    assert!(cli.command.is_some());

    if let Some(Commands::Placeholders(args)) = cli.command {
        assert!(args.json);
    } else {
        panic!("Expected Placeholders command");
    }
}

#[test]
fn override_key_set_is_fixed() {
    use envstitch::env::{APP_SCHEME_VAR, AUTH0_DOMAIN_VAR, OVERRIDE_KEYS};

    assert_eq!(OVERRIDE_KEYS, [AUTH0_DOMAIN_VAR, APP_SCHEME_VAR]);
}
