// Unit tests for command-line parsing

use crate::cli::{Cli, Command, DEFAULT_CONFIG_PATH};

use clap::Parser;

#[test]
fn given_create_user_args_when_parsed_then_builds_create_user_command() {
    let cli = Cli::try_parse_from([
        "userctl",
        "create-user",
        "--email",
        "ada@example.com",
        "--password",
        "s3cret",
    ])
    .unwrap();

    assert_eq!(cli.config.to_str(), Some(DEFAULT_CONFIG_PATH));
    assert!(!cli.verbose);
    assert!(matches!(cli.command, Command::CreateUser(_)));
    assert_eq!(cli.command.credentials().email, "ada@example.com");
}

#[test]
fn given_global_flags_when_parsed_then_config_and_verbose_are_set() {
    let cli = Cli::try_parse_from([
        "userctl",
        "--config",
        "/etc/userctl.toml",
        "-v",
        "create-token",
        "--email",
        "ada@example.com",
        "--password",
        "s3cret",
    ])
    .unwrap();

    assert_eq!(cli.config.to_str(), Some("/etc/userctl.toml"));
    assert!(cli.verbose);
    assert!(matches!(cli.command, Command::CreateToken(_)));
}

#[test]
fn given_unknown_subcommand_when_parsed_then_fails() {
    let result = Cli::try_parse_from(["userctl", "delete-user", "--email", "a@b.c"]);

    assert!(result.is_err());
}

/// **VALUE**: Credentials are checked before they're sent.
#[test]
fn given_invalid_email_when_converted_to_user_then_returns_validation_error() {
    let cli = Cli::try_parse_from([
        "userctl",
        "create-user",
        "--email",
        "not-an-email",
        "--password",
        "s3cret",
    ])
    .unwrap();

    assert!(cli.command.credentials().to_user().is_err());
}
