//! Tests for CLI dispatch, the `--currency` override and exit codes

use clap::Parser;
use rstest::rstest;

use brewtree::application::ApplicationError;
use brewtree::cli::{execute_command, load_settings, Cli, CliError};
use brewtree::domain::DomainError;
use brewtree::exitcode;
use brewtree::util::testing::init_test_setup;

#[test]
fn given_no_subcommand_when_executing_then_usage_error() {
    init_test_setup();
    let cli = Cli::try_parse_from(["brewtree"]).unwrap();

    let err = execute_command(&cli).unwrap_err();

    assert!(matches!(err, CliError::Usage(_)));
    assert_eq!(err.exit_code(), exitcode::USAGE);
}

#[rstest]
#[case("")]
#[case("   ")]
fn given_blank_currency_when_loading_settings_then_invalid_args(#[case] currency: &str) {
    let cli = Cli::try_parse_from(["brewtree", "--currency", currency, "menu"]).unwrap();

    let err = load_settings(&cli).unwrap_err();

    assert!(matches!(err, CliError::InvalidArgs(_)));
    assert_eq!(err.exit_code(), exitcode::USAGE);
}

#[test]
fn given_blank_currency_when_executing_then_fails_before_dispatch() {
    let cli = Cli::try_parse_from(["brewtree", "--currency", " ", "menu"]).unwrap();

    let err = execute_command(&cli).unwrap_err();

    assert!(matches!(err, CliError::InvalidArgs(_)));
}

#[test]
fn given_currency_flag_when_loading_settings_then_overrides_config() {
    let cli = Cli::try_parse_from(["brewtree", "--currency", "EUR", "demo"]).unwrap();

    let settings = load_settings(&cli).unwrap();

    assert_eq!(settings.currency, "EUR");
    assert_eq!(settings.price_format().currency, "EUR");
}

#[test]
fn given_currency_flag_after_subcommand_when_parsing_then_is_global() {
    let cli = Cli::try_parse_from(["brewtree", "menu", "--currency", "£"]).unwrap();

    assert_eq!(cli.currency.as_deref(), Some("£"));
}

#[test]
fn given_order_without_lines_when_parsing_then_clap_rejects() {
    assert!(Cli::try_parse_from(["brewtree", "order"]).is_err());
}

#[rstest]
#[case(ApplicationError::Config { message: "bad".into() }, exitcode::CONFIG)]
#[case(ApplicationError::EmptyOrder, exitcode::USAGE)]
#[case(ApplicationError::Domain(DomainError::UnknownMenuItem("tea".into())), exitcode::DATAERR)]
fn given_application_error_when_mapping_then_sysexits_code(
    #[case] error: ApplicationError,
    #[case] expected: i32,
) {
    assert_eq!(CliError::from(error).exit_code(), expected);
}
