//! Command dispatch

use std::io;

use clap::CommandFactory;
use clap_complete::generate;
use tracing::{debug, instrument};

use crate::application::{ApplicationError, OrderService, OrderSummary};
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::{global_config_path, Settings};
use crate::domain::{Order, OrderTree};

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let Some(command) = &cli.command else {
        return Err(CliError::Usage(
            "no command given, see `brewtree --help`".to_string(),
        ));
    };

    if let Commands::Completion { shell } = command {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        generate(*shell, &mut cmd, name, &mut io::stdout());
        return Ok(());
    }

    let settings = load_settings(cli)?;
    match command {
        Commands::Demo { tree } => _demo(&settings, *tree),
        Commands::Order { lines, tree } => _order(&settings, lines, *tree),
        Commands::Menu => _menu(&settings),
        Commands::Config { command } => _config(&settings, command),
        Commands::Completion { .. } => Ok(()),
    }
}

/// Load layered settings and apply the `--currency` override.
#[instrument(level = "debug", skip(cli))]
pub fn load_settings(cli: &Cli) -> CliResult<Settings> {
    let mut settings = Settings::load(cli.config.as_deref())?;
    if let Some(currency) = &cli.currency {
        if currency.trim().is_empty() {
            return Err(CliError::InvalidArgs("--currency must not be empty".into()));
        }
        settings.currency = currency.clone();
    }
    debug!(?settings, "effective settings");
    Ok(settings)
}

fn service(settings: &Settings) -> OrderService {
    OrderService::new(settings.menu.clone(), settings.price_format())
}

#[instrument(level = "debug", skip(settings))]
fn _demo(settings: &Settings, tree: bool) -> CliResult<()> {
    let service = service(settings);
    let order = service.demo_order()?;
    print_order(&service, &order, tree);
    Ok(())
}

#[instrument(level = "debug", skip(settings))]
fn _order(settings: &Settings, lines: &[String], tree: bool) -> CliResult<()> {
    let service = service(settings);
    let order = service.parse_and_build(lines)?;
    print_order(&service, &order, tree);
    Ok(())
}

fn print_order(service: &OrderService, order: &Order, tree: bool) {
    let OrderSummary {
        title,
        count,
        amount,
        format,
    } = service.summary(order);
    output::info(&title);
    if tree {
        output::info(&order.to_tree(&format));
    }
    output::action("Items", &count);
    output::action("Total", &format.render(amount));
}

#[instrument(level = "debug", skip(settings))]
fn _menu(settings: &Settings) -> CliResult<()> {
    let format = settings.price_format();
    output::header("Menu");
    for (key, entry) in settings.menu.iter() {
        output::detail(&format!(
            "{:<10} {:<20} {:>8}  {}",
            key,
            entry.name,
            format.render(entry.price),
            entry.kind
        ));
    }
    Ok(())
}

#[instrument(level = "debug", skip(settings))]
fn _config(settings: &Settings, command: &ConfigCommands) -> CliResult<()> {
    match command {
        ConfigCommands::Show => output::info(&settings.to_toml()?),
        ConfigCommands::Path => match global_config_path() {
            Some(path) => output::info(&path.display()),
            None => {
                return Err(ApplicationError::Config {
                    message: "no config directory available".to_string(),
                }
                .into());
            }
        },
    }
    Ok(())
}
