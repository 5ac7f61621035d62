//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueHint};

/// Composite coffee-shop orders: priced items, add-ins and order summaries
#[derive(Parser, Debug)]
#[command(name = "brewtree")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Debug output, repeat for more (-d info, -dd debug, -ddd trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub debug: u8,

    /// Config file layered over the global config
    #[arg(short, long, global = true, env = "BREWTREE_CONFIG", value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Currency symbol, overrides config
    #[arg(long, global = true)]
    pub currency: Option<String>,

    /// Print author and version
    #[arg(long)]
    pub info: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the reference order: Turkish coffee with sugar and milk, France coffee with milk
    Demo {
        /// Show the order as a tree
        #[arg(long)]
        tree: bool,
    },

    /// Build an order from menu lines, e.g. `turkish+sugar+milk france+milk`
    Order {
        /// Order lines: coffee[+addin...]
        #[arg(required = true)]
        lines: Vec<String>,
        /// Show the order as a tree
        #[arg(long)]
        tree: bool,
    },

    /// List the menu
    Menu,

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print effective settings as TOML
    Show,
    /// Print global config file path
    Path,
}
