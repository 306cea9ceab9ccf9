//! Teller CLI - fixed-capacity account records in your terminal

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod input;
mod output;

use commands::{export, list, new, pin, remove, transfer, update};

/// Teller - account management in your terminal
#[derive(Parser)]
#[command(name = "teller", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Open a new account and set its PIN
    New {
        /// Account number
        account: Option<u32>,
        /// Account details as one line: lastname firstname balance
        #[arg(long)]
        details: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Apply a charge (+) or payment (-) to an account (auth required)
    Update {
        /// Account number
        account: Option<u32>,
        /// Signed amount to apply
        #[arg(long, allow_negative_numbers = true)]
        amount: Option<f64>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete an account (auth required)
    Remove {
        /// Account number
        account: Option<u32>,
    },

    /// Transfer funds between two accounts (source auth required)
    Transfer {
        /// Source account number
        #[arg(long)]
        from: Option<u32>,
        /// Destination account number
        #[arg(long)]
        to: Option<u32>,
        /// Amount to transfer
        #[arg(long)]
        amount: Option<f64>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Change an account's PIN (current PIN required)
    Pin {
        /// Account number
        account: Option<u32>,
    },

    /// List active accounts
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Export active accounts as fixed-width text
    Export {
        /// Destination path (defaults to the configured export file)
        output: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    output::init_colors();
    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::New { account, details, json } => new::run(account, details, json),
        Commands::Update { account, amount, json } => update::run(account, amount, json),
        Commands::Remove { account } => remove::run(account),
        Commands::Transfer { from, to, amount, json } => transfer::run(from, to, amount, json),
        Commands::Pin { account } => pin::run(account),
        Commands::List { json } => list::run(json),
        Commands::Export { output } => export::run(output),
    }
}
