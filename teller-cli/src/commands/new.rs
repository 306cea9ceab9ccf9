//! New command - open an account and set its PIN

use anyhow::Result;
use colored::Colorize;

use teller_core::domain::account::AccountDetails;
use teller_core::ports::input::{self, InputPort};

use super::get_context;
use crate::input::ConsoleInput;

pub fn run(account: Option<u32>, details: Option<String>, json: bool) -> Result<()> {
    let ctx = get_context()?;
    let mut console = ConsoleInput;

    let account = match account {
        Some(n) => n,
        None => input::prompt_u32_in_range(
            &mut console,
            &format!("Account number (1 - {})", ctx.config.capacity),
            1,
            ctx.config.capacity,
        )?,
    };

    let details_line = match details {
        Some(d) => d,
        None => console.read_line("Enter lastname, firstname, balance")?,
    };
    let details = AccountDetails::parse(&details_line)?;

    let record = ctx.teller.create(&mut console, account, &details)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&record)?);
    } else {
        println!("{}", "Account created and PIN set".green());
        println!("  Account: {}", record.number);
        println!(
            "  Holder: {} {}",
            record.first_name.as_str(),
            record.last_name.as_str()
        );
        println!("  Balance: ${:.2}", record.balance);
    }

    Ok(())
}
