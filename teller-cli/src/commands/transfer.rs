//! Transfer command - move funds between two accounts

use anyhow::Result;
use colored::Colorize;

use teller_core::ports::input;

use super::get_context;
use crate::input::ConsoleInput;

pub fn run(
    from: Option<u32>,
    to: Option<u32>,
    amount: Option<f64>,
    json: bool,
) -> Result<()> {
    let ctx = get_context()?;
    let mut console = ConsoleInput;
    let capacity = ctx.config.capacity;

    let from = match from {
        Some(n) => n,
        None => input::prompt_u32_in_range(&mut console, "Transfer FROM account", 1, capacity)?,
    };
    let to = match to {
        Some(n) => n,
        None => input::prompt_u32_in_range(&mut console, "Transfer TO account", 1, capacity)?,
    };
    let amount = match amount {
        Some(a) => a,
        None => input::prompt_amount(&mut console, "Amount")?,
    };

    let receipt = ctx.teller.transfer(&mut console, from, to, amount)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&receipt)?);
    } else {
        println!("{}", "Transfer complete".green());
        println!(
            "  {} -> {}: ${:.2}",
            receipt.from, receipt.to, receipt.amount
        );
        println!("  Account {} balance: ${:.2}", receipt.from, receipt.source_balance);
        println!(
            "  Account {} balance: ${:.2}",
            receipt.to, receipt.destination_balance
        );
    }

    Ok(())
}
