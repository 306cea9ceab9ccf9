//! Update command - apply a charge or payment to an account

use anyhow::Result;
use colored::Colorize;

use teller_core::ports::input;

use super::get_context;
use crate::input::ConsoleInput;

pub fn run(account: Option<u32>, amount: Option<f64>, json: bool) -> Result<()> {
    let ctx = get_context()?;
    let mut console = ConsoleInput;

    let account = match account {
        Some(n) => n,
        None => input::prompt_u32_in_range(
            &mut console,
            "Account to update",
            1,
            ctx.config.capacity,
        )?,
    };

    let amount = match amount {
        Some(a) => a,
        None => input::prompt_amount(&mut console, "Enter charge (+) or payment (-)")?,
    };

    let balance = ctx.teller.adjust_balance(&mut console, account, amount)?;

    if json {
        println!(
            "{}",
            serde_json::json!({ "account": account, "balance": balance })
        );
    } else {
        println!("{}", "Balance updated".green());
        println!("  Account: {}", account);
        println!("  New balance: ${:.2}", balance);
    }

    Ok(())
}
