//! Pin command - change an account's PIN

use anyhow::Result;

use teller_core::ports::input;

use super::get_context;
use crate::input::ConsoleInput;
use crate::output;

pub fn run(account: Option<u32>) -> Result<()> {
    let ctx = get_context()?;
    let mut console = ConsoleInput;

    let account = match account {
        Some(n) => n,
        None => {
            input::prompt_u32_in_range(&mut console, "Account number", 1, ctx.config.capacity)?
        }
    };

    ctx.teller.change_pin(&mut console, account)?;

    output::success("PIN changed successfully");
    Ok(())
}
