//! List command - show active accounts

use anyhow::Result;

use super::get_context;
use crate::output;

pub fn run(json: bool) -> Result<()> {
    let ctx = get_context()?;
    let records = ctx.teller.list()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    if records.is_empty() {
        output::warning("No active accounts");
        return Ok(());
    }

    let mut table = output::create_table();
    table.set_header(vec!["Acct", "Last Name", "First Name", "Balance"]);
    for record in &records {
        table.add_row(vec![
            record.number.to_string(),
            record.last_name.as_str().to_string(),
            record.first_name.as_str().to_string(),
            format!("{:.2}", record.balance),
        ]);
    }
    println!("{table}");

    Ok(())
}
