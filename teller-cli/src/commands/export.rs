//! Export command - write active accounts as fixed-width text

use std::path::PathBuf;

use anyhow::Result;

use super::{get_context, get_data_dir};
use crate::output;

pub fn run(output_path: Option<PathBuf>) -> Result<()> {
    let ctx = get_context()?;

    let destination =
        output_path.unwrap_or_else(|| get_data_dir().join(&ctx.config.export_file));
    let written = ctx.export.export(&destination)?;

    output::success(&format!(
        "Exported {} account(s) to {}",
        written,
        destination.display()
    ));
    Ok(())
}
