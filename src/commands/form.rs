use anyhow::{Context, Result};

use crate::config::BmiScaleConfig;
use crate::tui::TuiManager;

/// Show the interactive form until the user quits.
pub fn run_form(config: &BmiScaleConfig) -> Result<()> {
    let mut tui = TuiManager::new(config).context("Failed to initialize terminal")?;
    tui.run().context("Terminal form failed")?;
    tui.cleanup().context("Failed to restore terminal")?;
    Ok(())
}
