// Hide console window in release mode
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use anyhow::Result;
use portfolio::gui::PortfolioGui;
use portfolio::i18n::ContentCatalog;
use portfolio::profile::Profile;

fn main() -> Result<()> {
    // An incomplete translation aborts startup before any frame renders
    let catalog = ContentCatalog::bundled()?;
    let profile = Profile::bundled();

    PortfolioGui::run(catalog, profile)
}
