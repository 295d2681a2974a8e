//! GUI module for the portfolio page.
//!
//! Renders the single-page portfolio using the `egui` framework: navigation
//! bar, hero, about, skills, contact and footer sections.

mod page;
mod utils;

use crate::clock::{Clock, SystemClock};
use crate::i18n::{ContentCatalog, ContentRecord, Language};
use crate::profile::Profile;
use crate::state::Selection;
use eframe::egui;

/// Main GUI application structure.
///
/// Owns the injected content catalog and profile plus the single piece of
/// mutable UI state, the language selection. Every frame re-reads the
/// catalog for the active language, so a toggle redraws all localized text
/// in the same frame.
pub struct PortfolioGui {
    /// Localized display strings, read-only after startup
    catalog: ContentCatalog,
    /// Non-localized identity data (contacts, skill lists)
    profile: Profile,
    /// Currently selected display language
    selection: Selection,
    /// Year source for the footer copyright line
    clock: Box<dyn Clock>,
    /// Current theme mode
    dark_mode: bool,
    /// Cached dark theme visuals
    cached_dark_visuals: egui::Visuals,
    /// Cached light theme visuals
    cached_light_visuals: egui::Visuals,
}

impl PortfolioGui {
    /// Creates a new GUI instance with the given catalog and profile.
    pub fn new(catalog: ContentCatalog, profile: Profile) -> Self {
        Self::with_clock(catalog, profile, Box::new(SystemClock))
    }

    /// Creates a GUI instance with an injected clock.
    pub fn with_clock(catalog: ContentCatalog, profile: Profile, clock: Box<dyn Clock>) -> Self {
        Self {
            catalog,
            profile,
            selection: Selection::default(),
            clock,
            dark_mode: true,
            cached_dark_visuals: Self::create_dark_visuals(),
            cached_light_visuals: Self::create_light_visuals(),
        }
    }

    /// Returns the active language.
    pub fn language(&self) -> Language {
        self.selection.language()
    }

    /// Returns the content record for the active language.
    pub fn content(&self) -> &ContentRecord {
        self.catalog.lookup(self.selection.language())
    }

    /// Returns the identity data rendered into the page.
    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    /// Switches the page to the next language and returns it.
    pub fn toggle_language(&mut self) -> Language {
        self.selection.toggle()
    }

    /// Returns the label for the language toggle button.
    pub fn toggle_label(&self) -> &'static str {
        self.selection.toggle_label()
    }

    /// Returns the site mark shown in the navigation bar.
    ///
    /// First name of the active record plus the ".dev" suffix.
    pub fn nav_title(&self) -> String {
        let record = self.content();
        let first_name = record.name.split_whitespace().next().unwrap_or_default();
        format!("{first_name}.dev")
    }

    /// Returns the footer copyright line for the active language.
    ///
    /// The year comes from the clock at render time, it is never stored.
    pub fn footer_line(&self) -> String {
        let record = self.content();
        format!(
            "© {} {}. {}",
            self.clock.current_year(),
            record.name,
            record.rights
        )
    }

    /// Creates dark theme visuals configuration.
    fn create_dark_visuals() -> egui::Visuals {
        let mut visuals = egui::Visuals::dark();

        visuals.widgets.inactive.corner_radius = egui::CornerRadius::same(10);
        visuals.widgets.hovered.corner_radius = egui::CornerRadius::same(10);
        visuals.widgets.active.corner_radius = egui::CornerRadius::same(10);
        visuals.widgets.noninteractive.corner_radius = egui::CornerRadius::same(8);
        visuals.widgets.open.corner_radius = egui::CornerRadius::same(10);

        // Dark mode: slate background with blue accents
        visuals.window_fill = egui::Color32::from_rgb(15, 23, 42);
        visuals.panel_fill = egui::Color32::from_rgb(15, 23, 42);
        visuals.faint_bg_color = egui::Color32::from_rgb(30, 41, 59);
        visuals.widgets.noninteractive.weak_bg_fill = egui::Color32::from_rgb(30, 41, 59);
        visuals.extreme_bg_color = egui::Color32::from_rgb(2, 6, 23);

        visuals.window_shadow = egui::epaint::Shadow {
            offset: [0, 4],
            blur: 16,
            spread: 0,
            color: egui::Color32::from_rgba_premultiplied(0, 0, 0, 30),
        };

        visuals
    }

    /// Creates light theme visuals configuration.
    fn create_light_visuals() -> egui::Visuals {
        let mut visuals = egui::Visuals::light();

        visuals.widgets.inactive.corner_radius = egui::CornerRadius::same(10);
        visuals.widgets.hovered.corner_radius = egui::CornerRadius::same(10);
        visuals.widgets.active.corner_radius = egui::CornerRadius::same(10);
        visuals.widgets.noninteractive.corner_radius = egui::CornerRadius::same(8);
        visuals.widgets.open.corner_radius = egui::CornerRadius::same(10);

        // Light mode: near-white background with the same blue accents
        visuals.window_fill = egui::Color32::from_rgb(248, 250, 252);
        visuals.panel_fill = egui::Color32::from_rgb(248, 250, 252);
        visuals.faint_bg_color = egui::Color32::from_rgb(241, 245, 249);
        visuals.widgets.noninteractive.weak_bg_fill = egui::Color32::from_rgb(241, 245, 249);
        visuals.extreme_bg_color = egui::Color32::from_rgb(226, 232, 240);

        visuals.window_shadow = egui::epaint::Shadow {
            offset: [0, 4],
            blur: 16,
            spread: 0,
            color: egui::Color32::from_rgba_premultiplied(0, 0, 0, 20),
        };

        visuals
    }

    /// Launches the GUI application.
    ///
    /// # Errors
    ///
    /// Returns an error if the GUI framework fails to initialize or run.
    pub fn run(catalog: ContentCatalog, profile: Profile) -> anyhow::Result<()> {
        let viewport = egui::ViewportBuilder::default()
            .with_inner_size([880.0, 720.0])
            .with_min_inner_size([640.0, 480.0])
            .with_resizable(true)
            .with_title("Grozdan Cvetkovski - Portfolio");

        let options = eframe::NativeOptions {
            viewport,
            ..Default::default()
        };

        eframe::run_native(
            "portfolio",
            options,
            Box::new(move |_cc| Ok(Box::new(PortfolioGui::new(catalog, profile)))),
        )
        .map_err(|e| anyhow::anyhow!("Failed to run GUI: {}", e))
    }
}
