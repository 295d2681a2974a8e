// Page layout and section renderers

use crate::gui::PortfolioGui;
use crate::gui::utils::{render_contact_card, render_skill_card};
use eframe::egui;

const ACCENT: egui::Color32 = egui::Color32::from_rgb(59, 130, 246);

impl eframe::App for PortfolioGui {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let visuals = if self.dark_mode {
            self.cached_dark_visuals.clone()
        } else {
            self.cached_light_visuals.clone()
        };
        ctx.set_visuals(visuals);

        egui::TopBottomPanel::top("nav_bar")
            .exact_height(48.0)
            .show(ctx, |ui| {
                self.render_nav_bar(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| {
                    self.render_hero(ui);
                    ui.add_space(30.0);
                    self.render_about(ui);
                    ui.add_space(30.0);
                    self.render_skills(ui);
                    ui.add_space(30.0);
                    self.render_contact(ui);
                    ui.add_space(30.0);
                    self.render_footer(ui);
                    ui.add_space(15.0);
                });
        });
    }
}

impl PortfolioGui {
    fn text_color(&self) -> egui::Color32 {
        if self.dark_mode {
            egui::Color32::from_rgb(241, 245, 249)
        } else {
            egui::Color32::from_rgb(15, 23, 42)
        }
    }

    fn muted_color(&self) -> egui::Color32 {
        if self.dark_mode {
            egui::Color32::from_rgb(148, 163, 184)
        } else {
            egui::Color32::from_rgb(71, 85, 105)
        }
    }

    // Navigation bar: site mark left, theme and language toggles right
    fn render_nav_bar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal_centered(|ui| {
            ui.add_space(15.0);

            ui.label(
                egui::RichText::new(self.nav_title())
                    .size(17.0)
                    .strong()
                    .color(ACCENT),
            );

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.add_space(15.0);

                // The label names the language a click switches to
                let lang_btn = egui::Button::new(
                    egui::RichText::new(format!("🌐  {}", self.toggle_label()))
                        .size(13.0)
                        .color(egui::Color32::WHITE)
                        .strong(),
                )
                .fill(ACCENT)
                .corner_radius(14);

                if ui.add(lang_btn).clicked() {
                    self.toggle_language();
                }

                ui.add_space(8.0);

                let theme_icon = if self.dark_mode { "☀" } else { "🌙" };
                if ui
                    .button(egui::RichText::new(theme_icon).size(13.0))
                    .clicked()
                {
                    self.dark_mode = !self.dark_mode;
                }
            });
        });
    }

    // Hero: role badge, name, motto, location, call-to-action links
    fn render_hero(&self, ui: &mut egui::Ui) {
        let record = self.content();
        let profile = self.profile();

        ui.add_space(40.0);
        ui.vertical_centered(|ui| {
            ui.label(egui::RichText::new(&record.role).size(14.0).color(ACCENT));
            ui.add_space(10.0);
            ui.label(
                egui::RichText::new(&record.name)
                    .size(38.0)
                    .strong()
                    .color(self.text_color()),
            );
            ui.add_space(8.0);
            ui.label(
                egui::RichText::new(&record.motto)
                    .size(17.0)
                    .italics()
                    .color(self.muted_color()),
            );
            ui.add_space(14.0);
            ui.label(
                egui::RichText::new(format!("📍 {}", record.location))
                    .size(14.0)
                    .color(self.muted_color()),
            );
            ui.add_space(20.0);

            ui.horizontal(|ui| {
                let total = 320.0;
                ui.add_space((ui.available_width() - total).max(0.0) / 2.0);

                let cta_btn = egui::Button::new(
                    egui::RichText::new(&record.cta_button)
                        .size(14.0)
                        .color(egui::Color32::WHITE)
                        .strong(),
                )
                .fill(ACCENT)
                .corner_radius(10);

                if ui.add_sized([150.0, 36.0], cta_btn).clicked() {
                    ui.ctx().open_url(egui::OpenUrl::new_tab(profile.mailto()));
                }

                ui.add_space(12.0);

                let github_btn = egui::Button::new(
                    egui::RichText::new("GitHub")
                        .size(14.0)
                        .color(self.text_color())
                        .strong(),
                )
                .corner_radius(10);

                if ui.add_sized([150.0, 36.0], github_btn).clicked() {
                    ui.ctx()
                        .open_url(egui::OpenUrl::new_tab(&profile.github_url));
                }
            });
        });
    }

    // About: section title and one body paragraph
    fn render_about(&self, ui: &mut egui::Ui) {
        let record = self.content();

        ui.vertical_centered(|ui| {
            ui.label(
                egui::RichText::new(&record.about_title)
                    .size(24.0)
                    .strong()
                    .color(self.text_color()),
            );
            ui.add_space(12.0);
            ui.scope(|ui| {
                ui.set_max_width(620.0);
                ui.label(
                    egui::RichText::new(&record.about_text)
                        .size(14.0)
                        .color(self.muted_color()),
                );
            });
        });
    }

    // Skills: two cards with the static skill lists
    fn render_skills(&self, ui: &mut egui::Ui) {
        let record = self.content();
        let profile = self.profile();

        ui.vertical_centered(|ui| {
            ui.label(
                egui::RichText::new(&record.skills_title)
                    .size(24.0)
                    .strong()
                    .color(self.text_color()),
            );
        });
        ui.add_space(14.0);

        ui.columns(2, |columns| {
            render_skill_card(
                &mut columns[0],
                self.dark_mode,
                &format!("🖥 {}", record.frontend_title),
                &profile.frontend_skills,
            );
            render_skill_card(
                &mut columns[1],
                self.dark_mode,
                &format!("🗄 {}", record.backend_title),
                &profile.backend_skills,
            );
        });
    }

    // Contact: section text plus email and repository link cards
    fn render_contact(&self, ui: &mut egui::Ui) {
        let record = self.content();
        let profile = self.profile();

        ui.vertical_centered(|ui| {
            ui.label(
                egui::RichText::new(&record.contact_title)
                    .size(24.0)
                    .strong()
                    .color(self.text_color()),
            );
            ui.add_space(8.0);
            ui.scope(|ui| {
                ui.set_max_width(620.0);
                ui.label(
                    egui::RichText::new(&record.contact_text)
                        .size(14.0)
                        .color(self.muted_color()),
                );
            });
        });
        ui.add_space(16.0);

        ui.columns(2, |columns| {
            render_contact_card(
                &mut columns[0],
                self.dark_mode,
                "✉",
                &record.email_label,
                &profile.email,
                &profile.mailto(),
            );
            render_contact_card(
                &mut columns[1],
                self.dark_mode,
                "🐙",
                &record.github_label,
                &profile.github_handle,
                &profile.github_url,
            );
        });
    }

    // Footer: copyright line with the render-time year
    fn render_footer(&self, ui: &mut egui::Ui) {
        ui.separator();
        ui.add_space(10.0);
        ui.vertical_centered(|ui| {
            ui.label(
                egui::RichText::new(self.footer_line())
                    .size(12.0)
                    .color(self.muted_color()),
            );
        });
    }
}
