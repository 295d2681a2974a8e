// Shared card rendering helpers

use eframe::egui;

fn card_fill(dark_mode: bool) -> egui::Color32 {
    if dark_mode {
        egui::Color32::from_rgb(30, 41, 59)
    } else {
        egui::Color32::from_rgb(255, 255, 255)
    }
}

fn card_text(dark_mode: bool) -> egui::Color32 {
    if dark_mode {
        egui::Color32::from_rgb(203, 213, 225)
    } else {
        egui::Color32::from_rgb(51, 65, 85)
    }
}

/// Renders one skill card: an accented title and its ordered bullet list.
pub fn render_skill_card(ui: &mut egui::Ui, dark_mode: bool, title: &str, skills: &[String]) {
    egui::Frame::new()
        .fill(card_fill(dark_mode))
        .corner_radius(12)
        .inner_margin(egui::Margin::symmetric(18, 14))
        .show(ui, |ui| {
            ui.set_min_width(ui.available_width());

            ui.label(
                egui::RichText::new(title)
                    .size(16.0)
                    .strong()
                    .color(egui::Color32::from_rgb(96, 165, 250)),
            );
            ui.add_space(8.0);

            for skill in skills {
                ui.label(
                    egui::RichText::new(format!("›  {skill}"))
                        .size(13.0)
                        .color(card_text(dark_mode)),
                );
                ui.add_space(3.0);
            }
        });
}

/// Renders one contact card: icon, localized label and the link target.
pub fn render_contact_card(
    ui: &mut egui::Ui,
    dark_mode: bool,
    icon: &str,
    label: &str,
    display: &str,
    url: &str,
) {
    egui::Frame::new()
        .fill(card_fill(dark_mode))
        .corner_radius(12)
        .inner_margin(egui::Margin::symmetric(18, 14))
        .show(ui, |ui| {
            ui.set_min_width(ui.available_width());

            ui.vertical_centered(|ui| {
                ui.label(egui::RichText::new(icon).size(22.0));
                ui.add_space(4.0);
                ui.label(
                    egui::RichText::new(label)
                        .size(13.0)
                        .color(card_text(dark_mode)),
                );
                ui.add_space(4.0);
                ui.hyperlink_to(egui::RichText::new(display).size(14.0).strong(), url);
            });
        });
}
