//! Tests for the page view model: language toggling and rendered text.

use portfolio::clock::FixedClock;
use portfolio::gui::PortfolioGui;
use portfolio::i18n::{ContentCatalog, Language};
use portfolio::profile::Profile;

fn page_with_year(year: i32) -> PortfolioGui {
    let catalog = ContentCatalog::bundled().expect("bundled catalog must be complete");
    PortfolioGui::with_clock(catalog, Profile::bundled(), Box::new(FixedClock(year)))
}

#[test]
fn test_initial_language_is_english() {
    let page = page_with_year(2026);

    assert_eq!(page.language(), Language::English);
    assert_eq!(page.content().name, "Grozdan Cvetkovski");
}

#[test]
fn test_toggle_switches_all_localized_text() {
    let mut page = page_with_year(2026);

    assert_eq!(page.toggle_language(), Language::Macedonian);

    let record = page.content();
    assert_eq!(record.name, "Гроздан Цветковски");
    assert_eq!(record.about_title, "За Мене");
    assert_eq!(record.contact_title, "Контакт");
    assert_eq!(record.cta_button, "Ангажирај Ме");
    assert_eq!(record.location, "Скопје, Северна Македонија");
}

#[test]
fn test_toggle_label_names_target_language() {
    let mut page = page_with_year(2026);

    // English active, a click switches to Macedonian
    assert_eq!(page.toggle_label(), "MK");

    page.toggle_language();
    assert_eq!(page.toggle_label(), "EN");
}

#[test]
fn test_double_toggle_restores_original_record() {
    let mut page = page_with_year(2026);
    let before = page.content().clone();

    page.toggle_language();
    page.toggle_language();

    assert_eq!(page.language(), Language::English);
    assert_eq!(*page.content(), before);
}

#[test]
fn test_nav_title_uses_first_name_of_active_record() {
    let mut page = page_with_year(2026);
    assert_eq!(page.nav_title(), "Grozdan.dev");

    page.toggle_language();
    assert_eq!(page.nav_title(), "Гроздан.dev");
}

#[test]
fn test_footer_line_uses_injected_clock_year() {
    let page = page_with_year(2031);

    assert_eq!(
        page.footer_line(),
        "© 2031 Grozdan Cvetkovski. All rights reserved."
    );
}

#[test]
fn test_footer_line_is_localized() {
    let mut page = page_with_year(2026);
    page.toggle_language();

    assert_eq!(
        page.footer_line(),
        "© 2026 Гроздан Цветковски. Сите права се задржани."
    );
}

#[test]
fn test_mailto_target_is_unaffected_by_language() {
    let mut page = page_with_year(2026);
    let before = page.profile().mailto();

    page.toggle_language();

    assert_eq!(page.profile().mailto(), before);
    assert_eq!(before, "mailto:info.cvetkovski@proton.me");
}
