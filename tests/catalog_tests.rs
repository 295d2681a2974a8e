//! Tests for the content catalog contract.

use portfolio::i18n::{ContentCatalog, ContentRecord, Language};

fn minimal_record(prefix: &str) -> ContentRecord {
    ContentRecord {
        name: format!("{prefix} name"),
        role: format!("{prefix} role"),
        motto: format!("{prefix} motto"),
        about_title: format!("{prefix} about title"),
        about_text: format!("{prefix} about text"),
        skills_title: format!("{prefix} skills title"),
        frontend_title: format!("{prefix} frontend title"),
        backend_title: format!("{prefix} backend title"),
        contact_title: format!("{prefix} contact title"),
        contact_text: format!("{prefix} contact text"),
        email_label: format!("{prefix} email label"),
        github_label: format!("{prefix} github label"),
        location: format!("{prefix} location"),
        cta_button: format!("{prefix} cta"),
        rights: format!("{prefix} rights"),
    }
}

#[test]
fn test_every_language_has_a_complete_record() {
    let catalog = ContentCatalog::bundled().expect("bundled catalog must be complete");

    for lang in Language::all() {
        for (field, value) in catalog.lookup(*lang).fields() {
            assert!(
                !value.trim().is_empty(),
                "field '{}' empty for '{}'",
                field,
                lang.code()
            );
        }
    }
}

#[test]
fn test_custom_catalog_can_be_injected() {
    let catalog = ContentCatalog::new(minimal_record("en"), minimal_record("mk"))
        .expect("complete records must be accepted");

    assert_eq!(catalog.lookup(Language::English).name, "en name");
    assert_eq!(catalog.lookup(Language::Macedonian).name, "mk name");
}

#[test]
fn test_partial_translation_is_rejected_at_construction() {
    let mut broken = minimal_record("mk");
    broken.about_text = String::new();

    let err = ContentCatalog::new(minimal_record("en"), broken)
        .expect_err("partial translation must be rejected");
    assert!(err.to_string().contains("about_text"));
}

#[test]
fn test_lookup_returns_distinct_records_per_language() {
    let catalog = ContentCatalog::bundled().expect("bundled catalog must be complete");

    let english = catalog.lookup(Language::English);
    let macedonian = catalog.lookup(Language::Macedonian);

    assert_ne!(english.name, macedonian.name);
    assert_ne!(english.about_title, macedonian.about_title);
    // Skill card titles are localized even though skill lists are not
    assert_ne!(english.frontend_title, macedonian.frontend_title);
}
