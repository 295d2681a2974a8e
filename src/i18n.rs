//! Localized page content for the supported display languages.
//!
//! The catalog is built once at startup and handed to the GUI by reference.
//! Every supported language must carry a complete set of display strings;
//! an empty field is a data defect and is rejected before any frame renders.

use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};

/// Supported display languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize, Default)]
pub enum Language {
    /// English
    #[default]
    English,
    /// Macedonian
    Macedonian,
}

impl Language {
    /// Returns all supported languages in cycle order.
    pub fn all() -> &'static [Language] {
        &[Language::English, Language::Macedonian]
    }

    /// Returns the BCP 47 style language code.
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Macedonian => "mk",
        }
    }

    /// Returns the short label shown on the language toggle button.
    pub fn toggle_label(&self) -> &'static str {
        match self {
            Language::English => "EN",
            Language::Macedonian => "MK",
        }
    }

    /// Returns the display name of the language.
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Macedonian => "Македонски",
        }
    }

    /// Returns the successor in [`Language::all`] order, wrapping at the end.
    ///
    /// With two languages this is a plain swap. The wrap rule is the explicit
    /// cycle order, so adding a language keeps the transition well defined.
    pub fn next(self) -> Language {
        let all = Language::all();
        let index = all
            .iter()
            .position(|lang| *lang == self)
            .unwrap_or_default();
        all[(index + 1) % all.len()]
    }
}

/// Complete set of localized display strings for one language.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ContentRecord {
    pub name: String,
    pub role: String,
    pub motto: String,
    pub about_title: String,
    pub about_text: String,
    pub skills_title: String,
    pub frontend_title: String,
    pub backend_title: String,
    pub contact_title: String,
    pub contact_text: String,
    pub email_label: String,
    pub github_label: String,
    pub location: String,
    pub cta_button: String,
    pub rights: String,
}

impl ContentRecord {
    /// Returns every field with its name, for completeness checks.
    pub fn fields(&self) -> [(&'static str, &str); 15] {
        [
            ("name", &self.name),
            ("role", &self.role),
            ("motto", &self.motto),
            ("about_title", &self.about_title),
            ("about_text", &self.about_text),
            ("skills_title", &self.skills_title),
            ("frontend_title", &self.frontend_title),
            ("backend_title", &self.backend_title),
            ("contact_title", &self.contact_title),
            ("contact_text", &self.contact_text),
            ("email_label", &self.email_label),
            ("github_label", &self.github_label),
            ("location", &self.location),
            ("cta_button", &self.cta_button),
            ("rights", &self.rights),
        ]
    }
}

/// Read-only mapping from [`Language`] to its [`ContentRecord`].
///
/// One field per language variant; [`ContentCatalog::lookup`] matches
/// exhaustively, so a new language does not compile until a record exists.
#[derive(Debug, Clone)]
pub struct ContentCatalog {
    english: ContentRecord,
    macedonian: ContentRecord,
}

impl ContentCatalog {
    /// Builds a catalog from caller-supplied records.
    ///
    /// # Errors
    ///
    /// Returns an error naming the language and field if any record has an
    /// empty field (a partial translation).
    pub fn new(english: ContentRecord, macedonian: ContentRecord) -> Result<Self> {
        for (language, record) in [
            (Language::English, &english),
            (Language::Macedonian, &macedonian),
        ] {
            for (field, value) in record.fields() {
                if value.trim().is_empty() {
                    bail!(
                        "missing translation: field '{}' is empty for language '{}'",
                        field,
                        language.code()
                    );
                }
            }
        }

        Ok(Self {
            english,
            macedonian,
        })
    }

    /// Returns the catalog with the two shipped translations.
    ///
    /// # Errors
    ///
    /// Returns an error if the shipped content is incomplete. The bundled
    /// records are covered by tests, so this only fires on a bad edit.
    pub fn bundled() -> Result<Self> {
        Self::new(english_record(), macedonian_record())
    }

    /// Returns the complete record for the given language.
    pub fn lookup(&self, language: Language) -> &ContentRecord {
        match language {
            Language::English => &self.english,
            Language::Macedonian => &self.macedonian,
        }
    }
}

fn english_record() -> ContentRecord {
    ContentRecord {
        name: "Grozdan Cvetkovski".to_string(),
        role: "Freelance Full-Stack Developer".to_string(),
        motto: "A kid who is building the future.".to_string(),
        about_title: "About Me".to_string(),
        about_text: "As a versatile Freelance Full-Stack Developer, I specialize in bringing \
                     ideas to life across the entire digital spectrum. My goal is to partner \
                     with new clients, offering tailored, high-quality development services \
                     from front-end user experience to robust back-end architecture. I focus \
                     on modern technologies to deliver scalable and efficient solutions."
            .to_string(),
        skills_title: "Core Expertise".to_string(),
        frontend_title: "Front-End Development".to_string(),
        backend_title: "Back-End Development".to_string(),
        contact_title: "Get In Touch".to_string(),
        contact_text: "Ready to start your next project or looking to collaborate? Let's build \
                       something amazing together."
            .to_string(),
        email_label: "Email Me".to_string(),
        github_label: "Check my Code".to_string(),
        location: "Skopje, North Macedonia".to_string(),
        cta_button: "Hire Me".to_string(),
        rights: "All rights reserved.".to_string(),
    }
}

fn macedonian_record() -> ContentRecord {
    ContentRecord {
        name: "Гроздан Цветковски".to_string(),
        role: "Freelance Full-Stack Развивач".to_string(),
        motto: "„Дете кое ја гради иднината.“".to_string(),
        about_title: "За Мене".to_string(),
        about_text: "Како сестран Freelance Full-Stack Развивач, специјализирам во оживување \
                     на идеи низ целиот дигитален спектар. Мојата цел е да соработувам со нови \
                     клиенти, нудејќи персонализирани, висококвалитетни развојни услуги, од \
                     корисничко искуство до робусна back-end архитектура. Се фокусирам на \
                     модерни технологии за да испорачам скалабилни и ефикасни решенија."
            .to_string(),
        skills_title: "Клучна Експертиза".to_string(),
        frontend_title: "Front-End Развој".to_string(),
        backend_title: "Back-End Развој".to_string(),
        contact_title: "Контакт".to_string(),
        contact_text: "Спремни за вашиот следен проект или сакате да соработуваме? Ајде да \
                       изградиме нешто неверојатно заедно."
            .to_string(),
        email_label: "Испрати Емаил".to_string(),
        github_label: "Види го мојот Код".to_string(),
        location: "Скопје, Северна Македонија".to_string(),
        cta_button: "Ангажирај Ме".to_string(),
        rights: "Сите права се задржани.".to_string(),
    }
}
