//! Static identity data for the page.
//!
//! Contact targets and skill lists are fixed configuration, not part of the
//! localization contract: the same values render for every language.

use serde::{Deserialize, Serialize};

/// Ordered list of short skill descriptions for one card.
pub type SkillList = Vec<String>;

/// Non-localized identity data rendered into the page.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Profile {
    /// Contact email address, displayed verbatim and used as mailto target
    pub email: String,
    /// Full URL of the code repository profile
    pub github_url: String,
    /// Handle string displayed for the repository link
    pub github_handle: String,
    /// Skills shown in the front-end card, in display order
    pub frontend_skills: SkillList,
    /// Skills shown in the back-end card, in display order
    pub backend_skills: SkillList,
}

impl Profile {
    /// Returns the shipped identity data.
    pub fn bundled() -> Self {
        Self {
            email: "info.cvetkovski@proton.me".to_string(),
            github_url: "https://github.com/prodbyGoka".to_string(),
            github_handle: "@prodbyGoka".to_string(),
            frontend_skills: vec![
                "React & Vanilla JavaScript".to_string(),
                "Responsive HTML/CSS/Tailwind".to_string(),
                "UI/UX Implementation".to_string(),
                "Cross-Browser Compatibility".to_string(),
                "Website Optimization".to_string(),
            ],
            backend_skills: vec![
                "Node.js & Express".to_string(),
                "Database Setup (SQL/NoSQL)".to_string(),
                "API Design & Integration".to_string(),
                "Authentication & Security".to_string(),
                "Server Management".to_string(),
            ],
        }
    }

    /// Returns the mailto target for the contact email.
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mailto_prepends_scheme() {
        let profile = Profile::bundled();
        assert_eq!(profile.mailto(), "mailto:info.cvetkovski@proton.me");
    }

    #[test]
    fn test_bundled_skill_lists_are_populated() {
        let profile = Profile::bundled();
        assert_eq!(profile.frontend_skills.len(), 5);
        assert_eq!(profile.backend_skills.len(), 5);
        for skill in profile
            .frontend_skills
            .iter()
            .chain(profile.backend_skills.iter())
        {
            assert!(!skill.is_empty());
        }
    }

    #[test]
    fn test_bundled_github_link() {
        let profile = Profile::bundled();
        assert_eq!(profile.github_url, "https://github.com/prodbyGoka");
        assert_eq!(profile.github_handle, "@prodbyGoka");
    }
}
