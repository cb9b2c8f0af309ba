//! Default-filling for partial portfolio records.
//!
//! Placeholders:
//!
//! | field          | placeholder                                   |
//! |----------------|-----------------------------------------------|
//! | `name`         | [`DEFAULT_NAME`]                              |
//! | `bio`          | the theme's tagline                           |
//! | `aboutText`    | [`DEFAULT_ABOUT`]                             |
//! | `favicon`      | [`DEFAULT_FAVICON`]                           |
//! | other text     | empty                                         |
//! | sequences      | empty                                         |
//!
//! Empty strings count as missing, so a normalized record normalizes to itself.

use crate::model::{Contact, ContactDraft, PortfolioDraft, PortfolioRecord, ThemeId};

pub const DEFAULT_NAME: &str = "Your Name";
pub const DEFAULT_ABOUT: &str = "Tell your story";
pub const DEFAULT_FAVICON: &str = "https://nocodefolio.vercel.app/favicon.ico";

fn or_placeholder(value: Option<&String>, placeholder: &str) -> String {
    match value {
        Some(value) if !value.is_empty() => value.clone(),
        _ => placeholder.to_string(),
    }
}

fn normalize_contact(contact: Option<&ContactDraft>) -> Contact {
    let contact = contact.cloned().unwrap_or_default();
    Contact {
        email: contact.email.unwrap_or_default(),
        linkedin: contact.linkedin.unwrap_or_default(),
        github: contact.github.unwrap_or_default(),
        phone: contact.phone.unwrap_or_default(),
    }
}

/// Fill every missing field of `draft`, forcing the record onto `theme`.
///
/// The draft's own `theme` is ignored; callers pick the theme first.
pub fn normalize(draft: &PortfolioDraft, theme: ThemeId) -> PortfolioRecord {
    PortfolioRecord {
        name: or_placeholder(draft.name.as_ref(), DEFAULT_NAME),
        bio: or_placeholder(draft.bio.as_ref(), theme.descriptor().tagline),
        profile_image: draft.profile_image.clone().unwrap_or_default(),
        resume_link: draft.resume_link.clone().unwrap_or_default(),
        about_text: or_placeholder(draft.about_text.as_ref(), DEFAULT_ABOUT),
        work_experience: draft.work_experience.clone().unwrap_or_default(),
        skills: draft.skills.clone().unwrap_or_default(),
        projects: draft.projects.clone().unwrap_or_default(),
        contact: normalize_contact(draft.contact.as_ref()),
        theme,
        vercel_project_id: draft.vercel_project_id.clone(),
        vercel_domain: draft.vercel_domain.clone(),
        favicon: or_placeholder(draft.favicon.as_ref(), DEFAULT_FAVICON),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Skill, WorkEntry};
    use strum::IntoEnumIterator;

    #[test]
    fn test_empty_draft_gets_placeholders() {
        let record = normalize(&PortfolioDraft::default(), ThemeId::Galaxy);

        assert_eq!(record.name, DEFAULT_NAME);
        assert_eq!(record.bio, "Build cosmic experiences.");
        assert_eq!(record.about_text, DEFAULT_ABOUT);
        assert_eq!(record.favicon, DEFAULT_FAVICON);
        assert_eq!(record.profile_image, "");
        assert_eq!(record.resume_link, "");
        assert!(record.work_experience.is_empty());
        assert!(record.skills.is_empty());
        assert!(record.projects.is_empty());
        assert_eq!(record.contact, Contact::default());
        assert_eq!(record.theme, ThemeId::Galaxy);
    }

    #[test]
    fn test_empty_strings_count_as_missing() {
        let draft = PortfolioDraft {
            name: Some(String::new()),
            about_text: Some(String::new()),
            favicon: Some(String::new()),
            ..PortfolioDraft::default()
        };
        let record = normalize(&draft, ThemeId::Neon);
        assert_eq!(record.name, DEFAULT_NAME);
        assert_eq!(record.bio, "Your bio");
        assert_eq!(record.about_text, DEFAULT_ABOUT);
        assert_eq!(record.favicon, DEFAULT_FAVICON);
    }

    #[test]
    fn test_partial_contact_is_completed() {
        let draft = PortfolioDraft {
            contact: Some(ContactDraft {
                email: Some("me@example.com".to_string()),
                ..ContactDraft::default()
            }),
            ..PortfolioDraft::default()
        };
        let record = normalize(&draft, ThemeId::Modern);
        assert_eq!(record.contact.email, "me@example.com");
        assert_eq!(record.contact.linkedin, "");
        assert_eq!(record.contact.github, "");
        assert_eq!(record.contact.phone, "");
    }

    #[test]
    fn test_theme_is_forced_by_caller() {
        let draft = PortfolioDraft::default().with_theme("neon");
        assert_eq!(normalize(&draft, ThemeId::Galaxy).theme, ThemeId::Galaxy);
    }

    #[test]
    fn test_sequences_keep_order_and_duplicates() {
        let entry = WorkEntry {
            title: "Same".to_string(),
            ..WorkEntry::default()
        };
        let draft = PortfolioDraft {
            work_experience: Some(vec![entry.clone(), WorkEntry::placeholder(), entry.clone()]),
            skills: Some(vec![Skill::placeholder()]),
            ..PortfolioDraft::default()
        };
        let record = normalize(&draft, ThemeId::Minimal);
        assert_eq!(
            record.work_experience,
            vec![entry.clone(), WorkEntry::placeholder(), entry]
        );
        assert_eq!(record.skills, vec![Skill::placeholder()]);
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let drafts = [
            PortfolioDraft::default(),
            PortfolioDraft {
                name: Some("Ada  Lovelace".to_string()),
                vercel_domain: Some("ada.vercel.app".to_string()),
                ..PortfolioDraft::default()
            },
            PortfolioRecord::starter().into(),
        ];

        for theme in ThemeId::iter() {
            for draft in &drafts {
                let once = normalize(draft, theme);
                let twice = normalize(&PortfolioDraft::from(&once), theme);
                assert_eq!(once, twice);
            }
        }
    }
}
