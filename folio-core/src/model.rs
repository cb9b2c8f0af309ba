use serde::{Deserialize, Deserializer, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};
use tracing::debug;

/// Visual themes a portfolio can be exported with
#[derive(
    Serialize,
    Deserialize,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ThemeId {
    #[default]
    Modern,
    Minimal,
    Creative,
    Galaxy,
    Neon,
}

impl ThemeId {
    /// Theme used whenever a record names no theme or one we do not know
    pub const CANONICAL: ThemeId = ThemeId::Modern;

    /// Resolve a stored theme identifier, falling back to [`ThemeId::CANONICAL`]
    pub fn resolve(raw: Option<&str>) -> ThemeId {
        match raw.map(str::parse::<ThemeId>) {
            Some(Ok(theme)) => theme,
            Some(Err(_)) => {
                debug!(
                    "Unknown theme {:?}, falling back to {}",
                    raw.unwrap_or_default(),
                    Self::CANONICAL
                );
                Self::CANONICAL
            }
            None => Self::CANONICAL,
        }
    }
}

fn nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct WorkEntry {
    #[serde(deserialize_with = "nullable_string")]
    pub title: String,
    #[serde(deserialize_with = "nullable_string")]
    pub company: String,
    #[serde(deserialize_with = "nullable_string")]
    pub duration: String,
    #[serde(deserialize_with = "nullable_string")]
    pub description: String,
}

impl WorkEntry {
    /// Entry appended by the editor's "Add Experience" action
    pub fn placeholder() -> Self {
        Self {
            title: "New Role".to_string(),
            company: "Company".to_string(),
            duration: "2024 — Present".to_string(),
            description: "Description".to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct Skill {
    #[serde(deserialize_with = "nullable_string")]
    pub name: String,
    #[serde(deserialize_with = "nullable_string")]
    pub level: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl Skill {
    pub fn placeholder() -> Self {
        Self {
            name: "New Skill".to_string(),
            level: "Beginner".to_string(),
            icon: Some(String::new()),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct Project {
    #[serde(deserialize_with = "nullable_string")]
    pub title: String,
    #[serde(deserialize_with = "nullable_string")]
    pub image: String,
    #[serde(deserialize_with = "nullable_string")]
    pub github_link: String,
    #[serde(deserialize_with = "nullable_string")]
    pub live_demo_link: String,
}

impl Project {
    pub fn placeholder() -> Self {
        Self {
            title: "New Project".to_string(),
            ..Self::default()
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub email: String,
    pub linkedin: String,
    pub github: String,
    pub phone: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactDraft {
    pub email: Option<String>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
    pub phone: Option<String>,
}

/// A possibly partial portfolio as stored or received from the editor.
///
/// Any field may be absent and `theme` may name a theme that no longer
/// exists. The legacy key `template` is accepted for `theme`.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct PortfolioDraft {
    pub name: Option<String>,
    pub bio: Option<String>,
    pub profile_image: Option<String>,
    pub resume_link: Option<String>,
    pub about_text: Option<String>,
    pub work_experience: Option<Vec<WorkEntry>>,
    pub skills: Option<Vec<Skill>>,
    pub projects: Option<Vec<Project>>,
    pub contact: Option<ContactDraft>,
    #[serde(alias = "template")]
    pub theme: Option<String>,
    pub vercel_project_id: Option<String>,
    pub vercel_domain: Option<String>,
    pub favicon: Option<String>,
}

impl PortfolioDraft {
    pub fn with_theme(mut self, theme: impl Into<String>) -> Self {
        self.theme = Some(theme.into());
        self
    }
}

/// A fully populated portfolio, as produced by [`crate::normalize::normalize`]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioRecord {
    pub name: String,
    pub bio: String,
    pub profile_image: String,
    pub resume_link: String,
    pub about_text: String,
    pub work_experience: Vec<WorkEntry>,
    pub skills: Vec<Skill>,
    pub projects: Vec<Project>,
    pub contact: Contact,
    pub theme: ThemeId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vercel_project_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vercel_domain: Option<String>,
    pub favicon: String,
}

impl PortfolioRecord {
    /// The record a fresh editing session starts from
    pub fn starter() -> Self {
        Self {
            name: "Alex Galaxy".to_string(),
            bio: "Creative <span class='text-sky-400'>Frontend Developer</span>".to_string(),
            profile_image: "https://static.vecteezy.com/system/resources/thumbnails/036/594/092/small_2x/man-empty-avatar-photo-placeholder-for-social-networks-resumes-forums-and-dating-sites-male-and-female-no-photo-images-for-unfilled-user-profile-free-vector.jpg".to_string(),
            resume_link: "#".to_string(),
            about_text:
                "I craft delightful, performant interfaces with React, TypeScript, and motion."
                    .to_string(),
            work_experience: vec![WorkEntry {
                title: "Senior Frontend Engineer".to_string(),
                company: "Nova Labs".to_string(),
                duration: "2022 — Present".to_string(),
                description: "Leading UI platform work and component systems.".to_string(),
            }],
            skills: vec![
                Skill {
                    name: "React".to_string(),
                    level: "Expert".to_string(),
                    icon: Some(String::new()),
                },
                Skill {
                    name: "TypeScript".to_string(),
                    level: "Advanced".to_string(),
                    icon: Some(String::new()),
                },
                Skill {
                    name: "Tailwind CSS".to_string(),
                    level: "Advanced".to_string(),
                    icon: Some(String::new()),
                },
            ],
            projects: vec![Project {
                title: "Portfolio Engine".to_string(),
                image: "https://images.unsplash.com/photo-1526498460520-4c246339dccb?q=80&w=1960&auto=format&fit=crop".to_string(),
                github_link: "https://github.com".to_string(),
                live_demo_link: "https://example.com".to_string(),
            }],
            contact: Contact {
                email: "dev@example.com".to_string(),
                linkedin: "https://linkedin.com".to_string(),
                github: "https://github.com".to_string(),
                phone: String::new(),
            },
            theme: ThemeId::Galaxy,
            vercel_project_id: None,
            vercel_domain: None,
            favicon: crate::normalize::DEFAULT_FAVICON.to_string(),
        }
    }
}

impl From<PortfolioRecord> for PortfolioDraft {
    fn from(record: PortfolioRecord) -> Self {
        Self {
            name: Some(record.name),
            bio: Some(record.bio),
            profile_image: Some(record.profile_image),
            resume_link: Some(record.resume_link),
            about_text: Some(record.about_text),
            work_experience: Some(record.work_experience),
            skills: Some(record.skills),
            projects: Some(record.projects),
            contact: Some(ContactDraft {
                email: Some(record.contact.email),
                linkedin: Some(record.contact.linkedin),
                github: Some(record.contact.github),
                phone: Some(record.contact.phone),
            }),
            theme: Some(record.theme.to_string()),
            vercel_project_id: record.vercel_project_id,
            vercel_domain: record.vercel_domain,
            favicon: Some(record.favicon),
        }
    }
}

impl From<&PortfolioRecord> for PortfolioDraft {
    fn from(record: &PortfolioRecord) -> Self {
        record.clone().into()
    }
}
