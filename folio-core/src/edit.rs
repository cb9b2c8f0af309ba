//! Editing operations on a portfolio record.
//!
//! The editor never touches record fields directly: every change is a
//! [`PortfolioEdit`] applied with [`apply_edit`], which returns a new record
//! and leaves the input untouched. Field names are closed enums, so an edit
//! can only address fields that exist on the entity it targets.

use tracing::debug;

use crate::errors::{EditError, EditResult};
use crate::model::{PortfolioRecord, Project, Skill, ThemeId, WorkEntry};

/// Top-level text fields of a record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordField {
    Name,
    Bio,
    ProfileImage,
    ResumeLink,
    AboutText,
    Favicon,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Email,
    Linkedin,
    Github,
    Phone,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkEntryField {
    Title,
    Company,
    Duration,
    Description,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillField {
    Name,
    Level,
    Icon,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectField {
    Title,
    Image,
    GithubLink,
    LiveDemoLink,
}

/// The three ordered sequences of a record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    WorkExperience,
    Skills,
    Projects,
}

impl Collection {
    pub fn as_str(self) -> &'static str {
        match self {
            Collection::WorkExperience => "workExperience",
            Collection::Skills => "skills",
            Collection::Projects => "projects",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PortfolioEdit {
    SetField {
        field: RecordField,
        value: String,
    },
    SetTheme(ThemeId),
    SetContact {
        field: ContactField,
        value: String,
    },
    UpdateWorkEntry {
        index: usize,
        field: WorkEntryField,
        value: String,
    },
    UpdateSkill {
        index: usize,
        field: SkillField,
        value: String,
    },
    UpdateProject {
        index: usize,
        field: ProjectField,
        value: String,
    },
    /// Append a placeholder element to the end of a sequence
    Append(Collection),
    /// Remove the element at `index`; later elements shift down by one
    Remove {
        collection: Collection,
        index: usize,
    },
}

fn element_mut<T>(items: &mut [T], collection: Collection, index: usize) -> EditResult<&mut T> {
    let len = items.len();
    items.get_mut(index).ok_or(EditError::IndexOutOfRange {
        collection: collection.as_str(),
        index,
        len,
    })
}

fn remove_at<T>(items: &mut Vec<T>, collection: Collection, index: usize) -> EditResult<()> {
    if index >= items.len() {
        return Err(EditError::IndexOutOfRange {
            collection: collection.as_str(),
            index,
            len: items.len(),
        });
    }
    items.remove(index);
    Ok(())
}

/// Apply one edit, producing the next record
pub fn apply_edit(record: &PortfolioRecord, edit: PortfolioEdit) -> EditResult<PortfolioRecord> {
    debug!("Applying edit {:?}", edit);
    let mut next = record.clone();

    match edit {
        PortfolioEdit::SetField { field, value } => {
            let slot = match field {
                RecordField::Name => &mut next.name,
                RecordField::Bio => &mut next.bio,
                RecordField::ProfileImage => &mut next.profile_image,
                RecordField::ResumeLink => &mut next.resume_link,
                RecordField::AboutText => &mut next.about_text,
                RecordField::Favicon => &mut next.favicon,
            };
            *slot = value;
        }
        PortfolioEdit::SetTheme(theme) => next.theme = theme,
        PortfolioEdit::SetContact { field, value } => {
            let slot = match field {
                ContactField::Email => &mut next.contact.email,
                ContactField::Linkedin => &mut next.contact.linkedin,
                ContactField::Github => &mut next.contact.github,
                ContactField::Phone => &mut next.contact.phone,
            };
            *slot = value;
        }
        PortfolioEdit::UpdateWorkEntry {
            index,
            field,
            value,
        } => {
            let entry = element_mut(&mut next.work_experience, Collection::WorkExperience, index)?;
            let slot = match field {
                WorkEntryField::Title => &mut entry.title,
                WorkEntryField::Company => &mut entry.company,
                WorkEntryField::Duration => &mut entry.duration,
                WorkEntryField::Description => &mut entry.description,
            };
            *slot = value;
        }
        PortfolioEdit::UpdateSkill {
            index,
            field,
            value,
        } => {
            let skill = element_mut(&mut next.skills, Collection::Skills, index)?;
            match field {
                SkillField::Name => skill.name = value,
                SkillField::Level => skill.level = value,
                SkillField::Icon => skill.icon = Some(value),
            }
        }
        PortfolioEdit::UpdateProject {
            index,
            field,
            value,
        } => {
            let project = element_mut(&mut next.projects, Collection::Projects, index)?;
            let slot = match field {
                ProjectField::Title => &mut project.title,
                ProjectField::Image => &mut project.image,
                ProjectField::GithubLink => &mut project.github_link,
                ProjectField::LiveDemoLink => &mut project.live_demo_link,
            };
            *slot = value;
        }
        PortfolioEdit::Append(collection) => match collection {
            Collection::WorkExperience => next.work_experience.push(WorkEntry::placeholder()),
            Collection::Skills => next.skills.push(Skill::placeholder()),
            Collection::Projects => next.projects.push(Project::placeholder()),
        },
        PortfolioEdit::Remove { collection, index } => match collection {
            Collection::WorkExperience => remove_at(&mut next.work_experience, collection, index)?,
            Collection::Skills => remove_at(&mut next.skills, collection, index)?,
            Collection::Projects => remove_at(&mut next.projects, collection, index)?,
        },
    }

    Ok(next)
}
