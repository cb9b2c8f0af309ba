//! Project generation: one generator per theme plus the shared layout
//! builder they render through.

pub mod manifest;
pub mod theme;
pub mod to_creative;
pub mod to_galaxy;
pub mod to_minimal;
pub mod to_modern;
pub mod to_neon;

use std::collections::BTreeMap;

use tracing::info;

use crate::errors::ExportResult;
use crate::model::{PortfolioDraft, ThemeId};

pub use theme::{Palette, Section, ThemeDescriptor, ThemeGenerator};

/// Generated project: in-project path to file content, in path order
pub type ProjectFiles = BTreeMap<String, String>;

/// Generate the project for whichever theme `draft` names.
///
/// Missing or unknown theme identifiers fall back to [`ThemeId::CANONICAL`].
pub fn generate_project(draft: &PortfolioDraft) -> ExportResult<ProjectFiles> {
    let theme = ThemeId::resolve(draft.theme.as_deref());
    info!("Generating project with theme {}", theme);
    theme.generator().generate(draft)
}

/// Shared layout builder used by every theme
pub mod renderer {
    use std::path::Path;

    use chrono::{Datelike, Local};
    use handlebars::Handlebars;
    use include_dir::{include_dir, Dir, DirEntry, File};
    use serde_json::{json, Value};
    use tracing::debug;

    use crate::common::get_handlebars;
    use crate::common::source_text::plain_text;
    use crate::errors::{ExportError, ExportResult};
    use crate::export::manifest::PackageManifest;
    use crate::export::theme::{Section, ThemeDescriptor, ThemeGenerator};
    use crate::export::ProjectFiles;
    use crate::model::PortfolioRecord;

    static TEMPLATES: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/templates");

    const PROJECT_ROOT: &str = "project";
    const SECTIONS_ROOT: &str = "sections";
    const TEMPLATE_SUFFIX: &str = ".hbs";

    /// Source of the shared template for `name`
    pub fn section_template(name: &str) -> ExportResult<&'static str> {
        let path = format!("{}/{}{}", SECTIONS_ROOT, name, TEMPLATE_SUFFIX);
        TEMPLATES
            .get_file(&path)
            .and_then(|file| file.contents_utf8())
            .ok_or(ExportError::TemplateNotFound(path))
    }

    pub fn render_shared_section(
        handlebars: &Handlebars<'static>,
        section: Section,
        context: &Value,
    ) -> ExportResult<String> {
        let template = section_template(section.as_ref())?;
        Ok(handlebars.render_template(template, context)?)
    }

    fn collect_files(dir: &'static Dir<'static>, files: &mut Vec<&'static File<'static>>) {
        for entry in dir.entries() {
            match entry {
                DirEntry::Dir(child) => collect_files(child, files),
                DirEntry::File(file) => files.push(file),
            }
        }
    }

    fn project_path(file: &File<'_>) -> ExportResult<String> {
        let relative = file
            .path()
            .strip_prefix(PROJECT_ROOT)
            .unwrap_or_else(|_| file.path());
        relative
            .to_str()
            .map(|p| p.replace('\\', "/"))
            .ok_or_else(|| ExportError::InvalidEntryPath(relative.display().to_string()))
    }

    /// Creates the context every project and section template renders with
    pub fn create_standard_context(
        record: &PortfolioRecord,
        descriptor: &ThemeDescriptor,
    ) -> Value {
        let plain_name = plain_text(&record.name);
        let contact = &record.contact;
        let nav: Vec<Value> = descriptor
            .sections
            .iter()
            .filter(|section| **section != Section::Profile)
            .map(|section| json!({ "id": section.as_ref(), "label": section.title() }))
            .collect();

        json!({
            "theme": descriptor.id,
            "theme_label": descriptor.label,
            "name": &record.name,
            "plain_name": &plain_name,
            "page_title": format!("{} | Portfolio", plain_name),
            "page_description": format!("Portfolio of {}", plain_name),
            "bio": &record.bio,
            "profile_image": &record.profile_image,
            "resume_link": &record.resume_link,
            "about_text": &record.about_text,
            "favicon": &record.favicon,
            "work_experience": &record.work_experience,
            "skills": &record.skills,
            "projects": &record.projects,
            "contact": {
                "email": &contact.email,
                "linkedin": &contact.linkedin,
                "github": &contact.github,
                "phone": &contact.phone,
                "mailto": format!("mailto:{}", contact.email),
                "tel": format!("tel:{}", contact.phone.split_whitespace().collect::<String>()),
            },
            "palette": descriptor.palette,
            "nav": nav,
            "year": Local::now().year(),
        })
    }

    /// Render the complete file set for `record` with `generator`'s theme
    pub fn render_project<G: ThemeGenerator + ?Sized>(
        generator: &G,
        record: &PortfolioRecord,
    ) -> ExportResult<ProjectFiles> {
        let descriptor = generator.descriptor();
        let handlebars = get_handlebars();
        let mut context = create_standard_context(record, descriptor);

        let mut sections = Vec::with_capacity(descriptor.sections.len());
        for (index, section) in descriptor.sections.iter().enumerate() {
            let mut section_context = context.clone();
            let band = if index % 2 == 1 {
                descriptor.palette.band
            } else {
                ""
            };
            section_context["band"] = Value::from(band);
            sections.push(generator.render_section(&handlebars, *section, &section_context)?);
        }
        context["sections"] = Value::from(sections.join("\n"));

        let project_dir = TEMPLATES
            .get_dir(PROJECT_ROOT)
            .ok_or_else(|| ExportError::TemplateNotFound(PROJECT_ROOT.to_string()))?;
        let mut templates = Vec::new();
        collect_files(project_dir, &mut templates);

        let mut files = ProjectFiles::new();
        for template in templates {
            let path = project_path(template)?;
            let source = template
                .contents_utf8()
                .ok_or_else(|| ExportError::TemplateError(format!("{} is not UTF-8", path)))?;

            match path.strip_suffix(TEMPLATE_SUFFIX) {
                Some(target) => {
                    let rendered = handlebars.render_template(source, &context)?;
                    files.insert(target.to_string(), rendered);
                }
                None => {
                    files.insert(path.clone(), source.to_string());
                }
            }
        }

        let manifest = PackageManifest::new(&record.name, descriptor);
        files.insert("package.json".to_string(), manifest.to_json()?);

        debug!(
            "Rendered {} files for theme {}",
            files.len(),
            descriptor.id
        );
        Ok(files)
    }

    /// Names accepted by [`section_template`]
    pub fn section_names() -> Vec<String> {
        TEMPLATES
            .get_dir(SECTIONS_ROOT)
            .map(|dir| {
                dir.files()
                    .filter_map(|file| {
                        Path::new(file.path())
                            .file_stem()
                            .and_then(|stem| stem.to_str())
                            .map(str::to_string)
                    })
                    .collect()
            })
            .unwrap_or_default()
    }
}
