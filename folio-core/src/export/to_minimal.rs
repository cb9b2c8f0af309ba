use handlebars::Handlebars;
use serde_json::Value;

use crate::errors::ExportResult;
use crate::export::renderer;
use crate::export::theme::{Palette, Section, ThemeDescriptor, ThemeGenerator};
use crate::model::ThemeId;

pub static DESCRIPTOR: ThemeDescriptor = ThemeDescriptor {
    id: ThemeId::Minimal,
    label: "Minimal",
    tagline: "Your bio",
    sections: &[
        Section::Profile,
        Section::About,
        Section::Experience,
        Section::Projects,
        Section::Skills,
        Section::Contact,
    ],
    palette: Palette {
        background: "#fafafa",
        page: "bg-neutral-50 text-neutral-900 font-light",
        nav: "bg-neutral-50/90",
        heading: "text-neutral-900",
        accent: "text-neutral-500",
        muted: "text-neutral-600",
        card: "border-l-2 border-neutral-300",
        band: "bg-white",
        chip: "border border-neutral-300 text-neutral-700",
        button: "border border-neutral-900 text-neutral-900 hover:bg-neutral-900 hover:text-white",
        ring: "ring-neutral-300",
        link: "underline underline-offset-4 hover:text-neutral-500",
    },
};

/// Skills as a plain list instead of the shared chip grid
pub fn get_skills_template() -> &'static str {
    include_str!("to_minimal_skills.hbs")
}

pub struct MinimalTheme;

impl ThemeGenerator for MinimalTheme {
    fn descriptor(&self) -> &'static ThemeDescriptor {
        &DESCRIPTOR
    }

    fn render_section(
        &self,
        handlebars: &Handlebars<'static>,
        section: Section,
        context: &Value,
    ) -> ExportResult<String> {
        match section {
            Section::Skills => Ok(handlebars.render_template(get_skills_template(), context)?),
            _ => renderer::render_shared_section(handlebars, section, context),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{PortfolioDraft, Skill};

    #[test]
    fn test_minimal_renders_skills_as_list() {
        let draft = PortfolioDraft {
            skills: Some(vec![
                Skill {
                    name: "Rust".to_string(),
                    level: "Expert".to_string(),
                    icon: None,
                },
                Skill {
                    name: "Go".to_string(),
                    level: String::new(),
                    icon: None,
                },
            ]),
            ..PortfolioDraft::default()
        };
        let files = MinimalTheme.generate(&draft).unwrap();
        let page = &files["app/page.tsx"];

        assert!(page.contains("<ul className=\"mt-4 space-y-1"));
        assert!(page.contains("{ \"Expert\" }"));
        assert_eq!(page.matches("<li>").count(), 2);
        assert!(!page.contains("rounded-full border border-neutral-300"));
    }

    #[test]
    fn test_minimal_keeps_shared_sections() {
        let files = MinimalTheme.generate(&PortfolioDraft::default()).unwrap();
        let page = &files["app/page.tsx"];
        let projects = page.find("id=\"projects\"").unwrap();
        let skills = page.find("id=\"skills\"").unwrap();
        assert!(projects < skills);
        assert!(page.contains("id=\"contact\""));
    }
}
