//! Theme descriptors and the generator capability every theme implements.

use handlebars::Handlebars;
use serde::Serialize;
use serde_json::Value;
use strum::{AsRefStr, Display, EnumIter, EnumString};

use crate::errors::ExportResult;
use crate::export::{renderer, ProjectFiles};
use crate::model::{PortfolioDraft, PortfolioRecord, ThemeId};
use crate::normalize::normalize;

/// Page sections a theme can lay out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum Section {
    Profile,
    About,
    Experience,
    Skills,
    Projects,
    Contact,
}

impl Section {
    pub fn title(self) -> &'static str {
        match self {
            Section::Profile => "Profile",
            Section::About => "About",
            Section::Experience => "Experience",
            Section::Skills => "Skills",
            Section::Projects => "Projects",
            Section::Contact => "Contact",
        }
    }
}

/// Tailwind class tokens and colors a theme paints with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Palette {
    /// Body background written to `app/globals.css`
    pub background: &'static str,
    pub page: &'static str,
    pub nav: &'static str,
    pub heading: &'static str,
    pub accent: &'static str,
    pub muted: &'static str,
    pub card: &'static str,
    /// Background of every other section
    pub band: &'static str,
    pub chip: &'static str,
    pub button: &'static str,
    pub ring: &'static str,
    pub link: &'static str,
}

/// Everything that distinguishes one theme's output from another's
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeDescriptor {
    pub id: ThemeId,
    pub label: &'static str,
    /// Placeholder bio for records without one
    pub tagline: &'static str,
    pub sections: &'static [Section],
    pub palette: Palette,
}

impl ThemeDescriptor {
    /// Suffix appended to the slugged name in `package.json`
    pub fn package_suffix(&self) -> String {
        format!("nocodefolio-{}", self.id)
    }
}

/// A theme able to turn a portfolio into a project file set.
///
/// Implementors usually only supply [`ThemeGenerator::descriptor`]; the
/// shared layout builder renders every section from the embedded section
/// templates unless a theme overrides [`ThemeGenerator::render_section`].
pub trait ThemeGenerator: Send + Sync {
    fn descriptor(&self) -> &'static ThemeDescriptor;

    fn render_section(
        &self,
        handlebars: &Handlebars<'static>,
        section: Section,
        context: &Value,
    ) -> ExportResult<String> {
        renderer::render_shared_section(handlebars, section, context)
    }

    /// Render an already normalized record
    fn render(&self, record: &PortfolioRecord) -> ExportResult<ProjectFiles> {
        renderer::render_project(self, record)
    }

    /// Normalize `draft` onto this theme and render it
    fn generate(&self, draft: &PortfolioDraft) -> ExportResult<ProjectFiles> {
        let record = normalize(draft, self.descriptor().id);
        self.render(&record)
    }
}

impl ThemeId {
    pub fn generator(self) -> &'static dyn ThemeGenerator {
        use crate::export::{to_creative, to_galaxy, to_minimal, to_modern, to_neon};
        match self {
            ThemeId::Modern => &to_modern::ModernTheme,
            ThemeId::Minimal => &to_minimal::MinimalTheme,
            ThemeId::Creative => &to_creative::CreativeTheme,
            ThemeId::Galaxy => &to_galaxy::GalaxyTheme,
            ThemeId::Neon => &to_neon::NeonTheme,
        }
    }

    pub fn descriptor(self) -> &'static ThemeDescriptor {
        self.generator().descriptor()
    }
}
