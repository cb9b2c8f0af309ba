use tracing::info;

use crate::bundle::{ArchiveBundle, ArchiveSink, BundleOptions, SavedArchive};
use crate::config::ExportConfig;
use crate::errors::ExportResult;
use crate::export::{generate_project, ProjectFiles};
use crate::model::{PortfolioDraft, ThemeId};
use crate::normalize::DEFAULT_NAME;

/// One export request: pick the theme, generate, archive, hand to a sink
#[derive(Debug, Clone, Default)]
pub struct ExportService {
    config: ExportConfig,
}

impl ExportService {
    pub fn new(config: ExportConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ExportConfig {
        &self.config
    }

    /// `draft` with its theme settled: an explicit override wins, then the
    /// record's own theme, then the configured default.
    pub fn with_theme(&self, draft: &PortfolioDraft, theme: Option<ThemeId>) -> PortfolioDraft {
        let mut draft = draft.clone();
        let named = draft.theme.as_deref().is_some_and(|t| !t.is_empty());
        match (theme, self.config.default_theme) {
            (Some(theme), _) => draft.theme = Some(theme.to_string()),
            (None, Some(default)) if !named => draft.theme = Some(default.to_string()),
            _ => {}
        }
        draft
    }

    pub fn generate(
        &self,
        draft: &PortfolioDraft,
        theme: Option<ThemeId>,
    ) -> ExportResult<ProjectFiles> {
        generate_project(&self.with_theme(draft, theme))
    }

    pub fn bundle(&self, files: ProjectFiles) -> ArchiveBundle {
        ArchiveBundle::new(files).with_options(BundleOptions::from(&self.config))
    }

    /// Generate and archive `draft`, then save it through `sink`
    pub async fn export(
        &self,
        draft: &PortfolioDraft,
        theme: Option<ThemeId>,
        sink: &dyn ArchiveSink,
        filename: Option<&str>,
    ) -> ExportResult<SavedArchive> {
        let filename = filename
            .map(str::to_string)
            .unwrap_or_else(|| Self::default_filename(draft));
        let files = self.generate(draft, theme)?;
        info!("Exporting {} files as {}", files.len(), filename);
        self.bundle(files).save(sink, &filename).await
    }

    /// `<name>-portfolio.zip`, with the name reduced to a safe file stem
    pub fn default_filename(draft: &PortfolioDraft) -> String {
        let name = draft
            .name
            .as_deref()
            .filter(|n| !n.is_empty())
            .unwrap_or(DEFAULT_NAME);
        format!("{}-portfolio.zip", sanitize_file_stem(name))
    }
}

fn sanitize_file_stem(name: &str) -> String {
    let mapped: String = name
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect();

    let trimmed = mapped.trim_matches(|c| c == '_' || c == '-');
    if trimmed.is_empty() {
        "portfolio".to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bundle::MemorySink;

    #[test]
    fn test_default_filename() {
        let named = PortfolioDraft {
            name: Some("Ada  Lovelace".to_string()),
            ..PortfolioDraft::default()
        };
        assert_eq!(
            ExportService::default_filename(&named),
            "ada-lovelace-portfolio.zip"
        );
        assert_eq!(
            ExportService::default_filename(&PortfolioDraft::default()),
            "your-name-portfolio.zip"
        );

        let markup = PortfolioDraft {
            name: Some("A&B".to_string()),
            ..PortfolioDraft::default()
        };
        assert_eq!(
            ExportService::default_filename(&markup),
            "a_b-portfolio.zip"
        );
        assert_eq!(sanitize_file_stem("???"), "portfolio");
    }

    #[test]
    fn test_theme_precedence() {
        let service = ExportService::new(ExportConfig {
            default_theme: Some(ThemeId::Galaxy),
            ..ExportConfig::default()
        });
        let untagged = PortfolioDraft::default();
        let tagged = PortfolioDraft::default().with_theme("neon");

        assert_eq!(
            service.with_theme(&untagged, None).theme.as_deref(),
            Some("galaxy")
        );
        assert_eq!(
            service.with_theme(&tagged, None).theme.as_deref(),
            Some("neon")
        );
        assert_eq!(
            service
                .with_theme(&tagged, Some(ThemeId::Minimal))
                .theme
                .as_deref(),
            Some("minimal")
        );
        assert_eq!(
            ExportService::default()
                .with_theme(&untagged, None)
                .theme,
            None
        );
    }

    #[tokio::test]
    async fn test_export_saves_under_default_name() {
        let sink = MemorySink::new();
        let draft = PortfolioDraft {
            name: Some("Ada".to_string()),
            ..PortfolioDraft::default()
        };
        let saved = ExportService::default()
            .export(&draft, None, &sink, None)
            .await
            .unwrap();

        assert_eq!(saved.filename, "ada-portfolio.zip");
        assert_eq!(sink.saved().len(), 1);
        assert_eq!(sink.saved()[0].1.file_count(), 8);
    }
}
