pub mod bundle;
pub mod common;
pub mod config;
pub mod edit;
pub mod errors;
pub mod export;
pub mod model;
pub mod normalize;
pub mod services;

pub use bundle::{
    ArchiveBlob, ArchiveBundle, ArchiveSink, BundleOptions, DirectorySink, MemorySink,
    SavedArchive,
};
pub use config::ExportConfig;
pub use edit::{apply_edit, PortfolioEdit};
pub use errors::{EditError, ExportError};
pub use export::{generate_project, ProjectFiles, ThemeGenerator};
pub use model::{PortfolioDraft, PortfolioRecord, ThemeId};
pub use normalize::normalize;
pub use services::ExportService;
