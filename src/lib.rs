//! Export and navigation helpers for function reference guides.
//!
//! A guide is a list of sections, each holding function entries (name,
//! description, syntax, example). The crate turns such a guide into a
//! paginated PDF with a title page and per-page footers, and models the
//! search, shortcut, copy and scroll behaviour of the interactive page.
//!
//! ```no_run
//! use refguide::{ExportConfig, Exporter, JsonContent, PdfSurface};
//!
//! # fn main() -> refguide::Result<()> {
//! let content = JsonContent::from_path("guide.json")?;
//! let config = ExportConfig::default();
//! let surface = PdfSurface::new(
//!     &config.title_page.title,
//!     config.layout.page_width,
//!     config.layout.page_height,
//! )?;
//! let export = Exporter::new(config).try_export(&content, surface)?;
//! std::fs::write(&export.artifact.file_name, &export.artifact.bytes)?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod exporter;
pub mod extract;
pub mod fonts;
pub mod footer;
pub mod interactive;
pub mod layout;
pub mod metrics;
pub mod model;
pub mod surface;

#[cfg(feature = "bookmarks")]
pub mod bookmarks;

pub use config::{ExportConfig, FooterConfig, LayoutConfig, Rgb, TitlePage};
pub use error::{ExportError, Result};
pub use exporter::{Export, Exporter};
pub use extract::{extract, ContentSource, JsonContent, RawEntry, RawSection};
pub use layout::{LayoutSummary, SectionPlacement};
pub use model::{Entry, ReferenceDocument, Section};
pub use surface::{PdfArtifact, PdfSurface, RecordedDocument, RecordingSurface, Surface};
