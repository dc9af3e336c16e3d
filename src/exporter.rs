//! The export pipeline: extract, lay out, stamp footers, save.

use log::{debug, info};

use crate::config::ExportConfig;
use crate::error::Result;
use crate::extract::{self, ContentSource};
use crate::footer;
use crate::layout::{LayoutSummary, Paginator};
use crate::model::ReferenceDocument;
use crate::surface::Surface;

/// A finished export.
#[derive(Clone, Debug)]
pub struct Export<A> {
    /// Whatever the surface produced on save.
    pub artifact: A,
    /// Page count and the page each section header landed on.
    pub summary: LayoutSummary,
}

/// Runs exports with a fixed configuration.
///
/// The exporter holds no per-export state; the content source and the
/// surface are passed to each call. Calls are not meant to overlap: callers
/// disable their trigger while an export is running.
#[derive(Clone, Debug, Default)]
pub struct Exporter {
    config: ExportConfig,
}

impl Exporter {
    pub fn new(config: ExportConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ExportConfig {
        &self.config
    }

    /// Extracts `source` and exports it onto `surface`.
    ///
    /// Any failure aborts the export; no fallback is attempted here.
    pub fn try_export<S: Surface>(
        &self,
        source: &dyn ContentSource,
        surface: S,
    ) -> Result<Export<S::Artifact>> {
        let document = extract::extract(source)?;
        self.export_document(&document, surface)
    }

    /// Exports an already extracted document onto `surface`.
    pub fn export_document<S: Surface>(
        &self,
        document: &ReferenceDocument,
        mut surface: S,
    ) -> Result<Export<S::Artifact>> {
        let summary = Paginator::new(&mut surface, &self.config).run(document)?;
        footer::stamp_footers(&mut surface, &self.config.footer, summary.page_count)?;

        let artifact = surface.save(&self.config.file_name)?;
        info!(
            "Exported {} entries in {} sections to {} ({} pages)",
            summary.entries_written,
            summary.sections.len(),
            self.config.file_name,
            summary.page_count
        );
        debug!("Section pages: {:?}", summary.sections);

        Ok(Export { artifact, summary })
    }
}
