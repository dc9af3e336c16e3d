//! Drawing surfaces the exporter renders onto.
//!
//! The exporter only ever talks to the [`Surface`] trait. Positions are in
//! millimetres from the top-left corner of the page and refer to the baseline
//! of the first line of a text call; page indices are 1-based.

pub mod pdf;
pub mod recording;

pub use pdf::{PdfArtifact, PdfSurface};
pub use recording::{DrawOp, RecordedDocument, RecordedPage, RecordingSurface};

use crate::config::Rgb;
use crate::error::Result;

/// Capability interface of a paged drawing backend.
pub trait Surface {
    /// What [`Surface::save`] produces.
    type Artifact;

    /// Sets the font size (in points) for subsequent text.
    fn set_font_size(&mut self, size: u8);

    /// Sets the color for subsequent text.
    fn set_text_color(&mut self, color: Rgb);

    /// Writes `lines` on the current page; the first baseline sits at `(x, y)`.
    ///
    /// Lines that fall below the page bottom are still written at their offsets.
    fn text(&mut self, lines: &[String], x: f64, y: f64) -> Result<()>;

    /// Wraps `text` to `max_width` using the current font size.
    fn split_text_to_size(&self, text: &str, max_width: f64) -> Vec<String>;

    /// Appends a page and makes it current.
    fn add_page(&mut self) -> Result<()>;

    /// Number of pages produced so far.
    fn page_count(&self) -> usize;

    /// Makes page `index` (1-based) current.
    fn set_page(&mut self, index: usize) -> Result<()>;

    /// Finishes the document and emits the artifact.
    fn save(self, file_name: &str) -> Result<Self::Artifact>;
}
