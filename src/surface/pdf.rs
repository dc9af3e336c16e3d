//! PDF surface built on the low-level `genpdf` renderer.
//!
//! `genpdf`'s high-level document API flows elements from page to page and
//! never revisits a finished page, which the footer pass needs. This surface
//! therefore drives [`genpdf::render::Renderer`] directly and keeps its own
//! font cache for measuring and printing text. Text below the bottom edge is
//! written at its computed offset, outside the visible page.

use genpdf::fonts::{FontCache, FontData, FontFamily};
use genpdf::render::Renderer;
use genpdf::style::{Style, StyledString};
use genpdf::{Mm, Position, Size};
use log::debug;

use crate::config::Rgb;
use crate::error::{ExportError, Result};
use crate::fonts;
use crate::metrics;

use super::Surface;

fn mm_from_f64(value: f64) -> Mm {
    Mm::from(printpdf::Mm(value))
}

fn mm_to_f64(value: Mm) -> f64 {
    let mm: printpdf::Mm = value.into();
    mm.0
}

/// The rendered PDF together with the file name it should be saved under.
#[derive(Clone, Debug)]
pub struct PdfArtifact {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// A [`Surface`] producing PDF bytes.
pub struct PdfSurface {
    renderer: Renderer,
    font_cache: FontCache,
    page_size: Size,
    current: usize,
    style: Style,
    clipped: usize,
}

impl PdfSurface {
    /// Creates a surface with one page of the given size, using the default font family.
    pub fn new(title: &str, page_width: f64, page_height: f64) -> Result<Self> {
        let family = fonts::default_font_family().map_err(ExportError::FontLoad)?;
        Self::with_font_family(title, page_width, page_height, family)
    }

    /// Creates a surface with an explicit font family.
    pub fn with_font_family(
        title: &str,
        page_width: f64,
        page_height: f64,
        family: FontFamily<FontData>,
    ) -> Result<Self> {
        let page_size = Size::new(mm_from_f64(page_width), mm_from_f64(page_height));
        let renderer = Renderer::new(page_size, title)?;
        let mut font_cache = FontCache::new(family);
        font_cache.load_pdf_fonts(&renderer)?;

        Ok(Self {
            renderer,
            font_cache,
            page_size,
            current: 0,
            style: Style::new(),
            clipped: 0,
        })
    }

    /// Number of lines the renderer refused to print so far.
    pub fn clipped_lines(&self) -> usize {
        self.clipped
    }

    fn measure(&self, text: &str) -> f64 {
        let string = StyledString::new(text.to_owned(), self.style);
        mm_to_f64(string.width(&self.font_cache))
    }
}

impl Surface for PdfSurface {
    type Artifact = PdfArtifact;

    fn set_font_size(&mut self, size: u8) {
        self.style.set_font_size(size);
    }

    fn set_text_color(&mut self, color: Rgb) {
        self.style.set_color(color.into());
    }

    fn text(&mut self, lines: &[String], x: f64, y: f64) -> Result<()> {
        let count = self.renderer.page_count();
        let page = self
            .renderer
            .get_page(self.current)
            .ok_or(ExportError::PageOutOfRange {
                index: self.current + 1,
                count,
            })?;
        let layer = page.first_layer();

        // genpdf positions the top of the line box; callers pass baselines.
        let ascent = mm_to_f64(
            self.style
                .font(&self.font_cache)
                .glyph_height(self.style.font_size()),
        );
        let spacing = metrics::line_spacing(self.style.font_size());

        // Lines below the page bottom are still written at their offsets.
        let mut area = layer.area();
        let lowest = y - ascent + lines.len() as f64 * spacing + spacing;
        let page_height = mm_to_f64(self.page_size.height);
        if lowest > page_height {
            area.set_height(mm_from_f64(lowest));
        }

        for (index, line) in lines.iter().enumerate() {
            let top = y - ascent + index as f64 * spacing;
            let position = Position::new(mm_from_f64(x), mm_from_f64(top));
            if !area.print_str(&self.font_cache, position, self.style, line)? {
                self.clipped += 1;
                debug!(
                    "Text at ({:.1}, {:.1}) on page {} was not printed",
                    x,
                    top,
                    self.current + 1
                );
            }
        }

        Ok(())
    }

    fn split_text_to_size(&self, text: &str, max_width: f64) -> Vec<String> {
        metrics::split_text_to_size(text, max_width, |s| self.measure(s))
    }

    fn add_page(&mut self) -> Result<()> {
        self.renderer.add_page(self.page_size);
        self.current = self.renderer.page_count() - 1;
        Ok(())
    }

    fn page_count(&self) -> usize {
        self.renderer.page_count()
    }

    fn set_page(&mut self, index: usize) -> Result<()> {
        let count = self.renderer.page_count();
        if index == 0 || index > count {
            return Err(ExportError::PageOutOfRange { index, count });
        }
        self.current = index - 1;
        Ok(())
    }

    fn save(self, file_name: &str) -> Result<PdfArtifact> {
        let mut bytes = Vec::new();
        self.renderer.write(&mut bytes)?;
        debug!("Wrote {} ({} bytes)", file_name, bytes.len());
        Ok(PdfArtifact {
            file_name: file_name.to_owned(),
            bytes,
        })
    }
}
