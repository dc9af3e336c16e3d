//! In-memory surface that records every draw call.

use crate::config::Rgb;
use crate::error::{ExportError, Result};
use crate::metrics;

use super::Surface;

/// A positioned text call as it reached the surface.
#[derive(Clone, Debug, PartialEq)]
pub struct DrawOp {
    pub x: f64,
    pub y: f64,
    pub lines: Vec<String>,
    pub font_size: u8,
    pub color: Rgb,
}

impl DrawOp {
    /// The lines joined with newlines.
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

/// One recorded page: its draw calls in the order they were issued.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecordedPage {
    ops: Vec<DrawOp>,
}

impl RecordedPage {
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Draw calls whose joined text equals `text`.
    pub fn find<'a, 'q>(&'a self, text: &'q str) -> impl Iterator<Item = &'a DrawOp> + 'q
    where
        'a: 'q,
    {
        self.ops.iter().filter(move |op| op.text() == text)
    }

    /// Whether any draw call on the page has exactly this text.
    pub fn contains(&self, text: &str) -> bool {
        self.find(text).next().is_some()
    }
}

/// The artifact of a [`RecordingSurface`].
#[derive(Clone, Debug, PartialEq)]
pub struct RecordedDocument {
    pub file_name: String,
    pages: Vec<RecordedPage>,
}

impl RecordedDocument {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Returns page `index` (1-based).
    pub fn page(&self, index: usize) -> Option<&RecordedPage> {
        index.checked_sub(1).and_then(|idx| self.pages.get(idx))
    }

    pub fn pages(&self) -> &[RecordedPage] {
        &self.pages
    }

    /// Every draw call with its 1-based page number, in page order.
    pub fn ops(&self) -> impl Iterator<Item = (usize, &DrawOp)> {
        self.pages
            .iter()
            .enumerate()
            .flat_map(|(idx, page)| page.ops.iter().map(move |op| (idx + 1, op)))
    }
}

/// Surface that measures text with Helvetica metrics and keeps every call in memory.
#[derive(Clone, Debug)]
pub struct RecordingSurface {
    pages: Vec<RecordedPage>,
    current: usize,
    font_size: u8,
    color: Rgb,
}

impl RecordingSurface {
    /// Creates a surface holding a single empty page.
    pub fn new() -> Self {
        Self {
            pages: vec![RecordedPage::default()],
            current: 0,
            font_size: 16,
            color: Rgb::BLACK,
        }
    }
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl Surface for RecordingSurface {
    type Artifact = RecordedDocument;

    fn set_font_size(&mut self, size: u8) {
        self.font_size = size;
    }

    fn set_text_color(&mut self, color: Rgb) {
        self.color = color;
    }

    fn text(&mut self, lines: &[String], x: f64, y: f64) -> Result<()> {
        let op = DrawOp {
            x,
            y,
            lines: lines.to_vec(),
            font_size: self.font_size,
            color: self.color,
        };
        self.pages[self.current].ops.push(op);
        Ok(())
    }

    fn split_text_to_size(&self, text: &str, max_width: f64) -> Vec<String> {
        let size = self.font_size;
        metrics::split_text_to_size(text, max_width, |s| metrics::helvetica_width(s, size))
    }

    fn add_page(&mut self) -> Result<()> {
        self.pages.push(RecordedPage::default());
        self.current = self.pages.len() - 1;
        Ok(())
    }

    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn set_page(&mut self, index: usize) -> Result<()> {
        if index == 0 || index > self.pages.len() {
            return Err(ExportError::PageOutOfRange {
                index,
                count: self.pages.len(),
            });
        }
        self.current = index - 1;
        Ok(())
    }

    fn save(self, file_name: &str) -> Result<RecordedDocument> {
        Ok(RecordedDocument {
            file_name: file_name.to_owned(),
            pages: self.pages,
        })
    }
}
