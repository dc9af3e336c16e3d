//! Pagination of a [`ReferenceDocument`] onto a [`Surface`].
//!
//! Page 1 is the title page with a fixed table of contents. Content starts on
//! page 2. Before each entry the cursor is compared with the guard line
//! (`page_height - bottom_guard`) and a new page is started if it lies below.
//! That is the only overflow check:
//!
//! - section headers are written wherever the cursor is, even past the guard;
//! - once an entry has started, all of its blocks are written on the same
//!   page, even when later blocks run past the bottom of the page.

use log::debug;

use crate::config::{BlockStyle, ExportConfig, LineStyle};
use crate::error::Result;
use crate::model::{Entry, ReferenceDocument, Section};
use crate::surface::Surface;

/// Page a section header landed on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SectionPlacement {
    pub title: String,
    pub anchor: Option<String>,
    /// 1-based page number.
    pub page: usize,
}

/// What the layout pass produced, available once every section is laid out.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LayoutSummary {
    pub page_count: usize,
    pub sections: Vec<SectionPlacement>,
    pub entries_written: usize,
}

/// Current page and vertical write position.
#[derive(Clone, Copy, Debug)]
struct LayoutCursor {
    page: usize,
    y: f64,
}

/// Lays out a document onto a surface. Owns the cursor for one export.
pub struct Paginator<'a, S: Surface> {
    surface: &'a mut S,
    config: &'a ExportConfig,
    cursor: LayoutCursor,
}

impl<'a, S: Surface> Paginator<'a, S> {
    pub fn new(surface: &'a mut S, config: &'a ExportConfig) -> Self {
        Self {
            surface,
            config,
            cursor: LayoutCursor { page: 1, y: 0.0 },
        }
    }

    /// Writes the title page and every section, returning the final page count.
    pub fn run(mut self, document: &ReferenceDocument) -> Result<LayoutSummary> {
        self.title_page()?;
        self.new_page()?;

        let mut sections = Vec::with_capacity(document.sections().len());
        let mut entries_written = 0;

        for section in document.sections() {
            sections.push(self.section(section)?);
            entries_written += section.entries().len();
        }

        let page_count = self.surface.page_count();
        debug!(
            "Laid out {} sections and {} entries on {} pages",
            sections.len(),
            entries_written,
            page_count
        );

        Ok(LayoutSummary {
            page_count,
            sections,
            entries_written,
        })
    }

    fn title_page(&mut self) -> Result<()> {
        let config = self.config;
        let title = &config.title_page;
        let x = config.layout.margin;

        self.line(&title.title_style, &title.title, x, title.title_y)?;
        self.line(&title.subtitle_style, &title.subtitle, x, title.subtitle_y)?;

        let mut y = title.contents_y;
        self.line(&title.contents_heading_style, &title.contents_heading, x, y)?;
        y += title.contents_heading_style.advance;

        for entry in &title.contents_lines {
            self.line(&title.contents_line_style, entry, x, y)?;
            y += title.contents_line_style.advance;
        }

        Ok(())
    }

    fn new_page(&mut self) -> Result<()> {
        self.surface.add_page()?;
        self.cursor = LayoutCursor {
            page: self.surface.page_count(),
            y: self.config.layout.content_top,
        };
        Ok(())
    }

    fn section(&mut self, section: &Section) -> Result<SectionPlacement> {
        let config = self.config;
        let layout = &config.layout;

        // Headers are never checked against the guard line.
        let placement = SectionPlacement {
            title: section.title().to_owned(),
            anchor: section.anchor().map(str::to_owned),
            page: self.cursor.page,
        };
        let y = self.cursor.y;
        self.line(&layout.section_header, section.title(), layout.margin, y)?;
        self.cursor.y += layout.section_header.advance;

        for entry in section.entries() {
            if self.cursor.y > layout.guard_line() {
                self.new_page()?;
            }
            self.entry(entry)?;
        }

        self.cursor.y += layout.section_gap;
        Ok(placement)
    }

    fn entry(&mut self, entry: &Entry) -> Result<()> {
        let config = self.config;
        let layout = &config.layout;
        let x = layout.margin;
        let code_x = layout.margin + layout.code_indent;

        let y = self.cursor.y;
        self.line(&layout.entry_name, entry.name(), x, y)?;
        self.cursor.y += layout.entry_name.advance;

        self.block(&layout.description, entry.description(), x)?;

        let y = self.cursor.y;
        self.line(&layout.syntax_label, "Syntax:", x, y)?;
        self.cursor.y += layout.syntax_label.advance;
        self.block(&layout.syntax, entry.syntax(), code_x)?;

        let y = self.cursor.y;
        self.line(&layout.example_label, "Example:", x, y)?;
        self.cursor.y += layout.example_label.advance;
        self.block(&layout.example, entry.example(), code_x)?;

        Ok(())
    }

    /// Writes a single unwrapped line without touching the cursor.
    fn line(&mut self, style: &LineStyle, text: &str, x: f64, y: f64) -> Result<()> {
        self.surface.set_font_size(style.font_size);
        self.surface.set_text_color(style.color);
        self.surface.text(&[text.to_owned()], x, y)
    }

    /// Writes wrapped text at the cursor and advances past it.
    fn block(&mut self, style: &BlockStyle, text: &str, x: f64) -> Result<()> {
        self.surface.set_font_size(style.font_size);
        self.surface.set_text_color(style.color);
        let lines = self
            .surface
            .split_text_to_size(text, self.config.layout.text_width);
        self.surface.text(&lines, x, self.cursor.y)?;
        self.cursor.y += style.height(lines.len());
        Ok(())
    }
}
