//! Export configuration: page geometry, text roles and fixed strings.
//!
//! Every value is in millimetres (positions, advances) or points (font
//! sizes). The defaults describe the A4 layout of the Python functions reference
//! guide; a JSON file can override any subset of the fields.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// An RGB text color, serialized as `[r, g, b]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0, 0, 0);
}

impl From<Rgb> for genpdf::style::Color {
    fn from(color: Rgb) -> Self {
        genpdf::style::Color::Rgb(color.0, color.1, color.2)
    }
}

/// A single-line text role: font, color and how far the cursor moves after it.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LineStyle {
    pub font_size: u8,
    pub color: Rgb,
    pub advance: f64,
}

impl LineStyle {
    const fn new(font_size: u8, color: Rgb, advance: f64) -> Self {
        Self {
            font_size,
            color,
            advance,
        }
    }
}

/// A wrapped text role. The cursor advances by `lines * line_height + gap`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BlockStyle {
    pub font_size: u8,
    pub color: Rgb,
    pub line_height: f64,
    pub gap: f64,
}

impl BlockStyle {
    const fn new(font_size: u8, color: Rgb, line_height: f64, gap: f64) -> Self {
        Self {
            font_size,
            color,
            line_height,
            gap,
        }
    }

    /// Vertical space taken by a block of `lines` wrapped lines.
    pub fn height(&self, lines: usize) -> f64 {
        lines as f64 * self.line_height + self.gap
    }
}

/// Geometry and text roles for the content pages.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub page_width: f64,
    pub page_height: f64,
    /// Left margin, also the x position of every unindented block.
    pub margin: f64,
    /// Cursor position at the top of each content page.
    pub content_top: f64,
    /// An entry starting below `page_height - bottom_guard` moves to a new page.
    pub bottom_guard: f64,
    /// Width that description, syntax and example text wrap to.
    pub text_width: f64,
    /// Extra indentation of syntax and example text.
    pub code_indent: f64,
    /// Extra gap after the last entry of a section.
    pub section_gap: f64,
    pub section_header: LineStyle,
    pub entry_name: LineStyle,
    pub description: BlockStyle,
    pub syntax_label: LineStyle,
    pub syntax: BlockStyle,
    pub example_label: LineStyle,
    pub example: BlockStyle,
}

impl LayoutConfig {
    /// Cursor position beyond which no new entry is started on the current page.
    pub fn guard_line(&self) -> f64 {
        self.page_height - self.bottom_guard
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        let slate = Rgb(44, 62, 80);
        Self {
            page_width: 210.0,
            page_height: 297.0,
            margin: 20.0,
            content_top: 30.0,
            bottom_guard: 60.0,
            text_width: 170.0,
            code_indent: 5.0,
            section_gap: 10.0,
            section_header: LineStyle::new(18, slate, 15.0),
            entry_name: LineStyle::new(14, Rgb(231, 76, 60), 8.0),
            description: BlockStyle::new(10, Rgb(85, 85, 85), 5.0, 3.0),
            syntax_label: LineStyle::new(9, slate, 5.0),
            syntax: BlockStyle::new(9, Rgb::BLACK, 4.0, 3.0),
            example_label: LineStyle::new(9, Rgb(39, 174, 96), 5.0),
            example: BlockStyle::new(9, Rgb::BLACK, 4.0, 8.0),
        }
    }
}

/// Contents of page 1: title, subtitle and a fixed table of contents.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TitlePage {
    pub title: String,
    pub title_style: LineStyle,
    pub title_y: f64,
    pub subtitle: String,
    pub subtitle_style: LineStyle,
    pub subtitle_y: f64,
    pub contents_heading: String,
    pub contents_heading_style: LineStyle,
    pub contents_y: f64,
    pub contents_lines: Vec<String>,
    pub contents_line_style: LineStyle,
}

impl Default for TitlePage {
    fn default() -> Self {
        let slate = Rgb(44, 62, 80);
        Self {
            title: "Python Functions Reference Guide".to_owned(),
            title_style: LineStyle::new(24, slate, 0.0),
            title_y: 30.0,
            subtitle: "Complete reference for Python built-in functions and math module".to_owned(),
            subtitle_style: LineStyle::new(14, Rgb(100, 100, 100), 0.0),
            subtitle_y: 45.0,
            contents_heading: "Table of Contents".to_owned(),
            contents_heading_style: LineStyle::new(16, slate, 15.0),
            contents_y: 70.0,
            contents_lines: vec![
                "1. Python Built-in Functions ........................... 3".to_owned(),
                "2. Python Math Module Functions .................... 15".to_owned(),
                "3. Practical Usage Examples ......................... 25".to_owned(),
                "4. Quick Reference Tips ............................. 28".to_owned(),
            ],
            contents_line_style: LineStyle::new(12, Rgb::BLACK, 8.0),
        }
    }
}

/// Footer stamped on every page once the page count is known.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FooterConfig {
    /// Left-hand text, usually the document title.
    pub text: String,
    pub font_size: u8,
    pub color: Rgb,
    pub y: f64,
    /// x position of the left-hand text.
    pub text_x: f64,
    /// x position of the "Page i of N" label.
    pub page_label_x: f64,
}

impl FooterConfig {
    /// Formats the page label for page `index` of `count`.
    pub fn page_label(index: usize, count: usize) -> String {
        format!("Page {} of {}", index, count)
    }
}

impl Default for FooterConfig {
    fn default() -> Self {
        Self {
            text: "Python Functions Reference Guide".to_owned(),
            font_size: 8,
            color: Rgb(150, 150, 150),
            y: 285.0,
            text_x: 20.0,
            page_label_x: 170.0,
        }
    }
}

/// Everything the exporter needs besides the content and the backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    pub layout: LayoutConfig,
    pub title_page: TitlePage,
    pub footer: FooterConfig,
    /// File name handed to the backend when the artifact is saved.
    pub file_name: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            layout: LayoutConfig::default(),
            title_page: TitlePage::default(),
            footer: FooterConfig::default(),
            file_name: "Python_Functions_Reference_Guide.pdf".to_owned(),
        }
    }
}

impl ExportConfig {
    /// Parses a (possibly partial) JSON configuration.
    pub fn from_json_str(input: &str) -> Result<Self> {
        Ok(serde_json::from_str(input)?)
    }

    /// Reads a JSON configuration file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }
}
