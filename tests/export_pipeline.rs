use refguide::config::Rgb;
use refguide::surface::DrawOp;
use refguide::{
    Entry, ExportConfig, ExportError, Exporter, RawEntry, RawSection, RecordedDocument,
    RecordingSurface, ReferenceDocument, Section, Surface,
};

const NAME_COLOR: Rgb = Rgb(231, 76, 60);

fn entry(name: &str) -> Entry {
    Entry::new(name)
        .with_description(format!("Describes {name}."))
        .with_syntax(format!("{name}(value)"))
        .with_example(format!(">>> {name}(3)"))
}

fn sample_document() -> ReferenceDocument {
    ReferenceDocument::new()
        .with_section(
            Section::new("Python Built-in Functions")
                .with_entries(["abs", "all", "any", "bin", "bool", "chr", "dict"].map(entry)),
        )
        .with_section(Section::new("Python Math Module Functions").with_entries(
            ["ceil", "floor", "sqrt", "pow", "log", "exp", "gcd", "hypot"].map(entry),
        ))
        .with_section(Section::new("Quick Reference Tips"))
}

fn export(document: &ReferenceDocument) -> RecordedDocument {
    Exporter::default()
        .export_document(document, RecordingSurface::new())
        .expect("export succeeds")
        .artifact
}

fn entry_names(recorded: &RecordedDocument) -> Vec<(usize, String)> {
    recorded
        .ops()
        .filter(|(_, op)| op.color == NAME_COLOR && op.font_size == 14)
        .map(|(page, op)| (page, op.text()))
        .collect()
}

#[test]
fn every_entry_appears_once_in_order() {
    let document = sample_document();
    let recorded = export(&document);

    let written: Vec<String> = entry_names(&recorded)
        .into_iter()
        .map(|(_, name)| name)
        .collect();
    let expected: Vec<String> = document.entries().map(|e| e.name().to_owned()).collect();
    assert_eq!(written, expected);

    assert!(recorded.page_count() >= 2);
    let title = recorded.page(1).expect("title page");
    assert!(title.contains("Python Functions Reference Guide"));
    assert!(entry_names(&recorded).iter().all(|(page, _)| *page >= 2));
}

#[test]
fn footers_carry_final_page_count() {
    let recorded = export(&sample_document());
    let total = recorded.page_count();
    assert!(total >= 4, "sample spans several content pages");

    for (index, page) in recorded.pages().iter().enumerate() {
        let label = format!("Page {} of {}", index + 1, total);
        let footers: Vec<&DrawOp> = page
            .ops()
            .iter()
            .filter(|op| op.text().starts_with("Page "))
            .collect();
        assert_eq!(footers.len(), 1, "one page label per page");
        assert_eq!(footers[0].text(), label);
        assert_eq!(footers[0].font_size, 8);
    }
}

#[test]
fn exporting_twice_is_identical() {
    let document = sample_document();
    assert_eq!(export(&document), export(&document));
}

#[test]
fn oversized_entry_is_not_split() {
    // Five one-line entries leave the cursor at 270. The next entry is
    // guarded onto a fresh page, then runs far past the bottom on that page.
    let long_example = (0..80)
        .map(|i| format!("print({i})"))
        .collect::<Vec<_>>()
        .join("\n");
    let section = Section::new("Overflow")
        .with_entries(["a", "b", "c", "d", "e"].map(entry))
        .with_entry(entry("huge").with_example(long_example));
    let recorded = export(&ReferenceDocument::new().with_section(section));

    assert_eq!(recorded.page_count(), 3);
    let page = recorded.page(3).expect("page 3");
    let name = page.find("huge").next().expect("entry name on page 3");
    assert_eq!(name.y, 30.0);

    let example = page
        .ops()
        .iter()
        .find(|op| op.lines.len() == 80)
        .expect("whole example written on page 3");
    // 30 + 8 + 8 + 5 + 7 + 5 = 63; 80 lines then end at 63 + 320 + 8.
    assert_eq!(example.y, 63.0);
    assert!(example.y + 80.0 * 4.0 > 297.0);
}

#[test]
fn entry_started_above_guard_spills_past_page_bottom() {
    // Four entries end at 225, just above the 237 guard line. The fifth
    // starts there and its long description runs past the page bottom.
    let long_description = "word ".repeat(600);
    let section = Section::new("Spill")
        .with_entries(["a", "b", "c", "d"].map(entry))
        .with_entry(entry("late").with_description(long_description));
    let recorded = export(&ReferenceDocument::new().with_section(section));

    let page = recorded.page(2).expect("page 2");
    let name = page.find("late").next().expect("name on page 2");
    assert_eq!(name.y, 225.0);
    let example_label = page
        .find("Example:")
        .last()
        .expect("example label on page 2");
    assert!(example_label.y > 297.0);
    assert_eq!(recorded.page_count(), 2);
}

#[test]
fn header_only_section_still_gets_a_header() {
    let recorded = export(&sample_document());
    let tips = recorded
        .ops()
        .find(|(_, op)| op.text() == "Quick Reference Tips" && op.font_size == 18);
    assert!(tips.is_some());
}

#[test]
fn try_export_skips_headerless_sections() {
    let source = vec![
        RawSection {
            header: None,
            anchor: None,
            entries: vec![RawEntry {
                name: Some("hidden".into()),
                ..RawEntry::default()
            }],
        },
        RawSection {
            header: Some("Visible".into()),
            anchor: Some("visible".into()),
            entries: vec![RawEntry {
                name: Some("shown".into()),
                ..RawEntry::default()
            }],
        },
    ];

    let export = Exporter::default()
        .try_export(&source, RecordingSurface::new())
        .expect("export succeeds");
    let names: Vec<String> = entry_names(&export.artifact)
        .into_iter()
        .map(|(_, name)| name)
        .collect();
    assert_eq!(names, ["shown"]);
    assert_eq!(export.summary.sections.len(), 1);
    assert_eq!(export.artifact.file_name, "Python_Functions_Reference_Guide.pdf");
}

/// Surface whose backend gives out after a number of pages.
struct FailingSurface {
    inner: RecordingSurface,
    pages_left: usize,
}

impl Surface for FailingSurface {
    type Artifact = RecordedDocument;

    fn set_font_size(&mut self, size: u8) {
        self.inner.set_font_size(size);
    }

    fn set_text_color(&mut self, color: Rgb) {
        self.inner.set_text_color(color);
    }

    fn text(&mut self, lines: &[String], x: f64, y: f64) -> refguide::Result<()> {
        self.inner.text(lines, x, y)
    }

    fn split_text_to_size(&self, text: &str, max_width: f64) -> Vec<String> {
        self.inner.split_text_to_size(text, max_width)
    }

    fn add_page(&mut self) -> refguide::Result<()> {
        if self.pages_left == 0 {
            return Err(ExportError::Io(std::io::Error::new(
                std::io::ErrorKind::Other,
                "backend unavailable",
            )));
        }
        self.pages_left -= 1;
        self.inner.add_page()
    }

    fn page_count(&self) -> usize {
        self.inner.page_count()
    }

    fn set_page(&mut self, index: usize) -> refguide::Result<()> {
        self.inner.set_page(index)
    }

    fn save(self, file_name: &str) -> refguide::Result<RecordedDocument> {
        self.inner.save(file_name)
    }
}

#[test]
fn backend_failure_aborts_export() {
    let surface = FailingSurface {
        inner: RecordingSurface::new(),
        pages_left: 1,
    };
    let err = Exporter::default()
        .export_document(&sample_document(), surface)
        .unwrap_err();
    assert!(err.to_string().contains("backend unavailable"));
}

#[test]
fn configuration_changes_the_guard() {
    let mut config = ExportConfig::default();
    config.layout.bottom_guard = 200.0;
    let document = ReferenceDocument::new()
        .with_section(Section::new("Tight").with_entries(["a", "b", "c"].map(entry)));

    let export = Exporter::new(config)
        .export_document(&document, RecordingSurface::new())
        .expect("export succeeds");
    // Guard line at 97: a at 45, b at 90, c past the guard on a new page.
    assert_eq!(export.summary.page_count, 3);
}
