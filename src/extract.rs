//! Content extraction: turning a host's content tree into a [`ReferenceDocument`].
//!
//! Hosts expose their content through the [`ContentSource`] capability. The
//! extractor only normalises what the source hands over: headerless sections
//! are dropped, missing fields become empty strings and order is preserved.
//! A single malformed entry never fails the whole extraction.

use std::fs;
use std::path::Path;

use log::{debug, warn};
use serde_json::{Map, Value};

use crate::error::{ExportError, Result};
use crate::model::{Entry, ReferenceDocument, Section};

/// A section as reported by a content source, before normalisation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawSection {
    /// Header text; `None` when the section has no header at all.
    pub header: Option<String>,
    /// In-page anchor of the section, if the host has one.
    pub anchor: Option<String>,
    /// Entries in source order.
    pub entries: Vec<RawEntry>,
}

/// An entry as reported by a content source. Every field is optional.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawEntry {
    pub name: Option<String>,
    pub description: Option<String>,
    pub syntax: Option<String>,
    pub example: Option<String>,
}

impl RawEntry {
    fn into_entry(self) -> Entry {
        Entry::new(self.name.unwrap_or_default())
            .with_description(self.description.unwrap_or_default())
            .with_syntax(self.syntax.unwrap_or_default())
            .with_example(self.example.unwrap_or_default())
    }
}

/// Anything that can list the sections of a reference guide in document order.
pub trait ContentSource {
    /// Returns every section, in order, including ones without a header.
    fn list_sections(&self) -> Result<Vec<RawSection>>;
}

impl ContentSource for Vec<RawSection> {
    fn list_sections(&self) -> Result<Vec<RawSection>> {
        Ok(self.clone())
    }
}

impl ContentSource for ReferenceDocument {
    fn list_sections(&self) -> Result<Vec<RawSection>> {
        Ok(self
            .sections()
            .iter()
            .map(|section| RawSection {
                header: Some(section.title().to_owned()),
                anchor: section.anchor().map(str::to_owned),
                entries: section
                    .entries()
                    .iter()
                    .map(|entry| RawEntry {
                        name: Some(entry.name().to_owned()),
                        description: Some(entry.description().to_owned()),
                        syntax: Some(entry.syntax().to_owned()),
                        example: Some(entry.example().to_owned()),
                    })
                    .collect(),
            })
            .collect())
    }
}

/// Reads the content tree from `source` and normalises it.
pub fn extract(source: &dyn ContentSource) -> Result<ReferenceDocument> {
    let raw_sections = source.list_sections()?;
    let mut document = ReferenceDocument::new();

    for (index, raw) in raw_sections.into_iter().enumerate() {
        let Some(title) = raw.header else {
            debug!("Skipping section {} without a header", index);
            continue;
        };

        let section = Section::new(title)
            .with_anchor(raw.anchor)
            .with_entries(raw.entries.into_iter().map(RawEntry::into_entry));
        document = document.with_section(section);
    }

    debug!(
        "Extracted {} sections with {} entries",
        document.sections().len(),
        document.entry_count()
    );
    Ok(document)
}

/// Content source backed by a JSON document.
///
/// Accepted shapes are `{"sections": [...]}` or a bare array of sections.
/// Each section is an object with `title`, an optional `id` and an `entries`
/// array; each entry carries `name`, `description`, `syntax` and `example`.
/// Values of the wrong type are treated as absent.
#[derive(Clone, Debug)]
pub struct JsonContent {
    root: Value,
}

impl JsonContent {
    /// Parses the given JSON text.
    pub fn from_json_str(input: &str) -> Result<Self> {
        Ok(Self {
            root: serde_json::from_str(input)?,
        })
    }

    /// Reads and parses a JSON content file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|err| {
            ExportError::Content(format!("cannot read {}: {}", path.display(), err))
        })?;
        Self::from_json_str(&text)
    }

    /// Wraps an already parsed JSON value.
    pub fn from_value(root: Value) -> Self {
        Self { root }
    }

    fn section_values(&self) -> &[Value] {
        match &self.root {
            Value::Array(items) => items,
            Value::Object(map) => match map.get("sections") {
                Some(Value::Array(items)) => items,
                _ => &[],
            },
            _ => &[],
        }
    }
}

fn string_field(map: &Map<String, Value>, key: &str) -> Option<String> {
    map.get(key).and_then(Value::as_str).map(str::to_owned)
}

fn raw_entry(value: &Value) -> RawEntry {
    let Some(map) = value.as_object() else {
        warn!("Entry is not an object; exporting it with empty fields");
        return RawEntry::default();
    };

    RawEntry {
        name: string_field(map, "name"),
        description: string_field(map, "description"),
        syntax: string_field(map, "syntax"),
        example: string_field(map, "example"),
    }
}

fn raw_section(value: &Value) -> RawSection {
    let Some(map) = value.as_object() else {
        return RawSection::default();
    };

    let entries = match map.get("entries") {
        Some(Value::Array(items)) => items.iter().map(raw_entry).collect(),
        _ => Vec::new(),
    };

    RawSection {
        header: string_field(map, "title"),
        anchor: string_field(map, "id"),
        entries,
    }
}

impl ContentSource for JsonContent {
    fn list_sections(&self) -> Result<Vec<RawSection>> {
        Ok(self.section_values().iter().map(raw_section).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_entry(name: &str) -> RawEntry {
        RawEntry {
            name: Some(name.to_owned()),
            description: Some(format!("{name} description")),
            syntax: Some(format!("{name}(x)")),
            example: Some(format!("{name}(1)")),
        }
    }

    #[test]
    fn headerless_sections_are_skipped() {
        let source = vec![
            RawSection {
                header: None,
                anchor: None,
                entries: vec![full_entry("ghost")],
            },
            RawSection {
                header: Some("Built-ins".into()),
                anchor: Some("builtins".into()),
                entries: vec![full_entry("abs")],
            },
        ];

        let document = extract(&source).expect("extraction succeeds");
        assert_eq!(document.sections().len(), 1);
        assert_eq!(document.sections()[0].title(), "Built-ins");
        assert_eq!(document.sections()[0].anchor(), Some("builtins"));
    }

    #[test]
    fn header_only_section_is_kept() {
        let source = vec![RawSection {
            header: Some("Tips".into()),
            anchor: None,
            entries: Vec::new(),
        }];

        let document = extract(&source).expect("extraction succeeds");
        assert_eq!(document.sections().len(), 1);
        assert!(document.sections()[0].entries().is_empty());
    }

    #[test]
    fn missing_example_becomes_empty_without_affecting_siblings() {
        let mut broken = full_entry("max");
        broken.example = None;
        let source = vec![RawSection {
            header: Some("Built-ins".into()),
            anchor: None,
            entries: vec![full_entry("abs"), broken, full_entry("min")],
        }];

        let document = extract(&source).expect("extraction succeeds");
        let entries = document.sections()[0].entries();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[1].name(), "max");
        assert_eq!(entries[1].example(), "");
        assert_eq!(entries[1].syntax(), "max(x)");
        assert_eq!(entries[2].example(), "min(1)");
    }

    #[test]
    fn json_content_is_lenient() {
        let content = JsonContent::from_json_str(
            r#"{
                "sections": [
                    {"title": "Built-ins", "id": "builtins", "entries": [
                        {"name": "abs", "description": "Absolute value", "syntax": "abs(x)", "example": "abs(-2)"},
                        {"name": "len", "example": 42},
                        "not an entry"
                    ]},
                    {"entries": [{"name": "orphan"}]},
                    {"title": 7},
                    {"title": "Math", "entries": "nope"}
                ]
            }"#,
        )
        .expect("valid json");

        let document = extract(&content).expect("extraction succeeds");
        let titles: Vec<_> = document.sections().iter().map(Section::title).collect();
        assert_eq!(titles, ["Built-ins", "Math"]);

        let builtins = document.sections()[0].entries();
        assert_eq!(builtins.len(), 3);
        assert_eq!(builtins[1].name(), "len");
        assert_eq!(builtins[1].example(), "");
        assert_eq!(builtins[2], Entry::default());
        assert!(document.sections()[1].entries().is_empty());
    }

    #[test]
    fn bare_array_is_accepted() {
        let content =
            JsonContent::from_json_str(r#"[{"title": "A", "entries": [{"name": "x"}]}]"#)
                .expect("valid json");
        let document = extract(&content).expect("extraction succeeds");
        assert_eq!(document.entry_count(), 1);
    }

    #[test]
    fn invalid_json_is_an_error() {
        let err = JsonContent::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, ExportError::Json(_)));
    }

    #[test]
    fn document_round_trips_through_source() {
        let document = ReferenceDocument::new().with_section(
            Section::new("Math")
                .with_anchor(Some("math".to_owned()))
                .with_entry(Entry::new("ceil").with_syntax("math.ceil(x)")),
        );
        let again = extract(&document).expect("extraction succeeds");
        assert_eq!(again, document);
    }
}
