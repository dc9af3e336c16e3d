//! Data structures describing the logical content of a reference guide.
//!
//! A guide is an ordered list of [`Section`]s, each holding an ordered list of
//! [`Entry`] values. Nothing is sorted or deduplicated: the order of the
//! source is the order of the export. The types deliberately avoid any
//! reference to the rendering backend so that content sources, search and the
//! exporter can share them.

/// One documented function.
///
/// All four fields are plain text. A field that was missing in the source is
/// stored as an empty string.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Entry {
    name: String,
    description: String,
    syntax: String,
    example: String,
}

impl Entry {
    /// Creates an entry with the given name and empty remaining fields.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Returns the function name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the free-form description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the call syntax.
    pub fn syntax(&self) -> &str {
        &self.syntax
    }

    /// Returns the usage example.
    pub fn example(&self) -> &str {
        &self.example
    }

    /// Sets the description and returns the updated entry.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the syntax and returns the updated entry.
    pub fn with_syntax(mut self, syntax: impl Into<String>) -> Self {
        self.syntax = syntax.into();
        self
    }

    /// Sets the example and returns the updated entry.
    pub fn with_example(mut self, example: impl Into<String>) -> Self {
        self.example = example.into();
        self
    }
}

/// Named, ordered group of entries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Section {
    anchor: Option<String>,
    title: String,
    entries: Vec<Entry>,
}

impl Section {
    /// Creates a new section with the provided title and no entries.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            anchor: None,
            title: title.into(),
            entries: Vec::new(),
        }
    }

    /// Returns the in-page anchor used for navigation and bookmarks.
    pub fn anchor(&self) -> Option<&str> {
        self.anchor.as_deref()
    }

    /// Returns the section title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the entries in source order.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Sets the anchor and returns the updated section.
    pub fn with_anchor(mut self, anchor: impl Into<Option<String>>) -> Self {
        self.anchor = anchor.into();
        self
    }

    /// Appends an entry and returns the updated section.
    pub fn with_entry(mut self, entry: Entry) -> Self {
        self.entries.push(entry);
        self
    }

    /// Extends the section with additional entries and returns the updated instance.
    pub fn with_entries<I>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = Entry>,
    {
        self.entries.extend(entries);
        self
    }
}

/// The root of an export: every section of the guide in document order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReferenceDocument {
    sections: Vec<Section>,
}

impl ReferenceDocument {
    /// Creates an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the sections in document order.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Appends a section and returns the updated document.
    pub fn with_section(mut self, section: Section) -> Self {
        self.sections.push(section);
        self
    }

    /// Extends the document with multiple sections.
    pub fn with_sections<I>(mut self, sections: I) -> Self
    where
        I: IntoIterator<Item = Section>,
    {
        self.sections.extend(sections);
        self
    }

    /// Total number of entries across all sections.
    pub fn entry_count(&self) -> usize {
        self.sections.iter().map(|section| section.entries.len()).sum()
    }

    /// Iterates over every entry in document order.
    pub fn entries(&self) -> impl Iterator<Item = &Entry> {
        self.sections.iter().flat_map(|section| section.entries.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::{Entry, ReferenceDocument, Section};

    #[test]
    fn entries_are_flattened_in_order() {
        let document = ReferenceDocument::new()
            .with_section(
                Section::new("Built-ins")
                    .with_entry(Entry::new("abs"))
                    .with_entry(Entry::new("all")),
            )
            .with_section(Section::new("Empty"))
            .with_section(Section::new("Math").with_entry(Entry::new("ceil")));

        let names: Vec<_> = document.entries().map(Entry::name).collect();
        assert_eq!(names, ["abs", "all", "ceil"]);
        assert_eq!(document.entry_count(), 3);
    }

    #[test]
    fn new_entry_has_empty_fields() {
        let entry = Entry::new("len");
        assert_eq!(entry.description(), "");
        assert_eq!(entry.syntax(), "");
        assert_eq!(entry.example(), "");
    }
}
