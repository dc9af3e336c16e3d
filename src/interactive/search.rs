//! Client-side search over the guide's entries.

use std::time::{Duration, Instant};

use crate::model::{Entry, ReferenceDocument};

use super::debounce::Debouncer;

fn entry_matches(entry: &Entry, needle: &str) -> bool {
    [entry.name(), entry.description(), entry.syntax()]
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
}

/// Visibility of every section and entry for one query.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchResults {
    query: String,
    /// Per section, per entry: whether the entry is shown.
    visible: Vec<Vec<bool>>,
}

impl SearchResults {
    /// The normalised (trimmed, lower-cased) query.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Number of visible entries across all sections.
    pub fn visible_count(&self) -> usize {
        self.visible
            .iter()
            .map(|entries| entries.iter().filter(|shown| **shown).count())
            .sum()
    }

    pub fn is_entry_visible(&self, section: usize, entry: usize) -> bool {
        self.visible
            .get(section)
            .and_then(|entries| entries.get(entry))
            .copied()
            .unwrap_or(false)
    }

    /// A section is shown only while at least one of its entries is.
    pub fn is_section_visible(&self, section: usize) -> bool {
        self.visible
            .get(section)
            .is_some_and(|entries| entries.iter().any(|shown| *shown))
    }

    /// Whether the "no results" message should be displayed.
    pub fn show_no_results(&self) -> bool {
        !self.query.is_empty() && self.visible_count() == 0
    }

    /// The visible entries of `document`, in order.
    pub fn visible_entries<'d>(
        &'d self,
        document: &'d ReferenceDocument,
    ) -> impl Iterator<Item = &'d Entry> + 'd {
        document
            .sections()
            .iter()
            .enumerate()
            .flat_map(move |(s, section)| {
                section
                    .entries()
                    .iter()
                    .enumerate()
                    .filter(move |(e, _)| self.is_entry_visible(s, *e))
                    .map(|(_, entry)| entry)
            })
    }
}

/// Filters `document` by a case-insensitive substring match on name, description and syntax.
///
/// An empty (or whitespace-only) query shows every entry.
pub fn filter(document: &ReferenceDocument, query: &str) -> SearchResults {
    let needle = query.trim().to_lowercase();
    let visible = document
        .sections()
        .iter()
        .map(|section| {
            section
                .entries()
                .iter()
                .map(|entry| needle.is_empty() || entry_matches(entry, &needle))
                .collect()
        })
        .collect();

    SearchResults {
        query: needle,
        visible,
    }
}

/// State of the search input: its text, focus and the current results.
#[derive(Clone, Debug)]
pub struct SearchBox {
    input: String,
    focused: bool,
    results: SearchResults,
    debouncer: Option<Debouncer>,
}

impl SearchBox {
    /// Creates an unfocused, empty search box showing every entry.
    pub fn new(document: &ReferenceDocument) -> Self {
        Self {
            input: String::new(),
            focused: false,
            results: filter(document, ""),
            debouncer: None,
        }
    }

    /// Applies typed input only after `wait` without further keystrokes.
    pub fn with_debounce(mut self, wait: Duration) -> Self {
        self.debouncer = Some(Debouncer::new(wait));
        self
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn results(&self) -> &SearchResults {
        &self.results
    }

    /// Focuses the box and selects its text, as the focus shortcut does.
    pub fn focus(&mut self) {
        self.focused = true;
    }

    /// Replaces the input and filters immediately.
    pub fn set_query(&mut self, document: &ReferenceDocument, query: &str) {
        self.input = query.to_owned();
        self.results = filter(document, query);
    }

    /// Records a keystroke. Without debouncing the results update at once.
    pub fn type_query(&mut self, document: &ReferenceDocument, query: &str, now: Instant) {
        self.input = query.to_owned();
        let fire = match self.debouncer.as_mut() {
            Some(debouncer) => debouncer.call(now),
            None => true,
        };
        if fire {
            self.results = filter(document, &self.input);
        }
    }

    /// Applies pending debounced input once its quiet period has passed.
    pub fn tick(&mut self, document: &ReferenceDocument, now: Instant) -> bool {
        let due = self
            .debouncer
            .as_mut()
            .is_some_and(|debouncer| debouncer.poll(now));
        if due {
            self.results = filter(document, &self.input);
        }
        due
    }

    /// Escape: empties the input, shows everything again and drops focus.
    pub fn clear(&mut self, document: &ReferenceDocument) {
        if let Some(debouncer) = self.debouncer.as_mut() {
            debouncer.cancel();
        }
        self.set_query(document, "");
        self.focused = false;
    }
}
