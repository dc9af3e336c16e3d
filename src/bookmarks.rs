//! Section bookmarks for exported PDFs, built with `lopdf`.
//!
//! Each section becomes one top-level outline item pointing at the page its
//! header was written on. Placements come from [`crate::layout::LayoutSummary`].

use std::collections::BTreeMap;

use lopdf::{Dictionary, Document, Object, ObjectId};
use thiserror::Error;

use crate::layout::SectionPlacement;

/// Errors raised while injecting the outline.
#[derive(Error, Debug)]
pub enum BookmarkError {
    /// The PDF bytes could not be parsed or written by `lopdf`.
    #[error("Failed to process PDF bytes: {0}")]
    Pdf(#[from] lopdf::Error),
    /// Writing the updated document failed.
    #[error("Failed to write PDF bytes: {0}")]
    Io(#[from] std::io::Error),
    /// The trailer has no usable `/Root` catalog.
    #[error("PDF catalog entry is missing or not a dictionary")]
    InvalidCatalog,
    /// A placement points at a page the document does not have.
    #[error("Section '{title}' refers to missing page {page}")]
    MissingPage { title: String, page: usize },
}

struct OutlineItem {
    id: ObjectId,
    page_ref: ObjectId,
    title: String,
    anchor: Option<String>,
}

/// Returns `pdf_bytes` with a flat outline of `placements` added.
///
/// An empty placement list returns the input unchanged.
pub fn apply_section_bookmarks(
    pdf_bytes: &[u8],
    placements: &[SectionPlacement],
) -> Result<Vec<u8>, BookmarkError> {
    if placements.is_empty() {
        return Ok(pdf_bytes.to_vec());
    }

    let mut document = Document::load_mem(pdf_bytes)?;
    let pages = document.get_pages();
    let items = outline_items(&mut document, placements, &pages)?;

    let outlines_id = document.new_object_id();
    for (index, item) in items.iter().enumerate() {
        let mut dictionary = Dictionary::new();
        dictionary.set("Title", Object::string_literal(item.title.as_str()));
        dictionary.set(
            "Dest",
            Object::Array(vec![
                Object::Reference(item.page_ref),
                Object::Name("Fit".into()),
            ]),
        );
        dictionary.set("Parent", Object::Reference(outlines_id));
        if let Some(anchor) = &item.anchor {
            dictionary.set("NM", Object::string_literal(anchor.as_str()));
        }
        if let Some(prev) = index.checked_sub(1).and_then(|i| items.get(i)) {
            dictionary.set("Prev", Object::Reference(prev.id));
        }
        if let Some(next) = items.get(index + 1) {
            dictionary.set("Next", Object::Reference(next.id));
        }
        document
            .objects
            .insert(item.id, Object::Dictionary(dictionary));
    }

    let mut root = Dictionary::new();
    root.set("Type", Object::Name("Outlines".into()));
    root.set("Count", Object::Integer(items.len() as i64));
    if let (Some(first), Some(last)) = (items.first(), items.last()) {
        root.set("First", Object::Reference(first.id));
        root.set("Last", Object::Reference(last.id));
    }
    document.objects.insert(outlines_id, Object::Dictionary(root));

    let catalog_id = document
        .trailer
        .get(b"Root")
        .and_then(Object::as_reference)
        .map_err(|_| BookmarkError::InvalidCatalog)?;
    document
        .objects
        .get_mut(&catalog_id)
        .ok_or(BookmarkError::InvalidCatalog)?
        .as_dict_mut()
        .map_err(|_| BookmarkError::InvalidCatalog)?
        .set("Outlines", Object::Reference(outlines_id));

    let mut buffer = Vec::new();
    document.save_to(&mut buffer)?;
    Ok(buffer)
}

fn outline_items(
    document: &mut Document,
    placements: &[SectionPlacement],
    pages: &BTreeMap<u32, ObjectId>,
) -> Result<Vec<OutlineItem>, BookmarkError> {
    placements
        .iter()
        .map(|placement| {
            let page_ref = u32::try_from(placement.page)
                .ok()
                .and_then(|page| pages.get(&page).copied())
                .ok_or_else(|| BookmarkError::MissingPage {
                    title: placement.title.clone(),
                    page: placement.page,
                })?;
            Ok(OutlineItem {
                id: document.new_object_id(),
                page_ref,
                title: placement.title.clone(),
                anchor: placement.anchor.clone(),
            })
        })
        .collect()
}
