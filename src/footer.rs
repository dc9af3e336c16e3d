//! Footer finalisation: the only pass that revisits finished pages.

use log::debug;

use crate::config::FooterConfig;
use crate::error::Result;
use crate::surface::Surface;

/// Stamps the footer text and "Page i of N" on pages `1..=page_count`.
///
/// Must run after layout: `page_count` is only final once the last entry has
/// been written.
pub fn stamp_footers<S: Surface>(
    surface: &mut S,
    footer: &FooterConfig,
    page_count: usize,
) -> Result<()> {
    for index in 1..=page_count {
        surface.set_page(index)?;
        surface.set_font_size(footer.font_size);
        surface.set_text_color(footer.color);
        surface.text(
            &[FooterConfig::page_label(index, page_count)],
            footer.page_label_x,
            footer.y,
        )?;
        surface.text(&[footer.text.clone()], footer.text_x, footer.y)?;
    }

    debug!("Stamped footers on {} pages", page_count);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExportError;
    use crate::surface::RecordingSurface;

    #[test]
    fn every_page_gets_its_label() {
        let mut surface = RecordingSurface::new();
        surface.add_page().expect("add page");
        surface.add_page().expect("add page");

        stamp_footers(&mut surface, &FooterConfig::default(), 3).expect("stamp succeeds");
        let recorded = surface.save("out.pdf").expect("save succeeds");

        for index in 1..=3 {
            let page = recorded.page(index).expect("page exists");
            let label = page
                .find(&format!("Page {index} of 3"))
                .next()
                .expect("label present");
            assert_eq!((label.x, label.y), (170.0, 285.0));
            assert!(page.contains("Python Functions Reference Guide"));
        }
    }

    #[test]
    fn stale_page_count_is_rejected() {
        let mut surface = RecordingSurface::new();
        let err = stamp_footers(&mut surface, &FooterConfig::default(), 2).unwrap_err();
        assert!(matches!(err, ExportError::PageOutOfRange { index: 2, count: 1 }));
    }
}
