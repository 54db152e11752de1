//! Active tab resolution
//!
//! The page signal is passed in explicitly. Neither function reads global or
//! per-instance state, so every macro on a page can be resolved independently
//! from the same signal value.

use crate::error::TabError;
use crate::file::{FileId, TabList};
use crate::Result;

/// Index of the tab showing `signal`, or `None` when no tab should be active.
///
/// Duplicated entries resolve to their first position.
pub fn resolve_active_index(signal: Option<&FileId>, tabs: &TabList) -> Option<usize> {
    debug_assert!(!tabs.is_empty(), "rendered macro without tabs");

    signal.and_then(|file| tabs.position(file))
}

/// New page signal produced by clicking the tab at `index`.
pub fn on_tab_selected(tabs: &TabList, index: usize) -> Result<FileId> {
    tabs.get(index)
        .cloned()
        .ok_or(TabError::IndexOutOfRange {
            index,
            len: tabs.len(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tabs(names: &[&str]) -> TabList {
        TabList::from_names(names.iter().copied()).unwrap()
    }

    #[test]
    fn test_signal_matches_first_tab() {
        let t = tabs(&["PDFTest-1.pdf", "PDFTest-2.pdf", "PDFTest-3.pdf"]);
        let signal = FileId::from("PDFTest-1.pdf");

        assert_eq!(resolve_active_index(Some(&signal), &t), Some(0));
    }

    #[test]
    fn test_signal_not_in_list() {
        let t = tabs(&["PDFTest-1.pdf", "PDFTest-2.pdf"]);
        let signal = FileId::from("PDFTest-3.pdf");

        assert_eq!(resolve_active_index(Some(&signal), &t), None);
    }

    #[test]
    fn test_absent_signal() {
        let first = tabs(&["PDFTest-1.pdf", "PDFTest-2.pdf", "PDFTest-3.pdf"]);
        let second = tabs(&["PDFTest-1.pdf", "PDFTest-2.pdf"]);

        assert_eq!(resolve_active_index(None, &first), None);
        assert_eq!(resolve_active_index(None, &second), None);
    }

    #[test]
    fn test_duplicates_pick_first() {
        let t = tabs(&["a.pdf", "b.pdf", "a.pdf"]);
        let signal = FileId::from("a.pdf");

        assert_eq!(resolve_active_index(Some(&signal), &t), Some(0));
    }

    #[test]
    fn test_no_normalization() {
        let t = tabs(&["Report.PDF", "docs/report.pdf"]);

        assert_eq!(resolve_active_index(Some(&"report.pdf".into()), &t), None);
        assert_eq!(resolve_active_index(Some(&"Report.pdf".into()), &t), None);
        assert_eq!(resolve_active_index(Some(&"./docs/report.pdf".into()), &t), None);
        assert_eq!(resolve_active_index(Some(&"docs/report.pdf".into()), &t), Some(1));
    }

    #[test]
    fn test_click_then_resolve_other_instance() {
        let clicked = tabs(&["PDFTest-1.pdf", "PDFTest-3.pdf", "PDFTest-2.pdf"]);
        let other = tabs(&["PDFTest-1.pdf", "PDFTest-2.pdf"]);

        let signal = on_tab_selected(&clicked, 2).unwrap();
        assert_eq!(signal, "PDFTest-2.pdf");

        assert_eq!(resolve_active_index(Some(&signal), &other), Some(1));
        assert_eq!(resolve_active_index(Some(&signal), &clicked), Some(2));
    }

    #[test]
    fn test_select_out_of_range() {
        let t = tabs(&["a.pdf", "b.pdf"]);

        assert_eq!(
            on_tab_selected(&t, 2),
            Err(TabError::IndexOutOfRange { index: 2, len: 2 })
        );
    }
}
