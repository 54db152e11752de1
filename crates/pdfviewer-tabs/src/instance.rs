//! A rendered macro instance

use serde::{Deserialize, Serialize};

use crate::file::{FileId, TabList};
use crate::resolver::{on_tab_selected, resolve_active_index};
use crate::state::TabState;
use crate::Result;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroInstance {
    /// Files in tab order
    tabs: TabList,
    /// Result of the last sync against the page signal
    state: TabState,
}

impl MacroInstance {
    /// New instance, inactive until the first sync
    pub fn new(tabs: TabList) -> Self {
        Self {
            tabs,
            state: TabState::Inactive,
        }
    }

    pub fn tabs(&self) -> &TabList {
        &self.tabs
    }

    pub fn state(&self) -> TabState {
        self.state
    }

    pub fn active_index(&self) -> Option<usize> {
        self.state.index()
    }

    /// File shown by the active tab, if any
    pub fn active_file(&self) -> Option<&FileId> {
        self.active_index().and_then(|i| self.tabs.get(i))
    }

    /// Recompute the active tab from the page signal.
    pub fn sync(&mut self, signal: Option<&FileId>) -> TabState {
        let new_state = TabState::from_index(resolve_active_index(signal, &self.tabs));

        if new_state != self.state {
            tracing::debug!(
                from = %self.state,
                to = %new_state,
                signal = signal.map(FileId::as_str).unwrap_or(""),
                "Macro tab state transition"
            );
        }

        self.state = new_state;
        new_state
    }

    /// Signal value produced by clicking tab `index`.
    ///
    /// The instance itself is left untouched; its state changes on the next
    /// `sync` together with every other instance on the page.
    pub fn select_tab(&self, index: usize) -> Result<FileId> {
        on_tab_selected(&self.tabs, index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TabError;

    fn instance(names: &[&str]) -> MacroInstance {
        MacroInstance::new(TabList::from_names(names.iter().copied()).unwrap())
    }

    #[test]
    fn test_new_instance_is_inactive() {
        let inst = instance(&["a.pdf"]);
        assert_eq!(inst.state(), TabState::Inactive);
        assert!(inst.active_file().is_none());
    }

    #[test]
    fn test_sync_transitions() {
        let mut inst = instance(&["PDFTest-1.pdf", "PDFTest-2.pdf"]);

        assert_eq!(inst.sync(Some(&"PDFTest-2.pdf".into())), TabState::Active(1));
        assert_eq!(inst.active_file(), Some(&FileId::from("PDFTest-2.pdf")));

        // No memory of the previous tab
        assert_eq!(inst.sync(Some(&"PDFTest-3.pdf".into())), TabState::Inactive);
        assert_eq!(inst.sync(Some(&"PDFTest-1.pdf".into())), TabState::Active(0));
        assert_eq!(inst.sync(None), TabState::Inactive);
    }

    #[test]
    fn test_select_does_not_mutate() {
        let mut inst = instance(&["a.pdf", "b.pdf"]);
        inst.sync(Some(&"a.pdf".into()));

        assert_eq!(inst.select_tab(1).unwrap(), "b.pdf");
        assert_eq!(inst.state(), TabState::Active(0));

        assert!(matches!(
            inst.select_tab(5),
            Err(TabError::IndexOutOfRange { index: 5, len: 2 })
        ));
    }
}
