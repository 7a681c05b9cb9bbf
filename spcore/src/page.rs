//! The page's transient presentation state, held in one record.

use serde::{Deserialize, Serialize};
use std::{
    cell::RefCell,
    rc::{Rc, Weak},
};

use crate::{
    content::CITATIONS,
    copy::{CopyCell, CopyState, Generation},
    reveal::{IntersectionEntry, RevealState},
};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PageState {
    pub reveal: RevealState,
    /// One entry per citation, in the order of `CITATIONS`.
    pub copies: Vec<CopyState>,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            reveal: RevealState::Hidden,
            copies: vec![CopyState::default(); CITATIONS.len()],
        }
    }
}

impl PageState {
    pub fn is_revealed(&self) -> bool {
        self.reveal.is_revealed()
    }

    pub fn intersected(&mut self, entry: &IntersectionEntry) -> bool {
        self.reveal.observe(entry)
    }

    pub fn is_copied(&self, index: usize) -> bool {
        self.copies.get(index)
            .map(CopyState::is_copied)
            .unwrap_or(false)
    }

    pub fn copy_label(&self, index: usize) -> &'static str {
        self.copies.get(index)
            .copied()
            .unwrap_or_default()
            .label()
    }

    pub fn copy_succeeded(&mut self, index: usize) -> Option<Generation> {
        self.copies.get_mut(index).map(CopyState::mark_copied)
    }

    pub fn copy_reverted(&mut self, index: usize, generation: Generation) -> bool {
        self.copies.get_mut(index)
            .map(|state| state.revert(generation))
            .unwrap_or(false)
    }
}

/// Single-threaded shared ownership of a [`PageState`].
///
/// Dropping the last `SharedPage` is the teardown; slots handed out by
/// [`SharedPage::slot`] only hold weak references.
#[derive(Clone, Debug, Default)]
pub struct SharedPage(Rc<RefCell<PageState>>);

impl SharedPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> PageState {
        self.0.borrow().clone()
    }

    pub fn with_mut<R>(&self, f: impl FnOnce(&mut PageState) -> R) -> R {
        f(&mut self.0.borrow_mut())
    }

    pub fn slot(&self, index: usize) -> PageSlot {
        PageSlot {
            page: Rc::downgrade(&self.0),
            index,
        }
    }
}

#[derive(Clone, Debug)]
pub struct PageSlot {
    page: Weak<RefCell<PageState>>,
    index: usize,
}

impl CopyCell for PageSlot {
    fn update<R>(&self, f: impl FnOnce(&mut CopyState) -> R) -> Option<R> {
        let page = self.page.upgrade()?;
        let mut page = page.borrow_mut();
        page.copies.get_mut(self.index).map(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state() {
        let state = PageState::default();
        assert_eq!(state.reveal, RevealState::Hidden);
        assert_eq!(state.copies.len(), 2);
        assert!(!state.is_copied(0));
        assert!(!state.is_copied(1));
        assert_eq!(state.copy_label(0), "Copy BibTeX");
    }

    #[test]
    fn copies_independent() {
        let mut state = PageState::default();
        let first = state.copy_succeeded(0).expect("citation 0 exists");
        assert!(state.is_copied(0));
        assert!(!state.is_copied(1));
        let second = state.copy_succeeded(1).expect("citation 1 exists");
        assert!(state.copy_reverted(0, first));
        assert!(!state.is_copied(0));
        assert!(state.is_copied(1));
        assert!(state.copy_reverted(1, second));
        assert!(!state.is_copied(1));
    }

    #[test]
    fn out_of_range() {
        let mut state = PageState::default();
        assert_eq!(state.copy_succeeded(2), None);
        assert!(!state.is_copied(2));
        assert_eq!(state.copy_label(2), "Copy BibTeX");
    }

    #[test]
    fn slot_after_teardown() {
        let page = SharedPage::new();
        let slot = page.slot(0);
        let generation = slot.update(CopyState::mark_copied);
        assert_eq!(generation, Some(page.snapshot().copies[0].generation()));
        assert!(page.snapshot().is_copied(0));
        drop(page);
        assert_eq!(slot.update(|s| s.is_copied()), None);
    }

    #[test]
    fn reveal_once() {
        let mut state = PageState::default();
        assert!(state.intersected(&IntersectionEntry::visible(0.5)));
        assert!(!state.intersected(&IntersectionEntry::visible(0.5)));
        assert!(state.is_revealed());
    }
}
