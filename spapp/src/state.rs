use leptos::prelude::*;
use spcore::{
    copy::{CopyCell, CopyState},
    page::PageState,
};

/// One citation's copy state within the page signal.
#[derive(Clone, Copy, Debug)]
pub struct SignalSlot {
    state: RwSignal<PageState>,
    index: usize,
}

impl SignalSlot {
    pub fn new(state: RwSignal<PageState>, index: usize) -> Self {
        Self { state, index }
    }

    pub fn is_copied(&self) -> bool {
        self.state
            .try_with(|page| page.is_copied(self.index))
            .unwrap_or(false)
    }

    pub fn label(&self) -> &'static str {
        self.state
            .try_with(|page| page.copy_label(self.index))
            .unwrap_or(spcore::copy::COPY_LABEL)
    }
}

impl CopyCell for SignalSlot {
    // the signal is disposed with the page, after which this is a no-op
    fn update<R>(&self, f: impl FnOnce(&mut CopyState) -> R) -> Option<R> {
        self.state
            .try_update(|page| page.copies.get_mut(self.index).map(f))
            .flatten()
    }
}
