//! Copying a citation to the clipboard, with the transient "Copied!"
//! acknowledgement that reverts on its own.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::ClipboardError;

/// How long the acknowledgement stays up after a successful copy.
pub const COPY_RESET: Duration = Duration::from_millis(2000);

pub const COPY_LABEL: &str = "Copy BibTeX";
pub const COPIED_LABEL: &str = "Copied!";

/// Identifies one successful copy; a revert carrying a stale generation
/// is ignored.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Generation(u64);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CopyState {
    copied: bool,
    generation: Generation,
}

impl CopyState {
    pub fn is_copied(&self) -> bool {
        self.copied
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn mark_copied(&mut self) -> Generation {
        self.copied = true;
        self.generation = Generation(self.generation.0 + 1);
        self.generation
    }

    /// Clears the flag if `generation` is from the most recent copy.
    pub fn revert(&mut self, generation: Generation) -> bool {
        if self.copied && self.generation == generation {
            self.copied = false;
            true
        } else {
            false
        }
    }

    pub fn label(&self) -> &'static str {
        if self.copied {
            COPIED_LABEL
        } else {
            COPY_LABEL
        }
    }
}

#[async_trait(?Send)]
pub trait Clipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

pub trait TimerHandle {
    fn cancel(self);
}

/// Schedules single-shot tasks on the current (single) thread.
pub trait Timer {
    type Handle: TimerHandle;

    fn schedule(
        &self,
        delay: Duration,
        task: Box<dyn FnOnce() + 'static>,
    ) -> Self::Handle;
}

/// Access to the copy state of one citation.
///
/// `update` returns `None` once the state it refers to has been torn down,
/// which makes late timer callbacks harmless.
pub trait CopyCell: Clone + 'static {
    fn update<R>(&self, f: impl FnOnce(&mut CopyState) -> R) -> Option<R>;
}

/// Writes `text` to the clipboard and raises the acknowledgement on
/// `cell`, scheduling its revert after [`COPY_RESET`].
///
/// The returned handle belongs to the caller, who cancels it on teardown.
/// `Ok(None)` means the write succeeded but the state was already gone.
pub async fn copy<C, T, S>(
    clipboard: &C,
    timer: &T,
    cell: S,
    text: &str,
) -> Result<Option<T::Handle>, ClipboardError>
where
    C: Clipboard + ?Sized,
    T: Timer,
    S: CopyCell,
{
    clipboard.write_text(text).await?;
    let Some(generation) = cell.update(CopyState::mark_copied) else {
        log::debug!("copy completed after teardown");
        return Ok(None);
    };
    let handle = timer.schedule(COPY_RESET, Box::new(move || {
        cell.update(|state| state.revert(generation));
    }));
    Ok(Some(handle))
}
