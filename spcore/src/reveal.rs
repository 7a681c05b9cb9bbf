//! One-shot reveal of the demo video once it scrolls into view.

use futures::{Stream, StreamExt};
use serde::{Deserialize, Serialize};

/// Fraction of the target that must be visible before it is revealed.
pub const REVEAL_THRESHOLD: f64 = 0.3;
pub const REVEAL_THRESHOLDS: &[f64] = &[REVEAL_THRESHOLD];

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct IntersectionEntry {
    pub is_intersecting: bool,
    pub ratio: f64,
}

impl IntersectionEntry {
    pub fn new(is_intersecting: bool, ratio: f64) -> Self {
        Self { is_intersecting, ratio }
    }

    /// An entry reported as visible with the given ratio.
    pub fn visible(ratio: f64) -> Self {
        Self::new(ratio > 0.0, ratio)
    }

    pub fn crosses(&self, threshold: f64) -> bool {
        self.is_intersecting && self.ratio >= threshold
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RevealState {
    #[default]
    Hidden,
    Revealed,
}

impl RevealState {
    pub fn is_revealed(&self) -> bool {
        *self == Self::Revealed
    }

    /// Applies an intersection entry, returning `true` only for the
    /// `Hidden -> Revealed` transition.  `Revealed` is terminal.
    pub fn observe(&mut self, entry: &IntersectionEntry) -> bool {
        match self {
            Self::Hidden if entry.crosses(REVEAL_THRESHOLD) => {
                *self = Self::Revealed;
                true
            }
            _ => false,
        }
    }
}

/// Capability for reporting how much of a target is visible in the
/// viewport.
pub trait ViewportObserver {
    type Target: ?Sized;
    type Events: Stream<Item = IntersectionEntry> + Unpin;
    type Error;

    fn attach(
        &mut self,
        target: &Self::Target,
        thresholds: &[f64],
    ) -> Result<Self::Events, Self::Error>;

    fn detach(&mut self);
}

/// An attached observer; detach is issued at most once, either explicitly
/// or when the subscription is dropped.
pub struct Subscription<O: ViewportObserver> {
    observer: O,
    attached: bool,
}

impl<O: ViewportObserver> Subscription<O> {
    pub fn attach(
        mut observer: O,
        target: &O::Target,
        thresholds: &[f64],
    ) -> Result<(Self, O::Events), O::Error> {
        let events = observer.attach(target, thresholds)?;
        Ok((Self { observer, attached: true }, events))
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Returns whether this call actually released the observer.
    pub fn detach(&mut self) -> bool {
        if self.attached {
            self.attached = false;
            self.observer.detach();
            log::trace!("viewport observer detached");
            true
        } else {
            false
        }
    }
}

impl<O: ViewportObserver> Drop for Subscription<O> {
    fn drop(&mut self) {
        self.detach();
    }
}

/// Waits for the first entry that crosses the reveal threshold.
///
/// Returns `None` if the event stream ends before that happens.
pub async fn next_reveal<S>(events: &mut S) -> Option<IntersectionEntry>
where
    S: Stream<Item = IntersectionEntry> + Unpin,
{
    while let Some(entry) = events.next().await {
        if entry.crosses(REVEAL_THRESHOLD) {
            return Some(entry);
        }
        log::trace!("ignoring intersection entry {entry:?}");
    }
    None
}
