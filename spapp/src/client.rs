//! Browser side of the page: clipboard, timers and viewport observation.
//!
//! Without the `hydrate` feature the hooks here are inert, which is what
//! the server render needs.

use leptos::prelude::*;
use spcore::page::PageState;

use crate::state::SignalSlot;

#[cfg(feature = "hydrate")]
pub mod clipboard;
#[cfg(feature = "hydrate")]
pub mod timer;
#[cfg(feature = "hydrate")]
pub mod viewport;

/// Builds the click handler copying `text` for the citation behind `slot`.
#[cfg(feature = "hydrate")]
pub fn on_copy(
    slot: SignalSlot,
    text: &'static str,
) -> impl FnMut(leptos::ev::MouseEvent) + 'static {
    use spcore::copy::{copy, TimerHandle};
    use self::{
        clipboard::NavigatorClipboard,
        timer::{BrowserTimer, TimeoutHandle},
    };

    let pending = StoredValue::new_local(None::<TimeoutHandle>);
    on_cleanup(move || {
        pending.try_update_value(|pending| pending.take().map(TimerHandle::cancel));
    });
    move |_| {
        leptos::task::spawn_local(async move {
            match copy(&NavigatorClipboard, &BrowserTimer, slot, text).await {
                Ok(Some(handle)) => {
                    // a handle that can't be stored is dropped, which cancels it
                    pending.try_update_value(move |pending| {
                        if let Some(previous) = pending.replace(handle) {
                            previous.cancel();
                        }
                    });
                }
                Ok(None) => (),
                Err(e) => leptos::logging::error!("Failed to copy: {e}"),
            }
        });
    }
}

#[cfg(not(feature = "hydrate"))]
pub fn on_copy(
    _slot: SignalSlot,
    _text: &'static str,
) -> impl FnMut(leptos::ev::MouseEvent) + 'static {
    |_: leptos::ev::MouseEvent| ()
}

/// Reveals the video once `target` crosses the threshold, releasing the
/// observer on the first crossing or on teardown, whichever comes first.
#[cfg(feature = "hydrate")]
pub fn watch_reveal(
    target: NodeRef<leptos::html::Section>,
    state: RwSignal<PageState>,
) {
    use spcore::reveal::{
        next_reveal,
        IntersectionEntry,
        Subscription,
        REVEAL_THRESHOLDS,
    };
    use self::viewport::BrowserViewport;

    let subscription = StoredValue::new_local(None::<Subscription<BrowserViewport>>);
    let release = move || {
        subscription.try_update_value(|subscription| {
            subscription.as_mut().map(Subscription::detach)
        });
    };

    Effect::new(move |_| {
        let Some(element) = target.get() else { return };
        if subscription.with_value(Option::is_some) {
            return;
        }
        match Subscription::attach(BrowserViewport::default(), &element, REVEAL_THRESHOLDS) {
            Ok((attached, mut events)) => {
                subscription.set_value(Some(attached));
                leptos::task::spawn_local(async move {
                    if let Some(entry) = next_reveal(&mut events).await {
                        state.try_update(|page| page.intersected(&entry));
                        release();
                    }
                });
            }
            Err(e) => {
                // without an observer the prompt would never clear
                leptos::logging::error!("{e}; revealing video immediately");
                state.try_update(|page| page.intersected(&IntersectionEntry::visible(1.0)));
            }
        }
    });
    on_cleanup(release);
}

#[cfg(not(feature = "hydrate"))]
pub fn watch_reveal(
    _target: NodeRef<leptos::html::Section>,
    _state: RwSignal<PageState>,
) {
}
