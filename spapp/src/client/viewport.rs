use futures::channel::mpsc::{unbounded, UnboundedReceiver};
use js_sys::{Array, Reflect};
use spcore::{
    error::ObserverError,
    reveal::{IntersectionEntry, ViewportObserver},
};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    Element,
    IntersectionObserver,
    IntersectionObserverEntry,
    IntersectionObserverInit,
};

type Callback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// An `IntersectionObserver` watching a single element.
#[derive(Default)]
pub struct BrowserViewport {
    observer: Option<IntersectionObserver>,
    // kept alive for as long as the observer may call it
    callback: Option<Callback>,
}

impl BrowserViewport {
    fn supported() -> bool {
        web_sys::window()
            .and_then(|window| {
                Reflect::has(&window, &JsValue::from_str("IntersectionObserver")).ok()
            })
            .unwrap_or(false)
    }
}

impl ViewportObserver for BrowserViewport {
    type Target = Element;
    type Events = UnboundedReceiver<IntersectionEntry>;
    type Error = ObserverError;

    fn attach(
        &mut self,
        target: &Element,
        thresholds: &[f64],
    ) -> Result<Self::Events, Self::Error> {
        if self.observer.is_some() {
            return Err(ObserverError::AlreadyAttached);
        }
        if !Self::supported() {
            return Err(ObserverError::Unavailable);
        }
        let (sender, receiver) = unbounded();
        let callback = Callback::new(move |entries: Array, _: IntersectionObserver| {
            for entry in entries.iter() {
                let entry = entry.unchecked_into::<IntersectionObserverEntry>();
                let entry = IntersectionEntry::new(
                    entry.is_intersecting(),
                    entry.intersection_ratio(),
                );
                if sender.unbounded_send(entry).is_err() {
                    break;
                }
            }
        });
        let init = IntersectionObserverInit::new();
        init.set_threshold(&thresholds.iter()
            .copied()
            .map(JsValue::from_f64)
            .collect::<Array>());
        let observer = IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &init,
        )
            .map_err(|e| ObserverError::Attach(format!("{e:?}")))?;
        observer.observe(target);
        self.observer = Some(observer);
        self.callback = Some(callback);
        Ok(receiver)
    }

    fn detach(&mut self) {
        if let Some(observer) = self.observer.take() {
            observer.disconnect();
        }
        // dropping the closure drops the sender, ending the event stream
        self.callback = None;
    }
}
