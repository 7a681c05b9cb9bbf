use futures::channel::mpsc::{
    unbounded,
    UnboundedReceiver,
    UnboundedSender,
};
use spcore::{
    error::ObserverError,
    reveal::{IntersectionEntry, ViewportObserver},
};
use std::{
    cell::RefCell,
    rc::Rc,
};

#[derive(Default)]
struct Inner {
    sender: Option<UnboundedSender<IntersectionEntry>>,
    thresholds: Vec<f64>,
    target: Option<String>,
    attach_count: usize,
    detach_count: usize,
    unavailable: bool,
}

/// A viewport observer whose intersection events are pushed by the test.
///
/// Clones share state, so a test can keep one while the subscription
/// owns the other.
#[derive(Clone, Default)]
pub struct MockViewport(Rc<RefCell<Inner>>);

impl MockViewport {
    pub fn new() -> Self {
        Self::default()
    }

    /// An environment without any viewport observer to attach.
    pub fn unavailable() -> Self {
        Self(Rc::new(RefCell::new(Inner {
            unavailable: true,
            ..Default::default()
        })))
    }

    /// Delivers an entry; returns `false` when nothing is attached.
    pub fn intersect(&self, entry: IntersectionEntry) -> bool {
        self.0.borrow()
            .sender
            .as_ref()
            .map(|sender| sender.unbounded_send(entry).is_ok())
            .unwrap_or(false)
    }

    pub fn is_attached(&self) -> bool {
        self.0.borrow().sender.is_some()
    }

    pub fn thresholds(&self) -> Vec<f64> {
        self.0.borrow().thresholds.clone()
    }

    pub fn target(&self) -> Option<String> {
        self.0.borrow().target.clone()
    }

    pub fn attach_count(&self) -> usize {
        self.0.borrow().attach_count
    }

    pub fn detach_count(&self) -> usize {
        self.0.borrow().detach_count
    }
}

impl ViewportObserver for MockViewport {
    type Target = str;
    type Events = UnboundedReceiver<IntersectionEntry>;
    type Error = ObserverError;

    fn attach(
        &mut self,
        target: &str,
        thresholds: &[f64],
    ) -> Result<Self::Events, Self::Error> {
        let mut inner = self.0.borrow_mut();
        if inner.unavailable {
            return Err(ObserverError::Unavailable);
        }
        if inner.sender.is_some() {
            return Err(ObserverError::AlreadyAttached);
        }
        let (sender, receiver) = unbounded();
        inner.sender = Some(sender);
        inner.thresholds = thresholds.to_vec();
        inner.target = Some(target.to_string());
        inner.attach_count += 1;
        Ok(receiver)
    }

    fn detach(&mut self) {
        let mut inner = self.0.borrow_mut();
        // a second release of the same observer is the fault being guarded
        assert!(inner.sender.is_some(), "viewport observer released twice");
        inner.sender = None;
        inner.detach_count += 1;
    }
}
