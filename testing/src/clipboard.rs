use async_trait::async_trait;
use spcore::{
    copy::Clipboard,
    error::ClipboardError,
};
use std::cell::RefCell;

/// A clipboard that either accepts every write or rejects every write,
/// recording what it was asked to write.
pub struct MockClipboard {
    outcome: Result<(), ClipboardError>,
    writes: RefCell<Vec<String>>,
}

impl MockClipboard {
    pub fn accepting() -> Self {
        Self {
            outcome: Ok(()),
            writes: RefCell::new(Vec::new()),
        }
    }

    pub fn rejecting(reason: &str) -> Self {
        Self {
            outcome: Err(ClipboardError::Rejected(reason.to_string())),
            writes: RefCell::new(Vec::new()),
        }
    }

    pub fn unavailable() -> Self {
        Self {
            outcome: Err(ClipboardError::Unavailable),
            writes: RefCell::new(Vec::new()),
        }
    }

    pub fn writes(&self) -> Vec<String> {
        self.writes.borrow().clone()
    }

    /// The text currently on the clipboard.
    pub fn contents(&self) -> Option<String> {
        if self.outcome.is_ok() {
            self.writes.borrow().last().cloned()
        } else {
            None
        }
    }
}

#[async_trait(?Send)]
impl Clipboard for MockClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        self.writes.borrow_mut().push(text.to_string());
        self.outcome.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[async_std::test]
    async fn records_writes() {
        let clipboard = MockClipboard::accepting();
        clipboard.write_text("a").await.expect("accepted");
        clipboard.write_text("b").await.expect("accepted");
        assert_eq!(clipboard.writes(), ["a", "b"]);
        assert_eq!(clipboard.contents().as_deref(), Some("b"));

        let clipboard = MockClipboard::rejecting("denied");
        assert_eq!(
            clipboard.write_text("a").await,
            Err(ClipboardError::Rejected("denied".to_string())),
        );
        assert_eq!(clipboard.contents(), None);
    }
}
