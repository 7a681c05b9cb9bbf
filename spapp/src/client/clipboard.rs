use async_trait::async_trait;
use js_sys::Reflect;
use spcore::{
    copy::Clipboard,
    error::ClipboardError,
};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

/// `navigator.clipboard`, which only exists in secure contexts.
pub struct NavigatorClipboard;

impl NavigatorClipboard {
    fn clipboard() -> Result<web_sys::Clipboard, ClipboardError> {
        let navigator = web_sys::window()
            .ok_or(ClipboardError::Unavailable)?
            .navigator();
        Reflect::get(&navigator, &JsValue::from_str("clipboard"))
            .ok()
            .filter(|value| !value.is_undefined() && !value.is_null())
            .map(|value| value.unchecked_into::<web_sys::Clipboard>())
            .ok_or(ClipboardError::Unavailable)
    }
}

#[async_trait(?Send)]
impl Clipboard for NavigatorClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let promise = Self::clipboard()?.write_text(text);
        JsFuture::from(promise)
            .await
            .map(|_| ())
            .map_err(|e| ClipboardError::Rejected(
                e.as_string().unwrap_or_else(|| format!("{e:?}"))
            ))
    }
}
