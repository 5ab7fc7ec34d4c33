use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// Fire-and-forget copy. Failures are only logged.
pub fn copy_text(text: &str) {
    let Some(window) = web::window() else {
        return;
    };
    let promise: js_sys::Promise = window.navigator().clipboard().write_text(text);
    spawn_local(async move {
        if let Err(e) = JsFuture::from(promise).await {
            log::error!("[clipboard] failed to copy: {:?}", e);
        }
    });
}
