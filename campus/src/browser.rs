//! Thin wrappers over the browser APIs the navigator needs

use dioxus::logger::tracing;
use js_sys::Promise;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlElement;

/// Resolve on the next animation frame. Resolves immediately without a window.
pub async fn next_animation_frame() -> Result<(), JsValue> {
    let promise = Promise::new(&mut |resolve, _reject| match web_sys::window() {
        Some(window) => {
            if let Err(err) = window.request_animation_frame(&resolve) {
                tracing::warn!("requestAnimationFrame failed: {:?}", err);
                let _ = resolve.call0(&JsValue::NULL);
            }
        }
        None => {
            let _ = resolve.call0(&JsValue::NULL);
        }
    });
    JsFuture::from(promise).await.map(|_| ())
}

/// Resolve after `millis` milliseconds
pub async fn sleep(millis: i32) -> Result<(), JsValue> {
    let promise = Promise::new(&mut |resolve, _reject| match web_sys::window() {
        Some(window) => {
            if let Err(err) =
                window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, millis)
            {
                tracing::warn!("setTimeout failed: {:?}", err);
                let _ = resolve.call0(&JsValue::NULL);
            }
        }
        None => {
            let _ = resolve.call0(&JsValue::NULL);
        }
    });
    JsFuture::from(promise).await.map(|_| ())
}

/// Set a CSS custom property on the document root
pub fn set_root_css_variable(name: &str, value: &str) {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };
    match root.dyn_into::<HtmlElement>() {
        Ok(root) => {
            if let Err(err) = root.style().set_property(name, value) {
                tracing::warn!("could not set {name}: {:?}", err);
            }
        }
        Err(_) => tracing::warn!("document root is not an HTML element"),
    }
}
