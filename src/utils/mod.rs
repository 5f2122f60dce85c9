pub mod popup;
pub mod resize_observer;
pub mod time;
pub mod window;

use js_sys::Function;
use leptos::logging::warn;
use leptos::task::spawn_local;
use serde::de::DeserializeOwned;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["window", "__TAURI__", "core"], catch)]
    pub async fn invoke(cmd: &str, args: JsValue) -> Result<JsValue, JsValue>;
    #[wasm_bindgen(js_namespace = ["window", "__TAURI__", "event"])]
    pub async fn listen(event: &str, handler: &Function) -> JsValue;
}

/// Subscribes to a push event for the lifetime of the app and hands each
/// deserialized payload to `callback`.
pub fn create_listener<T, F>(event: &'static str, mut callback: F)
where
    T: DeserializeOwned + 'static,
    F: FnMut(T) + 'static,
{
    spawn_local(async move {
        let handler = Closure::<dyn FnMut(JsValue)>::new(move |raw: JsValue| {
            let payload = js_sys::Reflect::get(&raw, &JsValue::from_str("payload"))
                .unwrap_or(JsValue::UNDEFINED);
            match serde_wasm_bindgen::from_value::<T>(payload) {
                Ok(value) => callback(value),
                Err(e) => warn!("Failed to parse {} payload: {}", event, e),
            }
        });
        listen(event, handler.as_ref().unchecked_ref()).await;
        handler.forget();
    });
}

/// Document-level listener with an explicit release handle: dropping the
/// handle removes the listener and frees the closure.
pub struct DocumentListenerHandle {
    event: &'static str,
    closure: Closure<dyn FnMut(web_sys::MouseEvent)>,
}

impl Drop for DocumentListenerHandle {
    fn drop(&mut self) {
        let _ = leptos::prelude::document()
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}

pub fn on_document_mouseup(
    callback: impl FnMut(web_sys::MouseEvent) + 'static,
) -> DocumentListenerHandle {
    let closure = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(callback);
    let _ = leptos::prelude::document()
        .add_event_listener_with_callback("mouseup", closure.as_ref().unchecked_ref());
    DocumentListenerHandle {
        event: "mouseup",
        closure,
    }
}
