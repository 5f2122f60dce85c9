use leptos::html::Div;
use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// Keeps a `ResizeObserver` alive; dropping disconnects it and frees the
/// callback closure.
pub struct ResizeObserverHandle {
    observer: web_sys::ResizeObserver,
    _callback: Closure<dyn FnMut(js_sys::Array)>,
}

impl Drop for ResizeObserverHandle {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Tracks the rendered height of `target`. Observation starts once the node
/// mounts and is released with the calling component.
pub fn observe_height(target: NodeRef<Div>) -> ReadSignal<f64> {
    let (height, set_height) = signal(0.0);
    let handle = StoredValue::new_local(None::<ResizeObserverHandle>);

    Effect::new(move |_| {
        let Some(element) = target.get() else { return };
        handle.update_value(|slot| {
            if slot.is_some() {
                return;
            }
            let callback = Closure::<dyn FnMut(js_sys::Array)>::new(move |entries: js_sys::Array| {
                if let Some(entry) = entries.get(0).dyn_ref::<web_sys::ResizeObserverEntry>() {
                    set_height.set(entry.content_rect().height());
                }
            });
            match web_sys::ResizeObserver::new(callback.as_ref().unchecked_ref()) {
                Ok(observer) => {
                    observer.observe(&element);
                    *slot = Some(ResizeObserverHandle {
                        observer,
                        _callback: callback,
                    });
                }
                Err(e) => leptos::logging::warn!("Failed to create ResizeObserver: {:?}", e),
            }
        });
    });

    on_cleanup(move || {
        handle.update_value(|slot| {
            slot.take();
        });
    });

    height
}
