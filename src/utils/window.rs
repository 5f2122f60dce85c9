use leptos::{context, prelude::*};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

const MOBILE_WIDTH: f64 = 600.0;

/// Viewport size signals, provided once at the app root and shared by every
/// component that positions itself or switches layout.
#[derive(Clone, Copy)]
pub struct WindowProperties {
    pub width: ReadSignal<f64>,
    pub height: ReadSignal<f64>,
}

impl WindowProperties {
    pub fn is_mobile_width(&self) -> bool {
        self.width.get() < MOBILE_WIDTH
    }
}

fn viewport_size() -> (f64, f64) {
    let window = window();
    let width = window
        .inner_width()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(0.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(0.0);
    (width, height)
}

/// Installs the resize listener and provides `WindowProperties` as context.
/// The listener lives for the whole app session.
pub fn provide_window_properties() {
    let (initial_width, initial_height) = viewport_size();
    let (width, set_width) = signal(initial_width);
    let (height, set_height) = signal(initial_height);

    let on_resize = Closure::<dyn FnMut()>::new(move || {
        let (new_width, new_height) = viewport_size();
        set_width.set(new_width);
        set_height.set(new_height);
    });
    let _ = window().add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref());
    on_resize.forget();

    context::provide_context(WindowProperties { width, height });
}

pub fn use_window_properties() -> WindowProperties {
    context::use_context::<WindowProperties>().expect("WindowProperties context not found")
}
