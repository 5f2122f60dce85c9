use leptos::prelude::*;
use stylance::classes;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PopupBackgroundStyle {
    Brightness,
    Blur,
}

stylance::import_crate_style!(
    #[allow(dead_code)]
    style,
    "src/utils/popup.css"
);

/// Overlay popup. Clicking the background closes it; the content wrapper
/// carries the global `modal` class so outside-press dismissal logic can
/// exclude it.
#[component]
pub fn Popup(
    children: ChildrenFn,
    #[prop(optional)] background_style: Vec<PopupBackgroundStyle>,
    visible: RwSignal<bool>,
) -> impl IntoView {
    let background_class = move || {
        classes!(
            style::overlay,
            if background_style.contains(&PopupBackgroundStyle::Blur) {
                Some(style::popup_background_blur)
            } else {
                None
            },
            if background_style.contains(&PopupBackgroundStyle::Brightness) {
                Some(style::popup_background_brightness)
            } else {
                None
            }
        )
    };
    view! {
        <Show when=move || visible.get()>
            <div class=background_class.clone() on:click=move |_| visible.set(false)></div>
            <div class=classes!("modal", style::popup_content)>{children()}</div>
        </Show>
    }
}
