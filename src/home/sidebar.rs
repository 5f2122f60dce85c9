use leptos::prelude::*;
use stylance::classes;

use super::create_server::CreateServerPopup;
use crate::store::use_store;
use crate::utils::popup::{Popup, PopupBackgroundStyle};

stylance::import_crate_style!(
    #[allow(dead_code)]
    style,
    "src/home/home.css"
);

/// Server rail: one entry per stored server, with a dot on servers that have
/// unread channels, plus the add-server popup trigger.
#[component]
pub fn Sidebar(active_server: RwSignal<Option<String>>) -> impl IntoView {
    let store = use_store();
    let create_popup = RwSignal::new(false);

    view! {
        <div class=style::sidebar>
            <ul class=style::server_list>
                <For
                    each=move || store.servers.list()
                    key=|server| server.id.clone()
                    children=move |server| {
                        let select_id = server.id.clone();
                        let selected_id = server.id.clone();
                        let unread_id = server.id.clone();
                        view! {
                            <li
                                class=move || classes!(
                                    style::server_list_item,
                                    if active_server.get().as_deref() == Some(selected_id.as_str()) {
                                        Some(style::selected)
                                    } else {
                                        None
                                    }
                                )
                                on:click=move |_| active_server.set(Some(select_id.clone()))
                            >
                                <span class=style::server_name>{server.name.clone()}</span>
                                <Show when=move || {
                                    store.channels.server_has_notifications(&unread_id)
                                }>
                                    <span class=style::unread_dot></span>
                                </Show>
                            </li>
                        }
                    }
                />
                <li
                    class=style::server_list_item
                    on:click=move |_| create_popup.set(true)
                >
                    <span class=style::server_name>"Add Server"</span>
                </li>
            </ul>
            <Popup
                visible=create_popup
                background_style=vec![PopupBackgroundStyle::Brightness]
            >
                <CreateServerPopup visible=create_popup />
            </Popup>
        </div>
    }
}
