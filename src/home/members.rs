use leptos::prelude::*;
use stylance::classes;

use crate::flyout::{FlyoutAnchor, FlyoutRequest};
use crate::store::use_store;

stylance::import_crate_style!(
    #[allow(dead_code)]
    style,
    "src/home/home.css"
);

/// Member list of the active server. Clicking a member opens the profile
/// flyout anchored at the click position.
#[component]
pub fn MemberList(
    active_server: RwSignal<Option<String>>,
    flyout: RwSignal<Option<FlyoutRequest>>,
) -> impl IntoView {
    let store = use_store();
    let members = move || {
        active_server
            .get()
            .map(|server_id| store.members.by_server(&server_id))
            .unwrap_or_default()
    };

    view! {
        <div class=style::member_list>
            <h2 class=style::member_list_header>"Members"</h2>
            <ul>
                <For
                    each=members
                    key=|member| member.user_id.clone()
                    children=move |member| {
                        let user_id = member.user_id.clone();
                        let server_id = member.server_id.clone();
                        let name_id = member.user_id.clone();
                        view! {
                            <li
                                class=move || classes!("flyout-trigger", style::member_item)
                                on:click=move |event| {
                                    flyout.set(Some(FlyoutRequest {
                                        user_id: user_id.clone(),
                                        server_id: Some(server_id.clone()),
                                        left: event.client_x() as f64,
                                        top: event.client_y() as f64,
                                        anchor: FlyoutAnchor::Right,
                                        dm_pane: false,
                                    }));
                                }
                            >
                                {move || {
                                    store
                                        .users
                                        .get(&name_id)
                                        .map(|user| user.username)
                                        .unwrap_or_else(|| name_id.clone())
                                }}
                            </li>
                        }
                    }
                />
            </ul>
        </div>
    }
}
