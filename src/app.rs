use leptos::prelude::*;

use crate::home::Home;
use crate::models::{Channel, Server, ServerMember, User};
use crate::store::Store;
use crate::utils::create_listener;
use crate::utils::window::provide_window_properties;

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new();
    store.provide();
    provide_window_properties();

    // The network layer owns entity updates; the stores are its sink.
    create_listener("server_updated", move |server: Server| {
        store.servers.upsert(server);
    });
    create_listener("channel_updated", move |channel: Channel| {
        store.channels.upsert(channel);
    });
    create_listener("user_updated", move |user: User| {
        store.users.upsert(user);
    });
    create_listener("member_updated", move |member: ServerMember| {
        store.members.upsert(member);
    });

    view! {
        <main>
            <Home />
        </main>
    }
}
