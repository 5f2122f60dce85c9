//! Reactive entity stores. One `Store` container is built by `App` and
//! injected through context; all mutation goes through the upsert methods,
//! so each store has a single writer path.

mod channels;
mod posts;
mod server_members;
mod servers;
mod users;

pub use channels::ChannelStore;
pub use posts::PostStore;
pub use server_members::MemberStore;
pub use servers::ServerStore;
pub use users::UserStore;

use leptos::context;

#[derive(Clone, Copy)]
pub struct Store {
    pub servers: ServerStore,
    pub channels: ChannelStore,
    pub users: UserStore,
    pub members: MemberStore,
    pub posts: PostStore,
}

impl Store {
    pub fn new() -> Self {
        Self {
            servers: ServerStore::new(),
            channels: ChannelStore::new(),
            users: UserStore::new(),
            members: MemberStore::new(),
            posts: PostStore::new(),
        }
    }

    pub fn provide(self) {
        context::provide_context(self);
    }
}

pub fn use_store() -> Store {
    context::use_context::<Store>().expect("Store context not found")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Channel, Server};
    use leptos::reactive::owner::Owner;

    fn server(id: &str) -> Server {
        Server {
            id: id.to_string(),
            name: format!("server {id}"),
            avatar: None,
            hex_color: None,
        }
    }

    fn channel(id: &str, server_id: &str, has_notifications: bool) -> Channel {
        Channel {
            id: id.to_string(),
            server_id: server_id.to_string(),
            name: format!("channel {id}"),
            has_notifications,
        }
    }

    // Flipping a channel's unread flag is visible through the server-level
    // query on the next read, with no server-store write in between.
    #[test]
    fn channel_flip_reflects_without_server_upsert() {
        let owner = Owner::new();
        owner.set();

        let store = Store::new();
        store.servers.upsert(server("s1"));
        store.channels.upsert(channel("c1", "s1", false));

        assert!(store.servers.get("s1").is_some());
        assert!(!store.channels.server_has_notifications("s1"));

        store.channels.upsert(channel("c1", "s1", true));
        assert!(store.channels.server_has_notifications("s1"));

        store.channels.upsert(channel("c1", "s1", false));
        assert!(!store.channels.server_has_notifications("s1"));
    }
}
