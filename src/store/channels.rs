use std::collections::HashMap;

use leptos::prelude::*;

use crate::models::Channel;

#[derive(Clone, Copy)]
pub struct ChannelStore {
    records: RwSignal<HashMap<String, Channel>>,
}

impl ChannelStore {
    pub fn new() -> Self {
        Self {
            records: RwSignal::new(HashMap::new()),
        }
    }

    pub fn upsert(&self, channel: Channel) {
        self.records.update(|map| {
            map.insert(channel.id.clone(), channel);
        });
    }

    pub fn get(&self, id: &str) -> Option<Channel> {
        self.records.with(|map| map.get(id).cloned())
    }

    pub fn by_server_id(&self, server_id: &str) -> Vec<Channel> {
        self.records.with(|map| {
            map.values()
                .filter(|channel| channel.server_id == server_id)
                .cloned()
                .collect()
        })
    }

    /// True iff any channel of this server currently carries unread state.
    /// Derived from the live channel set on every read, never cached, so a
    /// channel flip is visible on the next read with no server-store write.
    pub fn server_has_notifications(&self, server_id: &str) -> bool {
        self.records.with(|map| {
            map.values()
                .any(|channel| channel.server_id == server_id && channel.has_notifications)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::reactive::owner::Owner;

    fn channel(id: &str, server_id: &str, has_notifications: bool) -> Channel {
        Channel {
            id: id.to_string(),
            server_id: server_id.to_string(),
            name: format!("channel {id}"),
            has_notifications,
        }
    }

    #[test]
    fn by_server_id_filters_other_servers() {
        let owner = Owner::new();
        owner.set();

        let channels = ChannelStore::new();
        channels.upsert(channel("c1", "s1", false));
        channels.upsert(channel("c2", "s1", false));
        channels.upsert(channel("c3", "s2", false));

        assert_eq!(channels.by_server_id("s1").len(), 2);
        assert_eq!(channels.by_server_id("s2").len(), 1);
        assert!(channels.by_server_id("s3").is_empty());
    }

    #[test]
    fn server_has_notifications_is_any_over_current_channels() {
        let owner = Owner::new();
        owner.set();

        let channels = ChannelStore::new();
        assert!(!channels.server_has_notifications("s1"));

        channels.upsert(channel("c1", "s1", false));
        channels.upsert(channel("c2", "s1", false));
        assert!(!channels.server_has_notifications("s1"));

        channels.upsert(channel("c2", "s1", true));
        assert!(channels.server_has_notifications("s1"));
        // Unrelated server stays unaffected.
        assert!(!channels.server_has_notifications("s2"));
    }
}
