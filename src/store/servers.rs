use std::collections::HashMap;

use leptos::prelude::*;

use crate::models::Server;

/// Canonical server records, keyed by id. Notification state is not stored
/// here; it is derived per read from the channel store.
#[derive(Clone, Copy)]
pub struct ServerStore {
    records: RwSignal<HashMap<String, Server>>,
}

impl ServerStore {
    pub fn new() -> Self {
        Self {
            records: RwSignal::new(HashMap::new()),
        }
    }

    /// Replaces the record for this server's id wholesale. Synchronous and
    /// immediately visible to subsequent reads and subscribed views.
    pub fn upsert(&self, server: Server) {
        self.records.update(|map| {
            map.insert(server.id.clone(), server);
        });
    }

    pub fn get(&self, id: &str) -> Option<Server> {
        self.records.with(|map| map.get(id).cloned())
    }

    /// Snapshot of all servers. Ordering is incidental and must not be
    /// relied upon.
    pub fn list(&self) -> Vec<Server> {
        self.records.with(|map| map.values().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::reactive::owner::Owner;

    fn server(id: &str, name: &str) -> Server {
        Server {
            id: id.to_string(),
            name: name.to_string(),
            avatar: None,
            hex_color: None,
        }
    }

    #[test]
    fn get_on_unknown_id_is_none() {
        let owner = Owner::new();
        owner.set();

        let servers = ServerStore::new();
        assert_eq!(servers.get("missing"), None);
    }

    #[test]
    fn upsert_replaces_wholesale() {
        let owner = Owner::new();
        owner.set();

        let servers = ServerStore::new();
        servers.upsert(Server {
            avatar: Some("old.png".to_string()),
            ..server("s1", "first")
        });
        servers.upsert(server("s1", "second"));

        let current = servers.get("s1").unwrap();
        assert_eq!(current.name, "second");
        // No field-level merging: the old avatar is gone with the old record.
        assert_eq!(current.avatar, None);
        assert_eq!(servers.list().len(), 1);
    }

    #[test]
    fn list_returns_every_record() {
        let owner = Owner::new();
        owner.set();

        let servers = ServerStore::new();
        servers.upsert(server("s1", "one"));
        servers.upsert(server("s2", "two"));

        let mut names: Vec<_> = servers.list().into_iter().map(|s| s.name).collect();
        names.sort();
        assert_eq!(names, vec!["one", "two"]);
    }
}
