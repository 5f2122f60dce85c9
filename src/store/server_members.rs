use std::collections::HashMap;

use leptos::prelude::*;

use crate::models::ServerMember;

/// Membership records, keyed per (server, user) pair.
#[derive(Clone, Copy)]
pub struct MemberStore {
    records: RwSignal<HashMap<(String, String), ServerMember>>,
}

impl MemberStore {
    pub fn new() -> Self {
        Self {
            records: RwSignal::new(HashMap::new()),
        }
    }

    pub fn upsert(&self, member: ServerMember) {
        self.records.update(|map| {
            map.insert((member.server_id.clone(), member.user_id.clone()), member);
        });
    }

    pub fn get(&self, server_id: &str, user_id: &str) -> Option<ServerMember> {
        self.records.with(|map| {
            map.get(&(server_id.to_string(), user_id.to_string())).cloned()
        })
    }

    pub fn by_server(&self, server_id: &str) -> Vec<ServerMember> {
        self.records.with(|map| {
            map.values()
                .filter(|member| member.server_id == server_id)
                .cloned()
                .collect()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::reactive::owner::Owner;

    fn member(server_id: &str, user_id: &str) -> ServerMember {
        ServerMember {
            server_id: server_id.to_string(),
            user_id: user_id.to_string(),
            roles: vec![],
        }
    }

    #[test]
    fn keyed_by_server_and_user() {
        let owner = Owner::new();
        owner.set();

        let members = MemberStore::new();
        members.upsert(member("s1", "u1"));
        members.upsert(member("s1", "u2"));
        members.upsert(member("s2", "u1"));

        assert!(members.get("s1", "u1").is_some());
        assert!(members.get("s2", "u2").is_none());
        assert_eq!(members.by_server("s1").len(), 2);
    }
}
