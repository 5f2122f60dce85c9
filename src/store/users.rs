use std::collections::HashMap;

use leptos::prelude::*;

use crate::models::User;

#[derive(Clone, Copy)]
pub struct UserStore {
    records: RwSignal<HashMap<String, User>>,
}

impl UserStore {
    pub fn new() -> Self {
        Self {
            records: RwSignal::new(HashMap::new()),
        }
    }

    pub fn upsert(&self, user: User) {
        self.records.update(|map| {
            map.insert(user.id.clone(), user);
        });
    }

    pub fn get(&self, id: &str) -> Option<User> {
        self.records.with(|map| map.get(id).cloned())
    }
}
