use std::collections::HashMap;

use leptos::prelude::*;

use crate::models::Post;

/// Post cache. The profile flyout pushes `latestPost` payloads here so the
/// rest of the UI reads posts from one place.
#[derive(Clone, Copy)]
pub struct PostStore {
    records: RwSignal<HashMap<String, Post>>,
}

impl PostStore {
    pub fn new() -> Self {
        Self {
            records: RwSignal::new(HashMap::new()),
        }
    }

    pub fn push(&self, post: Post) {
        self.records.update(|map| {
            map.insert(post.id.clone(), post);
        });
    }

    pub fn cached(&self, id: &str) -> Option<Post> {
        self.records.with(|map| map.get(id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::reactive::owner::Owner;

    #[test]
    fn push_then_cached_returns_latest() {
        let owner = Owner::new();
        owner.set();

        let posts = PostStore::new();
        assert!(posts.cached("p1").is_none());

        posts.push(Post {
            id: "p1".to_string(),
            content: "first".to_string(),
            created_at: 0.0,
        });
        posts.push(Post {
            id: "p1".to_string(),
            content: "edited".to_string(),
            created_at: 1.0,
        });

        assert_eq!(posts.cached("p1").unwrap().content, "edited");
    }
}
