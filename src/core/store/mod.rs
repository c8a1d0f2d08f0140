use std::sync::{Arc, PoisonError, RwLock};

use super::feed::types::BlogPost;

// Cloneable handle to one shared post list. Replacement is wholesale; a
// reader never observes a half-built batch.
#[derive(Debug, Clone, Default)]
pub struct PostStore {
    posts: Arc<RwLock<Vec<BlogPost>>>,
}

impl PostStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn replace_all(&self, posts: Vec<BlogPost>) {
        let mut guard = self.posts.write().unwrap_or_else(PoisonError::into_inner);
        *guard = posts;
    }

    pub fn snapshot(&self) -> Vec<BlogPost> {
        self.posts
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn len(&self) -> usize {
        self.posts
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(title: &str) -> BlogPost {
        BlogPost {
            title: title.to_string(),
            description: String::new(),
            published_at: None,
            author: None,
        }
    }

    #[test]
    fn replace_all_swaps_contents_wholesale() {
        let store = PostStore::new();
        store.replace_all(vec![post("old one"), post("old two")]);
        store.replace_all(vec![post("new")]);

        let snapshot = store.snapshot();
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].title, "new");
    }

    #[test]
    fn clones_share_the_same_list() {
        let store = PostStore::new();
        let reader = store.clone();
        store.replace_all(vec![post("shared")]);

        assert_eq!(reader.len(), 1);
        assert_eq!(reader.snapshot()[0].title, "shared");
    }

    #[test]
    fn snapshot_is_a_detached_copy() {
        let store = PostStore::new();
        store.replace_all(vec![post("kept")]);

        let mut snapshot = store.snapshot();
        snapshot.clear();

        assert_eq!(store.len(), 1);
        assert!(!store.is_empty());
    }
}
