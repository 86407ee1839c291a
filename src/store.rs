//! Post Collection Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{self, Post};

/// Posts owned by the list, in display order
#[derive(Clone, Debug, Default, Store)]
pub struct PostsState {
    pub posts: Vec<Post>,
}

impl PostsState {
    pub fn new(posts: Vec<Post>) -> Self {
        Self { posts }
    }
}

/// Type alias for the store
pub type PostsStore = Store<PostsState>;

/// Remove a post from the store by ID
pub fn store_remove_post(store: &PostsStore, post_id: u32) -> bool {
    models::remove_post(&mut store.posts().write(), post_id)
}

/// Current posts, tracked
pub fn store_posts(store: &PostsStore) -> Vec<Post> {
    store.posts().get()
}

/// Whether the collection is empty, tracked
pub fn store_is_empty(store: &PostsStore) -> bool {
    store.posts().with(|posts| posts.is_empty())
}
