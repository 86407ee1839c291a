//! Frontend Models
//!
//! Data structures shared by the list and its cards.

use serde::{Deserialize, Serialize};

/// A post as held by the list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: u32,
    pub title: String,
    pub content: String,
}

impl Post {
    pub fn new(id: u32, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            content: content.into(),
        }
    }
}

/// Remove the post with `id`, keeping the order of the rest.
///
/// Returns whether anything was removed; an unknown id leaves `posts` untouched.
pub fn remove_post(posts: &mut Vec<Post>, id: u32) -> bool {
    let before = posts.len();
    posts.retain(|post| post.id != id);
    posts.len() != before
}
