//! Post List Component
//!
//! Owns the post collection and removes posts when a card asks.

use leptos::prelude::*;
use log::info;
use reactive_stores::Store;

use crate::components::PostCard;
use crate::context::AppContext;
use crate::models::Post;
use crate::store::{store_is_empty, store_posts, store_remove_post, PostsState};

#[component]
pub fn PostList(posts: Vec<Post>) -> impl IntoView {
    let labels = expect_context::<AppContext>().labels();
    let store = Store::new(PostsState::new(posts));

    let on_delete = Callback::new(move |post_id: u32| {
        if store_remove_post(&store, post_id) {
            info!("[LIST] removed post {}", post_id);
        }
    });

    let empty_list = labels.empty_list;

    view! {
        <section class="post-list">
            <For
                each=move || store_posts(&store)
                key=|post| post.id
                children=move |post: Post| {
                    view! {
                        <PostCard
                            id=post.id
                            title=post.title
                            content=post.content
                            on_delete=on_delete
                        />
                    }
                }
            />
            <Show when=move || store_is_empty(&store)>
                <p class="post-list-empty">{empty_list.clone()}</p>
            </Show>
        </section>
    }
}
