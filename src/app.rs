//! Post Cards App
//!
//! Page shell: heading plus the post list.

use leptos::prelude::*;

use crate::components::PostList;
use crate::config::AppConfig;
use crate::context::AppContext;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    // Provide context to all children
    provide_context(AppContext::new(config.labels));

    view! {
        <div class="app-container">
            <h1 class="app-title">{config.heading}</h1>
            <PostList posts=config.seed_posts />
        </div>
    }
}
