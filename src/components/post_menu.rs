//! Post Menu Component
//!
//! Popup list of card actions. Stateless: each button runs its callback once per click.

use leptos::prelude::*;

use crate::context::AppContext;

#[component]
pub fn PostMenu(
    #[prop(into)] on_edit: Callback<()>,
    #[prop(into)] on_delete: Callback<()>,
    #[prop(into)] on_favorite: Callback<()>,
) -> impl IntoView {
    let labels = expect_context::<AppContext>().labels();

    view! {
        <ul class="post-menu">
            <li>
                <button class="post-menu-item" on:click=move |_| on_edit.run(())>
                    {labels.edit_action}
                </button>
            </li>
            <li>
                <button class="post-menu-item danger" on:click=move |_| on_delete.run(())>
                    {labels.delete_action}
                </button>
            </li>
            <li>
                <button class="post-menu-item" on:click=move |_| on_favorite.run(())>
                    {labels.favorite_action}
                </button>
            </li>
        </ul>
    }
}
