//! Post Card Component
//!
//! One post with its own menu, favorite flag and locally edited content.

use leptos::html;
use leptos::prelude::*;
use log::debug;

use crate::card_state::CardState;
use crate::components::PostMenu;
use crate::context::AppContext;
use crate::dialog::BrowserDialogs;
use crate::outside_click::{attach_outside_click, ListenerSlot};

/// A single post card
///
/// `content` only seeds the card; edits stay local and are not reported back
/// to the list. `on_delete` receives this card's `id` after the user confirms.
#[component]
pub fn PostCard(
    id: u32,
    title: String,
    content: String,
    #[prop(into)] on_delete: Callback<u32>,
) -> impl IntoView {
    let labels = expect_context::<AppContext>().labels();
    let state = RwSignal::new(CardState::new(id, content));

    // Trigger + popup; pointer-downs anywhere else close the menu
    let menu_region = NodeRef::<html::Div>::new();
    let listener = StoredValue::new_local(ListenerSlot::default());

    Effect::new(move |_| {
        let open = state.with(|s| s.menu_visible());
        listener.update_value(|slot| {
            slot.sync(open, || {
                attach_outside_click(menu_region, move || {
                    state.try_update(|s| s.close_menu());
                })
            });
        });
    });

    on_cleanup(move || {
        listener.try_update_value(|slot| slot.clear());
    });

    let edit_prompt = labels.edit_prompt;
    let on_edit = Callback::new(move |_| {
        let mut card = state.get_untracked();
        if card.edit(&BrowserDialogs, &edit_prompt) {
            debug!("[POST] content of {} edited locally", card.post_id());
            state.set(card);
        }
    });

    let delete_confirm = labels.delete_confirm;
    let on_delete_request = Callback::new(move |_| {
        let requested = state.with_untracked(|s| s.request_delete(&BrowserDialogs, &delete_confirm));
        if let Some(post_id) = requested {
            debug!("[POST] delete requested for {}", post_id);
            on_delete.run(post_id);
        }
    });

    let on_favorite = Callback::new(move |_| state.update(|s| s.toggle_favorite()));

    let favorite_badge = labels.favorite_badge;

    view! {
        <div class="post-card">
            <h2>{title}</h2>
            <p class="post-content">{move || state.with(|s| s.displayed_content().to_string())}</p>
            <Show when=move || state.with(|s| s.is_favorite())>
                <p class="favorite-badge">{favorite_badge.clone()}</p>
            </Show>
            <div class="post-menu-region" node_ref=menu_region>
                <button
                    class="post-menu-button"
                    on:click=move |_| state.update(|s| s.toggle_menu())
                >
                    {labels.menu_trigger}
                </button>
                <Show when=move || state.with(|s| s.menu_visible())>
                    <PostMenu
                        on_edit=on_edit
                        on_delete=on_delete_request
                        on_favorite=on_favorite
                    />
                </Show>
            </div>
        </div>
    }
}
