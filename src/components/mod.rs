//! UI Components
//!
//! Leptos components for the post list and its cards.

mod post_card;
mod post_list;
mod post_menu;

pub use post_card::PostCard;
pub use post_list::PostList;
pub use post_menu::PostMenu;
