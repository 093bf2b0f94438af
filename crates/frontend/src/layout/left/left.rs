use crate::layout::global_context::AppGlobalContext;
use leptos::prelude::*;

/// Sidebar zone; collapses when the top header toggle closes it.
#[component]
pub fn Left(children: Children) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        <aside
            data-zone="left"
            class="sidebar-zone"
            class:sidebar-zone--collapsed=move || !ctx.left_open.get()
            aria-hidden=move || (!ctx.left_open.get()).to_string()
        >
            {children()}
        </aside>
    }
}
