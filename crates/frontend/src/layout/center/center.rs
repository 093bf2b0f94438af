use crate::layout::global_context::AppGlobalContext;
use leptos::prelude::*;

/// Scrollable content zone. Tags itself with the open section so styles can
/// target a page without knowing its markup.
#[component]
pub fn Center(children: Children) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let section_id = move || ctx.active.get().map(|s| s.id()).unwrap_or_default();

    view! {
        <main data-zone="center" data-section=section_id class="app-content">
            {children()}
        </main>
    }
}
