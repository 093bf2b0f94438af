//! TopHeader component - application top bar with the sidebar toggle and the
//! last access date.

use crate::layout::global_context::AppGlobalContext;
use crate::shared::date_utils::today_br;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let is_sidebar_visible = move || ctx.left_open.get();
    let last_access = format!("Último acesso: {}", today_br());

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if is_sidebar_visible() { "Ocultar menu" } else { "Mostrar menu" }
                >
                    {move || if is_sidebar_visible() {
                        icon("panel-left-close")
                    } else {
                        icon("menu")
                    }}
                </button>
                <span class="top-header__title">"Arcus"</span>
            </div>

            <div class="top-header__actions">
                <span class="top-header__last-access">{last_access}</span>
            </div>
        </div>
    }
}
