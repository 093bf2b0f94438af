//! Sidebar: brand, signed-in user card, the sections the user may open and
//! the logout action.

use arcus_core::system::navigation::{visible_sections, NavigationEntry, NAVIGATION};
use leptos::prelude::*;

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::system::auth::context::{do_logout, use_auth};

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let (auth_state, set_auth_state) = use_auth();

    let user = Memo::new(move |_| auth_state.get().user);

    let entries = Memo::new(move |_| {
        user.get()
            .map(|u| visible_sections(&u.permissions, &NAVIGATION))
            .unwrap_or_default()
    });

    view! {
        <div class="app-sidebar__content">
            <div class="app-sidebar__brand">
                <span class="app-sidebar__logo">"Arcus"</span>
                <span class="app-sidebar__tagline">"Gestão Comercial"</span>
            </div>

            {move || user.get().map(|u| view! {
                <div class="app-sidebar__user">
                    <div class="app-sidebar__avatar">{u.initial()}</div>
                    <div class="app-sidebar__user-info">
                        <div class="app-sidebar__user-name">{u.name.clone()}</div>
                        <div class="app-sidebar__user-role">{u.role.clone()}</div>
                        <div class="app-sidebar__user-sector">{u.sector.clone()}</div>
                    </div>
                </div>
            })}

            <nav class="app-sidebar__nav">
                <For
                    each=move || entries.get()
                    key=|entry: &NavigationEntry| entry.section
                    children=move |entry: NavigationEntry| {
                        let section = entry.section;
                        view! {
                            <div
                                class="app-sidebar__item"
                                class:app-sidebar__item--active=move || ctx.active.get() == Some(section)
                                on:click=move |_| ctx.open_section(section)
                            >
                                <div class="app-sidebar__item-content">
                                    {icon(entry.icon)}
                                    <span>{entry.label}</span>
                                </div>
                            </div>
                        }
                    }
                />
            </nav>

            <div class="app-sidebar__footer">
                <div
                    class="app-sidebar__item app-sidebar__item--logout"
                    on:click=move |_| do_logout(set_auth_state)
                >
                    <div class="app-sidebar__item-content">
                        {icon("log-out")}
                        <span>"Sair"</span>
                    </div>
                </div>
            </div>
        </div>
    }
}
