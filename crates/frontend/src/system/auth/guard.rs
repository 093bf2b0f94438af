use arcus_core::system::permissions::Permission;
use leptos::prelude::*;

use super::context::use_auth;

/// Renders its children only for a user holding `permission`.
#[component]
pub fn RequirePermission(permission: Permission, children: ChildrenFn) -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || {
                auth_state
                    .get()
                    .user
                    .as_ref()
                    .map(|u| u.has_permission(permission))
                    .unwrap_or(false)
            }
            fallback=|| view! { <div class="alert alert--error">"Acesso negado."</div> }
        >
            {children()}
        </Show>
    }
}
